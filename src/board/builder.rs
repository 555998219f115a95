//! Fluent builder for constructing chess positions.
//!
//! Positions can be assembled piece by piece or from an 8-row board
//! diagram, rank 8 first, using piece letters (uppercase White) and `.`
//! for empty squares.
//!
//! # Example
//! ```
//! use chess_core::board::{AttackTables, PositionBuilder, Color};
//!
//! let tables = AttackTables::with_seed(1).unwrap();
//! let position = PositionBuilder::diagram(&[
//!     "....k...",
//!     "........",
//!     "........",
//!     "........",
//!     "........",
//!     "........",
//!     "P.......",
//!     "....K...",
//! ])
//! .unwrap()
//! .side_to_move(Color::White)
//! .build(&tables)
//! .unwrap();
//! assert_eq!(position.legal_successors(&tables).len(), 7);
//! ```

use super::attack_tables::AttackTables;
use super::error::BuilderError;
use super::state::{Board, Position};
use super::{Bitboard, CastlingRights, Color, Piece, PieceKind, PositionFlags, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, PieceKind)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::starting();
        PositionBuilder {
            pieces: Square::all()
                .filter_map(|sq| board.piece_at(sq).map(|kind| (sq, kind)))
                .collect(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
        }
    }

    /// Parse an 8-row diagram, rank 8 first.
    ///
    /// # Errors
    /// Returns a [`BuilderError`] for a wrong row count, a row that is not
    /// eight squares wide, or an unknown piece letter.
    pub fn diagram(rows: &[&str]) -> Result<Self, BuilderError> {
        if rows.len() != 8 {
            return Err(BuilderError::WrongRowCount { found: rows.len() });
        }
        let mut builder = Self::new();
        for (row, text) in rows.iter().enumerate() {
            let squares = text.chars().count();
            if squares != 8 {
                return Err(BuilderError::WrongRowLength {
                    row,
                    found: squares,
                });
            }
            let rank = 7 - row;
            for (file, c) in text.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(BuilderError::InvalidPiece { char: c })?;
                builder
                    .pieces
                    .push((Square::from_index(rank * 8 + file), kind));
            }
        }
        Ok(builder)
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, PieceKind::new(color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, kingside: bool) -> Self {
        self.castling.set(color, kingside);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    /// Build the position, recording each side's check flag.
    ///
    /// # Errors
    /// [`BuilderError::KingCount`] unless each side has exactly one king.
    pub fn build(self, tables: &AttackTables) -> Result<Position, BuilderError> {
        let mut board = Board::empty();
        for (square, kind) in self.pieces {
            board.put(kind, square);
        }

        let white = board.pieces(PieceKind::WhiteKing).popcount();
        let black = board.pieces(PieceKind::BlackKing).popcount();
        if white != 1 || black != 1 {
            return Err(BuilderError::KingCount { white, black });
        }

        let mut position = Position {
            board,
            en_passant: self.en_passant.map_or(Bitboard::EMPTY, Bitboard::from_square),
            flags: PositionFlags::new(self.castling),
            last_move: None,
            side_to_move: self.side_to_move,
        };
        for color in Color::BOTH {
            let checked = position.is_in_check(tables, color);
            position.flags.set_checked(color, checked);
        }
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> AttackTables {
        AttackTables::with_seed(11).unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build(&tables()).unwrap();
        assert_eq!(built, Position::starting());
    }

    #[test]
    fn test_diagram_places_pieces() {
        let position = PositionBuilder::diagram(&[
            "r...k..r", "........", "........", "........", "........", "........",
            "........", "R...K..R",
        ])
        .unwrap()
        .build(&tables())
        .unwrap();

        assert_eq!(position.piece_at(Square::A8), Some(PieceKind::BlackRook));
        assert_eq!(position.piece_at(Square::E1), Some(PieceKind::WhiteKing));
        assert_eq!(position.piece_at(Square::B1), None);
        assert_eq!(position.board().occupied().popcount(), 6);
    }

    #[test]
    fn test_diagram_errors() {
        assert_eq!(
            PositionBuilder::diagram(&["........"]).unwrap_err(),
            BuilderError::WrongRowCount { found: 1 }
        );
        let mut rows = ["........"; 8];
        rows[2] = ".......";
        assert_eq!(
            PositionBuilder::diagram(&rows).unwrap_err(),
            BuilderError::WrongRowLength { row: 2, found: 7 }
        );
        rows[2] = "...x....";
        assert_eq!(
            PositionBuilder::diagram(&rows).unwrap_err(),
            BuilderError::InvalidPiece { char: 'x' }
        );
    }

    #[test]
    fn test_missing_king_rejected() {
        let err = PositionBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .build(&tables())
            .unwrap_err();
        assert_eq!(err, BuilderError::KingCount { white: 1, black: 0 });
    }

    #[test]
    fn test_check_flag_recorded() {
        let position = PositionBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .piece(Square::E8, Color::Black, Piece::King)
            .piece(Square::A8, Color::White, Piece::Rook)
            .side_to_move(Color::Black)
            .build(&tables())
            .unwrap();
        assert!(position.is_checked(Color::Black));
        assert!(!position.is_checked(Color::White));
    }

    #[test]
    fn test_castling_rights() {
        let position = PositionBuilder::starting_position()
            .no_castling_rights()
            .castle(Color::White, true)
            .build(&tables())
            .unwrap();

        let rights = position.castling();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
    }

    #[test]
    fn test_clear_square() {
        let position = PositionBuilder::starting_position()
            .clear(Square::A1)
            .build(&tables())
            .unwrap();
        assert!(position.piece_at(Square::A1).is_none());
        assert!(position.piece_at(Square::B1).is_some());
    }
}

use super::attack_tables::AttackTables;
use super::movegen;
use super::{Bitboard, CastlingRights, Color, Move, Piece, PieceKind, PositionFlags, Square};

/// Twelve occupancy masks, one per piece kind.
///
/// The masks are pairwise disjoint. Side and whole-board occupancy are
/// computed from them on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) pieces: [Bitboard; PieceKind::COUNT],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            pieces: [Bitboard::EMPTY; PieceKind::COUNT],
        }
    }

    /// The standard starting array
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            for color in Color::BOTH {
                let back = color.back_rank();
                let pawn_rank = if color == Color::White { 1 } else { 6 };
                board.put(PieceKind::new(color, *piece), square(back, file));
                board.put(PieceKind::new(color, Piece::Pawn), square(pawn_rank, file));
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub const fn pieces(&self, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()]
    }

    /// Which kind, if any, occupies `sq`
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .iter()
            .copied()
            .find(|kind| self.pieces[kind.index()].contains(sq))
    }

    /// All squares held by `color`
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        PieceKind::of(color)
            .iter()
            .fold(Bitboard::EMPTY, |acc, kind| acc | self.pieces[kind.index()])
    }

    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.pieces.iter().fold(Bitboard::EMPTY, |acc, bb| acc | *bb)
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(PieceKind::new(color, Piece::King)).lsb()
    }

    /// True when no square is claimed by two kinds
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = 0u64;
        for bb in &self.pieces {
            if seen & bb.0 != 0 {
                return false;
            }
            seen |= bb.0;
        }
        true
    }

    #[inline]
    pub(crate) fn put(&mut self, kind: PieceKind, sq: Square) {
        self.pieces[kind.index()] |= Bitboard::from_square(sq);
    }

    #[inline]
    pub(crate) fn lift(&mut self, kind: PieceKind, sq: Square) {
        self.pieces[kind.index()] &= !Bitboard::from_square(sq);
    }

    /// Clear `sq` in each of `kinds` in order, returning the first kind
    /// whose mask actually changed.
    pub(crate) fn capture(&mut self, kinds: &[PieceKind], sq: Square) -> Option<PieceKind> {
        let bit = Bitboard::from_square(sq);
        kinds.iter().copied().find(|kind| {
            let mask = &mut self.pieces[kind.index()];
            let hit = (*mask & bit).is_nonempty();
            *mask &= !bit;
            hit
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

fn square(rank: usize, file: usize) -> Square {
    Square::from_index(rank * 8 + file)
}

/// Whether the side to move can still play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check with no legal successor
    Checkmate,
    /// The side to move has no legal successor and is not in check
    Stalemate,
}

/// A complete game state.
///
/// Positions are values: every move produces a fresh `Position` and the
/// parent is never touched again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) en_passant: Bitboard,
    pub(crate) flags: PositionFlags,
    pub(crate) last_move: Option<Move>,
    pub(crate) side_to_move: Color,
}

impl Position {
    /// The standard starting position, White to move with all castling rights
    #[must_use]
    pub fn starting() -> Self {
        Position {
            board: Board::starting(),
            en_passant: Bitboard::EMPTY,
            flags: PositionFlags::new(CastlingRights::all()),
            last_move: None,
            side_to_move: Color::White,
        }
    }

    /// Alias for [`Position::starting`], the UI's "new game"
    #[must_use]
    pub fn reset() -> Self {
        Self::starting()
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PieceKind> {
        self.board.piece_at(sq)
    }

    /// Square a pawn may capture onto en passant this ply, or empty
    #[inline]
    #[must_use]
    pub const fn en_passant(&self) -> Bitboard {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self) -> PositionFlags {
        self.flags
    }

    #[inline]
    #[must_use]
    pub const fn castling(&self) -> CastlingRights {
        self.flags.castling()
    }

    /// The move that produced this position, for highlighting
    #[inline]
    #[must_use]
    pub const fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Check flag recorded when the position was generated
    #[inline]
    #[must_use]
    pub const fn is_checked(&self, color: Color) -> bool {
        self.flags.is_checked(color)
    }

    /// Whether `color`'s king is attacked right now, asked of the oracle.
    #[must_use]
    pub fn is_in_check(&self, tables: &AttackTables, color: Color) -> bool {
        movegen::king_attacked(&self.board, tables, color)
    }

    /// Whether any piece of `by` attacks `sq`
    #[must_use]
    pub fn is_attacked(&self, tables: &AttackTables, sq: Square, by: Color) -> bool {
        movegen::is_square_attacked(&self.board, tables, sq, by)
    }

    /// Every legal successor for the side to move
    #[must_use]
    pub fn legal_successors(&self, tables: &AttackTables) -> Vec<Position> {
        movegen::legal_successors(self, tables)
    }

    /// Legal successors moving the piece on `from`.
    ///
    /// Empty when `from` is empty or holds an enemy piece.
    #[must_use]
    pub fn successors_from(&self, tables: &AttackTables, from: Square) -> Vec<Position> {
        movegen::successors_from(self, tables, from)
    }

    #[must_use]
    pub fn status(&self, tables: &AttackTables) -> GameStatus {
        if movegen::has_legal_successor(self, tables) {
            GameStatus::Ongoing
        } else if self.is_in_check(tables, self.side_to_move) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

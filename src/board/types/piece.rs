//! Piece, color and piece-kind types.

use std::fmt;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// Parse a piece from a character (p, n, b, r, q, k), either case
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Material value in centipawns.
    ///
    /// Kings are always on the board, so they carry no material value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 100,
            Piece::Knight => 300,
            Piece::Bishop => 300,
            Piece::Rook => 500,
            Piece::Queen => 900,
            Piece::King => 0,
        }
    }
}

/// Chess colors. White is the first player and moves up the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// One of the twelve colored piece kinds.
///
/// White kinds precede black kinds, so side ownership is a range check on the
/// discriminant. An empty square is `None` wherever a kind is looked up.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl PieceKind {
    pub const COUNT: usize = 12;

    pub const ALL: [PieceKind; 12] = [
        PieceKind::WhitePawn,
        PieceKind::WhiteKnight,
        PieceKind::WhiteBishop,
        PieceKind::WhiteRook,
        PieceKind::WhiteQueen,
        PieceKind::WhiteKing,
        PieceKind::BlackPawn,
        PieceKind::BlackKnight,
        PieceKind::BlackBishop,
        PieceKind::BlackRook,
        PieceKind::BlackQueen,
        PieceKind::BlackKing,
    ];

    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        Self::ALL[color.index() * 6 + piece.index()]
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        if (self as u8) <= PieceKind::WhiteKing as u8 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        Piece::ALL[self as usize % 6]
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        (self as u8) <= PieceKind::WhiteKing as u8
    }

    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        (self as u8) >= PieceKind::BlackPawn as u8
    }

    /// The six kinds owned by `color`, pawn first
    #[inline]
    #[must_use]
    pub fn of(color: Color) -> &'static [PieceKind] {
        let start = color.index() * 6;
        &Self::ALL[start..start + 6]
    }

    /// Uppercase for White, lowercase for Black
    #[must_use]
    pub fn to_char(self) -> char {
        let c = self.piece().to_char();
        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        let piece = Piece::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(PieceKind::new(color, piece))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrips_color_and_piece() {
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let kind = PieceKind::new(color, piece);
                assert_eq!(kind.color(), color);
                assert_eq!(kind.piece(), piece);
            }
        }
    }

    #[test]
    fn test_first_player_kinds_precede_second_player_kinds() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.is_white(), kind < PieceKind::BlackPawn);
            assert_eq!(kind.is_black(), !kind.is_white());
        }
    }

    #[test]
    fn test_kind_chars() {
        assert_eq!(PieceKind::from_char('Q'), Some(PieceKind::WhiteQueen));
        assert_eq!(PieceKind::from_char('n'), Some(PieceKind::BlackKnight));
        assert_eq!(PieceKind::from_char('x'), None);
        assert_eq!(PieceKind::BlackKing.to_char(), 'k');
    }
}

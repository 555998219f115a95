//! Castling rights and the per-position flag set.

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

const WHITE_CHECKED: u8 = 1 << 4;
const BLACK_CHECKED: u8 = 1 << 5;

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

/// Castling right tied to a rook's home corner, if `sq` is one.
#[inline]
pub(crate) const fn corner_right(sq: Square) -> u8 {
    match sq.index() {
        0 => CASTLE_WHITE_Q,
        7 => CASTLE_WHITE_K,
        56 => CASTLE_BLACK_Q,
        63 => CASTLE_BLACK_K,
        _ => 0,
    }
}

/// Check flags for both sides plus the four castling rights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PositionFlags(u8);

impl PositionFlags {
    #[must_use]
    pub const fn new(castling: CastlingRights) -> Self {
        PositionFlags(castling.as_u8())
    }

    #[inline]
    #[must_use]
    pub const fn castling(self) -> CastlingRights {
        CastlingRights::from_u8(self.0)
    }

    #[inline]
    pub(crate) fn clear_castling_bits(&mut self, bits: u8) {
        self.0 &= !(bits & ALL_CASTLING_RIGHTS);
    }

    /// Drop both castling rights of `color`
    #[inline]
    pub(crate) fn clear_castling_for(&mut self, color: Color) {
        let bits = match color {
            Color::White => CASTLE_WHITE_K | CASTLE_WHITE_Q,
            Color::Black => CASTLE_BLACK_K | CASTLE_BLACK_Q,
        };
        self.0 &= !bits;
    }

    #[inline]
    #[must_use]
    pub const fn is_checked(self, color: Color) -> bool {
        self.0 & Self::check_bit(color) != 0
    }

    #[inline]
    pub(crate) fn set_checked(&mut self, color: Color, checked: bool) {
        if checked {
            self.0 |= Self::check_bit(color);
        } else {
            self.0 &= !Self::check_bit(color);
        }
    }

    #[inline]
    const fn check_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_CHECKED,
            Color::Black => BLACK_CHECKED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castling_rights_set_and_remove() {
        let mut rights = CastlingRights::none();
        rights.set(Color::Black, false);
        assert!(rights.has(Color::Black, false));
        assert!(!rights.has(Color::Black, true));
        rights.remove(Color::Black, false);
        assert_eq!(rights, CastlingRights::none());
    }

    #[test]
    fn test_flags_keep_checks_and_castling_apart() {
        let mut flags = PositionFlags::new(CastlingRights::all());
        flags.set_checked(Color::White, true);
        assert!(flags.is_checked(Color::White));
        assert!(!flags.is_checked(Color::Black));
        assert_eq!(flags.castling(), CastlingRights::all());

        flags.clear_castling_for(Color::White);
        assert!(!flags.castling().has(Color::White, true));
        assert!(flags.castling().has(Color::Black, true));
        assert!(flags.is_checked(Color::White));
    }

    #[test]
    fn test_corner_rights() {
        assert_eq!(corner_right(Square::H1), CASTLE_WHITE_K);
        assert_eq!(corner_right(Square::A8), CASTLE_BLACK_Q);
        assert_eq!(corner_right(Square::E1), 0);
    }
}

//! Move record attached to every generated successor.

use std::fmt;

use super::piece::PieceKind;
use super::square::Square;

/// Move type flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const QUIET: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 0);
    pub const DOUBLE_PAWN_PUSH: MoveFlags = MoveFlags(1 << 1);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 2);
    pub const CASTLE_KINGSIDE: MoveFlags = MoveFlags(1 << 3);
    pub const CASTLE_QUEENSIDE: MoveFlags = MoveFlags(1 << 4);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 5);

    #[inline]
    #[must_use]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, other: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | other.0)
    }
}

impl fmt::Debug for MoveFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(MoveFlags, &str); 6] = [
            (MoveFlags::CAPTURE, "CAPTURE"),
            (MoveFlags::DOUBLE_PAWN_PUSH, "DOUBLE_PAWN_PUSH"),
            (MoveFlags::EN_PASSANT, "EN_PASSANT"),
            (MoveFlags::CASTLE_KINGSIDE, "CASTLE_KINGSIDE"),
            (MoveFlags::CASTLE_QUEENSIDE, "CASTLE_QUEENSIDE"),
            (MoveFlags::PROMOTION, "PROMOTION"),
        ];
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        if names.is_empty() {
            write!(f, "QUIET")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

/// The move that produced a Position from its parent.
///
/// Only the move generator builds these, together with the successor they
/// describe, so a move can never disagree with its resulting board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) piece: PieceKind,
    pub(crate) flags: MoveFlags,
    pub(crate) captured: Option<PieceKind>,
    pub(crate) promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub(crate) const fn new(from: Square, to: Square, piece: PieceKind) -> Self {
        Move {
            from,
            to,
            piece,
            flags: MoveFlags::QUIET,
            captured: None,
            promotion: None,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The kind that moved (a pawn, for promotions)
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> PieceKind {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self) -> MoveFlags {
        self.flags
    }

    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<PieceKind> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(&self) -> bool {
        self.flags.contains(MoveFlags::DOUBLE_PAWN_PUSH)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.flags.contains(MoveFlags::CASTLE_KINGSIDE)
            || self.flags.contains(MoveFlags::CASTLE_QUEENSIDE)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.flags.contains(MoveFlags::PROMOTION)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.piece().to_char())?;
        }
        Ok(())
    }
}

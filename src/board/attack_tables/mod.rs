//! Attack tables for move generation.
//!
//! Sliding pieces (bishop, rook, queen) use magic bitboards: one perfect-hash
//! table per square, found by randomized search when the tables are built.
//! Knights and kings use static per-square tables.
//!
//! The tables are built once by the caller and passed by reference into move
//! generation and the check oracle. They are immutable afterwards and safe to
//! share across threads.

#![allow(clippy::inline_always)] // Performance-critical hot path functions

mod magic;
mod tables;

use std::fmt;
use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use magic::Magic;

use super::error::MagicError;
use super::{Bitboard, Square};

/// Which sliding-piece family a magic table serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slider {
    Bishop,
    Rook,
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slider::Bishop => write!(f, "bishop"),
            Slider::Rook => write!(f, "rook"),
        }
    }
}

/// Precomputed attack lookups for every piece family.
#[derive(Clone)]
pub struct AttackTables {
    bishops: Vec<Magic>,
    rooks: Vec<Magic>,
    knight: [u64; 64],
    king: [u64; 64],
}

impl fmt::Debug for AttackTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttackTables")
            .field("bishop_slots", &self.slot_count(Slider::Bishop))
            .field("rook_slots", &self.slot_count(Slider::Rook))
            .finish()
    }
}

impl AttackTables {
    /// Build the tables with an entropy-seeded generator.
    ///
    /// # Errors
    /// Returns [`MagicError::NoMagicFound`] if some square exhausts its
    /// candidate budget. The engine cannot run without these tables.
    pub fn new() -> Result<Self, MagicError> {
        Self::with_rng(&mut StdRng::from_entropy())
    }

    /// Build the tables reproducibly from `seed`.
    ///
    /// # Errors
    /// See [`AttackTables::new`].
    pub fn with_seed(seed: u64) -> Result<Self, MagicError> {
        Self::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Build the tables drawing candidate magics from `rng`.
    ///
    /// # Errors
    /// See [`AttackTables::new`].
    pub fn with_rng<R: Rng>(rng: &mut R) -> Result<Self, MagicError> {
        Self::build(rng, magic::MAX_ATTEMPTS)
    }

    pub(crate) fn build<R: Rng>(rng: &mut R, max_attempts: u32) -> Result<Self, MagicError> {
        let start = Instant::now();
        let (bishops, bishop_attempts) = build_slider(Slider::Bishop, rng, max_attempts)?;
        let (rooks, rook_attempts) = build_slider(Slider::Rook, rng, max_attempts)?;
        debug!("bishop magics: {bishop_attempts} candidates tried");
        debug!("rook magics: {rook_attempts} candidates tried");
        info!(
            "attack tables built in {:?} ({} candidates)",
            start.elapsed(),
            bishop_attempts + rook_attempts
        );

        Ok(AttackTables {
            bishops,
            rooks,
            knight: tables::knight_table(),
            king: tables::king_table(),
        })
    }

    #[inline(always)]
    #[must_use]
    pub fn bishop_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        Bitboard(self.bishops[sq.index()].attacks(occupancy.0))
    }

    #[inline(always)]
    #[must_use]
    pub fn rook_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        Bitboard(self.rooks[sq.index()].attacks(occupancy.0))
    }

    #[inline(always)]
    #[must_use]
    pub fn queen_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occupancy) | self.rook_attacks(sq, occupancy)
    }

    #[inline(always)]
    #[must_use]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        Bitboard(self.knight[sq.index()])
    }

    #[inline(always)]
    #[must_use]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        Bitboard(self.king[sq.index()])
    }

    /// Magic-table attacks for either slider family
    #[inline]
    #[must_use]
    pub fn slider_attacks(&self, slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
        match slider {
            Slider::Bishop => self.bishop_attacks(sq, occupancy),
            Slider::Rook => self.rook_attacks(sq, occupancy),
        }
    }

    /// Per-square magic entry, for inspection and benchmarks
    #[must_use]
    pub fn magic(&self, slider: Slider, sq: Square) -> &Magic {
        match slider {
            Slider::Bishop => &self.bishops[sq.index()],
            Slider::Rook => &self.rooks[sq.index()],
        }
    }

    fn slot_count(&self, slider: Slider) -> usize {
        let entries = match slider {
            Slider::Bishop => &self.bishops,
            Slider::Rook => &self.rooks,
        };
        entries.iter().map(Magic::table_len).sum()
    }
}

/// Slow ray-cast attacks, the reference the magic tables are checked against.
#[must_use]
pub fn reference_attacks(slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
    Bitboard(magic::slow_attacks(slider, sq.index(), occupancy.0))
}

fn build_slider<R: Rng>(
    slider: Slider,
    rng: &mut R,
    max_attempts: u32,
) -> Result<(Vec<Magic>, u64), MagicError> {
    let mut entries = Vec::with_capacity(64);
    let mut total = 0u64;
    for square in Square::all() {
        match magic::find_magic(slider, square.index(), rng, max_attempts) {
            Some((entry, attempts)) => {
                total += u64::from(attempts);
                entries.push(entry);
            }
            None => {
                return Err(MagicError::NoMagicFound {
                    square,
                    slider,
                    attempts: max_attempts,
                })
            }
        }
    }
    Ok((entries, total))
}

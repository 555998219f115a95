//! Magic-number search for sliding-piece attack lookup.
//!
//! For each square the relevant occupancy is hashed with
//! `((occ & mask) * magic) >> shift` into a dense table of attack sets.
//! Magics are found by random trial and checked against every occupancy
//! subset of the mask.

use rand::Rng;

use super::tables::{ray_attacks, relevant_mask, BISHOP_DIRS, ROOK_DIRS};
use super::Slider;

/// Upper bound on random candidates tried per square before giving up.
pub(crate) const MAX_ATTEMPTS: u32 = 100_000_000;

/// Lookup data for one slider on one square.
#[derive(Clone, Debug)]
pub struct Magic {
    pub(crate) mask: u64,
    pub(crate) magic: u64,
    pub(crate) shift: u32,
    pub(crate) attacks: Box<[u64]>,
}

impl Magic {
    #[inline(always)]
    pub(crate) fn index(&self, occupancy: u64) -> usize {
        ((occupancy & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }

    #[inline(always)]
    pub(crate) fn attacks(&self, occupancy: u64) -> u64 {
        self.attacks[self.index(occupancy)]
    }

    /// Relevant-occupancy mask for this square
    #[must_use]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Number of slots in the attack table
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.attacks.len()
    }
}

fn dirs_for(slider: Slider) -> &'static [usize; 4] {
    match slider {
        Slider::Bishop => &BISHOP_DIRS,
        Slider::Rook => &ROOK_DIRS,
    }
}

/// Attack set found by walking every ray until a blocker or the edge.
pub(crate) fn slow_attacks(slider: Slider, sq: usize, occupancy: u64) -> u64 {
    dirs_for(slider)
        .iter()
        .fold(0, |acc, &dir| acc | ray_attacks(sq, dir, occupancy))
}

/// Every subset of `mask`, carry-rippler order starting from the empty set.
fn subsets(mask: u64) -> Vec<u64> {
    let mut out = Vec::with_capacity(1 << mask.count_ones());
    let mut subset = 0u64;
    loop {
        out.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    out
}

fn sparse_random<R: Rng>(rng: &mut R) -> u64 {
    rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>()
}

/// Search for a working magic for `slider` on `sq`.
///
/// Returns the entry and the number of candidates tried, or `None` when
/// `max_attempts` candidates all collided.
pub(crate) fn find_magic<R: Rng>(
    slider: Slider,
    sq: usize,
    rng: &mut R,
    max_attempts: u32,
) -> Option<(Magic, u32)> {
    let mask = relevant_mask(sq, dirs_for(slider));
    let bits = mask.count_ones();
    let shift = 64 - bits;
    let occupancies = subsets(mask);
    let reference: Vec<u64> = occupancies
        .iter()
        .map(|&occ| slow_attacks(slider, sq, occ))
        .collect();

    // A slider always attacks at least one square, so 0 marks a free slot.
    let mut table = vec![0u64; 1 << bits];

    for attempt in 1..=max_attempts {
        let magic = sparse_random(rng);
        if (mask.wrapping_mul(magic) & 0xFF00_0000_0000_0000).count_ones() < 6 {
            continue;
        }

        table.iter_mut().for_each(|slot| *slot = 0);
        let mut collided = false;
        for (&occ, &attack) in occupancies.iter().zip(&reference) {
            let idx = (occ.wrapping_mul(magic) >> shift) as usize;
            let slot = &mut table[idx];
            if *slot == 0 {
                *slot = attack;
            } else if *slot != attack {
                collided = true;
                break;
            }
        }

        if !collided {
            let entry = Magic {
                mask,
                magic,
                shift,
                attacks: table.into_boxed_slice(),
            };
            return Some((entry, attempt));
        }
    }
    None
}

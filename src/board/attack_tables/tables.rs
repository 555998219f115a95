//! Leaper attack tables (knights, kings) and the ray table used by the
//! sliding-piece reference implementation.

use once_cell::sync::Lazy;

pub(crate) const DIR_N: usize = 0;
pub(crate) const DIR_S: usize = 1;
pub(crate) const DIR_E: usize = 2;
pub(crate) const DIR_W: usize = 3;
pub(crate) const DIR_NE: usize = 4;
pub(crate) const DIR_NW: usize = 5;
pub(crate) const DIR_SE: usize = 6;
pub(crate) const DIR_SW: usize = 7;

pub(crate) const ROOK_DIRS: [usize; 4] = [DIR_N, DIR_S, DIR_E, DIR_W];
pub(crate) const BISHOP_DIRS: [usize; 4] = [DIR_NE, DIR_NW, DIR_SE, DIR_SW];

const RANK_1: u64 = 0x00000000000000ff;
const RANK_8: u64 = 0xff00000000000000;
const FILE_A: u64 = 0x0101010101010101;
const FILE_H: u64 = 0x8080808080808080;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Full rays from each square to the board edge, `RAYS[dir][sq]`.
static RAYS: Lazy<[[u64; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[0u64; 64]; 8];
    let dirs = [
        (1, 0),   // N
        (-1, 0),  // S
        (0, 1),   // E
        (0, -1),  // W
        (1, 1),   // NE
        (1, -1),  // NW
        (-1, 1),  // SE
        (-1, -1), // SW
    ];
    for sq in 0..64 {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        for (d, (dr, df)) in dirs.iter().enumerate() {
            let mut mask = 0u64;
            let mut nr = r + dr;
            let mut nf = f + df;
            while (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << (nr * 8 + nf);
                nr += dr;
                nf += df;
            }
            rays[d][sq] = mask;
        }
    }
    rays
});

fn leaper_table(deltas: &[(isize, isize); 8]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << (nr * 8 + nf);
            }
        }
        *slot = mask;
    }
    attacks
}

pub(crate) fn knight_table() -> [u64; 64] {
    leaper_table(&KNIGHT_DELTAS)
}

pub(crate) fn king_table() -> [u64; 64] {
    leaper_table(&KING_DELTAS)
}

fn is_increasing_dir(dir: usize) -> bool {
    matches!(dir, DIR_N | DIR_E | DIR_NE | DIR_NW)
}

/// Squares reached along one ray, stopping at (and including) the first blocker.
pub(crate) fn ray_attacks(sq: usize, dir: usize, occupancy: u64) -> u64 {
    let ray = RAYS[dir][sq];
    let blockers = ray & occupancy;
    if blockers == 0 {
        return ray;
    }
    let blocker = if is_increasing_dir(dir) {
        blockers.trailing_zeros() as usize
    } else {
        63 - blockers.leading_zeros() as usize
    };
    ray ^ RAYS[dir][blocker]
}

/// Squares whose occupancy can change a slider's attack set from `sq`:
/// its rays with the final edge square of each ray removed.
pub(crate) fn relevant_mask(sq: usize, dirs: &[usize; 4]) -> u64 {
    let mut mask = 0u64;
    for &dir in dirs {
        let ray = RAYS[dir][sq];
        let edge = match dir {
            DIR_N => RANK_8,
            DIR_S => RANK_1,
            DIR_E => FILE_H,
            DIR_W => FILE_A,
            DIR_NE => RANK_8 | FILE_H,
            DIR_NW => RANK_8 | FILE_A,
            DIR_SE => RANK_1 | FILE_H,
            _ => RANK_1 | FILE_A,
        };
        mask |= ray & !edge;
    }
    mask
}

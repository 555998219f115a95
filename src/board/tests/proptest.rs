//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::tables;
use crate::board::search::{Searcher, INFINITY, MATE_SCORE};
use crate::board::{reference_attacks, Bitboard, Color, GameStatus, Position, Slider, Square};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play random legal moves from the start, visiting each position reached.
fn random_playout(seed: u64, plies: usize, mut visit: impl FnMut(&Position)) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::starting();
    for _ in 0..plies {
        let successors = position.legal_successors(tables());
        if successors.is_empty() {
            break;
        }
        position = successors[rng.gen_range(0..successors.len())];
        visit(&position);
    }
}

proptest! {
    /// Property: no square is ever claimed by two piece kinds
    #[test]
    fn prop_masks_stay_disjoint(seed in seed_strategy(), plies in move_count_strategy()) {
        let mut ok = true;
        random_playout(seed, plies, |p| {
            ok &= p.board().is_consistent();
            ok &= p.board().occupied().popcount() <= 32;
        });
        prop_assert!(ok);
    }

    /// Property: recorded check flags agree with the oracle
    #[test]
    fn prop_check_flags_match_oracle(seed in seed_strategy(), plies in move_count_strategy()) {
        let mut mismatches = Vec::new();
        random_playout(seed, plies, |p| {
            let mover = p.side_to_move().opponent();
            // The side that just moved never leaves its king attacked.
            if p.is_in_check(tables(), mover) || p.is_checked(mover) {
                mismatches.push(format!("mover {mover} in check after {:?}", p.last_move()));
            }
            for color in Color::BOTH {
                if p.is_checked(color) != p.is_in_check(tables(), color) {
                    mismatches.push(format!("{color} flag wrong after {:?}", p.last_move()));
                }
            }
        });
        prop_assert!(mismatches.is_empty(), "{:?}", mismatches);
    }

    /// Property: the en-passant mask is empty or one square on rank 3 or 6
    #[test]
    fn prop_en_passant_mask_shape(seed in seed_strategy(), plies in move_count_strategy()) {
        let mut ok = true;
        random_playout(seed, plies, |p| {
            let ep = p.en_passant();
            let double_push = p.last_move().is_some_and(|m| m.is_double_pawn_push());
            ok &= ep.is_empty() != double_push;
            ok &= ep.popcount() <= 1;
            ok &= (ep & !(Bitboard::RANK_3 | Bitboard::RANK_6)).is_empty();
        });
        prop_assert!(ok);
    }

    /// Property: a position without successors is mate or stalemate, and the
    /// search scores it to match
    #[test]
    fn prop_terminal_positions_are_scored_coherently(seed in seed_strategy(), plies in 20..=120usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut position = Position::starting();
        for _ in 0..plies {
            let successors = position.legal_successors(tables());
            if successors.is_empty() {
                break;
            }
            position = successors[rng.gen_range(0..successors.len())];
        }

        let status = position.status(tables());
        let in_check = position.is_in_check(tables(), position.side_to_move());
        let no_moves = position.legal_successors(tables()).is_empty();
        prop_assert_eq!(status == GameStatus::Ongoing, !no_moves);
        if no_moves {
            let score = Searcher::new(tables())
                .negamax(&position, 1, -INFINITY, INFINITY)
                .unwrap();
            if in_check {
                prop_assert_eq!(status, GameStatus::Checkmate);
                prop_assert_eq!(score, -MATE_SCORE);
            } else {
                prop_assert_eq!(status, GameStatus::Stalemate);
                prop_assert_eq!(score, 0);
            }
        }
    }

    /// Property: magic lookups agree with ray casting
    #[test]
    fn prop_magic_matches_ray_cast(index in 0usize..64, occupancy in any::<u64>(), sparse in any::<u64>()) {
        let sq = Square::from_index(index);
        for occ in [Bitboard(occupancy), Bitboard(occupancy & sparse)] {
            prop_assert_eq!(
                tables().bishop_attacks(sq, occ),
                reference_attacks(Slider::Bishop, sq, occ)
            );
            prop_assert_eq!(
                tables().rook_attacks(sq, occ),
                reference_attacks(Slider::Rook, sq, occ)
            );
        }
    }
}

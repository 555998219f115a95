//! Move ordering for search.
//!
//! Captures go first, most valuable victim and then least valuable attacker.
//! Every move also gets a small piece-square improvement term.

use super::super::pst::square_value;
use super::super::state::Position;
use super::constants::CAPTURE_BONUS;

/// Ordering key for a successor; higher is searched earlier.
pub(crate) fn order_score(successor: &Position) -> i32 {
    let Some(mv) = successor.last_move() else {
        return 0;
    };
    let mut score = match mv.captured() {
        Some(victim) => CAPTURE_BONUS + victim.piece().value() - mv.piece().piece().value() / 100,
        None => 0,
    };
    score += (square_value(mv.piece(), mv.to()) - square_value(mv.piece(), mv.from())) / 100;
    score
}

/// Sort successors best-first. The sort is stable.
pub(crate) fn order_successors(successors: &mut [Position]) {
    successors.sort_by_cached_key(|p| std::cmp::Reverse(order_score(p)));
}

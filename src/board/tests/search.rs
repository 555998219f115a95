//! Search algorithm tests.
//!
//! Alpha-beta agrees with plain minimax, terminal scores, short mates.

use super::{build, diagram, tables};
use crate::board::search::{best_successor, minimax, Searcher, INFINITY, MATE_SCORE};
use crate::board::{evaluate, Color, Position, Square};

// ============================================================================
// Alpha-beta equivalence
// ============================================================================

fn assert_alphabeta_matches_minimax(position: &Position, depth: u32) {
    let outcome = best_successor(position, tables(), depth).expect("position has moves");
    let reference = minimax(position, tables(), depth);
    assert_eq!(outcome.score, reference, "depth {depth}");

    let mut searcher = Searcher::new(tables());
    let value = searcher
        .negamax(position, depth, -INFINITY, INFINITY)
        .unwrap();
    assert_eq!(value, reference, "full-window negamax at depth {depth}");
}

#[test]
fn alphabeta_matches_minimax_from_start() {
    for depth in 1..=3 {
        assert_alphabeta_matches_minimax(&Position::starting(), depth);
    }
}

#[test]
fn alphabeta_matches_minimax_in_tactical_position() {
    let position = build(diagram([
        "r...k..r", "ppp..ppp", "..n.b...", "...qp...", "...P....", "..N.BN..", "PPP..PPP",
        "R..QK..R",
    ]));
    assert_alphabeta_matches_minimax(&position, 2);
    assert_alphabeta_matches_minimax(&position, 3);
}

#[test]
fn alphabeta_visits_fewer_nodes_than_tree_size() {
    let position = Position::starting();
    let outcome = best_successor(&position, tables(), 3).unwrap();
    // 1 root + 20 + 400 + 8902 nodes in the full tree
    assert!(outcome.nodes < 1 + 20 + 400 + 8902);
}

// ============================================================================
// Terminal scores
// ============================================================================

#[test]
fn checkmated_side_scores_minus_mate() {
    let mated = build(
        diagram([
            "....R..k", "......pp", "........", "........", "........", "........",
            "........", "....K...",
        ])
        .side_to_move(Color::Black),
    );
    let mut searcher = Searcher::new(tables());
    for depth in 1..=3 {
        let score = searcher.negamax(&mated, depth, -INFINITY, INFINITY).unwrap();
        assert_eq!(score, -MATE_SCORE);
    }
    assert!(best_successor(&mated, tables(), 2).is_none());
}

#[test]
fn stalemate_scores_zero() {
    let stalemate = build(
        diagram([
            ".......k", ".....Q..", "......K.", "........", "........", "........",
            "........", "........",
        ])
        .side_to_move(Color::Black),
    );
    let mut searcher = Searcher::new(tables());
    assert_eq!(
        searcher.negamax(&stalemate, 2, -INFINITY, INFINITY).unwrap(),
        0
    );
    assert_eq!(minimax(&stalemate, tables(), 2), 0);
}

#[test]
fn depth_zero_is_static_eval() {
    let position = Position::starting();
    let mut searcher = Searcher::new(tables());
    assert_eq!(
        searcher.negamax(&position, 0, -INFINITY, INFINITY).unwrap(),
        evaluate(&position)
    );
}

// ============================================================================
// Move choice
// ============================================================================

#[test]
fn finds_back_rank_mate_in_one() {
    // White to move, Re8# is mate
    let position = build(diagram([
        "......k.", ".....ppp", "........", "........", "........", "........", "........",
        "....R..K",
    ]));
    let outcome = best_successor(&position, tables(), 2).unwrap();
    let mv = outcome.best.last_move().unwrap();
    assert_eq!(mv.to_string(), "e1e8", "should find Re8#");
    assert_eq!(outcome.score, MATE_SCORE - 1);
}

#[test]
fn mate_in_one_still_preferred_at_greater_depth() {
    let position = build(diagram([
        "......k.", ".....ppp", "........", "........", "........", "........", "........",
        "....R..K",
    ]));
    for depth in 3..=4 {
        let outcome = best_successor(&position, tables(), depth).unwrap();
        assert_eq!(outcome.best.last_move().unwrap().to_string(), "e1e8");
        assert_eq!(outcome.score, MATE_SCORE - 1, "depth {depth}");
        assert_eq!(outcome.score, minimax(&position, tables(), depth));
    }
}

#[test]
fn black_finds_mate_in_one() {
    let position = build(
        diagram([
            "k...r...", "........", "........", "........", "........", "........",
            "PPP.....", ".K......",
        ])
        .side_to_move(Color::Black),
    );
    let outcome = best_successor(&position, tables(), 2).unwrap();
    let mv = outcome.best.last_move().unwrap();
    assert_eq!(mv.to(), Square::E1);
    assert_eq!(outcome.score, MATE_SCORE - 1);
}

#[test]
fn takes_hanging_queen() {
    let position = build(diagram([
        "....k...", "........", "........", "...q....", "........", "..N.....", "........",
        "....K...",
    ]));
    let outcome = best_successor(&position, tables(), 2).unwrap();
    let mv = outcome.best.last_move().unwrap();
    assert_eq!(mv.to(), "d5".parse().unwrap());
    assert!(mv.is_capture());
}

//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Features:
//! - Fail-soft alpha-beta over generated successor positions
//! - Move ordering (MVV-LVA captures, piece-square improvement)
//! - Checkmate and stalemate detection through the check oracle, with
//!   nearer mates preferred
//! - Cooperative pause and abort at every node
//! - Unpruned minimax reference for verification

mod constants;
mod move_order;

use std::fmt;

use crate::sync::SearchControl;

use super::attack_tables::AttackTables;
use super::eval::evaluate;
use super::state::Position;

pub use constants::{CAPTURE_BONUS, DEFAULT_DEPTH, INFINITY, MATE_SCORE};
pub(crate) use move_order::order_successors;

/// The search stopped because an abort was requested.
///
/// This is the normal way a cancelled search unwinds, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchAborted;

impl fmt::Display for SearchAborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search aborted")
    }
}

impl std::error::Error for SearchAborted {}

/// Result of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The chosen successor position
    pub best: Position,
    /// Its score from the searching side's point of view
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

/// Search state for one root search.
pub struct Searcher<'a> {
    tables: &'a AttackTables,
    control: Option<&'a SearchControl>,
    nodes: u64,
    /// Distance from the root of the node being searched
    ply: u32,
}

impl<'a> Searcher<'a> {
    /// A search that always runs to completion
    #[must_use]
    pub fn new(tables: &'a AttackTables) -> Self {
        Searcher {
            tables,
            control: None,
            nodes: 0,
            ply: 0,
        }
    }

    /// A search that honours pause and abort requests on `control`
    #[must_use]
    pub fn with_control(tables: &'a AttackTables, control: &'a SearchControl) -> Self {
        Searcher {
            tables,
            control: Some(control),
            nodes: 0,
            ply: 0,
        }
    }

    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the best successor of `position`, searching `depth` plies.
    ///
    /// A depth of 0 is treated as 1. Returns `Ok(None)` when the side to
    /// move has no legal successor.
    ///
    /// # Errors
    /// [`SearchAborted`] if an abort was requested mid-search.
    pub fn best_successor(
        &mut self,
        position: &Position,
        depth: u32,
    ) -> Result<Option<SearchOutcome>, SearchAborted> {
        self.checkpoint()?;
        self.nodes += 1;
        let depth = depth.max(1);

        let mut successors = position.legal_successors(self.tables);
        order_successors(&mut successors);

        let mut best: Option<(Position, i32)> = None;
        let mut best_score = -INFINITY;
        for child in successors {
            let score = -self.child_score(&child, depth - 1, -INFINITY, -best_score)?;
            if best.is_none() || score > best_score {
                best_score = score;
                best = Some((child, score));
            }
        }

        Ok(best.map(|(best, score)| SearchOutcome {
            best,
            score,
            nodes: self.nodes,
        }))
    }

    /// Negamax value of `position` within the window `(alpha, beta)`.
    ///
    /// # Errors
    /// [`SearchAborted`] if an abort was requested mid-search.
    pub fn negamax(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, SearchAborted> {
        self.checkpoint()?;
        self.nodes += 1;

        if depth == 0 {
            return Ok(evaluate(position));
        }

        let mut successors = position.legal_successors(self.tables);
        if successors.is_empty() {
            return Ok(self.terminal_score(position));
        }
        order_successors(&mut successors);

        let mut best = -INFINITY;
        for child in &successors {
            let score = -self.child_score(child, depth - 1, -beta, -alpha)?;
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }

    fn child_score(
        &mut self,
        child: &Position,
        depth: u32,
        alpha: i32,
        beta: i32,
    ) -> Result<i32, SearchAborted> {
        self.ply += 1;
        let score = self.negamax(child, depth, alpha, beta);
        self.ply -= 1;
        score
    }

    /// Score of a position with no legal successor.
    fn terminal_score(&self, position: &Position) -> i32 {
        terminal_score(position, self.tables, self.ply)
    }

    #[inline]
    fn checkpoint(&self) -> Result<(), SearchAborted> {
        match self.control {
            Some(control) => control.checkpoint(),
            None => Ok(()),
        }
    }
}

/// Best successor of `position` at `depth` plies, searched to completion.
#[must_use]
pub fn best_successor(
    position: &Position,
    tables: &AttackTables,
    depth: u32,
) -> Option<SearchOutcome> {
    Searcher::new(tables)
        .best_successor(position, depth)
        .ok()
        .flatten()
}

/// A mated side scores `-(MATE_SCORE - ply)`, so nearer mates score
/// further from zero. Stalemate is 0.
fn terminal_score(position: &Position, tables: &AttackTables, ply: u32) -> i32 {
    if position.is_in_check(tables, position.side_to_move()) {
        -(MATE_SCORE - ply as i32)
    } else {
        0
    }
}

/// Full-width minimax value of `position`, no pruning and no ordering.
#[must_use]
pub fn minimax(position: &Position, tables: &AttackTables, depth: u32) -> i32 {
    minimax_at(position, tables, depth, 0)
}

fn minimax_at(position: &Position, tables: &AttackTables, depth: u32, ply: u32) -> i32 {
    if depth == 0 {
        return evaluate(position);
    }
    let successors = position.legal_successors(tables);
    if successors.is_empty() {
        return terminal_score(position, tables, ply);
    }
    successors
        .iter()
        .map(|child| -minimax_at(child, tables, depth - 1, ply + 1))
        .max()
        .unwrap_or(-INFINITY)
}

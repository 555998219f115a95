//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against known reference values
//! - `edge_cases.rs` - En passant, castling gating, promotion, game end
//! - `search.rs` - Alpha-beta against minimax, terminal scores, mates
//! - `proptest.rs` - Property-based tests

mod proptest;
mod search;

use once_cell::sync::Lazy;

use crate::board::{AttackTables, Position, PositionBuilder};

static TABLES: Lazy<AttackTables> =
    Lazy::new(|| AttackTables::with_seed(0x00C0_FFEE).expect("attack tables"));

/// Shared attack tables for the board tests
pub(super) fn tables() -> &'static AttackTables {
    &TABLES
}

/// Build a position from an 8-row diagram, rank 8 first.
pub(super) fn diagram(rows: [&str; 8]) -> PositionBuilder {
    PositionBuilder::diagram(&rows).expect("valid diagram")
}

pub(super) fn build(builder: PositionBuilder) -> Position {
    builder.build(tables()).expect("valid position")
}

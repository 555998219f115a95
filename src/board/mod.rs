//! Chess board representation and game logic.
//!
//! Uses bitboards and magic attack tables for move generation. Every move
//! yields a new [`Position`] value; there is no separate make/unmake step.
//!
//! # Example
//! ```
//! use chess_core::board::{AttackTables, Position};
//!
//! let tables = AttackTables::with_seed(7).unwrap();
//! let start = Position::starting();
//! let successors = start.legal_successors(&tables);
//! println!("Starting position has {} legal moves", successors.len());
//! ```

mod attack_tables;
mod builder;
mod error;
mod eval;
mod movegen;
mod pst;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use attack_tables::{reference_attacks, AttackTables, Magic, Slider};
pub use builder::PositionBuilder;
pub use error::{BuilderError, MagicError, SquareError};
pub use eval::evaluate;
pub use pst::{piece_value, square_value};
pub use state::{Board, GameStatus, Position};
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveFlags, Piece, PieceKind,
    PositionFlags, Square,
};

// Public API - search functions
pub use search::{
    best_successor, minimax, SearchAborted, SearchOutcome, Searcher, DEFAULT_DEPTH, MATE_SCORE,
};

pub(crate) use types::corner_right;

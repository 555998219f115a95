//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece`, `Color` and the twelve colored `PieceKind`s
//! - `Square` - compact board square representation (u8)
//! - `Bitboard` - 64-bit square set
//! - `Move` and `MoveFlags` - the record attached to each successor
//! - `CastlingRights` and `PositionFlags` - castling and check state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastlingRights, PositionFlags};
pub use moves::{Move, MoveFlags};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use castling::corner_right;

pub mod board;
pub mod engine;
mod perft;
pub mod sync;

pub use board::{AttackTables, Color, GameStatus, Move, Piece, PieceKind, Position, Square};
pub use engine::{Ai, AiConfig, AiError, TaskPool, WorkerPool};
pub use perft::{perft, perft_divide};
pub use sync::SearchControl;

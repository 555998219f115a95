//! Error types for board setup and attack-table construction.

use std::fmt;

use super::attack_tables::Slider;
use super::Square;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board diagram parsing and position building
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Diagram must have exactly 8 rows
    WrongRowCount { found: usize },
    /// A row must describe exactly 8 squares
    WrongRowLength { row: usize, found: usize },
    /// Unknown piece character
    InvalidPiece { char: char },
    /// Each side needs exactly one king
    KingCount { white: u32, black: u32 },
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::WrongRowCount { found } => {
                write!(f, "Board diagram must have 8 rows, found {found}")
            }
            BuilderError::WrongRowLength { row, found } => {
                write!(f, "Diagram row {row} must have 8 squares, found {found}")
            }
            BuilderError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in diagram")
            }
            BuilderError::KingCount { white, black } => {
                write!(
                    f,
                    "Each side needs exactly one king, found {white} white and {black} black"
                )
            }
        }
    }
}

impl std::error::Error for BuilderError {}

/// Attack-table construction failed. The engine cannot run without the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MagicError {
    /// No collision-free multiplier was found within the attempt budget
    NoMagicFound {
        square: Square,
        slider: Slider,
        attempts: u32,
    },
}

impl fmt::Display for MagicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagicError::NoMagicFound {
                square,
                slider,
                attempts,
            } => write!(
                f,
                "No {slider} magic found for {square} after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for MagicError {}

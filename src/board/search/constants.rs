//! Search constants.

/// Mate score at the root; a mate found `ply` plies deep scores `MATE_SCORE - ply`
pub const MATE_SCORE: i32 = 20000;

/// Window bound larger than any reachable score; safe to negate
pub const INFINITY: i32 = 1_000_000;

/// Added to every capture so captures are tried before quiet moves
pub const CAPTURE_BONUS: i32 = 10000;

/// Search depth used when none is configured
pub const DEFAULT_DEPTH: u32 = 4;

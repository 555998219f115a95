//! Engine controller: runs searches for one side on a worker pool.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};

use super::pool::TaskPool;
use crate::board::search::{SearchAborted, SearchOutcome, Searcher, DEFAULT_DEPTH};
use crate::board::{AttackTables, Color, GameStatus, Position};
use crate::sync::SearchControl;

/// Which side the engine plays and how deep it searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiConfig {
    pub side: Color,
    /// Plies searched from the root
    pub depth: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            side: Color::Black,
            depth: DEFAULT_DEPTH,
        }
    }
}

/// A search request the driver refused to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// The position's side to move is not the side the engine plays
    NotEngineTurn { to_move: Color, engine: Color },
    /// The side to move has no legal successor, so there is no move to return
    NoLegalMoves,
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NotEngineTurn { to_move, engine } => {
                write!(f, "{to_move} to move but the engine plays {engine}")
            }
            AiError::NoLegalMoves => write!(f, "No legal moves in the submitted position"),
        }
    }
}

impl std::error::Error for AiError {}

/// Cancellable background search driver.
pub struct Ai {
    tables: Arc<AttackTables>,
    config: AiConfig,
    control: Arc<SearchControl>,
}

impl Ai {
    #[must_use]
    pub fn new(tables: Arc<AttackTables>) -> Self {
        Self::with_config(tables, AiConfig::default())
    }

    #[must_use]
    pub fn with_config(tables: Arc<AttackTables>, config: AiConfig) -> Self {
        Ai {
            tables,
            config,
            control: Arc::new(SearchControl::new()),
        }
    }

    /// Set the engine's side and depth and clear any pending abort.
    pub fn reset(&mut self, side: Color, depth: u32) {
        self.config = AiConfig { side, depth };
        self.control.clear_abort();
    }

    #[must_use]
    pub fn config(&self) -> AiConfig {
        self.config
    }

    #[must_use]
    pub fn tables(&self) -> &Arc<AttackTables> {
        &self.tables
    }

    /// Submit a search of `position` to `pool`.
    ///
    /// The worker searches a private copy and, unless aborted, calls
    /// `callback` with the chosen successor exactly once on the worker
    /// thread. The callback must not call [`Ai::abort_and_wait`].
    ///
    /// # Errors
    /// [`AiError::NotEngineTurn`] if the engine's side is not to move,
    /// [`AiError::NoLegalMoves`] if there is nothing to search.
    pub fn get_best_move_async<P, F>(
        &self,
        position: &Position,
        pool: &P,
        callback: F,
    ) -> Result<(), AiError>
    where
        P: TaskPool + ?Sized,
        F: FnOnce(Position) + Send + 'static,
    {
        let to_move = position.side_to_move();
        if to_move != self.config.side {
            return Err(AiError::NotEngineTurn {
                to_move,
                engine: self.config.side,
            });
        }
        if position.status(&self.tables) != GameStatus::Ongoing {
            return Err(AiError::NoLegalMoves);
        }

        let position = *position;
        let depth = self.config.depth;
        let tables = Arc::clone(&self.tables);
        let control = Arc::clone(&self.control);
        let pending = self.control.begin_task();
        debug!("search submitted: {to_move} to move, depth {depth}");

        pool.execute(Box::new(move || {
            let _pending = pending;
            let start = Instant::now();
            let mut searcher = Searcher::with_control(&tables, &control);
            match searcher.best_successor(&position, depth) {
                Ok(Some(outcome)) => {
                    debug!(
                        "search finished: score {} nodes {} in {:?}",
                        outcome.score,
                        outcome.nodes,
                        start.elapsed()
                    );
                    callback(outcome.best);
                }
                Ok(None) => debug!("search found no legal successor"),
                Err(SearchAborted) => {
                    debug!("search aborted after {} nodes", searcher.nodes());
                }
            }
        }));
        Ok(())
    }

    /// Run a search on the calling thread, honouring pause and abort.
    ///
    /// # Errors
    /// [`SearchAborted`] if [`Ai::abort_and_wait`] is called meanwhile.
    pub fn search(&self, position: &Position) -> Result<Option<SearchOutcome>, SearchAborted> {
        let _pending = self.control.begin_task();
        Searcher::with_control(&self.tables, &self.control)
            .best_successor(position, self.config.depth)
    }

    pub fn set_paused(&self, paused: bool) {
        trace!("search {}", if paused { "paused" } else { "resumed" });
        self.control.set_paused(paused);
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.control.is_paused()
    }

    /// Whether any submitted search is still running
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.control.pending() > 0
    }

    /// Abort running searches and block until every one has exited.
    ///
    /// The abort flag is cleared afterwards, so the driver can be reused.
    /// The pause flag is left as it was.
    pub fn abort_and_wait(&self) {
        debug!("aborting {} pending searches", self.control.pending());
        self.control.request_abort();
        self.control.wait_idle();
        self.control.clear_abort();
    }
}

impl fmt::Debug for Ai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ai")
            .field("config", &self.config)
            .field("pending", &self.control.pending())
            .finish()
    }
}

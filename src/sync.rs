//! Synchronization primitives for the chess engine.
//!
//! [`SearchControl`] is the only state shared between the driver and its
//! worker threads: a pause flag, an abort flag and a count of searches
//! still running.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Condvar, Mutex};

use crate::board::SearchAborted;

/// Pause, abort and pending-task state for background searches.
#[derive(Debug, Default)]
pub struct SearchControl {
    aborted: AtomicBool,
    paused: AtomicBool,
    /// Held while changing `paused` or waiting on `resume`
    pause_lock: Mutex<()>,
    resume: Condvar,
    pending: Mutex<usize>,
    idle: Condvar,
}

impl SearchControl {
    /// How long a paused search sleeps before re-checking its flags
    pub const PAUSE_POLL: Duration = Duration::from_millis(50);

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by the search at every node.
    ///
    /// Blocks while paused and returns `Err` once an abort is requested.
    ///
    /// # Errors
    /// [`SearchAborted`] when the search must unwind.
    #[inline]
    pub fn checkpoint(&self) -> Result<(), SearchAborted> {
        if self.is_aborted() {
            return Err(SearchAborted);
        }
        if !self.is_paused() {
            return Ok(());
        }
        let mut guard = self.pause_lock.lock();
        while self.is_paused() {
            self.resume.wait_for(&mut guard, Self::PAUSE_POLL);
            if self.is_aborted() {
                return Err(SearchAborted);
            }
        }
        Ok(())
    }

    pub fn set_paused(&self, paused: bool) {
        let _guard = self.pause_lock.lock();
        self.paused.store(paused, Ordering::SeqCst);
        self.resume.notify_all();
    }

    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Ask running searches to stop, waking any that are paused.
    pub fn request_abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
        let _guard = self.pause_lock.lock();
        self.resume.notify_all();
    }

    pub fn clear_abort(&self) {
        self.aborted.store(false, Ordering::SeqCst);
    }

    #[inline]
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    /// Number of submitted searches that have not finished
    #[must_use]
    pub fn pending(&self) -> usize {
        *self.pending.lock()
    }

    /// Count a new search. The count drops when the guard is dropped,
    /// whether the search finished, aborted or panicked.
    #[must_use]
    pub fn begin_task(self: &Arc<Self>) -> PendingTask {
        *self.pending.lock() += 1;
        PendingTask(Arc::clone(self))
    }

    /// Block until every counted search has finished.
    pub fn wait_idle(&self) {
        let mut pending = self.pending.lock();
        while *pending > 0 {
            self.idle.wait(&mut pending);
        }
    }
}

/// Guard for one running search, see [`SearchControl::begin_task`].
#[derive(Debug)]
pub struct PendingTask(Arc<SearchControl>);

impl Drop for PendingTask {
    fn drop(&mut self) {
        let mut pending = self.0.pending.lock();
        *pending = pending.saturating_sub(1);
        if *pending == 0 {
            self.0.idle.notify_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_abort_lifecycle() {
        let control = SearchControl::new();
        assert!(control.checkpoint().is_ok());

        control.request_abort();
        assert_eq!(control.checkpoint(), Err(SearchAborted));

        control.clear_abort();
        assert!(control.checkpoint().is_ok());
    }

    #[test]
    fn test_pause_blocks_until_resumed() {
        let control = Arc::new(SearchControl::new());
        control.set_paused(true);

        let worker = {
            let control = Arc::clone(&control);
            thread::spawn(move || {
                let start = Instant::now();
                let result = control.checkpoint();
                (result, start.elapsed())
            })
        };

        thread::sleep(Duration::from_millis(120));
        control.set_paused(false);
        let (result, waited) = worker.join().unwrap();
        assert!(result.is_ok());
        assert!(waited >= Duration::from_millis(100));
    }

    #[test]
    fn test_abort_wakes_paused_search() {
        let control = Arc::new(SearchControl::new());
        control.set_paused(true);

        let worker = {
            let control = Arc::clone(&control);
            thread::spawn(move || control.checkpoint())
        };

        thread::sleep(Duration::from_millis(20));
        control.request_abort();
        assert_eq!(worker.join().unwrap(), Err(SearchAborted));
    }

    #[test]
    fn test_unpaused_checkpoint_leaves_pause_lock_free() {
        let control = Arc::new(SearchControl::new());
        let held = control.pause_lock.lock();
        let (tx, rx) = std::sync::mpsc::channel();
        let worker = {
            let control = Arc::clone(&control);
            thread::spawn(move || tx.send(control.checkpoint()).unwrap())
        };
        let result = rx.recv_timeout(Duration::from_secs(2));
        drop(held);
        worker.join().unwrap();
        assert_eq!(result, Ok(Ok(())));
    }

    #[test]
    fn test_pending_guard_counts() {
        let control = Arc::new(SearchControl::new());
        let first = control.begin_task();
        let second = control.begin_task();
        assert_eq!(control.pending(), 2);
        drop(first);
        assert_eq!(control.pending(), 1);

        let waiter = {
            let control = Arc::clone(&control);
            thread::spawn(move || control.wait_idle())
        };
        drop(second);
        waiter.join().unwrap();
        assert_eq!(control.pending(), 0);
    }
}

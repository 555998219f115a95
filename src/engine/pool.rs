//! Worker pool the driver submits searches to.

use std::any::Any;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error};
use parking_lot::{Condvar, Mutex};

/// Search thread stack size (8 MB)
const WORKER_STACK_SIZE: usize = 8 * 1024 * 1024;

/// A unit of work handed to a pool
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Anything that can run a boxed task off the caller's thread.
pub trait TaskPool {
    fn execute(&self, task: Task);
}

#[derive(Default)]
struct Queue {
    tasks: VecDeque<Task>,
    shutdown: bool,
}

#[derive(Default)]
struct Shared {
    queue: Mutex<Queue>,
    ready: Condvar,
}

/// Fixed-size pool of named worker threads.
///
/// Dropping the pool finishes queued tasks and joins every worker.
pub struct WorkerPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `workers` threads (at least one).
    ///
    /// # Errors
    /// Returns the OS error if a thread cannot be spawned.
    pub fn new(workers: usize) -> std::io::Result<Self> {
        let shared = Arc::new(Shared::default());
        let mut handles = Vec::with_capacity(workers.max(1));
        for id in 0..workers.max(1) {
            let shared = Arc::clone(&shared);
            let handle = thread::Builder::new()
                .name(format!("search-worker-{id}"))
                .stack_size(WORKER_STACK_SIZE)
                .spawn(move || worker_loop(&shared))?;
            handles.push(handle);
        }
        debug!("worker pool started with {} threads", handles.len());
        Ok(WorkerPool {
            shared,
            workers: handles,
        })
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers.len()
    }
}

impl TaskPool for WorkerPool {
    fn execute(&self, task: Task) {
        self.shared.queue.lock().tasks.push_back(task);
        self.shared.ready.notify_one();
    }
}

fn worker_loop(shared: &Shared) {
    loop {
        let task = {
            let mut queue = shared.queue.lock();
            loop {
                if let Some(task) = queue.tasks.pop_front() {
                    break task;
                }
                if queue.shutdown {
                    return;
                }
                shared.ready.wait(&mut queue);
            }
        };
        // A panicking task must not take its worker down with it.
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
            error!(
                "{} task panicked: {}",
                thread::current().name().unwrap_or("worker"),
                panic_message(payload.as_ref())
            );
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shared.queue.lock().shutdown = true;
        self.shared.ready.notify_all();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

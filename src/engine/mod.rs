//! Background search driver.
//!
//! [`Ai`] runs the search for one side on any [`TaskPool`], with cooperative
//! pause and abort shared through [`crate::sync::SearchControl`].

mod controller;
mod pool;

pub use controller::{Ai, AiConfig, AiError};
pub use pool::{Task, TaskPool, WorkerPool};

//! Entity counters for the Swarm ECS.
//!
//! This crate provides:
//! - [`EntityCounter`] - Single-threaded counter that generates fresh identifiers
//! - [`AtomicEntityCounter`] - Counter that can be shared between threads
//! - [`CounterConfig`] - Starting index and [`OverflowPolicy`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod counter;

pub use config::{CounterConfig, OverflowPolicy};
pub use counter::{AtomicEntityCounter, EntityCounter};

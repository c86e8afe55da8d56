//! Swarm - packed entity identifiers for ECS runtimes
//!
//! This crate re-exports all layers of the Swarm system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: swarm_entity     — Entity counters that mint identifiers
//! Layer 0: swarm_foundation — Bit layout, PackedId codec, Error
//! ```
//!
//! # Example
//!
//! ```
//! use swarm::{Eid, EntityCounter};
//!
//! let mut counter = EntityCounter::new();
//! let id: Eid = counter.generate()?;
//! let id = id.pack_additional(&[5])?;
//! assert!(id.has_component(5));
//!
//! let id = id.remove_component(5);
//! assert_eq!(id.decode().into_parts(), (0, 0, vec![]));
//! # Ok::<(), swarm::Error>(())
//! ```

pub use swarm_entity as entity;
pub use swarm_foundation as foundation;

pub use swarm_entity::{AtomicEntityCounter, CounterConfig, EntityCounter, OverflowPolicy};
pub use swarm_foundation::{
    ComponentId, Eid, Eid64, Eid128, EntityIndex, Error, ErrorKind, PackedId, Result, Unpacked,
};

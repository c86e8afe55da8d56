//! Packed entity identifiers for the Swarm ECS.
//!
//! This crate provides:
//! - [`PackedId`] - An entity index and its component IDs in one fixed-width value
//! - [`Eid`], [`Eid128`], [`Eid64`] - The supported identifier widths
//! - [`Unpacked`] - The decoded fields of an identifier
//! - [`Error`] - Error type for packing failures
//! - [`layout`] - Bit positions and widths of each field

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod eid;
pub mod error;
pub mod layout;

pub use eid::{ComponentId, Components, Eid, Eid64, Eid128, EntityIndex, PackedId, Unpacked};
pub use error::{Error, ErrorKind, Result};

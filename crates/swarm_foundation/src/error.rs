//! Error types for the Swarm identifier codec.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// The main error type for Swarm operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a too-many-components error.
    #[must_use]
    pub fn too_many_components(requested: usize, capacity: usize) -> Self {
        Self::new(ErrorKind::TooManyComponents {
            requested,
            capacity,
        })
    }

    /// Creates an index exhausted error.
    #[must_use]
    pub fn index_exhausted(last: u32) -> Self {
        Self::new(ErrorKind::IndexExhausted { last })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A component list does not fit in the identifier.
    #[error("too many components: {requested} requested, capacity is {capacity}")]
    TooManyComponents {
        /// Length of the component list that was to be packed.
        requested: usize,
        /// Largest list the identifier width can hold.
        capacity: usize,
    },

    /// Every entity index has been issued.
    #[error("entity index space exhausted (last issued: {last})")]
    IndexExhausted {
        /// The last index the counter handed out.
        last: u32,
    },
}

/// Result alias used throughout Swarm.
pub type Result<T> = std::result::Result<T, Error>;

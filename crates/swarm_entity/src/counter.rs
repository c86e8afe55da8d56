//! Entity counters that mint fresh identifiers.
//!
//! A counter is owned by the surrounding runtime and passed wherever new
//! entities are created, so independent worlds can keep independent
//! counters. Indices are never recycled.
//!
//! [`EntityCounter`] needs `&mut self` and suits single-threaded use.
//! [`AtomicEntityCounter`] can be shared between threads.

use std::sync::atomic::{AtomicU64, Ordering};

use swarm_foundation::{EntityIndex, Error, PackedId, Result};
use tracing::{trace, warn};

use crate::config::{CounterConfig, OverflowPolicy, Step};

fn issue<const WORDS: usize>(step: Step) -> PackedId<WORDS> {
    if step.wrapped {
        warn!("entity index space wrapped to 0");
    }
    trace!(index = step.index, "issued entity index");
    PackedId::new(step.index)
}

fn exhausted() -> Error {
    warn!("entity index space exhausted");
    Error::index_exhausted(EntityIndex::MAX)
}

fn peek_from(next: u64, overflow: OverflowPolicy) -> Option<EntityIndex> {
    overflow.step(next).map(|step| step.index)
}

/// Single-threaded entity counter.
#[derive(Debug, Clone)]
pub struct EntityCounter {
    next: u64,
    issued: u64,
    overflow: OverflowPolicy,
}

impl Default for EntityCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityCounter {
    /// Creates a counter starting at index 0.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CounterConfig::default())
    }

    /// Creates a counter from a configuration.
    #[must_use]
    pub fn with_config(config: &CounterConfig) -> Self {
        Self {
            next: u64::from(config.start),
            issued: 0,
            overflow: config.overflow,
        }
    }

    /// Generates an identifier with the next index and no components.
    ///
    /// # Errors
    ///
    /// Returns `IndexExhausted` if every index has been issued and the
    /// overflow policy is [`OverflowPolicy::Fail`].
    pub fn generate<const WORDS: usize>(&mut self) -> Result<PackedId<WORDS>> {
        let step = self.overflow.step(self.next).ok_or_else(exhausted)?;
        self.next = step.following;
        self.issued += 1;
        Ok(issue(step))
    }

    /// Returns the index the next call to [`Self::generate`] would use.
    #[must_use]
    pub fn peek(&self) -> Option<EntityIndex> {
        peek_from(self.next, self.overflow)
    }

    /// Returns how many identifiers this counter has generated.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Returns the overflow policy.
    #[must_use]
    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }
}

/// Entity counter that can be shared between threads.
#[derive(Debug)]
pub struct AtomicEntityCounter {
    next: AtomicU64,
    issued: AtomicU64,
    overflow: OverflowPolicy,
}

impl Default for AtomicEntityCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicEntityCounter {
    /// Creates a counter starting at index 0.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CounterConfig::default())
    }

    /// Creates a counter from a configuration.
    #[must_use]
    pub fn with_config(config: &CounterConfig) -> Self {
        Self {
            next: AtomicU64::new(u64::from(config.start)),
            issued: AtomicU64::new(0),
            overflow: config.overflow,
        }
    }

    /// Generates an identifier with the next index and no components.
    ///
    /// Concurrent callers always receive distinct indices (until a wrap).
    ///
    /// # Errors
    ///
    /// Returns `IndexExhausted` if every index has been issued and the
    /// overflow policy is [`OverflowPolicy::Fail`].
    pub fn generate<const WORDS: usize>(&self) -> Result<PackedId<WORDS>> {
        let overflow = self.overflow;
        // Only uniqueness matters, so relaxed ordering suffices
        let previous = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                overflow.step(next).map(|step| step.following)
            })
            .map_err(|_| exhausted())?;
        let step = overflow.step(previous).ok_or_else(exhausted)?;
        self.issued.fetch_add(1, Ordering::Relaxed);
        Ok(issue(step))
    }

    /// Returns the index the next call to [`Self::generate`] would use.
    ///
    /// Another thread may claim it first.
    #[must_use]
    pub fn peek(&self) -> Option<EntityIndex> {
        peek_from(self.next.load(Ordering::Relaxed), self.overflow)
    }

    /// Returns how many identifiers this counter has generated.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }

    /// Returns the overflow policy.
    #[must_use]
    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Consumes the counter, returning a single-threaded one at the same position.
    #[must_use]
    pub fn into_inner(self) -> EntityCounter {
        EntityCounter {
            next: self.next.into_inner(),
            issued: self.issued.into_inner(),
            overflow: self.overflow,
        }
    }
}

impl From<EntityCounter> for AtomicEntityCounter {
    fn from(counter: EntityCounter) -> Self {
        Self {
            next: AtomicU64::new(counter.next),
            issued: AtomicU64::new(counter.issued),
            overflow: counter.overflow,
        }
    }
}

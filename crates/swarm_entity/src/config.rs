//! Configuration for entity counters.

use swarm_foundation::EntityIndex;

/// What a counter does once every entity index has been issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Refuse to issue further indices.
    #[default]
    Fail,
    /// Start again from index 0.
    ///
    /// Indices issued after the wrap collide with earlier ones.
    Wrap,
}

/// The outcome of advancing a counter by one index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Step {
    /// The index to hand out.
    pub index: EntityIndex,
    /// The counter value after this step.
    pub following: u64,
    /// Whether the counter wrapped to reach `index`.
    pub wrapped: bool,
}

impl OverflowPolicy {
    /// Advances from `next`, or returns `None` if the index space is exhausted.
    ///
    /// `next` ranges over `0..=u32::MAX + 1`; the top value means the last
    /// index has already been issued.
    pub(crate) fn step(self, next: u64) -> Option<Step> {
        match EntityIndex::try_from(next) {
            Ok(index) => Some(Step {
                index,
                following: next + 1,
                wrapped: false,
            }),
            Err(_) => match self {
                Self::Fail => None,
                Self::Wrap => Some(Step {
                    index: 0,
                    following: 1,
                    wrapped: true,
                }),
            },
        }
    }
}

/// Configuration for an entity counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CounterConfig {
    /// The first index the counter issues.
    pub start: EntityIndex,

    /// Behaviour once `u32::MAX` has been issued.
    pub overflow: OverflowPolicy,
}

impl CounterConfig {
    /// Creates the default configuration: start at 0, fail on overflow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the first index.
    #[must_use]
    pub fn with_start(mut self, start: EntityIndex) -> Self {
        self.start = start;
        self
    }

    /// Builder method to set the overflow policy.
    #[must_use]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

//! Matcher configuration.

use std::fmt;
use std::num::NonZeroUsize;

/// Step budget used when the caller does not supply one.
pub const DEFAULT_STEP_LIMIT: usize = 10_000;

/// Upper bound on matcher steps.
///
/// A step is one node popped from the continuation stack. The limit is the
/// only way a parse is cut short, which keeps termination independent of
/// how fast the host runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StepLimit {
    /// Run until the grammar logic terminates. Looping grammars never will.
    Unbounded,
    /// Fail once this many steps have run and another is needed.
    Steps(NonZeroUsize),
}

impl StepLimit {
    /// A limit of `steps`, where zero means unbounded.
    pub fn steps(steps: usize) -> Self {
        NonZeroUsize::new(steps).map_or(StepLimit::Unbounded, StepLimit::Steps)
    }

    /// The limit as a plain count, `None` when unbounded.
    pub fn get(self) -> Option<usize> {
        match self {
            StepLimit::Unbounded => None,
            StepLimit::Steps(steps) => Some(steps.get()),
        }
    }

    /// True if running step number `step` would break the limit.
    #[inline]
    pub(crate) fn is_exceeded(self, step: usize) -> bool {
        match self {
            StepLimit::Unbounded => false,
            StepLimit::Steps(limit) => step > limit.get(),
        }
    }
}

impl Default for StepLimit {
    fn default() -> Self {
        StepLimit::steps(DEFAULT_STEP_LIMIT)
    }
}

/// Zero and negative values mean unbounded.
impl From<i64> for StepLimit {
    fn from(steps: i64) -> Self {
        usize::try_from(steps).map_or(StepLimit::Unbounded, StepLimit::steps)
    }
}

impl fmt::Display for StepLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepLimit::Unbounded => f.write_str("unbounded"),
            StepLimit::Steps(steps) => write!(f, "{steps} steps"),
        }
    }
}

/// Settings for a [`Matcher`](crate::Matcher).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchConfig {
    pub step_limit: StepLimit,
}

impl MatchConfig {
    #[must_use]
    pub fn with_step_limit(mut self, step_limit: impl Into<StepLimit>) -> Self {
        self.step_limit = step_limit.into();
        self
    }
}

#[cfg(test)]
mod tests;

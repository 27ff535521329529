//! Logical time and operation deadlines.

use core::fmt;

/// A logical point in time, in seconds.
///
/// The engine never reads a clock itself; callers supply the current
/// time with each operation, which keeps every code path deterministic
/// and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a `Timestamp` from raw seconds.
    #[must_use]
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the raw seconds value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A caller-supplied expiry for an operation.
///
/// A deadline is a logical bound, not a scheduling mechanism: the engine
/// compares it against the caller-supplied `now` at the start of each
/// operation and rejects expired calls before touching any state.
///
/// The deadline is inclusive: an operation at exactly the deadline
/// second still executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deadline(Timestamp);

impl Deadline {
    /// Creates a `Deadline` at the given timestamp.
    #[must_use]
    pub const fn at(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }

    /// Returns the expiry timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.0
    }

    /// Returns `true` if `now` is past the deadline.
    #[must_use]
    pub const fn is_expired(&self, now: Timestamp) -> bool {
        now.get() > self.0.get()
    }
}

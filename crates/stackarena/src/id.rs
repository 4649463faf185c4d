//! Strongly-typed logical stack identifier.

use std::fmt;

/// Identifies one logical stack within a [`MultiStackArena`](crate::MultiStackArena).
///
/// Stacks are numbered from zero in buffer order. `StackId(n)` is the n-th
/// region of the arena at construction time; its successor for capacity
/// borrowing is `StackId((n + 1) % stack_count)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StackId(pub usize);

impl StackId {
    /// The raw index of this stack.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StackId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

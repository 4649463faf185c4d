//! Arena error types.

use std::error::Error;
use std::fmt;

use crate::id::StackId;

/// Errors that can occur during arena operations.
///
/// Every failing operation reports its error before touching the buffer or
/// any descriptor, so an `Err` always leaves the arena exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A `StackId` outside `0..stack_count`.
    InvalidStackId {
        /// The rejected identifier.
        stack: StackId,
        /// Number of logical stacks in the arena.
        stack_count: usize,
    },
    /// `pop` or `peek` on a stack that holds no elements.
    StackEmpty {
        /// The empty stack.
        stack: StackId,
    },
    /// `push` while every slot of the arena is occupied.
    ArenaFull {
        /// Total slot count of the arena.
        capacity: usize,
    },
    /// Rejected construction parameters.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStackId { stack, stack_count } => {
                write!(f, "invalid stack id {stack}: arena has {stack_count} stacks")
            }
            Self::StackEmpty { stack } => write!(f, "stack {stack} is empty"),
            Self::ArenaFull { capacity } => {
                write!(f, "arena full: all {capacity} slots are occupied")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ArenaError::InvalidStackId {
            stack: StackId(5),
            stack_count: 3,
        };
        assert_eq!(e.to_string(), "invalid stack id 5: arena has 3 stacks");
        assert_eq!(
            ArenaError::StackEmpty { stack: StackId(1) }.to_string(),
            "stack 1 is empty"
        );
        assert_eq!(
            ArenaError::ArenaFull { capacity: 9 }.to_string(),
            "arena full: all 9 slots are occupied"
        );
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn Error> = Box::new(ArenaError::InvalidConfig {
            reason: "zero stacks".into(),
        });
        assert!(e.to_string().contains("zero stacks"));
    }
}

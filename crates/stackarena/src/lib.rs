//! Fixed-capacity arena shared by N logical stacks.
//!
//! A [`MultiStackArena`] owns one buffer of fixed length and carves it into
//! N contiguous, circularly adjacent regions, one per logical stack. Stacks
//! do not own a static share of the buffer: when a stack runs out of room
//! while the arena as a whole still has free slots, it borrows one slot from
//! its successor, sliding the successor's elements (and, if needed, the
//! successor's successor's) one position to the right. The buffer itself is
//! never grown.
//!
//! # Architecture
//!
//! ```text
//! MultiStackArena
//! ├── RingBuffer (Vec<Value>, fixed length L, circular indexing)
//! └── StackDescriptor × N  (start, capacity, size) views over the buffer
//! ```
//!
//! # Invariants
//!
//! Before and after every public call:
//!
//! - capacities sum to `L`;
//! - region `i + 1` starts where region `i` ends (mod `L`);
//! - `size <= capacity` for every stack;
//! - total size never exceeds `L`.
//!
//! Capacity is sticky: a stack that borrowed a slot keeps it after `pop`.
//!
//! # Example
//!
//! ```
//! use stackarena::{MultiStackArena, StackId};
//!
//! let mut arena = MultiStackArena::new(3, 9)?;
//! for v in 1..=4 {
//!     arena.push(StackId(0), v)?;
//! }
//! assert_eq!(arena.capacity(StackId(0))?, 4);
//! assert_eq!(arena.capacity(StackId(1))?, 2);
//! assert_eq!(arena.pop(StackId(0))?, 4);
//! # Ok::<(), stackarena::ArenaError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

#[macro_use]
mod logging;

pub mod arena;
mod buffer;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod id;

/// Element type stored in the arena.
pub type Value = i32;

// Public re-exports for the primary API surface.
pub use arena::{MultiStackArena, StackIter};
pub use config::ArenaConfig;
pub use descriptor::{StackDescriptor, StackState};
pub use error::ArenaError;
pub use id::StackId;

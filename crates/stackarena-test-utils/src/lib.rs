//! Test utilities for stackarena development.
//!
//! Provides a [`ModelArena`] with plain `Vec`-per-stack semantics to compare
//! the real arena against, and [`assert_invariants`] which checks the
//! partitioning invariants of a [`MultiStackArena`] from its public
//! descriptors.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use stackarena::{ArenaError, MultiStackArena, StackId, Value};

/// Reference model: one unbounded `Vec` per stack plus a shared slot budget.
///
/// Reproduces the observable results of [`MultiStackArena`] operations
/// (values, lengths, error variants) without any physical layout.
#[derive(Clone, Debug)]
pub struct ModelArena {
    stacks: Vec<Vec<Value>>,
    total_capacity: usize,
}

impl ModelArena {
    pub fn new(stack_count: usize, total_capacity: usize) -> Self {
        Self {
            stacks: vec![Vec::new(); stack_count],
            total_capacity,
        }
    }

    /// Build a model matching the shape of an existing arena.
    pub fn matching(arena: &MultiStackArena) -> Self {
        Self::new(arena.stack_count(), arena.total_capacity())
    }

    pub fn push(&mut self, stack: StackId, value: Value) -> Result<(), ArenaError> {
        self.check(stack)?;
        if self.total_len() == self.total_capacity {
            return Err(ArenaError::ArenaFull {
                capacity: self.total_capacity,
            });
        }
        self.stacks[stack.0].push(value);
        Ok(())
    }

    pub fn pop(&mut self, stack: StackId) -> Result<Value, ArenaError> {
        self.check(stack)?;
        self.stacks[stack.0]
            .pop()
            .ok_or(ArenaError::StackEmpty { stack })
    }

    pub fn peek(&self, stack: StackId) -> Result<Value, ArenaError> {
        self.check(stack)?;
        self.stacks[stack.0]
            .last()
            .copied()
            .ok_or(ArenaError::StackEmpty { stack })
    }

    /// Contents of one stack, bottom first.
    pub fn contents(&self, stack: StackId) -> &[Value] {
        &self.stacks[stack.0]
    }

    pub fn total_len(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    fn check(&self, stack: StackId) -> Result<(), ArenaError> {
        if stack.0 < self.stacks.len() {
            Ok(())
        } else {
            Err(ArenaError::InvalidStackId {
                stack,
                stack_count: self.stacks.len(),
            })
        }
    }
}

/// Panic with a descriptive message if any partitioning invariant is broken.
///
/// Checks that capacities tile the buffer, that regions are circularly
/// contiguous, that no stack is over capacity, and that the total length
/// agrees with the per-stack sizes.
pub fn assert_invariants(arena: &MultiStackArena) {
    let len = arena.total_capacity();
    let descs = arena.descriptors();
    let n = descs.len();

    let capacity_sum: usize = descs.iter().map(|d| d.capacity()).sum();
    assert_eq!(capacity_sum, len, "capacities do not tile the buffer: {descs:?}");

    let size_sum: usize = descs.iter().map(|d| d.size()).sum();
    assert_eq!(size_sum, arena.total_len(), "total_len disagrees with sizes");
    assert!(size_sum <= len, "more elements than slots: {descs:?}");
    assert_eq!(arena.is_full(), size_sum == len);

    for (i, d) in descs.iter().enumerate() {
        assert!(d.start() < len, "stack {i} starts outside the buffer: {d:?}");
        assert!(d.size() <= d.capacity(), "stack {i} over capacity: {d:?}");
        let succ = &descs[(i + 1) % n];
        assert_eq!(
            succ.start(),
            (d.start() + d.capacity()) % len,
            "region after stack {i} is not contiguous: {descs:?}"
        );
    }
}

/// Assert that every stack of `arena` holds exactly the model's contents.
pub fn assert_matches_model(arena: &MultiStackArena, model: &ModelArena) {
    assert_eq!(arena.stack_count(), model.stack_count());
    for i in 0..model.stack_count() {
        let stack = StackId(i);
        let actual = arena.to_vec(stack).expect("stack id in range");
        assert_eq!(actual, model.contents(stack), "stack {i} diverged from model");
    }
    assert_eq!(arena.total_len(), model.total_len());
}

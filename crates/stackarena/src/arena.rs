//! The multi-stack arena: N logical stacks over one fixed buffer.
//!
//! Each stack is a [`StackDescriptor`] view over the shared `RingBuffer`.
//! A push onto a stack that is at capacity borrows one slot from the stack's
//! circular successor via a cascading shift (see [`MultiStackArena::push`]).

use smallvec::SmallVec;

use crate::buffer::RingBuffer;
use crate::config::ArenaConfig;
use crate::descriptor::{StackDescriptor, StackState};
use crate::error::ArenaError;
use crate::id::StackId;
use crate::Value;

/// Inline descriptor storage; arenas with more stacks spill to the heap once
/// at construction.
type DescriptorTable = SmallVec<[StackDescriptor; 8]>;

/// A fixed-length buffer shared by N logical LIFO stacks.
///
/// Capacity moves between neighbouring stacks on demand but the buffer
/// length never changes. All operations are synchronous and single-owner;
/// wrap the arena in a `Mutex` if it must be shared across threads, since a
/// single push can move elements of several stacks.
#[derive(Clone, Debug)]
pub struct MultiStackArena {
    buffer: RingBuffer,
    descriptors: DescriptorTable,
    /// Sum of all stack sizes.
    occupied: usize,
}

impl MultiStackArena {
    /// Create an arena of `total_capacity` slots split evenly across
    /// `stack_count` stacks.
    ///
    /// Fails with [`ArenaError::InvalidConfig`] if `stack_count` is zero or
    /// `total_capacity < stack_count`.
    pub fn new(stack_count: usize, total_capacity: usize) -> Result<Self, ArenaError> {
        Self::from_config(&ArenaConfig::new(stack_count, total_capacity))
    }

    /// Create an arena with an explicit initial capacity per stack.
    ///
    /// The buffer length is the sum of `capacities`; every entry must be at
    /// least 1.
    pub fn with_capacities(capacities: &[usize]) -> Result<Self, ArenaError> {
        Self::from_config(&ArenaConfig::with_capacities(capacities.to_vec()))
    }

    /// Create an arena from a validated [`ArenaConfig`].
    pub fn from_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;

        let mut descriptors = DescriptorTable::with_capacity(config.stack_count);
        let mut start = 0usize;
        for capacity in config.initial_capacities() {
            descriptors.push(StackDescriptor::new(start, capacity));
            start += capacity;
        }

        debug!(
            "created arena: {} stacks over {} slots",
            config.stack_count, config.total_capacity
        );

        Ok(Self {
            buffer: RingBuffer::new(config.total_capacity),
            descriptors,
            occupied: 0,
        })
    }

    /// Push `value` onto `stack`.
    ///
    /// If the stack is at capacity but the arena is not full, one slot is
    /// first borrowed from the successor stack, cascading further along the
    /// circle while successors are themselves at capacity. Elements of the
    /// shifted stacks move physically but keep their logical order.
    ///
    /// Fails with [`ArenaError::ArenaFull`] when every slot is occupied and
    /// with [`ArenaError::InvalidStackId`] for an out-of-range id. On error
    /// the arena is unchanged.
    pub fn push(&mut self, stack: StackId, value: Value) -> Result<(), ArenaError> {
        let i = self.index(stack)?;
        if self.is_full() {
            return Err(ArenaError::ArenaFull {
                capacity: self.total_capacity(),
            });
        }

        if self.descriptors[i].is_full() {
            self.expand(i);
        }

        let desc = &mut self.descriptors[i];
        self.buffer.set(desc.start + desc.size, value);
        desc.size += 1;
        self.occupied += 1;
        Ok(())
    }

    /// Remove and return the top element of `stack`.
    ///
    /// The freed slot stays reserved for `stack`; capacity is never handed
    /// back to neighbours.
    pub fn pop(&mut self, stack: StackId) -> Result<Value, ArenaError> {
        let i = self.index(stack)?;
        let desc = self.descriptors[i];
        if desc.is_empty() {
            return Err(ArenaError::StackEmpty { stack });
        }

        let top = desc.start + desc.size - 1;
        let value = self.buffer.get(top);
        self.buffer.clear(top);
        self.descriptors[i].size -= 1;
        self.occupied -= 1;
        Ok(value)
    }

    /// Return the top element of `stack` without removing it.
    pub fn peek(&self, stack: StackId) -> Result<Value, ArenaError> {
        let desc = self.descriptor(stack)?;
        if desc.is_empty() {
            return Err(ArenaError::StackEmpty { stack });
        }
        Ok(self.buffer.get(desc.start + desc.size - 1))
    }

    /// Number of elements stored in `stack`.
    pub fn len(&self, stack: StackId) -> Result<usize, ArenaError> {
        Ok(self.descriptor(stack)?.size)
    }

    /// Whether `stack` holds no elements.
    pub fn is_empty(&self, stack: StackId) -> Result<bool, ArenaError> {
        Ok(self.descriptor(stack)?.is_empty())
    }

    /// Whether `stack` has used every slot currently reserved for it.
    ///
    /// A full stack can still accept pushes while the arena has room.
    pub fn is_stack_full(&self, stack: StackId) -> Result<bool, ArenaError> {
        Ok(self.descriptor(stack)?.is_full())
    }

    /// Number of slots currently reserved for `stack`.
    pub fn capacity(&self, stack: StackId) -> Result<usize, ArenaError> {
        Ok(self.descriptor(stack)?.capacity)
    }

    /// Fill state of `stack`.
    pub fn state(&self, stack: StackId) -> Result<StackState, ArenaError> {
        Ok(self.descriptor(stack)?.state())
    }

    /// Snapshot of the descriptor for `stack`.
    pub fn descriptor(&self, stack: StackId) -> Result<StackDescriptor, ArenaError> {
        let i = self.index(stack)?;
        Ok(self.descriptors[i])
    }

    /// All descriptors, in stack order.
    pub fn descriptors(&self) -> &[StackDescriptor] {
        &self.descriptors
    }

    /// Iterate over the elements of `stack` from bottom to top.
    pub fn iter(&self, stack: StackId) -> Result<StackIter<'_>, ArenaError> {
        let desc = self.descriptor(stack)?;
        Ok(StackIter {
            buffer: &self.buffer,
            next: desc.start,
            end: desc.start + desc.size,
        })
    }

    /// Copy the elements of `stack` into a `Vec`, bottom first.
    pub fn to_vec(&self, stack: StackId) -> Result<Vec<Value>, ArenaError> {
        Ok(self.iter(stack)?.collect())
    }

    /// Total number of elements across all stacks.
    pub fn total_len(&self) -> usize {
        self.occupied
    }

    /// Length of the shared buffer.
    pub fn total_capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of logical stacks.
    pub fn stack_count(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether every slot of the arena is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied == self.buffer.len()
    }

    fn index(&self, stack: StackId) -> Result<usize, ArenaError> {
        if stack.0 < self.descriptors.len() {
            Ok(stack.0)
        } else {
            Err(ArenaError::InvalidStackId {
                stack,
                stack_count: self.descriptors.len(),
            })
        }
    }

    fn successor(&self, i: usize) -> usize {
        (i + 1) % self.descriptors.len()
    }

    /// Grow stack `i` by one slot taken from its successor.
    fn expand(&mut self, i: usize) {
        assert!(!self.is_full(), "expand called on a full arena");
        let next = self.successor(i);
        debug!("stack {i} at capacity, borrowing a slot from stack {next}");
        self.shift(next, 0);
        self.descriptors[i].capacity += 1;
    }

    /// Free the leading slot of stack `target` and cede it to its predecessor.
    ///
    /// If `target` has no spare slot it first absorbs one from its own
    /// successor. Terminates because the arena is not full, so some stack
    /// downstream has spare capacity; `depth` never reaches the stack count.
    fn shift(&mut self, target: usize, depth: usize) {
        debug_assert!(
            depth < self.descriptors.len(),
            "cascading shift visited every stack"
        );
        trace!("shifting stack {target} (depth {depth})");

        if self.descriptors[target].is_full() {
            let next = self.successor(target);
            self.shift(next, depth + 1);
            self.descriptors[target].capacity += 1;
        }

        // Slide stored elements one slot right, top first.
        let desc = self.descriptors[target];
        let mut index = self.buffer.wrap(desc.start + desc.size);
        for _ in 0..desc.size {
            let from = self.buffer.prev(index);
            self.buffer.copy(from, index);
            index = from;
        }
        self.buffer.clear(desc.start);

        let new_start = self.buffer.next(desc.start);
        let desc = &mut self.descriptors[target];
        desc.start = new_start;
        desc.capacity -= 1;
    }
}

/// Bottom-to-top iterator over one stack's elements.
///
/// Created by [`MultiStackArena::iter`].
#[derive(Clone, Debug)]
pub struct StackIter<'a> {
    buffer: &'a RingBuffer,
    /// Unwrapped offset of the next element.
    next: usize,
    /// Unwrapped offset one past the top element.
    end: usize,
}

impl Iterator for StackIter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        if self.next == self.end {
            return None;
        }
        let value = self.buffer.get(self.next);
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for StackIter<'_> {
    fn next_back(&mut self) -> Option<Value> {
        if self.next == self.end {
            return None;
        }
        self.end -= 1;
        Some(self.buffer.get(self.end))
    }
}

impl ExactSizeIterator for StackIter<'_> {}

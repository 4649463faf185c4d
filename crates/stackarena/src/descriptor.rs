//! Per-stack region descriptors.
//!
//! A [`StackDescriptor`] is the `(start, capacity, size)` view of one logical
//! stack over the shared buffer. Descriptors own no storage; the arena's
//! single `RingBuffer` does. Taken together, the
//! descriptors of an arena tile the buffer circularly with no gaps and no
//! overlap.

/// Observable fill state of one logical stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackState {
    /// `size < capacity`: a push needs no borrowing.
    HasSpareCapacity,
    /// `size == capacity`: the next push must borrow a slot from the successor.
    AtCapacity,
}

/// Region of the buffer reserved for one logical stack.
///
/// Elements live at buffer indices `start, start + 1, .., start + size - 1`
/// taken modulo the buffer length. Slots `size..capacity` of the region are
/// reserved but unused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackDescriptor {
    pub(crate) start: usize,
    pub(crate) capacity: usize,
    pub(crate) size: usize,
}

impl StackDescriptor {
    pub(crate) fn new(start: usize, capacity: usize) -> Self {
        Self {
            start,
            capacity,
            size: 0,
        }
    }

    /// Buffer index where this stack's region begins.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of slots currently reserved for this stack.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements currently stored.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether every reserved slot is in use.
    pub fn is_full(&self) -> bool {
        self.size >= self.capacity
    }

    /// Reserved but unused slots.
    pub fn spare(&self) -> usize {
        self.capacity - self.size
    }

    /// Current fill state.
    pub fn state(&self) -> StackState {
        if self.is_full() {
            StackState::AtCapacity
        } else {
            StackState::HasSpareCapacity
        }
    }
}

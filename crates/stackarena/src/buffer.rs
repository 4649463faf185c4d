//! Fixed-length circular backing storage.
//!
//! A [`RingBuffer`] is a `Vec<Value>` allocated to its full length at
//! creation and never resized. It knows nothing about stacks; it only
//! provides slot access and modular index arithmetic.

use crate::Value;

/// Fixed-length slot storage with circular indexing.
#[derive(Clone, Debug)]
pub(crate) struct RingBuffer {
    /// Backing storage. Allocated to full length at creation.
    slots: Vec<Value>,
}

impl RingBuffer {
    /// Create a zero-filled buffer of `len` slots.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            slots: vec![0; len],
        }
    }

    /// Number of slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Map an unwrapped offset onto `0..len`.
    pub(crate) fn wrap(&self, index: usize) -> usize {
        index % self.slots.len()
    }

    /// Index after `index`, wrapping past the end.
    pub(crate) fn next(&self, index: usize) -> usize {
        self.wrap(index + 1)
    }

    /// Index before `index`, wrapping past the start.
    pub(crate) fn prev(&self, index: usize) -> usize {
        if index == 0 {
            self.slots.len() - 1
        } else {
            index - 1
        }
    }

    /// Read the slot at an unwrapped offset.
    pub(crate) fn get(&self, index: usize) -> Value {
        self.slots[self.wrap(index)]
    }

    /// Write the slot at an unwrapped offset.
    pub(crate) fn set(&mut self, index: usize, value: Value) {
        let i = self.wrap(index);
        self.slots[i] = value;
    }

    /// Zero the slot at an unwrapped offset.
    pub(crate) fn clear(&mut self, index: usize) {
        self.set(index, 0);
    }

    /// Copy the slot at `from` into `to` (both unwrapped offsets).
    pub(crate) fn copy(&mut self, from: usize, to: usize) {
        let value = self.get(from);
        self.set(to, value);
    }
}

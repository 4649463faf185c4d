//! Benchmark workloads for the stackarena multi-stack arena.
//!
//! - [`skewed_profile`]: one hot stack, many cold ones; forces long cascades
//! - [`random_pushes`]: deterministic stack/value sequence via seed
//! - [`fill_round_robin`]: fill an arena evenly without any borrowing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stackarena::{ArenaConfig, MultiStackArena, StackId, Value};

/// Config for the skewed workload: `stack_count` stacks of one slot each
/// plus `stack_count` spare slots on the last stack.
///
/// Filling stack 0 past one element makes every push cascade through all
/// intermediate stacks once they hold an element.
pub fn skewed_profile(stack_count: usize) -> ArenaConfig {
    let mut capacities = vec![1; stack_count];
    if let Some(last) = capacities.last_mut() {
        *last += stack_count;
    }
    ArenaConfig::with_capacities(capacities)
}

/// Deterministic `(stack, value)` sequence of length `len`.
pub fn random_pushes(seed: u64, stack_count: usize, len: usize) -> Vec<(StackId, Value)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let stack = StackId(rng.next_u32() as usize % stack_count);
            (stack, rng.next_u32() as Value)
        })
        .collect()
}

/// Push onto stacks in turn until the arena is full.
///
/// With an even partition no push ever needs to borrow capacity.
pub fn fill_round_robin(arena: &mut MultiStackArena) {
    let n = arena.stack_count();
    let mut i = 0usize;
    while !arena.is_full() {
        let stack = StackId(i % n);
        if arena.is_stack_full(stack).unwrap_or(true) {
            i += 1;
            continue;
        }
        if arena.push(stack, i as Value).is_err() {
            break;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skewed_profile_is_valid() {
        let config = skewed_profile(8);
        assert!(config.validate().is_ok());
        assert_eq!(config.total_capacity, 16);
    }

    #[test]
    fn random_pushes_is_deterministic() {
        assert_eq!(random_pushes(3, 4, 100), random_pushes(3, 4, 100));
        assert!(random_pushes(3, 4, 100).iter().all(|(s, _)| s.0 < 4));
    }

    #[test]
    fn fill_round_robin_fills_without_borrowing() {
        let mut arena = MultiStackArena::new(4, 12).unwrap();
        fill_round_robin(&mut arena);
        assert!(arena.is_full());
        assert!(arena.descriptors().iter().all(|d| d.capacity() == 3));
    }
}

//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for a [`MultiStackArena`](crate::MultiStackArena).
///
/// Describes how many logical stacks share the buffer, how large the buffer
/// is, and how it is initially partitioned. Validated at construction; the
/// buffer length is immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of logical stacks. Must be at least 1.
    pub stack_count: usize,

    /// Total number of slots in the shared buffer.
    ///
    /// Must be at least `stack_count` so every stack starts with one slot.
    pub total_capacity: usize,

    /// Explicit initial capacity per stack, in stack order.
    ///
    /// `None` partitions `total_capacity` evenly: each stack gets
    /// `total_capacity / stack_count` slots and the remainder is handed out
    /// one slot at a time to the lowest stack ids.
    pub capacities: Option<Vec<usize>>,
}

impl ArenaConfig {
    /// Default number of logical stacks.
    pub const DEFAULT_STACK_COUNT: usize = 3;

    /// Default initial capacity of each stack.
    pub const DEFAULT_STACK_CAPACITY: usize = 3;

    /// Create an evenly partitioned config.
    pub fn new(stack_count: usize, total_capacity: usize) -> Self {
        Self {
            stack_count,
            total_capacity,
            capacities: None,
        }
    }

    /// Create a config with an explicit initial capacity for each stack.
    ///
    /// The stack count is the number of entries and the total capacity is
    /// their sum. A sum that overflows is recorded as `usize::MAX` and
    /// rejected by [`ArenaConfig::validate`].
    pub fn with_capacities(capacities: Vec<usize>) -> Self {
        let total_capacity = capacities
            .iter()
            .try_fold(0usize, |acc, &c| acc.checked_add(c))
            .unwrap_or(usize::MAX);
        Self {
            stack_count: capacities.len(),
            total_capacity,
            capacities: Some(capacities),
        }
    }

    /// Check that the parameters describe a usable arena.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.stack_count == 0 {
            return Err(invalid("stack_count must be at least 1".to_string()));
        }
        if self.total_capacity < self.stack_count {
            return Err(invalid(format!(
                "total_capacity ({}) is smaller than stack_count ({})",
                self.total_capacity, self.stack_count
            )));
        }
        if let Some(capacities) = &self.capacities {
            if capacities.len() != self.stack_count {
                return Err(invalid(format!(
                    "{} explicit capacities given for {} stacks",
                    capacities.len(),
                    self.stack_count
                )));
            }
            if let Some(pos) = capacities.iter().position(|&c| c == 0) {
                return Err(invalid(format!("stack {pos} has zero initial capacity")));
            }
            let sum = capacities
                .iter()
                .try_fold(0usize, |acc, &c| acc.checked_add(c))
                .ok_or_else(|| invalid("explicit capacities overflow usize".to_string()))?;
            if sum != self.total_capacity {
                return Err(invalid(format!(
                    "explicit capacities sum to {sum}, expected total_capacity {}",
                    self.total_capacity
                )));
            }
        }
        Ok(())
    }

    /// Initial capacity of each stack, in stack order.
    ///
    /// Only meaningful for a config that passes [`ArenaConfig::validate`].
    pub fn initial_capacities(&self) -> Vec<usize> {
        match &self.capacities {
            Some(capacities) => capacities.clone(),
            None => {
                let base = self.total_capacity / self.stack_count;
                let extra = self.total_capacity % self.stack_count;
                (0..self.stack_count)
                    .map(|i| if i < extra { base + 1 } else { base })
                    .collect()
            }
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_STACK_COUNT,
            Self::DEFAULT_STACK_COUNT * Self::DEFAULT_STACK_CAPACITY,
        )
    }
}

fn invalid(reason: String) -> ArenaError {
    ArenaError::InvalidConfig { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_stacks_of_three() {
        let config = ArenaConfig::default();
        assert_eq!(config.stack_count, 3);
        assert_eq!(config.total_capacity, 9);
        assert_eq!(config.initial_capacities(), vec![3, 3, 3]);
    }

    #[test]
    fn even_partition_hands_remainder_to_low_ids() {
        let config = ArenaConfig::new(3, 11);
        assert_eq!(config.initial_capacities(), vec![4, 4, 3]);
    }

    #[test]
    fn zero_stacks_rejected() {
        let result = ArenaConfig::new(0, 10).validate();
        assert!(matches!(result, Err(ArenaError::InvalidConfig { .. })));
    }

    #[test]
    fn capacity_below_stack_count_rejected() {
        let result = ArenaConfig::new(4, 3).validate();
        assert!(matches!(result, Err(ArenaError::InvalidConfig { .. })));
    }

    #[test]
    fn capacity_equal_to_stack_count_accepted() {
        assert!(ArenaConfig::new(4, 4).validate().is_ok());
    }

    #[test]
    fn explicit_capacities_preserved() {
        let config = ArenaConfig::with_capacities(vec![2, 5, 1]);
        assert!(config.validate().is_ok());
        assert_eq!(config.stack_count, 3);
        assert_eq!(config.total_capacity, 8);
        assert_eq!(config.initial_capacities(), vec![2, 5, 1]);
    }

    #[test]
    fn explicit_zero_capacity_rejected() {
        let result = ArenaConfig::with_capacities(vec![2, 0, 1]).validate();
        assert!(matches!(result, Err(ArenaError::InvalidConfig { .. })));
    }

    #[test]
    fn explicit_capacities_must_match_totals() {
        let mut config = ArenaConfig::with_capacities(vec![2, 2]);
        config.total_capacity = 5;
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));

        let mut config = ArenaConfig::with_capacities(vec![2, 2]);
        config.stack_count = 3;
        config.total_capacity = 4;
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn overflowing_capacities_rejected_not_panicking() {
        let config = ArenaConfig::with_capacities(vec![usize::MAX, 1]);
        assert_eq!(config.total_capacity, usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn even_partition_sums_to_total(
                stack_count in 1usize..32,
                extra in 0usize..256,
            ) {
                let total = stack_count + extra;
                let config = ArenaConfig::new(stack_count, total);
                prop_assert!(config.validate().is_ok());
                let caps = config.initial_capacities();
                prop_assert_eq!(caps.len(), stack_count);
                prop_assert_eq!(caps.iter().sum::<usize>(), total);
                let max = *caps.iter().max().unwrap();
                let min = *caps.iter().min().unwrap();
                prop_assert!(min >= 1);
                prop_assert!(max - min <= 1);
            }
        }
    }
}

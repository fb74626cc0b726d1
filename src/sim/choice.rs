//! Uniform choice from a small fixed set

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-empty, ordered set of candidate values.
///
/// Construction rejects an empty list, so `pick` can never fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
pub struct ChoiceSet<T: Copy> {
    values: Vec<T>,
}

/// Returned when building a `ChoiceSet` from an empty list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("choice set must contain at least one value")]
pub struct EmptyChoiceSet;

impl<T: Copy> ChoiceSet<T> {
    pub fn new(values: Vec<T>) -> Result<Self, EmptyChoiceSet> {
        if values.is_empty() {
            return Err(EmptyChoiceSet);
        }
        Ok(Self { values })
    }

    /// Build from a fixed-size table; an empty table fails to compile
    pub fn from_array<const N: usize>(values: [T; N]) -> Self {
        const { assert!(N > 0, "choice set must contain at least one value") };
        Self {
            values: values.to_vec(),
        }
    }

    /// Pick one value with uniform probability
    #[inline]
    pub fn pick<R: Rng>(&self, rng: &mut R) -> T {
        self.values[rng.random_range(0..self.values.len())]
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values.contains(value)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T: Copy> TryFrom<Vec<T>> for ChoiceSet<T> {
    type Error = EmptyChoiceSet;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl<T: Copy> From<ChoiceSet<T>> for Vec<T> {
    fn from(set: ChoiceSet<T>) -> Self {
        set.values
    }
}

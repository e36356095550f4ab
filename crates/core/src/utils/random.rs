//! Sources of uniform randomness for the cosmetic parts of the demo data.
//!
//! History drift, the listing `change` and the cap rate/occupancy bands all
//! draw from a [`RandomSource`] so tests can substitute a fixed sequence.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Yields uniform values in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;

    /// The next draw as a `Decimal`. Non-finite draws collapse to zero.
    fn next_decimal(&self) -> Decimal {
        Decimal::from_f64(self.next_unit()).unwrap_or(Decimal::ZERO)
    }
}

/// Non-seeded randomness backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible randomness from a fixed seed.
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next_unit(&self) -> f64 {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen::<f64>(),
            // A poisoned generator still holds a valid state
            Err(poisoned) => poisoned.into_inner().gen::<f64>(),
        }
    }
}

/// Cycles through a fixed list of values. An empty list always yields 0.5.
#[derive(Debug)]
pub struct FixedSequenceSource {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl FixedSequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// A source that always returns the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedSequenceSource {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[index % self.values.len()]
    }
}

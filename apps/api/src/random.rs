//! Injectable randomness for the mock endpoints.
//!
//! Confidence scores, phone numbers and experience years are placeholders with
//! no functional contract. They are drawn through `RandomSource` so a fixed
//! seed (config `RNG_SEED`, or tests) makes responses reproducible.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource: Send + Sync {
    /// Uniform draw from `low..=high`. Returns `low` when `high < low`.
    fn between(&self, low: u32, high: u32) -> u32;
}

/// Process-wide thread RNG. Default when no seed is configured.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn between(&self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Deterministic RNG for reproducible responses.
pub struct SeededRandom(Mutex<StdRng>);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl RandomSource for SeededRandom {
    fn between(&self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let mut rng = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(low..=high)
    }
}

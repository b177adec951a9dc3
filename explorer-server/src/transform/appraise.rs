//! Ratings and accessibility for transformed places.
//!
//! The raw exports carry neither a rating nor accessibility information, so
//! both are generated. Generation is seeded, so re-running the transform on
//! the same input produces the same documents.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lowest generated rating.
pub const MIN_RATING: f64 = 3.5;

/// Highest generated rating.
pub const MAX_RATING: f64 = 5.0;

/// Source of ratings and accessibility flags.
pub trait Appraiser {
    /// Rating for the next place.
    fn rating(&mut self) -> f64;

    /// Accessibility flag for the next place.
    fn accessible(&mut self) -> bool;
}

/// Deterministic pseudo-random appraiser.
#[derive(Debug, Clone)]
pub struct SeededAppraiser {
    rng: ChaCha8Rng,
}

impl SeededAppraiser {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Appraiser for SeededAppraiser {
    /// Uniform in `[3.5, 5.0]`, rounded to one decimal place.
    fn rating(&mut self) -> f64 {
        let raw: f64 = self.rng.gen_range(MIN_RATING..=MAX_RATING);
        (raw * 10.0).round() / 10.0
    }

    /// Accessible with probability one half.
    fn accessible(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

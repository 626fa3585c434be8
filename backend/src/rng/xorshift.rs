//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Reproducing a walk table exactly across runs
//! - Testing (golden-value assertions against a pinned seed)
//! - Verifying the fixed draw order of the step rule

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use walk_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(123);
/// let roll = rng.roll_die(); // uniform in [1, 6]
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is normalized to 1: xorshift state must never be zero.
    ///
    /// # Example
    /// ```
    /// use walk_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(123);
    /// assert_eq!(rng.get_state(), 123);
    /// ```
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use walk_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(123);
    /// let value = rng.range(0, 100); // [0, 100)
    /// assert!(value >= 0 && value < 100);
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Roll a six-sided die: uniform integer in [1, 6]
    ///
    /// One die roll consumes exactly one draw from the generator, so the
    /// draw order of a simulation is fully determined by its seed.
    ///
    /// # Example
    /// ```
    /// use walk_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(123);
    /// assert_eq!(rng.roll_die(), 4);
    /// ```
    pub fn roll_die(&mut self) -> i64 {
        self.range(1, 7)
    }

    /// Get current RNG state (for replay/verification)
    ///
    /// # Example
    /// ```
    /// use walk_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(123);
    /// rng.roll_die();
    /// let state = rng.get_state();
    ///
    /// // A new RNG seeded with this state continues the same sequence
    /// let rng2 = RngManager::new(state);
    /// assert_eq!(rng2.get_state(), state);
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

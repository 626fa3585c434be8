//! Walk model
//!
//! Represents one simulated trajectory: an ordered sequence of cumulative
//! positions over discrete time steps. A walk always begins at the origin
//! (position 0), and element `i` is the position after `i` steps.
//!
//! CRITICAL: Positions are never negative. The step rule clamps downward
//! moves at 0; the model rejects negative positions anyway so the invariant
//! holds no matter who builds the walk.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building a walk
#[derive(Debug, Error, PartialEq)]
pub enum WalkError {
    #[error("Position {position} is negative; walk positions never go below 0")]
    NegativePosition { position: i64 },
}

/// One random-walk trajectory
///
/// # Example
/// ```
/// use walk_simulator_core_rs::Walk;
///
/// let mut walk = Walk::start();
/// walk.record(1).unwrap();
/// walk.record(2).unwrap();
///
/// assert_eq!(walk.len(), 3); // origin + 2 steps
/// assert_eq!(walk.final_position(), 2);
/// assert_eq!(walk.positions(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walk {
    /// Cumulative positions, beginning with the origin
    positions: Vec<i64>,
}

impl Walk {
    /// Create a walk containing only the origin position 0
    pub fn start() -> Self {
        Self { positions: vec![0] }
    }

    /// Append the position reached after the next step
    ///
    /// # Returns
    /// - `Ok(())` if the position was recorded
    /// - `Err(WalkError::NegativePosition)` if the position is negative
    pub fn record(&mut self, position: i64) -> Result<(), WalkError> {
        if position < 0 {
            return Err(WalkError::NegativePosition { position });
        }
        self.positions.push(position);
        Ok(())
    }

    /// All positions, origin first
    pub fn positions(&self) -> &[i64] {
        &self.positions
    }

    /// Number of recorded positions (steps taken + 1)
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A walk is never empty: it always contains at least the origin
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The most recently recorded position
    pub fn final_position(&self) -> i64 {
        self.positions.last().copied().unwrap_or(0)
    }

    /// Position after `t` steps, if the walk is that long
    pub fn get(&self, t: usize) -> Option<i64> {
        self.positions.get(t).copied()
    }
}

impl Default for Walk {
    fn default() -> Self {
        Self::start()
    }
}

//! Step rule for the random walk.
//!
//! One step of a walk is driven by a six-sided die roll:
//!
//! 1. Roll in {1, 2}: move down by 1, clamped so the position never goes
//!    below 0
//! 2. Roll in {3, 4, 5}: move up by 1
//! 3. Roll of 6: draw a second die roll `b` immediately and move up by `b`
//!
//! # Key Principles
//!
//! 1. **Determinism**: all draws go through [`RngManager`]; same seed and
//!    same call order → same moves
//! 2. **Fixed draw order**: a roll of 6 consumes its bonus draw before any
//!    other randomness is consumed. Reordering draws changes every
//!    subsequent walk, so this ordering is normative.
//! 3. **Totality**: the rule is defined for every die roll and every
//!    non-negative position; there is no failing case

use serde::{Deserialize, Serialize};

use crate::rng::RngManager;

/// Largest die roll that moves the walk down
const DOWN_MAX_ROLL: i64 = 2;

/// Largest die roll that moves the walk up by one
const UP_MAX_ROLL: i64 = 5;

/// The movement selected by one die roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepMove {
    /// Move down by 1, clamped at 0
    Down,

    /// Move up by 1
    Up,

    /// Move up by the bonus amount (second die roll after a 6)
    Surge {
        /// Bonus movement in [1, 6]
        bonus: i64,
    },
}

/// Draw the next movement from the generator
///
/// Consumes one draw for the die, plus an immediate second draw for the
/// bonus when the die shows 6.
///
/// # Example
/// ```
/// use walk_simulator_core_rs::{RngManager, StepMove};
/// use walk_simulator_core_rs::steps::draw_move;
///
/// let mut rng = RngManager::new(42);
/// assert_eq!(draw_move(&mut rng), StepMove::Down); // seed 42 opens with a 1
/// ```
pub fn draw_move(rng: &mut RngManager) -> StepMove {
    let roll = rng.roll_die();
    if roll <= DOWN_MAX_ROLL {
        StepMove::Down
    } else if roll <= UP_MAX_ROLL {
        StepMove::Up
    } else {
        StepMove::Surge {
            bonus: rng.roll_die(),
        }
    }
}

/// Apply a movement to a position
///
/// Pure arithmetic; the only subtlety is the clamp at 0 for downward moves.
///
/// # Example
/// ```
/// use walk_simulator_core_rs::StepMove;
/// use walk_simulator_core_rs::steps::apply;
///
/// assert_eq!(apply(0, StepMove::Down), 0); // clamp engages at the origin
/// assert_eq!(apply(3, StepMove::Down), 2);
/// assert_eq!(apply(3, StepMove::Up), 4);
/// assert_eq!(apply(0, StepMove::Surge { bonus: 5 }), 5);
/// ```
pub fn apply(position: i64, mv: StepMove) -> i64 {
    match mv {
        StepMove::Down => (position - 1).max(0),
        StepMove::Up => position + 1,
        StepMove::Surge { bonus } => position + bonus,
    }
}

/// Draw the next movement and apply it to a position
pub fn advance(position: i64, rng: &mut RngManager) -> i64 {
    apply(position, draw_move(rng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_clamps_at_origin() {
        assert_eq!(apply(0, StepMove::Down), 0);
        assert_eq!(apply(1, StepMove::Down), 0);
        assert_eq!(apply(2, StepMove::Down), 1);
    }

    #[test]
    fn test_apply_surge_from_origin_lands_on_bonus() {
        for bonus in 1..=6 {
            assert_eq!(apply(0, StepMove::Surge { bonus }), bonus);
        }
    }

    #[test]
    fn test_draw_move_deterministic() {
        let mut rng1 = RngManager::new(777);
        let mut rng2 = RngManager::new(777);

        for _ in 0..200 {
            assert_eq!(draw_move(&mut rng1), draw_move(&mut rng2));
        }
    }

    #[test]
    fn test_surge_consumes_second_draw() {
        // Seed 123 opens with rolls 4, 5, 3, 1, 2, 5, 6, 6: the first six
        // draws are single-draw moves, then a 6 whose bonus consumes the
        // following 6 in the same call.
        let mut rng = RngManager::new(123);
        let moves: Vec<StepMove> = (0..7).map(|_| draw_move(&mut rng)).collect();

        assert_eq!(
            moves,
            vec![
                StepMove::Up,
                StepMove::Up,
                StepMove::Up,
                StepMove::Down,
                StepMove::Down,
                StepMove::Up,
                StepMove::Surge { bonus: 6 },
            ]
        );
    }

    #[test]
    fn test_advance_never_negative() {
        let mut rng = RngManager::new(9);
        let mut position = 0;
        for _ in 0..10_000 {
            position = advance(position, &mut rng);
            assert!(position >= 0, "position {} went negative", position);
        }
    }
}

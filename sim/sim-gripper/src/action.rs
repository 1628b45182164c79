//! Action encodings for gripper control.
//!
//! An [`ActionMap`] converts the control input a policy or teleop source
//! produces into the two finger-joint targets the actuation layer consumes.
//! The encoding is selected at descriptor construction; there is no dynamic
//! dispatch on the per-step path.

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GripperError, Result};

/// How a control input maps onto the two finger-joint targets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActionMap {
    /// Single normalized input driving both fingers symmetrically.
    ///
    /// Only the sign of the input is used: -1 = open intent, +1 = close
    /// intent, 0 = hold. Each step moves the stored targets by `rate`
    /// toward the commanded extreme, so this is an integrator rather than
    /// a stateless transform; repeated commands accumulate until the
    /// targets saturate at the [-1, 1] bounds.
    SignRate {
        /// Per-step maximum joint-target delta.
        rate: f64,
    },

    /// Two raw per-joint targets, clamped to [-1, 1] and stored unchanged.
    Passthrough,
}

impl ActionMap {
    /// Control degrees of freedom this encoding accepts.
    #[must_use]
    pub fn dof(&self) -> usize {
        match self {
            Self::SignRate { .. } => 1,
            Self::Passthrough => 2,
        }
    }

    /// Apply one control step to `current`, returning the new joint targets.
    ///
    /// # Errors
    ///
    /// Returns [`GripperError::InvalidActionDimension`] if `action` does
    /// not have exactly [`dof`](Self::dof) elements. `current` is not
    /// consumed on rejection.
    pub fn apply(&self, action: &[f64], current: Vector2<f64>) -> Result<Vector2<f64>> {
        if action.len() != self.dof() {
            return Err(GripperError::invalid_action_dimension(
                self.dof(),
                action.len(),
            ));
        }

        let next = match *self {
            Self::SignRate { rate } => {
                let s = sign(action[0]);
                current + Vector2::new(-1.0, 1.0) * (rate * s)
            }
            Self::Passthrough => Vector2::new(action[0], action[1]),
        };

        Ok(Vector2::new(
            next.x.clamp(-1.0, 1.0),
            next.y.clamp(-1.0, 1.0),
        ))
    }
}

impl Default for ActionMap {
    fn default() -> Self {
        Self::SignRate { rate: 0.01 }
    }
}

/// Sign with `sign(0) = 0`.
///
/// `f64::signum` maps 0.0 to 1.0, which would close the gripper on a hold
/// command. Non-finite input also holds, so the stored targets stay finite.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

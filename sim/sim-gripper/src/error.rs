//! Error types for gripper descriptors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when constructing or driving a gripper descriptor.
#[derive(Debug, Error)]
pub enum GripperError {
    /// Action vector length does not match the descriptor's control DOF.
    ///
    /// This is a configuration error in the caller; the step that produced
    /// it cannot be retried with the same action vector.
    #[error("invalid action dimension: expected {expected}, got {actual}")]
    InvalidActionDimension {
        /// Declared control degrees of freedom.
        expected: usize,
        /// Length of the supplied action vector.
        actual: usize,
    },

    /// Model resource could not be found under the asset root.
    #[error("gripper model not found: {}", path.display())]
    ModelNotFound {
        /// The resolved path that was checked.
        path: PathBuf,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GripperError {
    /// Create an invalid action dimension error.
    pub fn invalid_action_dimension(expected: usize, actual: usize) -> Self {
        Self::InvalidActionDimension { expected, actual }
    }

    /// Create a model not found error.
    pub fn model_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ModelNotFound { path: path.into() }
    }
}

/// Result type for gripper operations.
pub type Result<T> = std::result::Result<T, GripperError>;

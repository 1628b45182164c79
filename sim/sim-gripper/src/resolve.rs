//! Model-resource path resolution.
//!
//! A descriptor references its model by a path relative to an asset root;
//! loading the file is the model loader's job. Resolution only joins the
//! path and verifies the file exists, so a broken reference surfaces at
//! setup time instead of inside the loader.

use std::path::{Path, PathBuf};

use crate::error::{GripperError, Result};

/// Resolve a relative model resource against an asset root.
///
/// # Errors
///
/// Returns [`GripperError::ModelNotFound`] if the joined path does not
/// name an existing file.
pub fn resolve_model_path(root: impl AsRef<Path>, model: impl AsRef<Path>) -> Result<PathBuf> {
    let full = root.as_ref().join(model.as_ref());
    if !full.is_file() {
        return Err(GripperError::model_not_found(full));
    }
    tracing::debug!("resolved gripper model: {}", full.display());
    Ok(full)
}

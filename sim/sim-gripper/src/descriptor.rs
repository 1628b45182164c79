//! Gripper descriptor: model reference, defaults, and the action transform.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::action::ActionMap;
use crate::error::Result;
use crate::resolve::resolve_model_path;
use crate::types::{GeomGroup, GripperId};

/// Describes one two-finger parallel gripper for the simulation framework.
///
/// The descriptor supplies static metadata — model-file reference, initial
/// joint pose, named collision-geometry groups — plus the per-step action
/// transform. Each instance owns its own [`current_action`] state; the step
/// loop calls [`map_action`] once per control step and hands the returned
/// targets to the actuation layer.
///
/// The framework reads [`init_qpos`] at simulation reset, the geometry
/// groups at contact/sensor setup, and [`dof`] when building the action
/// space.
///
/// [`current_action`]: Self::current_action
/// [`map_action`]: Self::map_action
/// [`init_qpos`]: Self::init_qpos
/// [`dof`]: Self::dof
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GripperDescriptor {
    /// Instance identifier.
    id: GripperId,

    /// Model resource, relative to the asset root.
    model: PathBuf,

    /// Initial joint positions (symmetric open pose).
    init_qpos: Vector2<f64>,

    /// Collision-shape names per semantic group.
    geom_groups: HashMap<GeomGroup, Vec<String>>,

    /// Action encoding selected at construction.
    action_map: ActionMap,

    /// Last commanded per-joint targets, each in [-1, 1].
    current_action: Vector2<f64>,
}

impl GripperDescriptor {
    /// Create a descriptor for the given model resource.
    ///
    /// Starts with ID 0, a zero initial pose, no geometry groups, and the
    /// default [`ActionMap`]. Presets fill these in for concrete hardware.
    #[must_use]
    pub fn new(model: impl Into<PathBuf>) -> Self {
        Self {
            id: GripperId::default(),
            model: model.into(),
            init_qpos: Vector2::zeros(),
            geom_groups: HashMap::new(),
            action_map: ActionMap::default(),
            current_action: Vector2::zeros(),
        }
    }

    /// Set the instance identifier.
    #[must_use]
    pub fn with_id(mut self, id: GripperId) -> Self {
        self.id = id;
        self
    }

    /// Set the initial joint positions.
    #[must_use]
    pub fn with_init_qpos(mut self, qpos: Vector2<f64>) -> Self {
        self.init_qpos = qpos;
        self
    }

    /// Register the collision-shape names of a geometry group.
    ///
    /// Replaces any names previously registered for `group`. Order is
    /// preserved; names must match the model file verbatim.
    #[must_use]
    pub fn with_geom_group<I, S>(mut self, group: GeomGroup, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.geom_groups
            .insert(group, names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the action encoding.
    #[must_use]
    pub fn with_action_map(mut self, action_map: ActionMap) -> Self {
        self.action_map = action_map;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Instance identifier.
    #[must_use]
    pub fn id(&self) -> GripperId {
        self.id
    }

    /// Naming prefix for per-instance element names (`gripper0_`, ...).
    #[must_use]
    pub fn naming_prefix(&self) -> String {
        self.id.prefix()
    }

    /// Model resource, relative to the asset root.
    #[must_use]
    pub fn model(&self) -> &Path {
        &self.model
    }

    /// Initial joint positions, read by the framework at simulation reset.
    #[must_use]
    pub fn init_qpos(&self) -> Vector2<f64> {
        self.init_qpos
    }

    /// Control degrees of freedom of the selected action encoding.
    #[must_use]
    pub fn dof(&self) -> usize {
        self.action_map.dof()
    }

    /// Per-step maximum joint-target delta, if the encoding has one.
    #[must_use]
    pub fn speed(&self) -> Option<f64> {
        match self.action_map {
            ActionMap::SignRate { rate } => Some(rate),
            ActionMap::Passthrough => None,
        }
    }

    /// The selected action encoding.
    #[must_use]
    pub fn action_map(&self) -> ActionMap {
        self.action_map
    }

    /// Last commanded per-joint targets.
    #[must_use]
    pub fn current_action(&self) -> Vector2<f64> {
        self.current_action
    }

    /// Collision-shape names registered for a geometry group.
    ///
    /// Returns an empty slice for groups the model does not define.
    #[must_use]
    pub fn geoms(&self, group: GeomGroup) -> &[String] {
        self.geom_groups.get(&group).map_or(&[], Vec::as_slice)
    }

    /// Collision-shape names for a group with the instance prefix applied.
    ///
    /// Contact queries address elements of a spawned model by their
    /// instance-scoped names (`gripper0_finger1_collision`, ...).
    #[must_use]
    pub fn prefixed_geoms(&self, group: GeomGroup) -> Vec<String> {
        let prefix = self.id.prefix();
        self.geoms(group)
            .iter()
            .map(|name| format!("{prefix}{name}"))
            .collect()
    }

    /// Resolve the model resource against an asset root.
    ///
    /// # Errors
    ///
    /// Returns [`GripperError::ModelNotFound`] if the file does not exist;
    /// loading the file is the model loader's job.
    ///
    /// [`GripperError::ModelNotFound`]: crate::GripperError::ModelNotFound
    pub fn resolved_model_path(&self, asset_root: impl AsRef<Path>) -> Result<PathBuf> {
        resolve_model_path(asset_root, &self.model)
    }

    // ========================================================================
    // Control
    // ========================================================================

    /// Map a control input onto the two finger-joint targets.
    ///
    /// Applies the descriptor's [`ActionMap`] to the stored targets, stores
    /// the result, and returns it. For the sign-rate encoding this is an
    /// integrator: successive calls with the same sign accumulate toward
    /// the [-1, 1] bounds, and a zero input holds position.
    ///
    /// # Errors
    ///
    /// Returns [`GripperError::InvalidActionDimension`] if `action` does
    /// not have exactly [`dof`](Self::dof) elements; the stored targets
    /// are left untouched.
    ///
    /// [`GripperError::InvalidActionDimension`]: crate::GripperError::InvalidActionDimension
    pub fn map_action(&mut self, action: &[f64]) -> Result<Vector2<f64>> {
        self.current_action = self.action_map.apply(action, self.current_action)?;
        Ok(self.current_action)
    }

    /// Reset the stored targets to zero, as at environment reset.
    pub fn reset(&mut self) {
        tracing::debug!("{}: reset current action", self.id);
        self.current_action = Vector2::zeros();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn one_dof_descriptor() -> GripperDescriptor {
        GripperDescriptor::new("grippers/test.xml")
            .with_action_map(ActionMap::SignRate { rate: 0.01 })
    }

    #[test]
    fn test_defaults() {
        let gripper = GripperDescriptor::new("grippers/test.xml");
        assert_eq!(gripper.id().raw(), 0);
        assert_eq!(gripper.model(), Path::new("grippers/test.xml"));
        assert_eq!(gripper.init_qpos(), Vector2::zeros());
        assert_eq!(gripper.current_action(), Vector2::zeros());
        assert!(gripper.geoms(GeomGroup::LeftFinger).is_empty());
    }

    #[test]
    fn test_close_steps_accumulate() {
        let mut gripper = one_dof_descriptor();

        let first = gripper.map_action(&[1.0]).unwrap();
        assert_relative_eq!(first.x, -0.01, epsilon = 1e-12);
        assert_relative_eq!(first.y, 0.01, epsilon = 1e-12);

        let second = gripper.map_action(&[1.0]).unwrap();
        assert_relative_eq!(second.x, -0.02, epsilon = 1e-12);
        assert_relative_eq!(second.y, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_close_saturates() {
        let mut gripper = one_dof_descriptor();
        for _ in 0..200 {
            gripper.map_action(&[1.0]).unwrap();
        }
        assert_eq!(gripper.current_action(), Vector2::new(-1.0, 1.0));

        // Idempotent once saturated.
        let again = gripper.map_action(&[1.0]).unwrap();
        assert_eq!(again, Vector2::new(-1.0, 1.0));
    }

    #[test]
    fn test_open_from_saturated() {
        let mut gripper = one_dof_descriptor();
        for _ in 0..200 {
            gripper.map_action(&[1.0]).unwrap();
        }

        let opened = gripper.map_action(&[-1.0]).unwrap();
        assert_relative_eq!(opened.x, -0.99, epsilon = 1e-12);
        assert_relative_eq!(opened.y, 0.99, epsilon = 1e-12);
    }

    #[test]
    fn test_open_saturates_symmetric() {
        let mut gripper = one_dof_descriptor();
        for _ in 0..200 {
            gripper.map_action(&[-1.0]).unwrap();
        }
        assert_eq!(gripper.current_action(), Vector2::new(1.0, -1.0));
    }

    #[test]
    fn test_rejected_action_leaves_state_untouched() {
        let mut gripper = one_dof_descriptor();
        gripper.map_action(&[1.0]).unwrap();
        let before = gripper.current_action();

        assert!(gripper.map_action(&[]).is_err());
        assert!(gripper.map_action(&[1.0, -1.0]).is_err());
        assert_eq!(gripper.current_action(), before);
    }

    #[test]
    fn test_reset() {
        let mut gripper = one_dof_descriptor();
        for _ in 0..10 {
            gripper.map_action(&[1.0]).unwrap();
        }
        gripper.reset();
        assert_eq!(gripper.current_action(), Vector2::zeros());
    }

    #[test]
    fn test_geom_group_registration() {
        let gripper = GripperDescriptor::new("grippers/test.xml")
            .with_geom_group(GeomGroup::LeftFinger, ["a_collision", "b_collision"]);

        assert_eq!(
            gripper.geoms(GeomGroup::LeftFinger),
            ["a_collision", "b_collision"]
        );
        assert!(gripper.geoms(GeomGroup::RightFinger).is_empty());
    }

    #[test]
    fn test_prefixed_geoms() {
        let gripper = GripperDescriptor::new("grippers/test.xml")
            .with_id(GripperId::new(2))
            .with_geom_group(GeomGroup::LeftFingerpad, ["pad_collision"]);

        assert_eq!(
            gripper.prefixed_geoms(GeomGroup::LeftFingerpad),
            ["gripper2_pad_collision"]
        );
    }

    #[test]
    fn test_resolved_model_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let gripper = GripperDescriptor::new("grippers/nowhere.xml");
        assert!(gripper.resolved_model_path(dir.path()).is_err());
    }
}

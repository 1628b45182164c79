//! Named gripper presets.
//!
//! Factory constructors for concrete hardware. A preset fixes the model
//! resource, initial pose, geometry groups, and action encoding; callers
//! only choose the instance ID.

use nalgebra::Vector2;

use crate::action::ActionMap;
use crate::descriptor::GripperDescriptor;
use crate::types::{GeomGroup, GripperId};

impl GripperDescriptor {
    /// OnRobot RG2 two-finger gripper.
    ///
    /// Single normalized control input: -1 = open, +1 = close, integrated
    /// at 0.01 per step.
    ///
    /// The model XML is an unofficial, modified third-party asset; the geom
    /// and group names below are contract values matching that file, not
    /// verified against any official OnRobot specification.
    #[must_use]
    pub fn onrobot_rg2(id: GripperId) -> Self {
        Self::new("grippers/onrobot_rg2_gripper.xml")
            .with_id(id)
            .with_init_qpos(Vector2::new(0.020833, -0.020833))
            .with_geom_group(
                GeomGroup::LeftFinger,
                ["finger1_collision", "finger1_pad_collision"],
            )
            .with_geom_group(
                GeomGroup::RightFinger,
                ["finger2_collision", "finger2_pad_collision"],
            )
            .with_geom_group(GeomGroup::LeftFingerpad, ["finger1_pad_collision"])
            .with_geom_group(GeomGroup::RightFingerpad, ["finger2_pad_collision"])
            .with_action_map(ActionMap::SignRate { rate: 0.01 })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rg2_contract_values() {
        let gripper = GripperDescriptor::onrobot_rg2(GripperId::new(0));

        assert_eq!(gripper.dof(), 1);
        assert_eq!(gripper.speed(), Some(0.01));
        assert_relative_eq!(gripper.init_qpos().x, 0.020833, epsilon = 1e-12);
        assert_relative_eq!(gripper.init_qpos().y, -0.020833, epsilon = 1e-12);
        assert!(gripper
            .model()
            .ends_with("grippers/onrobot_rg2_gripper.xml"));
    }

    #[test]
    fn test_rg2_geom_groups() {
        let gripper = GripperDescriptor::onrobot_rg2(GripperId::new(0));

        assert_eq!(
            gripper.geoms(GeomGroup::LeftFinger),
            ["finger1_collision", "finger1_pad_collision"]
        );
        assert_eq!(
            gripper.geoms(GeomGroup::RightFinger),
            ["finger2_collision", "finger2_pad_collision"]
        );
        assert_eq!(
            gripper.geoms(GeomGroup::LeftFingerpad),
            ["finger1_pad_collision"]
        );
        assert_eq!(
            gripper.geoms(GeomGroup::RightFingerpad),
            ["finger2_pad_collision"]
        );
    }

    #[test]
    fn test_rg2_close_scenario() {
        let mut gripper = GripperDescriptor::onrobot_rg2(GripperId::new(1));

        let targets = gripper.map_action(&[1.0]).unwrap();
        assert_relative_eq!(targets.x, -0.01, epsilon = 1e-12);
        assert_relative_eq!(targets.y, 0.01, epsilon = 1e-12);

        for _ in 0..199 {
            gripper.map_action(&[1.0]).unwrap();
        }
        assert_eq!(gripper.current_action(), nalgebra::Vector2::new(-1.0, 1.0));
    }
}

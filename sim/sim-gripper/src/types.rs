//! Core identifier and geometry-group types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Gripper Identifier
// ============================================================================

/// Unique identifier for a gripper instance.
///
/// Disambiguates multiple grippers of the same kind in one scene. The ID
/// also derives the naming prefix applied to per-instance element names
/// in the loaded model (`gripper0_`, `gripper1_`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GripperId(pub u64);

impl GripperId {
    /// Create a new gripper ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Naming prefix for per-instance element names in the model.
    #[must_use]
    pub fn prefix(self) -> String {
        format!("gripper{}_", self.0)
    }
}

impl From<u64> for GripperId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GripperId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gripper({})", self.0)
    }
}

// ============================================================================
// Geometry Groups
// ============================================================================

/// Semantic collision-geometry group of a two-finger gripper.
///
/// Groups name sets of collision shapes in the model file for contact and
/// sensor queries: "did the left fingerpad touch the object?" resolves to
/// the shapes registered under [`GeomGroup::LeftFingerpad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeomGroup {
    /// Whole left finger.
    LeftFinger,
    /// Whole right finger.
    RightFinger,
    /// Contact pad of the left finger.
    LeftFingerpad,
    /// Contact pad of the right finger.
    RightFingerpad,
}

impl GeomGroup {
    /// All groups, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::LeftFinger,
        Self::RightFinger,
        Self::LeftFingerpad,
        Self::RightFingerpad,
    ];

    /// Parse a group from its name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "left_finger" => Some(Self::LeftFinger),
            "right_finger" => Some(Self::RightFinger),
            "left_fingerpad" => Some(Self::LeftFingerpad),
            "right_fingerpad" => Some(Self::RightFingerpad),
            _ => None,
        }
    }

    /// Get the name of this group.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftFinger => "left_finger",
            Self::RightFinger => "right_finger",
            Self::LeftFingerpad => "left_fingerpad",
            Self::RightFingerpad => "right_fingerpad",
        }
    }
}

impl std::fmt::Display for GeomGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! End-effector descriptors for physics simulation.
//!
//! This crate describes robotic end-effectors — currently two-finger
//! parallel grippers — for use inside a physics-based simulation framework:
//!
//! - Model-file reference, resolved against an asset root
//! - Initial joint pose, read at simulation reset
//! - Named collision-geometry groups for contact/sensor queries
//! - An action encoding mapping control input to finger-joint targets
//!
//! The physics itself (stepping, contact resolution, rendering) lives in
//! the simulation engine; a descriptor only supplies static metadata and
//! the per-step action transform the actuation layer consumes.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be
//! used in:
//!
//! - Headless training environments
//! - Hardware control systems
//! - Analysis tools
//!
//! # Example
//!
//! ```
//! use sim_gripper::{GripperDescriptor, GripperId};
//!
//! let mut gripper = GripperDescriptor::onrobot_rg2(GripperId::new(0));
//! assert_eq!(gripper.dof(), 1);
//!
//! // +1 = close intent: targets integrate toward the closed pose.
//! let targets = gripper.map_action(&[1.0]).expect("1-DOF action");
//! assert!((targets.x + 0.01).abs() < 1e-12);
//! assert!((targets.y - 0.01).abs() < 1e-12);
//!
//! // A zero input holds position.
//! let held = gripper.map_action(&[0.0]).expect("1-DOF action");
//! assert_eq!(held, targets);
//! ```
//!
//! # Action Encodings
//!
//! The encoding is a tagged variant selected at construction:
//!
//! - [`ActionMap::SignRate`] — one normalized input; its sign drives both
//!   fingers symmetrically at a fixed rate per step (-1 = open, +1 = close,
//!   0 = hold), saturating at the [-1, 1] bounds.
//! - [`ActionMap::Passthrough`] — two raw per-joint targets, clamped and
//!   stored unchanged.

#![doc(html_root_url = "https://docs.rs/sim-gripper/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::should_implement_trait
)]

mod action;
mod descriptor;
mod error;
mod presets;
mod resolve;
mod types;

pub use action::ActionMap;
pub use descriptor::GripperDescriptor;
pub use error::{GripperError, Result};
pub use resolve::resolve_model_path;
pub use types::{GeomGroup, GripperId};

//! Steps the RG2 action integrator closed, then back open.
//!
//! Run with: `cargo run --example close_loop`

use sim_gripper::{GripperDescriptor, GripperId};

fn main() -> sim_gripper::Result<()> {
    let mut gripper = GripperDescriptor::onrobot_rg2(GripperId::new(0));
    println!("{}: dof = {}", gripper.id(), gripper.dof());

    println!("closing:");
    for step in 0..120 {
        let targets = gripper.map_action(&[1.0])?;
        if step % 30 == 0 {
            println!("  step {step:3}: targets = [{:+.2}, {:+.2}]", targets.x, targets.y);
        }
    }

    println!("opening:");
    for step in 0..120 {
        let targets = gripper.map_action(&[-1.0])?;
        if step % 30 == 0 {
            println!("  step {step:3}: targets = [{:+.2}, {:+.2}]", targets.x, targets.y);
        }
    }

    Ok(())
}

//! Movement integration
//!
//! Velocities are already in units per tick and the frame rate is fixed, so
//! a step is just `position += velocity`. No delta-time scaling.

use super::components::Body;

/// Advance one body by one tick
pub fn integrate<B: Body + ?Sized>(body: &mut B) {
    let motion = body.motion_mut();
    motion.position += motion.velocity;
}

/// Advance every body in a collection by one tick
pub fn integrate_all<B: Body>(bodies: &mut [B]) {
    for body in bodies {
        integrate(body);
    }
}

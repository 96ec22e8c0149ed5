//! The semi-implicit Euler integrator: updates velocity first, then
//! position/rotation using the updated velocity, then clears the
//! accumulators it consumed.

use crate::motion::dynamics::Dynamics;
use crate::motion::forces::{clear_forces, clear_torque};
use crate::vector::{Vector2, Vector2Ext};

/// Advance both the linear and angular state of `dyn_` by `dt`.
pub fn integrate(dyn_: &mut Dynamics, position: Vector2, rotation: f64, dt: f64) -> (Vector2, f64) {
    (
        integrate_linear(dyn_, position, dt),
        integrate_angular(dyn_, rotation, dt),
    )
}

/// Semi-implicit Euler step for position: `vel += (sum_forces * inv_mass) *
/// dt; pos += vel * dt`. A static body (`inverse_mass == 0`) is returned
/// unchanged and its accumulator is left alone.
pub fn integrate_linear(dyn_: &mut Dynamics, pos: Vector2, dt: f64) -> Vector2 {
    if dyn_.inverse_mass == 0.0 {
        return pos;
    }
    dyn_.accel = dyn_.sum_forces.scale(dyn_.inverse_mass);
    dyn_.vel = dyn_.vel + dyn_.accel.scale(dt);
    let new_pos = pos + dyn_.vel.scale(dt);
    clear_forces(dyn_);
    new_pos
}

/// Semi-implicit Euler step for rotation, mirroring [`integrate_linear`].
pub fn integrate_angular(dyn_: &mut Dynamics, rotation: f64, dt: f64) -> f64 {
    if dyn_.inverse_angular_mass == 0.0 {
        return rotation;
    }
    dyn_.angular_accel = dyn_.sum_torque * dyn_.inverse_angular_mass;
    dyn_.angular_vel += dyn_.angular_accel * dt;
    let new_rotation = rotation + dyn_.angular_vel * dt;
    clear_torque(dyn_);
    new_rotation
}

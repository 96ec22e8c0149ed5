//! Linear + angular impulse application, shared by both resolvers.

use crate::motion::dynamics::Dynamics;
use crate::vector::{Vector2, Vector2Ext};

/// Apply `linear_impulse` at contact arm `torque_arm` to `dyn_`.
///
/// Updates velocity by `impulse * inverse_mass` and angular velocity by
/// `(torque_arm x impulse) * inverse_angular_mass`.
pub fn apply_impulse(dyn_: &mut Dynamics, linear_impulse: Vector2, torque_arm: Vector2) {
    let linear_impulse_scaled = linear_impulse.scale(dyn_.inverse_mass);
    dyn_.vel = dyn_.vel + linear_impulse_scaled;
    let angular_impulse_scaled = torque_arm.cross_product(linear_impulse) * dyn_.inverse_angular_mass;
    dyn_.angular_vel += angular_impulse_scaled;
}

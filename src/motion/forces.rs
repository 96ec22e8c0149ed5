//! Force/torque accumulation and the stock force generators.

use crate::motion::dynamics::Dynamics;
use crate::vector::{Vector2, Vector2Ext};

/// Add `force` to a body's accumulated forces for this step.
pub fn add_force(dyn_: &mut Dynamics, force: Vector2) {
    dyn_.sum_forces = dyn_.sum_forces + force;
}

/// Zero a body's accumulated forces.
pub fn clear_forces(dyn_: &mut Dynamics) {
    dyn_.sum_forces = Vector2::new(0.0, 0.0);
}

/// Add `torque` to a body's accumulated torque for this step.
pub fn add_torque(dyn_: &mut Dynamics, torque: f64) {
    dyn_.sum_torque += torque;
}

/// Zero a body's accumulated torque.
pub fn clear_torque(dyn_: &mut Dynamics) {
    dyn_.sum_torque = 0.0;
}

/// Stock force generators.
pub mod generator {
    use super::*;

    /// A downward gravity force in pixel units: `mass * gravity * pixels_per_meter`.
    pub fn new_gravity_force(mass: f64, gravity: f64, pixels_per_meter: f64) -> Vector2 {
        Vector2::new(0.0, mass * gravity * pixels_per_meter)
    }

    /// Coulomb friction opposing `velocity`, scaled by `friction_coefficient`.
    ///
    /// The source carries two conflicting implementations of this function
    /// (see `SPEC_FULL.md` SS9); this crate standardizes on the textbook
    /// `-norm(v) * mu` form rather than the scaled damping-hack variant.
    pub fn new_friction_force(velocity: Vector2, friction_coefficient: f64) -> Vector2 {
        velocity.norm().scale(-1.0).scale(friction_coefficient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_clear_forces_round_trips() {
        let mut d = Dynamics::new(1.0);
        add_force(&mut d, Vector2::new(1.0, 2.0));
        add_force(&mut d, Vector2::new(3.0, -1.0));
        assert_eq!(d.sum_forces, Vector2::new(4.0, 1.0));
        clear_forces(&mut d);
        assert_eq!(d.sum_forces, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn gravity_force_is_mass_scaled_and_downward() {
        let f = generator::new_gravity_force(2.0, 9.8, 1.0);
        assert_eq!(f, Vector2::new(0.0, 19.6));
    }

    #[test]
    fn friction_force_opposes_velocity() {
        let f = generator::new_friction_force(Vector2::new(10.0, 0.0), 0.5);
        assert_eq!(f, Vector2::new(-0.5, 0.0));
    }

    #[test]
    fn friction_force_on_zero_velocity_is_zero() {
        let f = generator::new_friction_force(Vector2::new(0.0, 0.0), 0.5);
        assert_eq!(f, Vector2::new(0.0, 0.0));
    }
}

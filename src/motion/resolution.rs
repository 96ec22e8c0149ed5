//! Impulse-based collision resolution: position correction plus normal
//! (restitution) and tangent (friction) impulses, coupled to angular
//! velocity through the contact arm.

use crate::motion::dynamics::Dynamics;
use crate::motion::impulse::apply_impulse;
use crate::spatial::collision::Collision;
use crate::vector::{Vector2, Vector2Ext};

/// Stateless impulse-based resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct Resolver;

impl Resolver {
    /// Separate `pos_a`/`pos_b` by `collision.depth` and apply restitution +
    /// friction impulses to `dyn_a`/`dyn_b`.
    ///
    /// A no-op when both bodies are infinite mass.
    pub fn resolve(pos_a: &mut Vector2, pos_b: &mut Vector2, dyn_a: &mut Dynamics, dyn_b: &mut Dynamics, collision: &Collision) {
        if dyn_a.is_static() && dyn_b.is_static() {
            log::trace!("resolve: both bodies static, no-op");
            return;
        }
        resolve_positions(dyn_a, dyn_b, pos_a, pos_b, collision);
        apply_resolution_impulses(dyn_a, dyn_b, pos_a, pos_b, collision);
    }
}

fn resolve_positions(dyn_a: &Dynamics, dyn_b: &Dynamics, pos_a: &mut Vector2, pos_b: &mut Vector2, collision: &Collision) {
    let total_inverse_mass = dyn_a.inverse_mass + dyn_b.inverse_mass;
    let correction_a = collision.depth / total_inverse_mass * dyn_a.inverse_mass;
    let correction_b = collision.depth / total_inverse_mass * dyn_b.inverse_mass;
    *pos_a = *pos_a - collision.normal.scale(correction_a);
    *pos_b = *pos_b + collision.normal.scale(correction_b);
}

fn apply_resolution_impulses(dyn_a: &mut Dynamics, dyn_b: &mut Dynamics, pos_a: &Vector2, pos_b: &Vector2, collision: &Collision) {
    let combined_elasticity = (dyn_a.elasticity + dyn_b.elasticity) / 2.0;
    let combined_friction = (dyn_a.friction + dyn_b.friction) / 2.0;
    let center_to_impact_a = collision.end - *pos_a;
    let center_to_impact_b = collision.start - *pos_b;

    let relative_vel_a = dyn_a.vel
        + Vector2::new(
            -dyn_a.angular_vel * center_to_impact_a.y,
            dyn_a.angular_vel * center_to_impact_a.x,
        );
    let relative_vel_b = dyn_b.vel
        + Vector2::new(
            -dyn_b.angular_vel * center_to_impact_b.y,
            dyn_b.angular_vel * center_to_impact_b.x,
        );

    let impact_velocity = relative_vel_a - relative_vel_b;
    let normal_velocity = impact_velocity.scalar_product(collision.normal);
    let normal_impulse_dir = collision.normal;

    let rotation_factor_a = center_to_impact_a.cross_product(collision.normal);
    let rotation_factor_a_sq = rotation_factor_a * rotation_factor_a;
    let rotation_factor_b = center_to_impact_b.cross_product(collision.normal);
    let rotation_factor_b_sq = rotation_factor_b * rotation_factor_b;

    let total_inverse_mass = dyn_a.inverse_mass + dyn_b.inverse_mass;
    let normal_impulse_denom = total_inverse_mass
        + rotation_factor_a_sq * dyn_a.inverse_angular_mass
        + rotation_factor_b_sq * dyn_b.inverse_angular_mass;
    let normal_impulse_mag = -(1.0 + combined_elasticity) * normal_velocity / normal_impulse_denom;
    let normal_impulse = normal_impulse_dir.scale(normal_impulse_mag);

    // Textbook Coulomb friction clamps |jt| <= mu*|jn| instead of scaling by
    // (1+e); the source scales by (1+e) and this crate preserves that for
    // scenario parity (see SPEC_FULL.md SS9).
    let tangent_dir = collision.normal.perpendicular().norm();
    let tangent_velocity = impact_velocity.scalar_product(tangent_dir);
    let rotation_factor_tangent_a = center_to_impact_a.cross_product(tangent_dir);
    let rotation_factor_tangent_a_sq = rotation_factor_tangent_a * rotation_factor_tangent_a;
    let rotation_factor_tangent_b = center_to_impact_b.cross_product(tangent_dir);
    let rotation_factor_tangent_b_sq = rotation_factor_tangent_b * rotation_factor_tangent_b;

    let tangent_impulse_denom = total_inverse_mass
        + rotation_factor_tangent_a_sq * dyn_a.inverse_angular_mass
        + rotation_factor_tangent_b_sq * dyn_b.inverse_angular_mass;
    let tangent_impulse_mag = combined_friction * -(1.0 + combined_elasticity) * tangent_velocity / tangent_impulse_denom;
    let tangent_impulse = tangent_dir.scale(tangent_impulse_mag);

    let total_impulse_a = normal_impulse + tangent_impulse;
    let total_impulse_b = total_impulse_a.scale(-1.0);
    apply_impulse(dyn_a, total_impulse_a, center_to_impact_a);
    apply_impulse(dyn_b, total_impulse_b, center_to_impact_b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn no_rotation_collision(normal: Vector2, depth: f64, end: Vector2, start: Vector2) -> Collision {
        Collision { start, end, normal, depth, ..Collision::default() }
    }

    #[test]
    fn scenario_a_falling_box_resolution() {
        let mut pos_a = Vector2::new(100.0, 110.0);
        let mut pos_b = Vector2::new(100.0, 150.0);
        let mut dyn_a = Dynamics::new(1.0);
        dyn_a.vel = Vector2::new(0.0, 40.0);
        dyn_a.elasticity = 0.3;
        let mut dyn_b = Dynamics::static_body();
        dyn_b.elasticity = 0.5;

        // Contact arm at the body centers (no rotational inertia set, as in
        // the worked example, so the angular terms vanish).
        let collision = no_rotation_collision(Vector2::new(0.0, 1.0), 10.0, pos_a, pos_b);

        Resolver::resolve(&mut pos_a, &mut pos_b, &mut dyn_a, &mut dyn_b, &collision);

        assert_relative_eq!(pos_a.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(pos_a.y, 100.0, epsilon = 1e-9);
        assert_relative_eq!(dyn_a.vel.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(dyn_a.vel.y, -16.0, epsilon = 1e-9);
    }

    #[test]
    fn static_vs_static_never_moves() {
        let mut pos_a = Vector2::new(0.0, 0.0);
        let mut pos_b = Vector2::new(1.0, 0.0);
        let mut dyn_a = Dynamics::static_body();
        let mut dyn_b = Dynamics::static_body();
        let collision = no_rotation_collision(Vector2::new(1.0, 0.0), 1.0, pos_a, pos_b);

        Resolver::resolve(&mut pos_a, &mut pos_b, &mut dyn_a, &mut dyn_b, &collision);

        assert_eq!(pos_a, Vector2::new(0.0, 0.0));
        assert_eq!(pos_b, Vector2::new(1.0, 0.0));
        assert_eq!(dyn_a.vel, Vector2::new(0.0, 0.0));
        assert_eq!(dyn_b.vel, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn momentum_is_conserved_along_normal_with_no_friction() {
        let mut pos_a = Vector2::new(0.0, 0.0);
        let mut pos_b = Vector2::new(1.0, 0.0);
        let mut dyn_a = Dynamics::new(1.0);
        dyn_a.vel = Vector2::new(5.0, 0.0);
        let mut dyn_b = Dynamics::new(1.0);
        dyn_b.vel = Vector2::new(-5.0, 0.0);
        let collision = no_rotation_collision(Vector2::new(1.0, 0.0), 0.1, pos_a, pos_b);

        let before = dyn_a.inverse_mass * dyn_a.vel.scalar_product(collision.normal)
            + dyn_b.inverse_mass * dyn_b.vel.scalar_product(collision.normal);

        Resolver::resolve(&mut pos_a, &mut pos_b, &mut dyn_a, &mut dyn_b, &collision);

        let after = dyn_a.inverse_mass * dyn_a.vel.scalar_product(collision.normal)
            + dyn_b.inverse_mass * dyn_b.vel.scalar_product(collision.normal);

        assert_relative_eq!(before, after, epsilon = 1e-9);
    }
}

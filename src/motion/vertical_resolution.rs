//! A vertical-axis-only resolver variant for platformer-style ground
//! interaction, where horizontal motion must never be perturbed by contact
//! resolution.

use crate::motion::dynamics::Dynamics;
use crate::motion::impulse::apply_impulse;
use crate::spatial::collision::Collision;
use crate::vector::{Vector2, Vector2Ext};

/// Stateless vertical-only resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct VerticalResolver;

impl VerticalResolver {
    /// Resolve `collision` as if its normal were reduced to `(0,
    /// collision.normal.y)`. X-coordinates and no friction impulse is ever
    /// applied.
    pub fn resolve(pos_a: &mut Vector2, pos_b: &mut Vector2, dyn_a: &mut Dynamics, dyn_b: &mut Dynamics, collision: &Collision) {
        resolve_positions(dyn_a, dyn_b, pos_a, pos_b, collision);
        apply_resolution_impulses(dyn_a, dyn_b, pos_a, pos_b, collision);
    }
}

fn y_only_normal(collision: &Collision) -> Option<Vector2> {
    let y_only = Vector2::new(0.0, collision.normal.y);
    if y_only.y != 0.0 {
        Some(y_only.norm())
    } else {
        None
    }
}

fn resolve_positions(dyn_a: &Dynamics, dyn_b: &Dynamics, pos_a: &mut Vector2, pos_b: &mut Vector2, collision: &Collision) {
    let normal = match y_only_normal(collision) {
        Some(n) => n,
        None => return,
    };
    let total_inverse_mass = dyn_a.inverse_mass + dyn_b.inverse_mass;
    let correction_a = collision.depth / total_inverse_mass * dyn_a.inverse_mass;
    let correction_b = collision.depth / total_inverse_mass * dyn_b.inverse_mass;
    *pos_a = *pos_a - normal.scale(correction_a);
    *pos_b = *pos_b + normal.scale(correction_b);
}

fn apply_resolution_impulses(dyn_a: &mut Dynamics, dyn_b: &mut Dynamics, pos_a: &Vector2, pos_b: &Vector2, collision: &Collision) {
    let normal = match y_only_normal(collision) {
        Some(n) => n,
        None => return,
    };

    let combined_elasticity = (dyn_a.elasticity + dyn_b.elasticity) / 2.0;
    let center_to_impact_a = collision.end - *pos_a;
    let center_to_impact_b = collision.start - *pos_b;

    let relative_vel_a = Vector2::new(0.0, dyn_a.vel.y + dyn_a.angular_vel * center_to_impact_a.x);
    let relative_vel_b = Vector2::new(0.0, dyn_b.vel.y + dyn_b.angular_vel * center_to_impact_b.x);
    let impact_velocity = relative_vel_a - relative_vel_b;
    let normal_velocity = impact_velocity.scalar_product(normal);

    let rotation_factor_a = center_to_impact_a.cross_product(normal);
    let rotation_factor_a_sq = rotation_factor_a * rotation_factor_a;
    let rotation_factor_b = center_to_impact_b.cross_product(normal);
    let rotation_factor_b_sq = rotation_factor_b * rotation_factor_b;

    let total_inverse_mass = dyn_a.inverse_mass + dyn_b.inverse_mass;
    let normal_impulse_denom = total_inverse_mass
        + rotation_factor_a_sq * dyn_a.inverse_angular_mass
        + rotation_factor_b_sq * dyn_b.inverse_angular_mass;
    let normal_impulse_mag = -(1.0 + combined_elasticity) * normal_velocity / normal_impulse_denom;
    let normal_impulse = normal.scale(normal_impulse_mag);

    apply_impulse(dyn_a, normal_impulse, center_to_impact_a);
    apply_impulse(dyn_b, normal_impulse.scale(-1.0), center_to_impact_b);
}

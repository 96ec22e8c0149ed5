//! Positional-only collision resolution: separates two shapes along the
//! collision normal without touching velocities. Useful for kinematic
//! movement where there is no [`crate::motion::Dynamics`] to integrate.

use crate::spatial::collision::Collision;
use crate::spatial::shape::Shape;
use crate::vector::{Vector2, Vector2Ext};

/// Stateless positional-only resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct Resolver;

impl Resolver {
    /// Split the separation equally between both shapes.
    pub fn resolve(pos_a: &mut Vector2, pos_b: &mut Vector2, collision: &Collision) {
        let correction = collision.normal.scale(collision.depth / 2.0);
        *pos_a = *pos_a - correction;
        *pos_b = *pos_b + correction;
    }

    /// Resolve by moving only `pos_b`, treating A as immovable.
    ///
    /// `shape_a`/`shape_b` are unused; kept for call-site parity with
    /// [`Resolver::resolve`] and the teacher's own static-variant signatures.
    pub fn resolve_a_static(_shape_a: &Shape, _shape_b: &Shape, _pos_a: &mut Vector2, pos_b: &mut Vector2, collision: &Collision) {
        let correction = collision.normal.scale(collision.depth);
        *pos_b = *pos_b + correction;
    }

    /// Resolve by moving only `pos_a`, treating B as immovable.
    pub fn resolve_b_static(_shape_a: &Shape, _shape_b: &Shape, pos_a: &mut Vector2, _pos_b: &mut Vector2, collision: &Collision) {
        let correction = collision.normal.scale(collision.depth);
        *pos_a = *pos_a - correction;
    }
}

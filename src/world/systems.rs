//! The two driver systems the spec calls out: integration and transform
//! refresh. Both iterate every body in the [`crate::world::World`] each step.

use crate::motion::integrate;
use crate::spatial::{update_skin_and_aab, update_world_vertices};
use crate::vector::Vector2;
use crate::world::{System, World};

/// Advances position (and, for bodies that have one, rotation) from each
/// body's accumulated forces/torque.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegrationSystem;

impl System for IntegrationSystem {
    fn run(&self, world: &mut World, dt: f64) {
        for (_, body) in world.bodies_mut() {
            let Some(dynamics) = body.dynamics.as_mut() else {
                continue;
            };
            body.previous_position = body.position;

            let rotation = body.rotation.unwrap_or(0.0);
            let (new_pos, new_rot) = integrate(dynamics, body.position, rotation, dt);
            body.position = new_pos;
            if body.rotation.is_some() {
                body.rotation = Some(new_rot);
            }
        }
    }
}

/// Rebuilds world vertices and the skin/AAB cache for every body with a shape.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransformSystem;

impl System for TransformSystem {
    fn run(&self, world: &mut World, _dt: f64) {
        for (_, body) in world.bodies_mut() {
            let Some(shape) = body.shape.as_mut() else {
                continue;
            };

            let mut scale = body.scale;
            if scale.x == 0.0 {
                scale.x = 1.0;
            }
            if scale.y == 0.0 {
                scale.y = 1.0;
            }
            let rotation = body.rotation.unwrap_or(0.0);

            shape.polygon.world_vertices =
                update_world_vertices(&shape.polygon.local_vertices, body.position, scale, rotation);
            update_skin_and_aab(shape, scale, rotation);
        }
    }
}

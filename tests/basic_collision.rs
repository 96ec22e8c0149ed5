//! End-to-end port of the source's `Example_basicCollision`: a falling box
//! lands on static ground, gets detected, and resolves to rest.

use approx::assert_relative_eq;

use kinetic2d::motion::{Dynamics, Resolver};
use kinetic2d::spatial::{update_world_vertices_simple, Detector, Shape};
use kinetic2d::vector::Vector2;

#[test]
fn falling_box_lands_on_static_ground() {
    let mut player_shape = Shape::rectangle(40.0, 80.0);
    let mut ground_shape = Shape::rectangle(200.0, 20.0);

    let mut player_pos = Vector2::new(100.0, 110.0);
    let mut ground_pos = Vector2::new(100.0, 150.0);

    player_shape.polygon.world_vertices =
        update_world_vertices_simple(&player_shape.polygon.local_vertices, player_pos);
    ground_shape.polygon.world_vertices =
        update_world_vertices_simple(&ground_shape.polygon.local_vertices, ground_pos);

    let mut player_dyn = Dynamics::new(1.0);
    player_dyn.vel = Vector2::new(0.0, 40.0);
    player_dyn.elasticity = 0.3;
    player_dyn.set_default_angular_mass(&player_shape);

    let mut ground_dyn = Dynamics::new(0.0);
    ground_dyn.elasticity = 0.5;

    let (colliding, collision) = Detector::check(&player_shape, &ground_shape, player_pos, ground_pos);
    assert!(colliding);
    assert_eq!(collision.normal, Vector2::new(0.0, 1.0));
    assert_relative_eq!(collision.depth, 10.0, epsilon = 1e-9);

    Resolver::resolve(&mut player_pos, &mut ground_pos, &mut player_dyn, &mut ground_dyn, &collision);

    assert_relative_eq!(player_pos.x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(player_pos.y, 100.0, epsilon = 1e-9);
    assert_relative_eq!(player_dyn.vel.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(player_dyn.vel.y, -16.0, epsilon = 1e-9);
}

#[test]
fn horizontal_separation_scenario() {
    let mut box_a = Shape::rectangle(10.0, 10.0);
    let mut box_b = Shape::rectangle(10.0, 10.0);
    let pos_a = Vector2::new(0.0, 0.0);
    let pos_b = Vector2::new(8.0, 0.0);
    box_a.polygon.world_vertices = update_world_vertices_simple(&box_a.polygon.local_vertices, pos_a);
    box_b.polygon.world_vertices = update_world_vertices_simple(&box_b.polygon.local_vertices, pos_b);

    let (colliding, collision) = Detector::check(&box_a, &box_b, pos_a, pos_b);
    assert!(colliding);
    assert_relative_eq!(collision.depth, 2.0, epsilon = 1e-9);
    assert_eq!(collision.normal, Vector2::new(1.0, 0.0));
    assert_relative_eq!(collision.start.x, 5.0, epsilon = 1e-9);
    assert_relative_eq!(collision.end.x, 3.0, epsilon = 1e-9);
}

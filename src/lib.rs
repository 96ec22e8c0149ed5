//! A 2D rigid-body physics core: shape transforms, narrow- and
//! continuous-phase collision detection, and impulse-based resolution with
//! a semi-implicit Euler integrator.
//!
//! The crate is organized the way the physics runs in a frame:
//! [`motion`] accumulates forces and integrates them into new positions,
//! [`spatial`] transforms shapes into world space and detects/resolves
//! contacts between them, and [`world`] is the small body registry and
//! system driver that ties the two together for a caller that doesn't
//! bring its own entity-component storage.
//!
//! ```
//! use kinetic2d::motion::Dynamics;
//! use kinetic2d::spatial::{Detector, Shape};
//! use kinetic2d::vector::Vector2;
//!
//! let mut player = Shape::rectangle(40.0, 80.0);
//! let mut ground = Shape::rectangle(200.0, 20.0);
//! let player_pos = Vector2::new(100.0, 110.0);
//! let ground_pos = Vector2::new(100.0, 150.0);
//! player.polygon.world_vertices = kinetic2d::spatial::update_world_vertices_simple(
//!     &player.polygon.local_vertices,
//!     player_pos,
//! );
//! ground.polygon.world_vertices = kinetic2d::spatial::update_world_vertices_simple(
//!     &ground.polygon.local_vertices,
//!     ground_pos,
//! );
//!
//! let mut player_dyn = Dynamics::new(1.0);
//! player_dyn.vel = Vector2::new(0.0, 40.0);
//! player_dyn.elasticity = 0.3;
//!
//! let (colliding, collision) = Detector::check(&player, &ground, player_pos, ground_pos);
//! assert!(colliding);
//! assert_eq!(collision.depth, 10.0);
//! ```

pub mod config;
pub mod error;
pub mod motion;
pub mod spatial;
pub mod vector;
pub mod world;

pub use config::PhysicsConfig;
pub use error::PhysicsError;
pub use vector::Vector2;

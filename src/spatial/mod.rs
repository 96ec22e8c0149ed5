//! Shapes, bounding volumes, collision detection (narrow and continuous),
//! and positional-only resolution.

pub mod collision;
pub mod continuous;
pub mod detection;
pub mod resolution;
pub mod shape;
pub mod transform;

pub use collision::{Collision, CollisionEdge};
pub use continuous::ContinuousDetector;
pub use detection::{inspect_aab_collision, inspect_circle_collision, inspect_polygon_collision, Detector};
pub use shape::{calc_skin, Aab, Circle, Polygon, Shape, Skin};
pub use transform::{update_skin_and_aab, update_world_vertices, update_world_vertices_simple};

//! World-space vertex transforms and the cached skin/AAB refresh they drive.

use crate::spatial::shape::{calc_skin, Aab, Shape};
use crate::vector::Vector2;

/// Translate `local` vertices into world space with no scale or rotation.
///
/// Used by continuous detection, which sweeps shapes without rotating them.
pub fn update_world_vertices_simple(local: &[Vector2], pos: Vector2) -> Vec<Vector2> {
    local.iter().map(|v| v + pos).collect()
}

/// Map `local` vertices into world space: scale componentwise, rotate by
/// `rot` radians around the origin, then translate by `pos`.
///
/// Order matters: scale -> rotate -> translate.
pub fn update_world_vertices(local: &[Vector2], pos: Vector2, scale: Vector2, rot: f64) -> Vec<Vector2> {
    let (sin, cos) = rot.sin_cos();
    local
        .iter()
        .map(|v| {
            let scaled = Vector2::new(v.x * scale.x, v.y * scale.y);
            let rotated = Vector2::new(
                scaled.x * cos - scaled.y * sin,
                scaled.x * sin + scaled.y * cos,
            );
            rotated + pos
        })
        .collect()
}

/// Refresh a shape's cached skin and world AAB after its world vertices have
/// been rebuilt.
///
/// The skin is expensive to recompute, so it's only touched when the shape's
/// rotation or dimensions actually changed: a non-zero rotation always
/// clears the world AAB (rotated shapes fall back to the polygon path);
/// otherwise the AAB is only rewritten, and the skin only recomputed, when
/// its scaled dimensions differ from the cached ones.
pub fn update_skin_and_aab(shape: &mut Shape, scale: Vector2, rot: f64) {
    if rot != 0.0 {
        if !shape.local_aab.is_unused() {
            shape.skin = calc_skin(&shape.polygon, Aab::default(), scale);
        }
        shape.local_aab = Aab::default();
        shape.world_aab = Aab::default();
        return;
    }

    let new_width = shape.local_aab.width * scale.x;
    let new_height = shape.local_aab.height * scale.y;
    if shape.world_aab.width != new_width || shape.world_aab.height != new_height {
        shape.world_aab.width = new_width;
        shape.world_aab.height = new_height;
        shape.skin = calc_skin(&shape.polygon, shape.local_aab, scale);
    }
}

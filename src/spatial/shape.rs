//! Shape data: axis-aligned bounding boxes, circles, polygons, and the
//! broad-phase skin/world-AAB pair cached on every [`Shape`].

use crate::vector::{Vector2, Vector2Ext};

/// An axis-aligned bounding box, centered on the owning body's position.
///
/// A zero `height` means "unused" — callers fall through to the polygon
/// detection path rather than treating this as a degenerate box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aab {
    pub width: f64,
    pub height: f64,
}

impl Aab {
    pub fn new(width: f64, height: f64) -> Self {
        Aab { width, height }
    }

    pub fn is_unused(&self) -> bool {
        self.height == 0.0
    }
}

/// A bounding circle, used as the alternate skin kind and, historically, as
/// a shape kind in its own right (see [`crate::spatial::detection::inspect_circle_collision`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }
}

/// A convex polygon, defined counter-clockwise in body space.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`; its outward normal
/// is that edge vector rotated +90 degrees and normalized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub local_vertices: Vec<Vector2>,
    pub world_vertices: Vec<Vector2>,
}

impl Polygon {
    pub fn new(local_vertices: Vec<Vector2>) -> Self {
        let world_vertices = local_vertices.clone();
        Polygon {
            local_vertices,
            world_vertices,
        }
    }

    /// A counter-clockwise rectangle centered on the origin.
    pub fn rectangle(width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Polygon::new(vec![
            Vector2::new(-hw, -hh),
            Vector2::new(-hw, hh),
            Vector2::new(hw, hh),
            Vector2::new(hw, -hh),
        ])
    }

    /// Edge vector and its two endpoints (both in world space), or all-zero
    /// vectors for an empty polygon.
    pub fn edge(&self, index: usize) -> (Vector2, Vector2, Vector2) {
        let count = self.world_vertices.len();
        if count == 0 {
            return (Vector2::new(0.0, 0.0), Vector2::new(0.0, 0.0), Vector2::new(0.0, 0.0));
        }
        let next = (index + 1) % count;
        let va = self.world_vertices[index];
        let vb = self.world_vertices[next];
        (vb - va, va, vb)
    }
}

/// The bounding volume cached on a [`Shape`] for broad-phase rejection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Skin {
    Aab(Aab),
    Circle(Circle),
}

impl Skin {
    pub fn is_aab(&self) -> bool {
        matches!(self, Skin::Aab(aab) if !aab.is_unused())
    }
}

impl Default for Skin {
    fn default() -> Self {
        Skin::Aab(Aab::default())
    }
}

/// A single collidable shape: a polygon plus its cached local/world AABs and
/// broad-phase skin.
///
/// Invariants: if `local_aab.height != 0` the shape is treated as a pure AAB
/// and the polygon path is never used for detection; `world_vertices.len()`
/// always equals `local_vertices.len()`; after any non-zero rotation the
/// `world_aab` is cleared, falling back to the polygon path.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    pub polygon: Polygon,
    pub local_aab: Aab,
    pub world_aab: Aab,
    pub skin: Skin,
}

impl Shape {
    /// A shape backed by a rectangular polygon, with a matching AAB fast path.
    pub fn rectangle(width: f64, height: f64) -> Self {
        let aab = Aab::new(width, height);
        Shape {
            polygon: Polygon::rectangle(width, height),
            local_aab: aab,
            world_aab: aab,
            skin: Skin::Aab(aab),
        }
    }

    /// A shape backed by an arbitrary convex polygon with no AAB fast path.
    pub fn polygon(local_vertices: Vec<Vector2>) -> Self {
        Shape {
            polygon: Polygon::new(local_vertices),
            local_aab: Aab::default(),
            world_aab: Aab::default(),
            skin: Skin::Aab(Aab::default()),
        }
    }

    pub fn is_aab(&self) -> bool {
        !self.world_aab.is_unused()
    }
}

/// Tight-fitting skin for a polygon at the given scale: an AAB if the shape
/// carries one (scaled), otherwise an enclosing circle computed from the
/// farthest local vertex.
pub fn calc_skin(polygon: &Polygon, local_aab: Aab, scale: Vector2) -> Skin {
    if !local_aab.is_unused() {
        return Skin::Aab(Aab::new(local_aab.width * scale.x, local_aab.height * scale.y));
    }
    let radius = polygon
        .local_vertices
        .iter()
        .map(|v| Vector2::new(v.x * scale.x, v.y * scale.y).mag())
        .fold(0.0_f64, f64::max);
    Skin::Circle(Circle::new(radius))
}

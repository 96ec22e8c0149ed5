//! Narrow-phase collision detection: AAB-AAB, circle-circle (broad-phase
//! only) and polygon SAT, dispatched from [`Detector::check`].

use crate::spatial::collision::{Collision, CollisionEdge};
use crate::spatial::shape::{Aab, Circle, Polygon, Shape, Skin};
use crate::vector::{Vector2, Vector2Ext};

/// Stateless narrow-phase detector. See module docs for the dispatch rule.
#[derive(Debug, Default, Clone, Copy)]
pub struct Detector;

impl Detector {
    /// Determine whether `shape_a` and `shape_b` (at `pos_a`/`pos_b`) collide.
    ///
    /// If both shapes carry a live world AAB, the cheap AAB path is used.
    /// Otherwise a broad-phase skin check gates the more expensive polygon
    /// SAT path.
    pub fn check(shape_a: &Shape, shape_b: &Shape, pos_a: Vector2, pos_b: Vector2) -> (bool, Collision) {
        if shape_a.is_aab() && shape_b.is_aab() {
            return inspect_aab_collision(shape_a.world_aab, shape_b.world_aab, pos_a, pos_b);
        }

        if !broad_filter(shape_a, shape_b, pos_a, pos_b) {
            log::trace!("broad-phase rejected pair");
            return (false, Collision::default());
        }

        if shape_a.polygon.world_vertices.is_empty() || shape_b.polygon.world_vertices.is_empty() {
            log::trace!("detector called against an empty polygon");
            return (false, Collision::default());
        }

        inspect_polygon_collision(&shape_a.polygon, &shape_b.polygon)
    }
}

/// Circle-circle overlap test. Not reachable from [`Detector::check`] except
/// via the broad-phase skin path (see `SPEC_FULL.md` SS9); retained as the
/// circle shape variant.
pub fn inspect_circle_collision(circle_a: Circle, circle_b: Circle, pos_a: Vector2, pos_b: Vector2) -> (bool, Collision) {
    let distance_between = pos_b - pos_a;
    let radius_sum = circle_b.radius + circle_a.radius;
    if distance_between.mag_squared() > radius_sum * radius_sum {
        return (false, Collision::default());
    }
    let normal = distance_between.norm();
    let start = pos_b - normal.scale(circle_b.radius);
    let end = pos_a + normal.scale(circle_a.radius);
    let depth = (end - start).mag();

    let edge_a = CollisionEdge { index: -1, vertices: Vec::new() };
    let edge_b = CollisionEdge { index: -1, vertices: Vec::new() };

    (
        true,
        Collision {
            start,
            end,
            normal,
            depth,
            colliding_edge_a: edge_a,
            colliding_edge_b: edge_b,
        },
    )
}

/// Separating-axis test between two axis-aligned boxes centered on `pos_a`/`pos_b`.
pub fn inspect_aab_collision(aab_a: Aab, aab_b: Aab, pos_a: Vector2, pos_b: Vector2) -> (bool, Collision) {
    let half_width_a = aab_a.width / 2.0;
    let half_height_a = aab_a.height / 2.0;
    let half_width_b = aab_b.width / 2.0;
    let half_height_b = aab_b.height / 2.0;

    let left_a = pos_a.x - half_width_a;
    let right_a = pos_a.x + half_width_a;
    let top_a = pos_a.y - half_height_a;
    let bottom_a = pos_a.y + half_height_a;
    let left_b = pos_b.x - half_width_b;
    let right_b = pos_b.x + half_width_b;
    let top_b = pos_b.y - half_height_b;
    let bottom_b = pos_b.y + half_height_b;

    if right_a < left_b || left_a > right_b || bottom_a < top_b || top_a > bottom_b {
        return (false, Collision::default());
    }

    let x_overlap = right_a.min(right_b) - left_a.max(left_b);
    let y_overlap = bottom_a.min(bottom_b) - top_a.max(top_b);

    let normal;
    let depth;
    let edge_index_a;
    let edge_index_b;
    let colliding_edge_vertices_a;
    let colliding_edge_vertices_b;

    if x_overlap < y_overlap {
        depth = x_overlap;
        if pos_a.x < pos_b.x {
            normal = Vector2::new(1.0, 0.0);
            edge_index_a = 1; // right edge
            colliding_edge_vertices_a = vec![Vector2::new(right_a, top_a), Vector2::new(right_a, bottom_a)];
            edge_index_b = 3; // left edge
            colliding_edge_vertices_b = vec![Vector2::new(left_b, top_b), Vector2::new(left_b, bottom_b)];
        } else {
            normal = Vector2::new(-1.0, 0.0);
            edge_index_a = 3; // left edge
            colliding_edge_vertices_a = vec![Vector2::new(left_a, top_a), Vector2::new(left_a, bottom_a)];
            edge_index_b = 1; // right edge
            colliding_edge_vertices_b = vec![Vector2::new(right_b, top_b), Vector2::new(right_b, bottom_b)];
        }
    } else {
        depth = y_overlap;
        if pos_a.y < pos_b.y {
            normal = Vector2::new(0.0, 1.0);
            edge_index_a = 2; // bottom edge
            colliding_edge_vertices_a = vec![Vector2::new(left_a, bottom_a), Vector2::new(right_a, bottom_a)];
            edge_index_b = 0; // top edge
            colliding_edge_vertices_b = vec![Vector2::new(left_b, top_b), Vector2::new(right_b, top_b)];
        } else {
            normal = Vector2::new(0.0, -1.0);
            edge_index_a = 0; // top edge
            colliding_edge_vertices_a = vec![Vector2::new(left_a, top_a), Vector2::new(right_a, top_a)];
            edge_index_b = 2; // bottom edge
            colliding_edge_vertices_b = vec![Vector2::new(left_b, bottom_b), Vector2::new(right_b, bottom_b)];
        }
    }

    let colliding_edge_a = CollisionEdge { index: edge_index_a, vertices: colliding_edge_vertices_a };
    let colliding_edge_b = CollisionEdge { index: edge_index_b, vertices: colliding_edge_vertices_b };

    let (start, end) = if normal.x != 0.0 {
        let y = (top_a.max(top_b) + bottom_a.min(bottom_b)) / 2.0;
        if normal.x > 0.0 {
            (Vector2::new(right_a, y), Vector2::new(left_b, y))
        } else {
            (Vector2::new(left_a, y), Vector2::new(right_b, y))
        }
    } else {
        let x = (left_a.max(left_b) + right_a.min(right_b)) / 2.0;
        if normal.y > 0.0 {
            (Vector2::new(x, bottom_a), Vector2::new(x, top_b))
        } else {
            (Vector2::new(x, top_a), Vector2::new(x, bottom_b))
        }
    };

    (
        true,
        Collision {
            start,
            end,
            normal,
            depth,
            colliding_edge_a,
            colliding_edge_b,
        },
    )
}

/// Broad-phase rejection using each shape's cached skin.
fn broad_filter(shape_a: &Shape, shape_b: &Shape, pos_a: Vector2, pos_b: Vector2) -> bool {
    match (shape_a.skin, shape_b.skin) {
        (Skin::Aab(a), Skin::Aab(b)) if !a.is_unused() && !b.is_unused() => {
            inspect_aab_collision(a, b, pos_a, pos_b).0
        }
        (Skin::Aab(a), _) if !a.is_unused() => {
            // Mixed skins: fall back to treating the non-AAB side as a point.
            inspect_aab_collision(a, Aab::default(), pos_a, pos_b).0
        }
        _ => {
            let circle_a = skin_circle(shape_a.skin);
            let circle_b = skin_circle(shape_b.skin);
            inspect_circle_collision(circle_a, circle_b, pos_a, pos_b).0
        }
    }
}

fn skin_circle(skin: Skin) -> Circle {
    match skin {
        Skin::Circle(c) => c,
        Skin::Aab(_) => Circle::default(),
    }
}

/// Full SAT test between two convex polygons, already in world space.
pub fn inspect_polygon_collision(polygon_a: &Polygon, polygon_b: &Polygon) -> (bool, Collision) {
    let (min_sep_a, incident_edge_index_a, pen_point_a) = find_min_sep(polygon_a, polygon_b);
    let (edge_vector_a, v1_a, v2_a) = polygon_a.edge(incident_edge_index_a);
    let colliding_edge_a = CollisionEdge { index: incident_edge_index_a as i32, vertices: vec![v1_a, v2_a] };

    if min_sep_a >= 0.0 {
        return (false, Collision::default());
    }

    let (min_sep_b, incident_edge_index_b, pen_point_b) = find_min_sep(polygon_b, polygon_a);
    let (edge_vector_b, v1_b, v2_b) = polygon_b.edge(incident_edge_index_b);
    let colliding_edge_b = CollisionEdge { index: incident_edge_index_b as i32, vertices: vec![v1_b, v2_b] };

    if min_sep_b >= 0.0 {
        return (false, Collision::default());
    }

    let collision = if min_sep_a > min_sep_b {
        let depth = -min_sep_a;
        let normal = edge_vector_a.perpendicular().norm();
        let start = pen_point_a;
        let end = start + normal.scale(depth);
        Collision { start, end, normal, depth, colliding_edge_a, colliding_edge_b }
    } else {
        let depth = -min_sep_b;
        let normal = edge_vector_b.perpendicular().norm().scale(-1.0);
        let end = pen_point_b;
        let start = end - normal.scale(depth);
        Collision { start, end, normal, depth, colliding_edge_a, colliding_edge_b }
    };

    (true, collision)
}

/// Deepest penetration of `polygon_b` into `polygon_a`'s half-spaces.
///
/// Returns the maximum-over-edges separation, the index of the governing
/// (reference) edge, and the penetrating vertex of `polygon_b`.
fn find_min_sep(polygon_a: &Polygon, polygon_b: &Polygon) -> (f64, usize, Vector2) {
    let mut sep = -f64::MAX;
    let mut index_reference_edge = 0usize;
    let mut pen_point = Vector2::new(0.0, 0.0);

    for i in 0..polygon_a.world_vertices.len() {
        let va = polygon_a.world_vertices[i];
        let (current_edge, _, _) = polygon_a.edge(i);
        let normal = current_edge.perpendicular().norm();

        let mut min_sep = f64::MAX;
        let mut min_vert = Vector2::new(0.0, 0.0);

        for &vb in &polygon_b.world_vertices {
            let projection = (vb - va).scalar_product(normal);
            if projection < min_sep {
                min_sep = projection;
                min_vert = vb;
            }
        }

        if min_sep > sep {
            sep = min_sep;
            index_reference_edge = i;
            pen_point = min_vert;
        }
    }

    (sep, index_reference_edge, pen_point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn aab_shape(w: f64, h: f64) -> Shape {
        Shape::rectangle(w, h)
    }

    #[test]
    fn disjoint_aabs_do_not_collide() {
        let a = aab_shape(10.0, 10.0);
        let b = aab_shape(10.0, 10.0);
        let (hit, _) = Detector::check(&a, &b, Vector2::new(0.0, 0.0), Vector2::new(100.0, 0.0));
        assert!(!hit);
    }

    #[test]
    fn overlapping_aabs_report_horizontal_depth() {
        let a = aab_shape(10.0, 10.0);
        let b = aab_shape(10.0, 10.0);
        let (hit, c) = Detector::check(&a, &b, Vector2::new(0.0, 0.0), Vector2::new(8.0, 0.0));
        assert!(hit);
        assert_relative_eq!(c.depth, 2.0, epsilon = 1e-9);
        assert_eq!(c.normal, Vector2::new(1.0, 0.0));
        assert_relative_eq!(c.start.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(c.end.x, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn scenario_a_falling_box_on_ground() {
        let mut player = Shape::rectangle(40.0, 80.0);
        let mut ground = Shape::rectangle(200.0, 20.0);
        player.polygon.world_vertices = player
            .polygon
            .local_vertices
            .iter()
            .map(|v| v + Vector2::new(100.0, 110.0))
            .collect();
        ground.polygon.world_vertices = ground
            .polygon
            .local_vertices
            .iter()
            .map(|v| v + Vector2::new(100.0, 150.0))
            .collect();

        let (hit, c) = Detector::check(&player, &ground, Vector2::new(100.0, 110.0), Vector2::new(100.0, 150.0));
        assert!(hit);
        assert_eq!(c.normal, Vector2::new(0.0, 1.0));
        assert_relative_eq!(c.depth, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn detector_symmetry_under_swap() {
        let a = aab_shape(10.0, 10.0);
        let b = aab_shape(10.0, 10.0);
        let pos_a = Vector2::new(0.0, 0.0);
        let pos_b = Vector2::new(8.0, 0.0);
        let (hit_ab, c_ab) = Detector::check(&a, &b, pos_a, pos_b);
        let (hit_ba, c_ba) = Detector::check(&b, &a, pos_b, pos_a);
        assert_eq!(hit_ab, hit_ba);
        assert_relative_eq!(c_ab.depth, c_ba.depth, epsilon = 1e-9);
        assert_eq!(c_ab.normal, -c_ba.normal);
    }

    #[test]
    fn empty_polygon_never_collides() {
        let empty = Shape::polygon(Vec::new());
        let square = Shape::polygon(Polygon::rectangle(1.0, 1.0).local_vertices);
        let (hit, _) = Detector::check(&empty, &square, Vector2::new(0.0, 0.0), Vector2::new(0.0, 0.0));
        assert!(!hit);
    }

    #[test]
    fn unit_squares_sat_depth() {
        let mut a = Shape::polygon(Polygon::rectangle(1.0, 1.0).local_vertices);
        let mut b = Shape::polygon(Polygon::rectangle(1.0, 1.0).local_vertices);
        a.polygon.world_vertices = a.polygon.local_vertices.clone();
        b.polygon.world_vertices = b
            .polygon
            .local_vertices
            .iter()
            .map(|v| v + Vector2::new(0.5, 0.0))
            .collect();

        let (hit, c) = inspect_polygon_collision(&a.polygon, &b.polygon);
        assert!(hit);
        assert_relative_eq!(c.depth, 0.5, epsilon = 1e-9);
        assert_relative_eq!(c.normal.x.abs(), 1.0, epsilon = 1e-9);
    }
}

//! 2D vector type and the small set of operations the rest of the crate needs.
//!
//! The underlying representation is `cgmath::Vector2<f64>` so that arithmetic
//! (`Add`, `Sub`, `Neg`, scalar `Mul`) comes for free from `cgmath`; the
//! extension trait below adds the handful of named operations (`norm`,
//! `perpendicular`, `cross_product`, ...) that the detection and resolution
//! code is built around and that `cgmath` itself doesn't provide for 2D.

use cgmath::{InnerSpace, Zero};

/// A point or displacement in 2D space, in pixels.
pub type Vector2 = cgmath::Vector2<f64>;

/// Named vector operations used throughout collision detection and resolution.
///
/// `norm` deliberately diverges from `cgmath::InnerSpace::normalize`, which
/// produces `NaN` on a zero vector: callers here (reference edges of
/// degenerate polygons, a collision normal reduced to one axis) need a zero
/// vector back instead, so that "no normal" composes as "no collision" or
/// "no impulse" rather than propagating `NaN` through the resolver.
pub trait Vector2Ext {
    fn mag(&self) -> f64;
    fn mag_squared(&self) -> f64;
    /// Unit vector in the same direction, or the zero vector if `self` is zero.
    fn norm(&self) -> Vector2;
    fn scale(&self, k: f64) -> Vector2;
    fn scalar_product(&self, other: Vector2) -> f64;
    /// The scalar (z-component) of the 3D cross product of two 2D vectors.
    fn cross_product(&self, other: Vector2) -> f64;
    /// Rotate the vector +90 degrees.
    fn perpendicular(&self) -> Vector2;
}

impl Vector2Ext for Vector2 {
    fn mag(&self) -> f64 {
        self.magnitude()
    }

    fn mag_squared(&self) -> f64 {
        self.magnitude2()
    }

    fn norm(&self) -> Vector2 {
        let m = self.mag();
        if m == 0.0 {
            Vector2::zero()
        } else {
            self.scale(1.0 / m)
        }
    }

    fn scale(&self, k: f64) -> Vector2 {
        Vector2::new(self.x * k, self.y * k)
    }

    fn scalar_product(&self, other: Vector2) -> f64 {
        self.dot(other)
    }

    fn cross_product(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn perpendicular(&self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn norm_of_zero_vector_is_zero() {
        let v = Vector2::new(0.0, 0.0);
        assert_eq!(v.norm(), Vector2::zero());
    }

    #[test]
    fn norm_is_unit_length() {
        let v = Vector2::new(3.0, 4.0);
        let n = v.norm();
        assert_relative_eq!(n.mag(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-9);
        assert_relative_eq!(n.y, 0.8, epsilon = 1e-9);
    }

    #[test]
    fn perpendicular_is_ccw_quarter_turn() {
        let v = Vector2::new(1.0, 0.0);
        assert_eq!(v.perpendicular(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn cross_product_matches_scalar_z() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        assert_relative_eq!(a.cross_product(b), 1.0, epsilon = 1e-12);
        assert_relative_eq!(b.cross_product(a), -1.0, epsilon = 1e-12);
    }
}

//! Circle given by a radius and a 3D center.

use nalgebra::{Vector2, Vector3};

use super::types::{BoundingBox, Shape};

/// Circle in the xy-plane; the z-component of `center` is carried for the
/// lattice builder but ignored by 2D queries.
///
/// No validation: a negative radius is stored as given and contains nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub center: Vector3<f64>,
}

impl Circle {
    #[inline]
    pub fn new(radius: f64, center: Vector3<f64>) -> Self {
        Self { radius, center }
    }

    /// Center projected onto the xy-plane.
    #[inline]
    pub fn center_xy(&self) -> Vector2<f64> {
        self.center.xy()
    }
}

impl Shape for Circle {
    #[inline]
    fn contains(&self, p: Vector2<f64>) -> bool {
        (p - self.center_xy()).norm() <= self.radius
    }

    fn bounding_box(&self) -> BoundingBox {
        let r = self.radius.abs();
        let c = self.center_xy();
        let d = Vector2::new(r, r);
        BoundingBox::new(c - d, c + d)
    }
}

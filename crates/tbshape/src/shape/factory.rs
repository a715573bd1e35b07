//! Convenience constructors for common shapes.

use nalgebra::Vector3;
use std::f64::consts::PI;

use super::circle::Circle;
use super::polygon::Polygon;
use super::types::ShapeError;

/// Rectangle centered at the origin; `y` of `None` (or zero) gives a square.
///
/// Vertex order is fixed: `(x0, y0), (x0, -y0), (-x0, -y0), (-x0, y0)` with
/// `x0 = x/2`, `y0 = y/2`. Degenerate sizes are accepted.
pub fn rectangle(x: f64, y: Option<f64>) -> Polygon {
    let y = match y {
        Some(y) if y != 0.0 => y,
        _ => x,
    };
    let x0 = x / 2.0;
    let y0 = y / 2.0;
    Polygon::from_quad([(x0, y0), (x0, -y0), (-x0, -y0), (-x0, y0)])
}

/// Regular polygon inscribed in a circle of `radius` around the origin.
///
/// Vertex `n` sits at `(r sin a, r cos a)` with `a = angle + 2πn/num_sides`,
/// so `angle` is measured from the y-axis.
pub fn regular_polygon(num_sides: usize, radius: f64, angle: f64) -> Result<Polygon, ShapeError> {
    let step = 2.0 * PI / num_sides as f64;
    Polygon::new((0..num_sides).map(|n| {
        let a = angle + step * n as f64;
        (radius * a.sin(), radius * a.cos())
    }))
}

/// Circle with `center` defaulting to the origin.
#[inline]
pub fn circle(radius: f64, center: Option<Vector3<f64>>) -> Circle {
    Circle::new(radius, center.unwrap_or_else(Vector3::zeros))
}

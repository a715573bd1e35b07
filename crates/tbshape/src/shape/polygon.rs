//! Polygon defined by an ordered list of vertices.
//!
//! Storage is column-wise (`x`, `y`); the pair view returned by `vertices()`
//! is derived. Winding order and self-intersection are the caller's business.

use nalgebra::Vector2;
use std::fmt;

use super::types::{BoundingBox, IntoXY, Shape, ShapeError};

/// Minimum number of vertices of a polygon.
pub const MIN_VERTICES: usize = 3;

/// Shape defined by a list of vertices (clockwise or counterclockwise).
///
/// Invariants:
/// - `x.len() == y.len() >= MIN_VERTICES`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Polygon {
    /// Build from at least three points.
    pub fn new<I, P>(vertices: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = P>,
        P: IntoXY,
    {
        let (x, y) = split_columns(vertices)?;
        Ok(Self { x, y })
    }

    /// Four vertices always satisfy the minimum, so this cannot fail.
    pub(crate) fn from_quad(corners: [(f64, f64); 4]) -> Self {
        let (x, y) = corners.into_iter().unzip();
        Self { x, y }
    }

    /// Vertices as `(x, y)` pairs in insertion order.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    /// Replace all vertices. On error the polygon is left untouched.
    pub fn set_vertices<I, P>(&mut self, vertices: I) -> Result<(), ShapeError>
    where
        I: IntoIterator<Item = P>,
        P: IntoXY,
    {
        let (x, y) = split_columns(vertices)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Vertices as column vectors.
    pub fn points(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Vector2::new(x, y))
    }

    /// Coordinate columns with the first vertex repeated at the end.
    pub fn closed_outline(&self) -> (Vec<f64>, Vec<f64>) {
        let mut xs = Vec::with_capacity(self.x.len() + 1);
        let mut ys = Vec::with_capacity(self.y.len() + 1);
        xs.extend_from_slice(&self.x);
        ys.extend_from_slice(&self.y);
        xs.push(self.x[0]);
        ys.push(self.y[0]);
        (xs, ys)
    }
}

fn split_columns<I, P>(vertices: I) -> Result<(Vec<f64>, Vec<f64>), ShapeError>
where
    I: IntoIterator<Item = P>,
    P: IntoXY,
{
    let (x, y): (Vec<f64>, Vec<f64>) = vertices.into_iter().map(IntoXY::into_xy).unzip();
    if x.len() < MIN_VERTICES {
        return Err(ShapeError::TooFewVertices { found: x.len() });
    }
    Ok((x, y))
}

impl Shape for Polygon {
    /// Even-odd rule; points exactly on an edge may land on either side.
    fn contains(&self, p: Vector2<f64>) -> bool {
        let n = self.x.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (self.x[i], self.y[i]);
            let (xj, yj) = (self.x[j], self.y[j]);
            if (yi > p.y) != (yj > p.y) {
                let x_cross = xj + (p.y - yj) * (xi - xj) / (yi - yj);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox::new(
            Vector2::new(self.x[0], self.y[0]),
            Vector2::new(self.x[0], self.y[0]),
        );
        for p in self.points().skip(1) {
            bb.include(p);
        }
        bb
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon([")?;
        for (k, (x, y)) in self.x.iter().zip(self.y.iter()).enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({x}, {y})")?;
        }
        write!(f, "])")
    }
}

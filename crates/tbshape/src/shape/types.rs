//! Basic 2D types shared by the shape value objects.
//!
//! - `Shape`: the query surface a lattice builder consumes (containment + bounds).
//! - `BoundingBox`: axis-aligned box, also used by the plotting layer for margins.
//! - `IntoXY`: accepted vertex inputs (tuples, arrays, nalgebra vectors).
//! - `ShapeError`: the single failure mode of shape construction.

use nalgebra::Vector2;
use std::fmt;

/// Anything that describes a closed region in the xy-plane.
pub trait Shape {
    /// Point membership in the xy-plane.
    fn contains(&self, p: Vector2<f64>) -> bool;
    /// Smallest axis-aligned box enclosing the shape.
    fn bounding_box(&self) -> BoundingBox;
}

/// Axis-aligned bounding box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BoundingBox {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }

    /// Box around a set of points; `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut bb = Self::new(first, first);
        for p in it {
            bb.include(p);
        }
        Some(bb)
    }

    #[inline]
    pub fn include(&mut self, p: Vector2<f64>) {
        self.min = self.min.inf(&p);
        self.max = self.max.sup(&p);
    }

    #[inline]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        Self::new(self.min.inf(&other.min), self.max.sup(&other.max))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }

    /// Grow every side by `fraction` of the larger extent.
    pub fn expand(&self, fraction: f64) -> BoundingBox {
        let pad = fraction * self.width().max(self.height());
        let d = Vector2::new(pad, pad);
        Self::new(self.min - d, self.max + d)
    }
}

/// Conversion of user-facing vertex inputs into `(x, y)`.
pub trait IntoXY {
    fn into_xy(self) -> (f64, f64);
}

impl IntoXY for (f64, f64) {
    #[inline]
    fn into_xy(self) -> (f64, f64) {
        self
    }
}

impl IntoXY for [f64; 2] {
    #[inline]
    fn into_xy(self) -> (f64, f64) {
        (self[0], self[1])
    }
}

impl IntoXY for Vector2<f64> {
    #[inline]
    fn into_xy(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl<T: IntoXY + Copy> IntoXY for &T {
    #[inline]
    fn into_xy(self) -> (f64, f64) {
        (*self).into_xy()
    }
}

/// Errors surfaced by shape construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A polygon needs at least three vertices.
    TooFewVertices { found: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::TooFewVertices { found } => {
                write!(f, "a polygon must have at least 3 sides, got {found}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

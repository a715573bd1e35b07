//! Shape value objects used to cut a finite system out of a lattice.
//!
//! Purpose
//! - `Polygon` and `Circle` describe the region; `rectangle`, `regular_polygon`
//!   and `circle` build the common cases.
//! - Both implement `Shape` (containment + bounds), the only surface the
//!   lattice builder consumes.
//!
//! Code cross-refs: `crate::plot::Plot` for rendering.

mod circle;
mod factory;
mod polygon;
mod types;

pub use circle::Circle;
pub use factory::{circle, rectangle, regular_polygon};
pub use polygon::{Polygon, MIN_VERTICES};
pub use types::{BoundingBox, IntoXY, Shape, ShapeError};

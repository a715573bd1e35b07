//! Shape descriptors for tight-binding model construction.
//!
//! A finite system is cut out of an infinite lattice by a `Shape`
//! (`Polygon`, `Circle`); periodic systems are described by a `Primitive`
//! cell and a `TranslationalSymmetry`. The lattice builder consumes these as
//! plain values; everything here is synchronous and allocation-light.
//!
//! Layout
//! - `shape`: value objects and factories (`rectangle`, `regular_polygon`, `circle`).
//! - `lattice`: unit-cell and periodicity descriptors (`primitive`, `translational_symmetry`).
//! - `plot`: `Canvas` drawing surface and the SVG backend.

pub mod lattice;
pub mod plot;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::lattice::{
        primitive, translational_symmetry, Primitive, Translation, TranslationalSymmetry,
    };
    pub use crate::plot::{Canvas, Plot, PlotCfg, PlotError, PlotStyle, SvgCanvas};
    pub use crate::shape::{
        circle, rectangle, regular_polygon, BoundingBox, Circle, Polygon, Shape, ShapeError,
    };
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

//! Plotting surface for shapes.
//!
//! - `Canvas`: fire-and-forget draw commands (polyline, circle outline) plus
//!   axis requests (equal aspect, spine trimming, margins).
//! - `Plot`: implemented by the shape value objects.
//! - `SvgCanvas`: the bundled backend, rendering through the `svg` crate.

mod canvas;
mod render;
mod style;

pub use canvas::{Canvas, Plot, DEFAULT_COLOR, DEFAULT_MARGIN};
pub use render::{PlotCfg, PlotError, SvgCanvas};
pub use style::PlotStyle;

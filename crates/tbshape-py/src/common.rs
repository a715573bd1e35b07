use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;
use tbshape::plot::{Plot, PlotError, PlotStyle, SvgCanvas};
use tbshape::shape::ShapeError;

pub fn map_shape_err(err: ShapeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_plot_err(err: PlotError) -> PyErr {
    PyOSError::new_err(err.to_string())
}

/// Render a single shape with an optional color override.
pub fn render_svg(shape: &dyn Plot, color: Option<String>) -> SvgCanvas {
    let style = PlotStyle {
        color,
        ..PlotStyle::default()
    };
    let mut canvas = SvgCanvas::default();
    shape.plot(&mut canvas, &style);
    canvas
}

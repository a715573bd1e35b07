//! Drawing surface abstraction and the shape renderers.

use nalgebra::Vector2;

use super::style::PlotStyle;
use crate::shape::{Circle, Polygon};

/// Stroke color used when the caller does not override it.
pub const DEFAULT_COLOR: &str = "black";
/// Fraction of the larger data extent added around the plot.
pub const DEFAULT_MARGIN: f64 = 0.08;

/// 2D plotting surface. Calls have no observable result for the caller.
pub trait Canvas {
    /// Open polyline through `(xs[i], ys[i])`; callers close loops themselves.
    fn polyline(&mut self, xs: &[f64], ys: &[f64], style: &PlotStyle);
    /// Unfilled circle outline.
    fn circle_outline(&mut self, center: Vector2<f64>, radius: f64, style: &PlotStyle);
    /// Equal scaling of both axes (1:1 aspect).
    fn axis_scaled(&mut self);
    /// Drop the top and right spines; `trim` limits the rest to the data range.
    fn despine(&mut self, trim: bool);
    /// Pad the axis limits by `fraction` of the data extent.
    fn add_margin(&mut self, fraction: f64);
}

/// Something that knows how to draw itself on a `Canvas`.
pub trait Plot {
    fn plot(&self, canvas: &mut dyn Canvas, style: &PlotStyle);
}

fn default_style() -> PlotStyle {
    PlotStyle::default().color(DEFAULT_COLOR)
}

fn finish_axes(canvas: &mut dyn Canvas) {
    canvas.axis_scaled();
    canvas.despine(true);
    canvas.add_margin(DEFAULT_MARGIN);
}

impl Plot for Polygon {
    /// Closed outline: the first vertex is repeated at the end.
    fn plot(&self, canvas: &mut dyn Canvas, style: &PlotStyle) {
        let (xs, ys) = self.closed_outline();
        canvas.polyline(&xs, &ys, &style.with_defaults(&default_style()));
        finish_axes(canvas);
    }
}

impl Plot for Circle {
    fn plot(&self, canvas: &mut dyn Canvas, style: &PlotStyle) {
        canvas.circle_outline(
            self.center_xy(),
            self.radius,
            &style.with_defaults(&default_style()),
        );
        finish_axes(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{circle, rectangle};

    #[derive(Debug, PartialEq)]
    enum Call {
        Polyline(Vec<f64>, Vec<f64>, PlotStyle),
        Circle(Vector2<f64>, f64, PlotStyle),
        Scaled,
        Despine(bool),
        Margin(f64),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        fn polyline(&mut self, xs: &[f64], ys: &[f64], style: &PlotStyle) {
            self.calls
                .push(Call::Polyline(xs.to_vec(), ys.to_vec(), style.clone()));
        }
        fn circle_outline(&mut self, center: Vector2<f64>, radius: f64, style: &PlotStyle) {
            self.calls.push(Call::Circle(center, radius, style.clone()));
        }
        fn axis_scaled(&mut self) {
            self.calls.push(Call::Scaled);
        }
        fn despine(&mut self, trim: bool) {
            self.calls.push(Call::Despine(trim));
        }
        fn add_margin(&mut self, fraction: f64) {
            self.calls.push(Call::Margin(fraction));
        }
    }

    #[test]
    fn polygon_draws_closed_loop_in_black() {
        let mut rec = Recorder::default();
        rectangle(2.0, None).plot(&mut rec, &PlotStyle::default());
        assert_eq!(
            rec.calls,
            vec![
                Call::Polyline(
                    vec![1.0, 1.0, -1.0, -1.0, 1.0],
                    vec![1.0, -1.0, -1.0, 1.0, 1.0],
                    PlotStyle::default().color("black"),
                ),
                Call::Scaled,
                Call::Despine(true),
                Call::Margin(DEFAULT_MARGIN),
            ]
        );
    }

    #[test]
    fn circle_respects_style_override() {
        let mut rec = Recorder::default();
        let style = PlotStyle::default().color("red").line_width(2.0);
        circle(1.5, Some(nalgebra::vector![1.0, 2.0, 9.0])).plot(&mut rec, &style);
        assert_eq!(
            rec.calls[0],
            Call::Circle(nalgebra::vector![1.0, 2.0], 1.5, style)
        );
        assert_eq!(rec.calls.len(), 4);
    }
}

//! SVG backend for `Canvas`.
//!
//! Draw commands are recorded in data coordinates; axis requests only set
//! flags. Everything is resolved to pixels when the document is built, so the
//! order of `axis_scaled`/`add_margin` relative to the draw calls is irrelevant.

use ::svg::node::element::{Circle as SvgCircle, Ellipse, Group, Line, Polyline, Rectangle};
use ::svg::Document;
use nalgebra::Vector2;
use std::fmt;
use std::path::Path;

use super::canvas::{Canvas, DEFAULT_COLOR};
use super::style::PlotStyle;
use crate::shape::BoundingBox;

/// Output configuration for `SvgCanvas`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotCfg {
    pub width_px: u32,
    pub height_px: u32,
    pub background: String,
    /// Stroke width used for spines and for draw calls without an override.
    pub stroke_px: f64,
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            width_px: 480,
            height_px: 480,
            background: "white".to_string(),
            stroke_px: 1.0,
        }
    }
}

/// Errors surfaced when writing a figure.
#[derive(Debug)]
pub enum PlotError {
    Io(std::io::Error),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "writing figure failed: {err}"),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PlotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Clone, Debug)]
enum Item {
    Polyline {
        xs: Vec<f64>,
        ys: Vec<f64>,
        style: PlotStyle,
    },
    Circle {
        center: Vector2<f64>,
        radius: f64,
        style: PlotStyle,
    },
}

impl Item {
    fn bounds(&self) -> Option<BoundingBox> {
        match self {
            Item::Polyline { xs, ys, .. } => BoundingBox::from_points(
                xs.iter().zip(ys.iter()).map(|(&x, &y)| Vector2::new(x, y)),
            ),
            Item::Circle { center, radius, .. } => {
                let r = radius.abs();
                let d = Vector2::new(r, r);
                Some(BoundingBox::new(center - d, center + d))
            }
        }
    }
}

/// Spine layout requested through `despine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Spines {
    /// Full frame, the state before any `despine` call.
    Frame,
    /// Left and bottom only.
    Open { trim: bool },
}

/// Data → pixel mapping (y axis flipped).
#[derive(Clone, Copy, Debug)]
struct Viewport {
    limits: BoundingBox,
    sx: f64,
    sy: f64,
    ox: f64,
    oy: f64,
    height: f64,
}

impl Viewport {
    #[inline]
    fn px(&self, p: Vector2<f64>) -> (f64, f64) {
        (
            self.ox + (p.x - self.limits.min.x) * self.sx,
            self.height - (self.oy + (p.y - self.limits.min.y) * self.sy),
        )
    }
}

/// `Canvas` producing an SVG document.
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    cfg: PlotCfg,
    items: Vec<Item>,
    scaled: bool,
    spines: Spines,
    margin: f64,
}

impl SvgCanvas {
    pub fn new(cfg: PlotCfg) -> Self {
        Self {
            cfg,
            items: Vec::new(),
            scaled: false,
            spines: Spines::Frame,
            margin: 0.0,
        }
    }

    /// Number of recorded draw commands.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Union of the data bounds of all draw commands.
    pub fn data_bounds(&self) -> Option<BoundingBox> {
        self.items
            .iter()
            .filter_map(Item::bounds)
            .reduce(|a, b| a.union(&b))
    }

    /// Axis limits after margins; zero extents are widened to unit size.
    pub fn limits(&self) -> BoundingBox {
        let mut lim = self.data_bounds().unwrap_or_else(|| {
            BoundingBox::new(Vector2::new(-0.5, -0.5), Vector2::new(0.5, 0.5))
        });
        if lim.width() <= 0.0 || lim.height() <= 0.0 {
            let half = Vector2::new(
                if lim.width() > 0.0 { lim.width() * 0.5 } else { 0.5 },
                if lim.height() > 0.0 { lim.height() * 0.5 } else { 0.5 },
            );
            let c = lim.center();
            lim = BoundingBox::new(c - half, c + half);
        }
        lim.expand(self.margin)
    }

    fn viewport(&self) -> Viewport {
        let limits = self.limits();
        let w = f64::from(self.cfg.width_px);
        let h = f64::from(self.cfg.height_px);
        let mut sx = w / limits.width();
        let mut sy = h / limits.height();
        let (mut ox, mut oy) = (0.0, 0.0);
        if self.scaled {
            let s = sx.min(sy);
            ox = (w - limits.width() * s) * 0.5;
            oy = (h - limits.height() * s) * 0.5;
            sx = s;
            sy = s;
        }
        Viewport {
            limits,
            sx,
            sy,
            ox,
            oy,
            height: h,
        }
    }

    fn stroke<T>(&self, node: T, style: &PlotStyle) -> T
    where
        T: StyledNode,
    {
        let mut node = node
            .with("fill", "none".to_string())
            .with(
                "stroke",
                style.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            )
            .with(
                "stroke-width",
                format_num(style.line_width.unwrap_or(self.cfg.stroke_px)),
            );
        if let Some(dash) = &style.dash {
            let pattern: Vec<String> = dash.iter().map(|&d| format_num(d)).collect();
            node = node.with("stroke-dasharray", pattern.join(","));
        }
        if let Some(opacity) = style.opacity {
            node = node.with("stroke-opacity", format_num(opacity));
        }
        node
    }

    fn spines(&self, vp: &Viewport) -> Group {
        let lim = vp.limits;
        let mut group = Group::new().set("class", "spines");
        let (left, bottom) = match self.spines {
            Spines::Frame => {
                let (x0, y0) = vp.px(lim.min);
                let (x1, y1) = vp.px(lim.max);
                let frame = Rectangle::new()
                    .set("x", format_num(x0))
                    .set("y", format_num(y1))
                    .set("width", format_num(x1 - x0))
                    .set("height", format_num(y0 - y1));
                return group.add(self.stroke(frame, &PlotStyle::default()));
            }
            Spines::Open { trim: true } => {
                let data = self.data_bounds().unwrap_or(lim);
                ((data.min.y, data.max.y), (data.min.x, data.max.x))
            }
            Spines::Open { trim: false } => ((lim.min.y, lim.max.y), (lim.min.x, lim.max.x)),
        };
        let (lx, ly0) = vp.px(Vector2::new(lim.min.x, left.0));
        let (_, ly1) = vp.px(Vector2::new(lim.min.x, left.1));
        let (bx0, by) = vp.px(Vector2::new(bottom.0, lim.min.y));
        let (bx1, _) = vp.px(Vector2::new(bottom.1, lim.min.y));
        for (x1, y1, x2, y2) in [(lx, ly0, lx, ly1), (bx0, by, bx1, by)] {
            let line = Line::new()
                .set("x1", format_num(x1))
                .set("y1", format_num(y1))
                .set("x2", format_num(x2))
                .set("y2", format_num(y2));
            group = group.add(self.stroke(line, &PlotStyle::default()));
        }
        group
    }

    /// Resolve all commands into an SVG document.
    pub fn to_document(&self) -> Document {
        let w = self.cfg.width_px;
        let h = self.cfg.height_px;
        let vp = self.viewport();
        let background = Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", self.cfg.background.clone());
        let mut doc = Document::new()
            .set("width", w)
            .set("height", h)
            .set("viewBox", (0, 0, w, h))
            .add(background)
            .add(self.spines(&vp));
        for item in &self.items {
            doc = match item {
                Item::Polyline { xs, ys, style } => {
                    let points: Vec<String> = xs
                        .iter()
                        .zip(ys.iter())
                        .map(|(&x, &y)| {
                            let (px, py) = vp.px(Vector2::new(x, y));
                            format!("{},{}", format_num(px), format_num(py))
                        })
                        .collect();
                    doc.add(self.stroke(Polyline::new().set("points", points.join(" ")), style))
                }
                Item::Circle {
                    center,
                    radius,
                    style,
                } => {
                    let (cx, cy) = vp.px(*center);
                    let rx = radius.abs() * vp.sx;
                    let ry = radius.abs() * vp.sy;
                    if self.scaled {
                        let node = SvgCircle::new()
                            .set("cx", format_num(cx))
                            .set("cy", format_num(cy))
                            .set("r", format_num(rx));
                        doc.add(self.stroke(node, style))
                    } else {
                        let node = Ellipse::new()
                            .set("cx", format_num(cx))
                            .set("cy", format_num(cy))
                            .set("rx", format_num(rx))
                            .set("ry", format_num(ry));
                        doc.add(self.stroke(node, style))
                    }
                }
            };
        }
        doc
    }

    pub fn to_svg_string(&self) -> String {
        self.to_document().to_string()
    }

    /// Write the document to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        ::svg::save(path, &self.to_document())?;
        Ok(())
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new(PlotCfg::default())
    }
}

impl Canvas for SvgCanvas {
    fn polyline(&mut self, xs: &[f64], ys: &[f64], style: &PlotStyle) {
        let n = xs.len().min(ys.len());
        self.items.push(Item::Polyline {
            xs: xs[..n].to_vec(),
            ys: ys[..n].to_vec(),
            style: style.clone(),
        });
    }

    fn circle_outline(&mut self, center: Vector2<f64>, radius: f64, style: &PlotStyle) {
        self.items.push(Item::Circle {
            center,
            radius,
            style: style.clone(),
        });
    }

    fn axis_scaled(&mut self) {
        self.scaled = true;
    }

    fn despine(&mut self, trim: bool) {
        self.spines = Spines::Open { trim };
    }

    fn add_margin(&mut self, fraction: f64) {
        self.margin = fraction;
    }
}

/// Builder-style attribute setter shared by the element types we emit.
trait StyledNode: Sized {
    fn with(self, name: &str, value: String) -> Self;
}

macro_rules! styled {
    ($($t:ty),*) => {
        $(impl StyledNode for $t {
            #[inline]
            fn with(self, name: &str, value: String) -> Self {
                self.set(name, value)
            }
        })*
    };
}

styled!(Polyline, SvgCircle, Ellipse, Line, Rectangle);

/// Compact decimal formatting (at most 3 fractional digits, no trailing zeros).
fn format_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::Plot;
    use crate::shape::{circle, rectangle, regular_polygon};
    use tempfile::tempdir;

    #[test]
    fn format_num_is_compact() {
        assert_eq!(format_num(1.0), "1");
        assert_eq!(format_num(0.125), "0.125");
        assert_eq!(format_num(-0.0001), "0");
        assert_eq!(format_num(2.5), "2.5");
    }

    #[test]
    fn empty_canvas_renders_frame() {
        let canvas = SvgCanvas::default();
        assert!(canvas.is_empty());
        let s = canvas.to_svg_string();
        assert!(s.contains("<svg"));
        assert!(s.contains("<rect"));
    }

    #[test]
    fn polygon_outline_is_closed_and_black() {
        let mut canvas = SvgCanvas::default();
        rectangle(2.0, None).plot(&mut canvas, &PlotStyle::default());
        assert_eq!(canvas.len(), 1);
        let s = canvas.to_svg_string();
        assert!(s.contains("<polyline"));
        assert!(s.contains("stroke=\"black\""));
        assert!(s.contains("fill=\"none\""));
        // 4 vertices + closing vertex
        let points = s.split("points=\"").nth(1).unwrap().split('"').next().unwrap();
        let pts: Vec<&str> = points.split(' ').collect();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts.first(), pts.last());
    }

    #[test]
    fn margin_expands_limits() {
        let mut canvas = SvgCanvas::default();
        rectangle(2.0, None).plot(&mut canvas, &PlotStyle::default());
        let lim = canvas.limits();
        let pad = 2.0 * crate::plot::DEFAULT_MARGIN;
        assert!((lim.min.x - (-1.0 - pad)).abs() < 1e-12);
        assert!((lim.max.y - (1.0 + pad)).abs() < 1e-12);
    }

    #[test]
    fn scaled_axes_keep_aspect_on_wide_data() {
        let mut canvas = SvgCanvas::default();
        rectangle(4.0, Some(1.0)).plot(&mut canvas, &PlotStyle::default());
        let vp = canvas.viewport();
        assert_eq!(vp.sx, vp.sy);
        // wide data is centered vertically
        assert!(vp.oy > 0.0);
        assert!(vp.ox.abs() < 1e-9);
    }

    #[test]
    fn circle_uses_circle_element_and_override() {
        let mut canvas = SvgCanvas::default();
        let style = PlotStyle::default().color("red").dash(vec![4.0, 2.0]);
        circle(1.0, None).plot(&mut canvas, &style);
        let s = canvas.to_svg_string();
        assert!(s.contains("<circle"));
        assert!(s.contains("stroke=\"red\""));
        assert!(s.contains("stroke-dasharray=\"4,2\""));
        let bb = canvas.data_bounds().unwrap();
        assert_eq!(bb.width(), 2.0);
    }

    #[test]
    fn unscaled_circle_is_ellipse() {
        let mut canvas = SvgCanvas::new(PlotCfg {
            width_px: 600,
            height_px: 300,
            ..PlotCfg::default()
        });
        canvas.circle_outline(Vector2::zeros(), 1.0, &PlotStyle::default());
        assert!(canvas.to_svg_string().contains("<ellipse"));
    }

    #[test]
    fn degenerate_data_still_renders() {
        let mut canvas = SvgCanvas::default();
        rectangle(0.0, None).plot(&mut canvas, &PlotStyle::default());
        let lim = canvas.limits();
        assert!(lim.width() > 0.0 && lim.height() > 0.0);
        assert!(!canvas.to_svg_string().contains("NaN"));
    }

    #[test]
    fn save_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hex.svg");
        let mut canvas = SvgCanvas::default();
        regular_polygon(6, 1.0, 0.0)
            .unwrap()
            .plot(&mut canvas, &PlotStyle::default());
        canvas.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("<polyline"));
    }

    #[test]
    fn save_into_missing_dir_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("x.svg");
        let err = SvgCanvas::default().save(&path).unwrap_err();
        assert!(matches!(err, PlotError::Io(_)));
    }
}

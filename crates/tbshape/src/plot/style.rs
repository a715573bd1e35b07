//! Line styling with override-if-present merging.

/// Optional style overrides for a single draw command.
///
/// Unset fields fall back to the drawing routine's defaults via `with_defaults`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotStyle {
    pub color: Option<String>,
    pub line_width: Option<f64>,
    /// Dash pattern in pixels (on, off, on, ...).
    pub dash: Option<Vec<f64>>,
    pub opacity: Option<f64>,
}

impl PlotStyle {
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn dash(mut self, pattern: Vec<f64>) -> Self {
        self.dash = Some(pattern);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Fields set on `self` win; the rest come from `defaults`.
    pub fn with_defaults(&self, defaults: &PlotStyle) -> PlotStyle {
        PlotStyle {
            color: self.color.clone().or_else(|| defaults.color.clone()),
            line_width: self.line_width.or(defaults.line_width),
            dash: self.dash.clone().or_else(|| defaults.dash.clone()),
            opacity: self.opacity.or(defaults.opacity),
        }
    }
}

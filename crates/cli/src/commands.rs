//! Subcommand implementations; `main` only parses and dispatches.

use anyhow::{bail, Context, Result};
use clap::Args;
use nalgebra::Vector3;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tbshape::lattice::{self, Translation};
use tbshape::plot::{Plot, PlotCfg, PlotStyle, SvgCanvas};
use tbshape::shape::{self, Polygon};

use crate::provenance::{current_git_rev, write_sidecar, FigureRecord};

/// Output options shared by all figure-producing subcommands.
#[derive(Args, Clone, Debug)]
pub struct FigureArgs {
    /// Output SVG path; a `<stem>.provenance.json` is written next to it
    #[arg(long)]
    pub out: PathBuf,
    /// JSON file with style overrides: color, line_width, dash, opacity
    #[arg(long)]
    pub style: Option<PathBuf>,
    #[arg(long, default_value_t = 480)]
    pub width: u32,
    #[arg(long, default_value_t = 480)]
    pub height: u32,
}

/// On-disk style overrides; unknown keys are rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleFile {
    color: Option<String>,
    line_width: Option<f64>,
    dash: Option<Vec<f64>>,
    opacity: Option<f64>,
}

impl From<StyleFile> for PlotStyle {
    fn from(f: StyleFile) -> Self {
        PlotStyle {
            color: f.color,
            line_width: f.line_width,
            dash: f.dash,
            opacity: f.opacity,
        }
    }
}

fn load_style(path: Option<&Path>) -> Result<PlotStyle> {
    let Some(path) = path else {
        return Ok(PlotStyle::default());
    };
    let raw = fs::read(path).with_context(|| format!("reading style {}", path.display()))?;
    let parsed: StyleFile = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing style {}", path.display()))?;
    Ok(parsed.into())
}

#[track_caller]
fn render(shape: &dyn Plot, figure: &FigureArgs, record: FigureRecord) -> Result<PathBuf> {
    let style = load_style(figure.style.as_deref())?;
    let cfg = PlotCfg {
        width_px: figure.width,
        height_px: figure.height,
        ..PlotCfg::default()
    };
    let mut canvas = SvgCanvas::new(cfg.clone());
    shape.plot(&mut canvas, &style);

    let out = &figure.out;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    canvas
        .save(out)
        .with_context(|| format!("writing {}", out.display()))?;
    let record = record.drawn(canvas.data_bounds(), &cfg);
    let prov = write_sidecar(out, &record)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "figure_written");
    Ok(out.clone())
}

pub fn rectangle(x: f64, y: Option<f64>, figure: &FigureArgs) -> Result<PathBuf> {
    tracing::info!(x, y = ?y, "rectangle");
    let poly = shape::rectangle(x, y);
    tracing::debug!(%poly, "built");
    render(
        &poly,
        figure,
        FigureRecord::new(
            "rectangle",
            json!({ "x": x, "y": y, "vertices": poly.vertices() }),
        ),
    )
}

pub fn regular_polygon(
    sides: usize,
    radius: f64,
    angle: f64,
    figure: &FigureArgs,
) -> Result<PathBuf> {
    tracing::info!(sides, radius, angle, "regular_polygon");
    let poly = shape::regular_polygon(sides, radius, angle)?;
    render(
        &poly,
        figure,
        FigureRecord::new(
            "regular-polygon",
            json!({ "sides": sides, "radius": radius, "angle": angle, "vertices": poly.vertices() }),
        ),
    )
}

pub fn polygon(vertices: &str, figure: &FigureArgs) -> Result<PathBuf> {
    let pairs = parse_pairs(vertices)?;
    tracing::info!(count = pairs.len(), "polygon");
    let poly = Polygon::new(pairs)?;
    render(
        &poly,
        figure,
        FigureRecord::new("polygon", json!({ "vertices": poly.vertices() })),
    )
}

pub fn circle(radius: f64, center: Option<&str>, figure: &FigureArgs) -> Result<PathBuf> {
    let center = center.map(parse_center).transpose()?;
    tracing::info!(radius, center = ?center.map(|c| [c.x, c.y, c.z]), "circle");
    let c = shape::circle(radius, center);
    render(
        &c,
        figure,
        FigureRecord::new(
            "circle",
            json!({ "radius": c.radius, "center": [c.center.x, c.center.y, c.center.z] }),
        ),
    )
}

pub fn primitive(a1: Option<f64>, a2: Option<f64>, a3: Option<f64>, nanometers: bool) -> Value {
    let p = lattice::primitive(a1, a2, a3, nanometers);
    tracing::info!(lengths = ?p.lengths, nanometers, dims = p.dimensionality(), "primitive");
    json!({
        "lengths": p.lengths,
        "nanometers": p.nanometers,
        "dimensionality": p.dimensionality()
    })
}

pub fn symmetry(a1: Translation, a2: Translation, a3: Translation) -> Value {
    let sym = lattice::translational_symmetry(a1, a2, a3);
    tracing::info!(a1 = %a1, a2 = %a2, a3 = %a3, "symmetry");
    let names: Vec<String> = sym.directions().iter().map(ToString::to_string).collect();
    json!({ "lengths": sym.lengths, "directions": names })
}

pub fn report() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "version": tbshape::VERSION,
        "params": {},
        "outputs": []
    })
}

/// Parse `"x,y x,y ..."`; pairs may also be separated by `;`.
pub fn parse_pairs(s: &str) -> Result<Vec<(f64, f64)>> {
    s.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            let coords = parse_floats(tok)?;
            match coords.as_slice() {
                [x, y] => Ok((*x, *y)),
                _ => bail!("vertex '{tok}' must be 'x,y'"),
            }
        })
        .collect()
}

/// Parse `"x,y,z"` (or `"x,y"` with z = 0).
pub fn parse_center(s: &str) -> Result<Vector3<f64>> {
    match parse_floats(s)?.as_slice() {
        [x, y] => Ok(Vector3::new(*x, *y, 0.0)),
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => bail!("center '{s}' must be 'x,y' or 'x,y,z'"),
    }
}

fn parse_floats(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .with_context(|| format!("'{v}' is not a number"))
        })
        .collect()
}

/// `true` → automatic, `false` → disabled, anything numeric → manual length.
pub fn parse_translation(s: &str) -> Result<Translation, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(Translation::from(true)),
        "false" => Ok(Translation::from(false)),
        other => other
            .parse::<f64>()
            .map(Translation::from)
            .map_err(|_| format!("expected true, false or a length in nm, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn figure(out: PathBuf) -> FigureArgs {
        FigureArgs {
            out,
            style: None,
            width: 200,
            height: 200,
        }
    }

    #[test]
    fn pairs_parse_with_spaces_and_semicolons() {
        assert!(parse_pairs("0.5, 1").is_err());
        let v = parse_pairs("0,0 1,0;0.5,1").unwrap();
        assert_eq!(v, vec![(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);
        assert!(parse_pairs("1,2,3").is_err());
        assert!(parse_pairs("a,b").is_err());
    }

    #[test]
    fn center_accepts_two_or_three_components() {
        assert_eq!(parse_center("1,2").unwrap(), Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(parse_center("1,2,3").unwrap(), Vector3::new(1.0, 2.0, 3.0));
        assert!(parse_center("1").is_err());
    }

    #[test]
    fn translation_values() {
        assert_eq!(parse_translation("false"), Ok(Translation::Disabled));
        assert_eq!(parse_translation("True"), Ok(Translation::Automatic));
        assert_eq!(parse_translation("2.5"), Ok(Translation::Manual(2.5)));
        assert!(parse_translation("maybe").is_err());
    }

    #[test]
    fn symmetry_json_is_sentinel_encoded() {
        let v = symmetry(
            Translation::from(false),
            Translation::from(true),
            Translation::from(2.5),
        );
        assert_eq!(v["lengths"], json!([-1.0, 0.0, 2.5]));
        assert_eq!(v["directions"][2], "2.5 nm");
    }

    #[test]
    fn primitive_json_defaults_to_zero() {
        let v = primitive(None, None, None, false);
        assert_eq!(v["lengths"], json!([0.0, 0.0, 0.0]));
        assert_eq!(v["nanometers"], false);
        assert_eq!(v["dimensionality"], 0);
    }

    #[test]
    fn primitive_json_passes_negative_lengths_through() {
        let v = primitive(Some(-2.0), Some(3.0), None, true);
        assert_eq!(v["lengths"], json!([-2.0, 3.0, 0.0]));
        assert_eq!(v["dimensionality"], 2);
    }

    #[test]
    fn rectangle_writes_svg_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("figs").join("square.svg");
        let written = rectangle(4.0, None, &figure(out.clone())).unwrap();
        assert_eq!(written, out);
        let svg = fs::read_to_string(&out).unwrap();
        assert!(svg.contains("<polyline"));
        let prov: Value = serde_json::from_slice(
            &fs::read(dir.path().join("figs").join("square.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["command"], "rectangle");
        assert_eq!(prov["params"]["vertices"][0], json!([2.0, 2.0]));
        assert_eq!(prov["data_bounds"], json!([[-2.0, -2.0], [2.0, 2.0]]));
        assert_eq!(prov["canvas"], json!([200, 200]));
    }

    #[test]
    fn polygon_with_two_vertices_fails() {
        let dir = tempdir().unwrap();
        let err = polygon("0,0 1,1", &figure(dir.path().join("p.svg"))).unwrap_err();
        assert!(err.to_string().contains("at least 3 sides"));
        assert!(!dir.path().join("p.svg").exists());
    }

    #[test]
    fn style_file_overrides_color() {
        let dir = tempdir().unwrap();
        let style_path = dir.path().join("style.json");
        fs::write(&style_path, r#"{"color": "red", "dash": [2, 1]}"#).unwrap();
        let mut fig = figure(dir.path().join("c.svg"));
        fig.style = Some(style_path);
        circle(1.0, Some("0,0,0"), &fig).unwrap();
        let svg = fs::read_to_string(dir.path().join("c.svg")).unwrap();
        assert!(svg.contains("stroke=\"red\""));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn unknown_style_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let style_path = dir.path().join("style.json");
        fs::write(&style_path, r#"{"colour": "red"}"#).unwrap();
        assert!(load_style(Some(style_path.as_path())).is_err());
    }
}

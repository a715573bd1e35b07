//! Sidecar records written next to every figure.
//!
//! `hexagon.svg` gets `hexagon.provenance.json` holding the command and its
//! parameters, the data bounds that were drawn, the canvas size, the tool
//! version and the commit the binary was built from.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use tbshape::plot::PlotCfg;
use tbshape::shape::BoundingBox;

/// What was drawn and how; serialized as the sidecar body.
#[derive(Debug, Serialize)]
pub struct FigureRecord {
    pub command: String,
    pub params: Value,
    /// `[[min_x, min_y], [max_x, max_y]]` of the drawn shape, before margins.
    pub data_bounds: Option<[[f64; 2]; 2]>,
    /// `[width_px, height_px]`.
    pub canvas: [u32; 2],
}

impl FigureRecord {
    pub fn new(command: impl Into<String>, params: Value) -> Self {
        Self {
            command: command.into(),
            params,
            data_bounds: None,
            canvas: [0, 0],
        }
    }

    pub fn drawn(mut self, bounds: Option<BoundingBox>, cfg: &PlotCfg) -> Self {
        self.data_bounds = bounds.map(|b| [[b.min.x, b.min.y], [b.max.x, b.max.y]]);
        self.canvas = [cfg.width_px, cfg.height_px];
        self
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    #[serde(flatten)]
    figure: &'a FigureRecord,
    outputs: [String; 1],
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Write the sidecar for `figure`; returns its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(figure: P, record: &FigureRecord) -> Result<PathBuf> {
    let figure = figure.as_ref();
    let path = sidecar_path(figure);
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: tbshape::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        figure: record,
        outputs: [figure.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(figure: &Path) -> PathBuf {
    let stem = figure
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "figure".to_string());
    figure.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit hash: compile-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

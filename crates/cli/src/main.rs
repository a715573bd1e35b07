use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tbshape::lattice::Translation;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod provenance;

use commands::FigureArgs;

#[derive(Parser)]
#[command(name = "tbshape")]
#[command(about = "Build, inspect and plot lattice shape descriptors")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Rectangle centered at the origin (square when --y is omitted)
    Rectangle {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: Option<f64>,
        #[command(flatten)]
        figure: FigureArgs,
    },
    /// Regular polygon; the angle offset is measured from the y-axis
    RegularPolygon {
        #[arg(long)]
        sides: usize,
        #[arg(long, allow_hyphen_values = true)]
        radius: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        angle: f64,
        #[command(flatten)]
        figure: FigureArgs,
    },
    /// Polygon from explicit vertices, e.g. --vertices "0,0 1,0 0,1"
    Polygon {
        #[arg(long, allow_hyphen_values = true)]
        vertices: String,
        #[command(flatten)]
        figure: FigureArgs,
    },
    /// Circle, e.g. --radius 2 --center 0,1,0
    Circle {
        #[arg(long, allow_hyphen_values = true)]
        radius: f64,
        #[arg(long, allow_hyphen_values = true)]
        center: Option<String>,
        #[command(flatten)]
        figure: FigureArgs,
    },
    /// Print a primitive unit cell descriptor as JSON
    Primitive {
        #[arg(long, allow_hyphen_values = true)]
        a1: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        a2: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        a3: Option<f64>,
        /// Lengths are in nanometers instead of unit vector lengths
        #[arg(long)]
        nanometers: bool,
    },
    /// Print an encoded translational symmetry as JSON (true | false | <nm>)
    Symmetry {
        #[arg(
            long,
            default_value = "true",
            allow_hyphen_values = true,
            value_parser = commands::parse_translation
        )]
        a1: Translation,
        #[arg(
            long,
            default_value = "true",
            allow_hyphen_values = true,
            value_parser = commands::parse_translation
        )]
        a2: Translation,
        #[arg(
            long,
            default_value = "true",
            allow_hyphen_values = true,
            value_parser = commands::parse_translation
        )]
        a3: Translation,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Rectangle { x, y, figure } => {
            commands::rectangle(x, y, &figure).map(report_written)
        }
        Action::RegularPolygon {
            sides,
            radius,
            angle,
            figure,
        } => commands::regular_polygon(sides, radius, angle, &figure).map(report_written),
        Action::Polygon { vertices, figure } => {
            commands::polygon(&vertices, &figure).map(report_written)
        }
        Action::Circle {
            radius,
            center,
            figure,
        } => commands::circle(radius, center.as_deref(), &figure).map(report_written),
        Action::Primitive {
            a1,
            a2,
            a3,
            nanometers,
        } => print_json(&commands::primitive(a1, a2, a3, nanometers)),
        Action::Symmetry { a1, a2, a3 } => print_json(&commands::symmetry(a1, a2, a3)),
        Action::Report => print_json(&commands::report()),
    }
}

fn report_written(path: PathBuf) {
    println!("{}", path.display());
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//! Render the bundled shape factories side by side as SVG files.
//!
//! Usage:
//!   cargo run -p tbshape --example shape_gallery -- [out_dir]
//!
//! Writes rectangle.svg, hexagon.svg, circle.svg and overlay.svg.

use std::path::PathBuf;
use tbshape::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".to_string()));
    std::fs::create_dir_all(&out)?;

    let rect = rectangle(3.0, Some(1.5));
    let hex = regular_polygon(6, 1.0, 0.0)?;
    let disk = circle(1.2, None);

    let figures: [(&str, &dyn Plot); 3] = [
        ("rectangle.svg", &rect),
        ("hexagon.svg", &hex),
        ("circle.svg", &disk),
    ];
    for (name, shape) in figures {
        let mut canvas = SvgCanvas::default();
        shape.plot(&mut canvas, &PlotStyle::default());
        canvas.save(out.join(name))?;
        println!("wrote {}", out.join(name).display());
    }

    let mut overlay = SvgCanvas::default();
    hex.plot(&mut overlay, &PlotStyle::default().color("steelblue"));
    disk.plot(&mut overlay, &PlotStyle::default().color("firebrick").dash(vec![4.0, 3.0]));
    overlay.save(out.join("overlay.svg"))?;
    println!("wrote {}", out.join("overlay.svg").display());

    let cell = primitive(Some(4.0), Some(2.0), None, false);
    let sym = translational_symmetry(true, false, false);
    println!("primitive cell: {:?}", cell);
    println!("translational symmetry: {:?}", sym.directions());
    Ok(())
}

//! Entry point that generates the neuron figure and prints a summary.
//!
//! Drawing is left to whatever consumes the geometry; this binary only
//! runs the seeded generation pass and reports what each panel holds.
//! Set `RUST_LOG=debug` (or `trace`) to follow the generator itself.

use glam::Vec3;
use neurite_core::{NeuronGeometry, config::FigureConfig, figure::Figure};

/// Generates the figure with the default configuration and prints one
/// line per panel.
///
/// ### Returns
/// - `Ok(())` once every panel has been summarized.
/// - `Err` if the configuration fails validation.
fn main() -> Result<(), neurite_core::GrowthError> {
    env_logger::init();

    let cfg = FigureConfig::default();
    let figure = Figure::generate(&cfg)?;

    println!("seed {}", cfg.seed);
    for (label, geo) in figure.panels() {
        println!("{label:>9}: {}", summarize(geo));
    }
    println!(
        "{:>9}: {} markers",
        "C mid",
        figure.bundle_midpoints.len()
    );
    Ok(())
}

fn summarize(geo: &NeuronGeometry) -> String {
    let bounds = match geo.bounds() {
        Some((min, max)) => format!("{} .. {}", fmt_point(min), fmt_point(max)),
        None => "empty".to_string(),
    };
    format!(
        "{} polylines, {} points, {} anchors, bounds {}",
        geo.len(),
        geo.point_count(),
        geo.anchors.len(),
        bounds
    )
}

fn fmt_point(p: Vec3) -> String {
    format!("({:.1}, {:.1}, {:.1})", p.x, p.y, p.z)
}

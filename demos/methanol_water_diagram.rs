//! Renders the stepped diagram of a methanol-water-like column to a PNG.
//!
//! Run with `cargo run --example methanol_water_diagram --features plot`.

use separation_models::models::distillation::mccabe_thiele::{
    core::{
        Column, Compositions, FeedQuality, MurphreeEfficiency, RefluxFactor, VaporPressures, solve,
    },
    diagram::{DiagramConfig, assemble},
    plot::{PlotConfig, render},
};
use uom::si::{f64::Pressure, pressure::kilopascal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let column = Column {
        vapor_pressures: VaporPressures::new(
            Pressure::new::<kilopascal>(300.0),
            Pressure::new::<kilopascal>(74.3),
        )?,
        compositions: Compositions::new(0.913, 0.087, 0.5)?,
        feed_quality: FeedQuality::new(0.5)?,
        reflux_factor: RefluxFactor::new(1.8)?,
        efficiency: MurphreeEfficiency::new(0.75)?,
    };

    let results = solve(&column)?;
    let diagram = assemble(&column, &results, &DiagramConfig::default());

    let path = "methanol_water.png";
    render(&diagram, path, &PlotConfig::default())?;
    println!(
        "rendered {} stages (feed at {}) to {path}",
        results.stage_count(),
        results.feed_stage,
    );

    Ok(())
}

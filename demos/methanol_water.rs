//! Solves a methanol-water-like column and prints the construction.

use separation_models::models::distillation::mccabe_thiele::core::{
    Column, Compositions, FeedQuality, MurphreeEfficiency, RefluxFactor, VaporPressures, solve,
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

    println!("relative volatility:     {:.4}", results.relative_volatility);
    println!("minimum reflux ratio:    {:.4}", results.reflux.minimum);
    println!("operating reflux ratio:  {:.4}", results.reflux.actual);
    println!("equilibrium stages:      {}", results.stage_count());
    println!("optimal feed stage:      {}", results.feed_stage);
    println!("actual bottoms fraction: {:.4}", results.bottoms_actual);
    println!();
    for (index, stage) in results.stages.iter().enumerate() {
        println!(
            "stage {:>2}: ({:.4}, {:.4}) -> ({:.4}, {:.4})",
            index + 1,
            stage.from.x,
            stage.from.y,
            stage.to.x,
            stage.to.y,
        );
    }

    Ok(())
}

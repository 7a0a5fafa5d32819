//! Core McCabe-Thiele construction.
//!
//! Given a binary pair's vapor pressures, the specified product and feed
//! compositions, the feed thermal condition, a reflux-ratio factor, and a
//! Murphree stage efficiency, the construction determines the minimum and
//! actual reflux ratios, steps off equilibrium stages from the distillate
//! down to the bottoms, and reports the stage coordinates along with the
//! feed-stage location and the bottoms composition actually reached.
//!
//! # Example
//!
//! ```
//! use separation_models::models::distillation::mccabe_thiele::core::{
//!     Column, Compositions, FeedQuality, MurphreeEfficiency, RefluxFactor, VaporPressures, solve,
//! };
//! use uom::si::{f64::Pressure, pressure::kilopascal};
//!
//! let column = Column {
//!     vapor_pressures: VaporPressures::new(
//!         Pressure::new::<kilopascal>(300.0),
//!         Pressure::new::<kilopascal>(74.3),
//!     )?,
//!     compositions: Compositions::new(0.913, 0.087, 0.5)?,
//!     feed_quality: FeedQuality::new(0.5)?,
//!     reflux_factor: RefluxFactor::new(1.8)?,
//!     efficiency: MurphreeEfficiency::new(0.75)?,
//! };
//!
//! let results = solve(&column)?;
//! assert_eq!(results.stage_count(), 8);
//! assert_eq!(results.feed_stage, 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod equilibrium;
mod input;
mod intersection;
mod reflux;
mod results;
mod solve;
mod stepping;

#[cfg(test)]
mod test_support;

pub use equilibrium::EquilibriumCurve;
pub use input::{
    Column, Compositions, FeedQuality, MurphreeEfficiency, RefluxFactor, VaporPressures,
};
pub use reflux::Reflux;
pub use results::{Point, Results, Stage};
pub use solve::{SolveConfig, SolveError, solve, solve_with};

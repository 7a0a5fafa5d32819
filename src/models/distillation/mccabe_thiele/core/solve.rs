//! Core McCabe-Thiele solve pipeline.

mod error;

pub use error::SolveError;

use super::{Column, EquilibriumCurve, Results, intersection, reflux, stepping};

/// Configuration for the construction.
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    /// Hard cap on the number of stages stepped off before the construction
    /// is declared non-convergent. The cap converts inconsistent inputs
    /// (a reflux factor at or below one, an unreachable bottoms target)
    /// into a reported error instead of an endless loop.
    pub max_stages: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self { max_stages: 1000 }
    }
}

/// Performs the McCabe-Thiele construction with the default configuration.
///
/// # Errors
///
/// Returns a [`SolveError`] when the input geometry is singular, an
/// intersection has no real solution, or stepping fails to reach the
/// bottoms composition.
pub fn solve(column: &Column) -> Result<Results, SolveError> {
    solve_with(column, SolveConfig::default())
}

/// Performs the McCabe-Thiele construction.
///
/// The pipeline runs in dependency order: relative volatility fixes the
/// equilibrium curve; the feed-line pinch fixes the minimum reflux; the
/// reflux factor fixes the operating reflux and with it the switch point
/// between the two operating lines; stage stepping then walks the staircase
/// from the distillate down to the bottoms.
///
/// # Errors
///
/// Returns a [`SolveError`] when the input geometry is singular, an
/// intersection has no real solution, or stepping fails to reach the
/// bottoms composition within `config.max_stages` stages.
pub fn solve_with(column: &Column, config: SolveConfig) -> Result<Results, SolveError> {
    let relative_volatility = column.vapor_pressures.relative_volatility();
    let curve = EquilibriumCurve::new(relative_volatility, column.efficiency.value());

    let distillate = column.compositions.distillate();
    let bottoms = column.compositions.bottoms();
    let feed = column.compositions.feed();

    let pinch = intersection::feed_line_pinch(&curve, feed, &column.feed_quality)?;
    let reflux = reflux::from_pinch(distillate, pinch, &column.reflux_factor)?;
    let switch = intersection::operating_line_switch(
        distillate,
        reflux.intercept,
        feed,
        &column.feed_quality,
    )?;

    let staircase = stepping::step_off(
        &curve,
        distillate,
        bottoms,
        &reflux,
        switch,
        config.max_stages,
    )?;

    Ok(Results {
        relative_volatility,
        reflux,
        pinch,
        switch,
        stages: staircase.stages,
        feed_stage: staircase.feed_stage,
        bottoms_actual: staircase.bottoms_actual,
    })
}

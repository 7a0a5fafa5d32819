//! Staircase construction between the equilibrium curve and the operating
//! lines.

use super::{EquilibriumCurve, Point, Reflux, Stage, solve::SolveError};

/// Bottoms compositions this close to the switch point leave the stripping
/// line undefined.
const SINGULAR_TOL: f64 = 1e-12;

/// Which operating line the staircase is currently stepping against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Rectifying,
    Stripping,
}

/// Rectifying-section operating line through `(xd, xd)` with slope
/// `R / (R + 1)`.
#[derive(Debug, Clone, Copy)]
struct RectifyingLine {
    reflux: f64,
    distillate: f64,
}

impl RectifyingLine {
    fn y_at(&self, x: f64) -> f64 {
        (self.reflux * x) / (self.reflux + 1.0) + self.distillate / (self.reflux + 1.0)
    }
}

/// Stripping-section operating line through `(xb, xb)` and the switch point.
#[derive(Debug, Clone, Copy)]
struct StrippingLine {
    slope: f64,
    intercept: f64,
}

impl StrippingLine {
    fn through(bottoms: f64, switch: Point) -> Result<Self, SolveError> {
        if (bottoms - switch.x).abs() < SINGULAR_TOL {
            return Err(SolveError::singular(
                "bottoms composition coincides with the operating-line switch point",
            ));
        }
        let slope = (bottoms - switch.y) / (bottoms - switch.x);
        Ok(Self {
            slope,
            intercept: switch.y - slope * switch.x,
        })
    }

    fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// The completed staircase.
#[derive(Debug, Clone)]
pub(super) struct Staircase {
    pub stages: Vec<Stage>,
    pub feed_stage: usize,
    pub bottoms_actual: f64,
}

/// Steps off equilibrium stages from `(xd, xd)` down to the bottoms
/// composition.
///
/// Each stage moves horizontally to the equilibrium curve (by inverting the
/// corrected equilibrium relation) and then vertically to the active
/// operating line. The stage whose liquid composition first reaches the
/// switch point is the feed stage; its vertical move, and every stage after
/// it, uses the stripping line. Stepping ends once the liquid composition
/// reaches the bottoms target.
///
/// # Errors
///
/// Fails with the 1-based stage index if the equilibrium inversion has no
/// real solution at some stage, and with
/// [`SolveError::NonConvergent`] if `max_stages` stages do not reach the
/// bottoms composition (a reflux factor at or below one pinches the
/// staircase at the feed and always ends up here).
pub(super) fn step_off(
    curve: &EquilibriumCurve,
    distillate: f64,
    bottoms: f64,
    reflux: &Reflux,
    switch: Point,
    max_stages: usize,
) -> Result<Staircase, SolveError> {
    let rectifying = RectifyingLine {
        reflux: reflux.actual,
        distillate,
    };
    let stripping = StrippingLine::through(bottoms, switch)?;

    let mut stages = Vec::new();
    let mut section = Section::Rectifying;
    let mut feed_stage = 0;
    let mut from = Point {
        x: distillate,
        y: distillate,
    };

    for stage_index in 1..=max_stages {
        let x = curve.liquid(from.y).map_err(|err| {
            SolveError::quadratic("stage equilibrium inversion", Some(stage_index), err)
        })?;

        if section == Section::Rectifying && x <= switch.x {
            section = Section::Stripping;
            feed_stage = stage_index;
        }

        let y = match section {
            Section::Rectifying => rectifying.y_at(x),
            Section::Stripping => stripping.y_at(x),
        };

        let to = Point { x, y };
        stages.push(Stage { from, to });

        if section == Section::Stripping && x <= bottoms {
            return Ok(Staircase {
                stages,
                feed_stage,
                bottoms_actual: x,
            });
        }

        from = to;
    }

    Err(SolveError::NonConvergent {
        max_stages,
        last_composition: from.x,
    })
}

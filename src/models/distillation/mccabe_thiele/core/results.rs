//! Result types for the McCabe-Thiele construction.

use super::Reflux;

/// A point in the unit-square composition plane (liquid `x`, vapor `y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One equilibrium stage of the staircase.
///
/// A stage moves horizontally from `from` to the equilibrium curve and then
/// vertically down to the active operating line at `to`. Stages are produced
/// top-down, from the distillate toward the bottoms, and never mutated after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// Where the stage starts, on the active operating line (or at the
    /// distillate point `(xd, xd)` for the first stage).
    pub from: Point,

    /// Where the stage ends after the equilibrium and operating-line moves.
    pub to: Point,
}

impl Stage {
    /// Corner where the horizontal equilibrium move meets the vertical
    /// operating-line move.
    #[must_use]
    pub fn corner(&self) -> Point {
        Point {
            x: self.to.x,
            y: self.from.y,
        }
    }
}

/// Complete artifact set of one McCabe-Thiele construction.
///
/// Everything a reporting or rendering layer needs: the scalar design
/// results plus the geometry of the stepped diagram.
#[derive(Debug, Clone)]
pub struct Results {
    /// Relative volatility of the pair, α = P_light / P_heavy.
    pub relative_volatility: f64,

    /// Minimum and operating reflux ratios with the rectifying intercept.
    pub reflux: Reflux,

    /// Where the feed line meets the equilibrium curve. The operating line
    /// through this point is the minimum-reflux pinch.
    pub pinch: Point,

    /// Where the rectifying operating line meets the feed line; the
    /// staircase switches to the stripping line past this point.
    pub switch: Point,

    /// Equilibrium stages, ordered from the distillate down, 1-indexed by
    /// position (stage `i` is `stages[i - 1]`).
    pub stages: Vec<Stage>,

    /// 1-based index of the optimal feed stage: the stage whose liquid
    /// composition first crosses the switch point.
    pub feed_stage: usize,

    /// Liquid composition actually reached by the final stage. Slightly
    /// below the specified bottoms composition in general, because stages
    /// are discrete.
    pub bottoms_actual: f64,
}

impl Results {
    /// Number of equilibrium stages stepped off.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_corner_joins_the_two_moves() {
        let stage = Stage {
            from: Point { x: 0.913, y: 0.913 },
            to: Point { x: 0.813, y: 0.846 },
        };
        assert_eq!(stage.corner(), Point { x: 0.813, y: 0.913 });
    }
}

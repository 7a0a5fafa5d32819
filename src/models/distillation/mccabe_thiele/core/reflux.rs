//! Reflux ratios derived from the feed-line pinch.

use super::{Point, RefluxFactor, solve::SolveError};

/// Distillate compositions this close to the pinch make minimum reflux
/// undefined.
const SINGULAR_TOL: f64 = 1e-12;

/// Minimum and operating reflux ratios, with the rectifying line's
/// y-intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflux {
    /// Minimum reflux ratio `R_min`: the theoretical limit at which the
    /// rectifying line pinches the equilibrium curve and the stage count
    /// diverges.
    pub minimum: f64,

    /// Operating reflux ratio, `R = factor · R_min`.
    pub actual: f64,

    /// The rectifying line's y-intercept at the operating reflux,
    /// `θ = xd / (R + 1)`.
    pub intercept: f64,
}

/// Derives the reflux ratios from the feed-line pinch.
///
/// At minimum reflux the rectifying line runs from `(xd, xd)` through the
/// pinch, so its y-intercept is `θ_min = xd·(1 − (xd − y_p)/(xd − x_p))`
/// and `R_min = xd/θ_min − 1`.
pub(super) fn from_pinch(
    distillate: f64,
    pinch: Point,
    factor: &RefluxFactor,
) -> Result<Reflux, SolveError> {
    if (distillate - pinch.x).abs() < SINGULAR_TOL {
        return Err(SolveError::singular(
            "distillate composition coincides with the feed-line pinch",
        ));
    }

    let intercept_min = distillate * (1.0 - (distillate - pinch.y) / (distillate - pinch.x));
    if intercept_min.abs() < SINGULAR_TOL {
        return Err(SolveError::singular(
            "minimum-reflux intercept vanished; minimum reflux is unbounded",
        ));
    }

    let minimum = distillate / intercept_min - 1.0;
    let actual = factor.value() * minimum;
    if (actual + 1.0).abs() < SINGULAR_TOL {
        return Err(SolveError::singular(
            "operating reflux ratio of -1 has no rectifying line",
        ));
    }

    Ok(Reflux {
        minimum,
        actual,
        intercept: distillate / (actual + 1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    // Feed-line pinch of the reference column.
    const PINCH: Point = Point {
        x: 0.37519928208833503,
        y: 0.624800717911665,
    };

    #[test]
    fn reference_reflux_ratios() {
        let reflux = from_pinch(0.913, PINCH, &RefluxFactor::new(1.8).unwrap()).unwrap();

        assert_relative_eq!(reflux.minimum, 1.1546379175972565);
        assert_relative_eq!(reflux.actual, 2.0783482516750618);
        assert_relative_eq!(reflux.intercept, 0.29658762601118877);
    }

    #[test]
    fn operating_reflux_scales_with_the_factor() {
        let at_1_8 = from_pinch(0.913, PINCH, &RefluxFactor::new(1.8).unwrap()).unwrap();
        let at_3_6 = from_pinch(0.913, PINCH, &RefluxFactor::new(3.6).unwrap()).unwrap();

        assert_relative_eq!(at_3_6.minimum, at_1_8.minimum);
        assert_relative_eq!(at_3_6.actual, 2.0 * at_1_8.actual);
        assert!(at_3_6.intercept < at_1_8.intercept);
    }

    #[test]
    fn distillate_on_the_pinch_is_singular() {
        let result = from_pinch(PINCH.x, PINCH, &RefluxFactor::new(1.8).unwrap());
        match result {
            Err(SolveError::SingularConfiguration { .. }) => {}
            other => panic!("expected SingularConfiguration, got: {other:?}"),
        }
    }
}

//! Intersections between the feed line, the equilibrium curve, and the
//! rectifying operating line.

use crate::support::quadratic::{Branch, Quadratic};

use super::{EquilibriumCurve, FeedQuality, Point, solve::SolveError};

/// Denominators below this magnitude make an intersection undefined.
const SINGULAR_TOL: f64 = 1e-12;

/// Finds where the feed line ("q-line") meets the efficiency-corrected
/// equilibrium curve.
///
/// Substituting the feed line `y = q/(q−1)·x − xf/(q−1)` into the corrected
/// equilibrium relation yields a quadratic in the liquid composition with
///
/// ```text
/// a = αq/(q−1) − α + αnm − q/(q−1) + 1 − nm
/// b = q/(q−1) − 1 + nm + αxf/(1−q) − xf/(1−q) − αnm
/// c = xf/(1−q)
/// ```
///
/// The physically valid root lies on different branches of the quadratic
/// depending on the feed's thermal condition: the plus root for a subcooled
/// feed (`q > 1`), the minus root otherwise. The rejected branch lands
/// outside the unit interval.
pub(super) fn feed_line_pinch(
    curve: &EquilibriumCurve,
    feed: f64,
    quality: &FeedQuality,
) -> Result<Point, SolveError> {
    let alpha = curve.relative_volatility();
    let nm = curve.efficiency();
    let q = quality.value();
    let slope = quality.line_slope();

    let quadratic = Quadratic::new(
        ((alpha * q) / (q - 1.0)) - alpha + (alpha * nm) - slope + 1.0 - nm,
        slope - 1.0 + nm + ((alpha * feed) / (1.0 - q)) - (feed / (1.0 - q)) - (alpha * nm),
        feed / (1.0 - q),
    );

    let branch = if q > 1.0 { Branch::Plus } else { Branch::Minus };
    let x = quadratic
        .root(branch)
        .map_err(|err| SolveError::quadratic("feed-line/equilibrium intersection", None, err))?;

    Ok(Point {
        x,
        y: curve.vapor(x),
    })
}

/// Finds where the rectifying operating line meets the feed line, the
/// point past which the staircase switches to the stripping line.
///
/// The rectifying line runs through `(xd, xd)` with y-intercept `θ`, so its
/// slope is `(xd − θ)/xd`; intersecting it with the feed line gives
/// `x = (θ − xf/(1−q)) / (q/(q−1) − (xd − θ)/xd)`.
pub(super) fn operating_line_switch(
    distillate: f64,
    intercept: f64,
    feed: f64,
    quality: &FeedQuality,
) -> Result<Point, SolveError> {
    let q = quality.value();
    let rectifying_slope = (distillate - intercept) / distillate;

    let denominator = quality.line_slope() - rectifying_slope;
    if denominator.abs() < SINGULAR_TOL {
        return Err(SolveError::singular(
            "feed line is parallel to the rectifying line",
        ));
    }

    let x = (intercept - (feed / (1.0 - q))) / denominator;
    Ok(Point {
        x,
        y: x * rectifying_slope + intercept,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const ALPHA: f64 = 4.037685060565276;

    #[test]
    fn pinch_matches_reference_for_a_half_liquid_feed() {
        let curve = EquilibriumCurve::new(ALPHA, 0.75);
        let quality = FeedQuality::new(0.5).unwrap();

        let pinch = feed_line_pinch(&curve, 0.5, &quality).unwrap();
        assert_relative_eq!(pinch.x, 0.37519928208833503);
        assert_relative_eq!(pinch.y, 0.624800717911665);
    }

    #[test]
    fn pinch_lies_on_both_curves() {
        let curve = EquilibriumCurve::new(ALPHA, 0.75);
        for q in [-0.2, 0.3, 0.5, 1.2] {
            let quality = FeedQuality::new(q).unwrap();
            let pinch = feed_line_pinch(&curve, 0.5, &quality).unwrap();

            // On the corrected equilibrium curve.
            assert_abs_diff_eq!(pinch.y, curve.vapor(pinch.x), epsilon = 1e-12);

            // On the feed line through (xf, xf).
            let on_feed_line = quality.line_slope() * (pinch.x - 0.5) + 0.5;
            assert_abs_diff_eq!(pinch.y, on_feed_line, epsilon = 1e-9);
        }
    }

    #[test]
    fn subcooled_feed_takes_the_plus_branch() {
        let curve = EquilibriumCurve::new(ALPHA, 0.75);
        let quality = FeedQuality::new(1.2).unwrap();

        let pinch = feed_line_pinch(&curve, 0.5, &quality).unwrap();
        assert_relative_eq!(pinch.x, 0.5426961826150709);

        // The minus branch would land outside the unit interval.
        let slope = quality.line_slope();
        let q = quality.value();
        let nm = 0.75;
        let quadratic = Quadratic::new(
            (ALPHA * slope) - ALPHA + (ALPHA * nm) - slope + 1.0 - nm,
            slope - 1.0 + nm + ((ALPHA * 0.5) / (1.0 - q)) - (0.5 / (1.0 - q)) - (ALPHA * nm),
            0.5 / (1.0 - q),
        );
        let rejected = quadratic.root(Branch::Minus).unwrap();
        assert!(!(0.0..=1.0).contains(&rejected));
    }

    #[test]
    fn saturated_feeds_are_safe_after_the_nudge() {
        let curve = EquilibriumCurve::new(ALPHA, 0.75);

        let saturated_liquid = FeedQuality::new(1.0).unwrap();
        let pinch = feed_line_pinch(&curve, 0.5, &saturated_liquid).unwrap();
        assert_relative_eq!(pinch.x, 0.4999999977387791);
        assert_relative_eq!(pinch.y, 0.7261220929319564);

        let saturated_vapor = FeedQuality::new(0.0).unwrap();
        let pinch = feed_line_pinch(&curve, 0.5, &saturated_vapor).unwrap();
        assert_relative_eq!(pinch.x, 0.2559156162441113);
        assert_relative_eq!(pinch.y, 0.5000000024408439);
    }

    #[test]
    fn degenerate_feed_line_quadratic_is_singular() {
        // The leading coefficient is (α−1)·(q/(q−1) − 1 + nm), which
        // vanishes when q = (nm−1)/nm.
        let curve = EquilibriumCurve::new(ALPHA, 0.75);
        let quality = FeedQuality::new((0.75 - 1.0) / 0.75).unwrap();

        match feed_line_pinch(&curve, 0.5, &quality) {
            Err(SolveError::SingularConfiguration { .. }) => {}
            other => panic!("expected SingularConfiguration, got: {other:?}"),
        }
    }

    #[test]
    fn switch_point_matches_reference() {
        let quality = FeedQuality::new(0.5).unwrap();
        let switch =
            operating_line_switch(0.913, 0.29658762601118877, 0.5, &quality).unwrap();
        assert_relative_eq!(switch.x, 0.41990996566664557);
        assert_relative_eq!(switch.y, 0.5800900343333544);
    }

    #[test]
    fn switch_point_lies_on_the_rectifying_line() {
        let quality = FeedQuality::new(0.5).unwrap();
        let distillate = 0.913;
        let intercept = 0.29658762601118877;
        let switch = operating_line_switch(distillate, intercept, 0.5, &quality).unwrap();

        let slope = (distillate - intercept) / distillate;
        assert_abs_diff_eq!(switch.y, slope * switch.x + intercept, epsilon = 1e-12);
    }
}

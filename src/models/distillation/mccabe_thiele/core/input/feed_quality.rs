use crate::support::constraint::{ConstraintError, ConstraintResult};

/// Liquid fraction of the feed stream (the thermal condition `q`).
///
/// `q = 1` is a saturated-liquid feed and `q = 0` a saturated-vapor feed;
/// values above one are subcooled liquid and values below zero superheated
/// vapor. The feed line's slope `q / (q − 1)` is singular at both `q = 0`
/// and `q = 1`, so those exact inputs are nudged inward by 1e-8. The nudge
/// is a numerical-stability policy, not a modeling choice: it changes the
/// construction by far less than any physical uncertainty in `q`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedQuality(f64);

impl FeedQuality {
    /// Offset applied to the exact singular values 0 and 1.
    const SINGULAR_NUDGE: f64 = 1e-8;

    /// Constructs a validated feed quality.
    ///
    /// Exact inputs of 0 and 1 are replaced by `1e-8` and `1 − 1e-8`
    /// respectively.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] for NaN and
    /// [`ConstraintError::NotFinite`] for infinite inputs.
    pub fn new(q: f64) -> ConstraintResult<Self> {
        if q.is_nan() {
            return Err(ConstraintError::NotANumber);
        }
        if !q.is_finite() {
            return Err(ConstraintError::NotFinite);
        }
        if q == 1.0 {
            return Ok(Self(1.0 - Self::SINGULAR_NUDGE));
        }
        if q == 0.0 {
            return Ok(Self(Self::SINGULAR_NUDGE));
        }
        Ok(Self(q))
    }

    /// Returns the (possibly nudged) liquid fraction.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Slope of the feed line, `q / (q − 1)`.
    ///
    /// Finite for every constructed value because the singular qualities
    /// are nudged at construction.
    #[must_use]
    pub fn line_slope(&self) -> f64 {
        self.0 / (self.0 - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn ordinary_values_pass_through() {
        assert_eq!(FeedQuality::new(0.5).unwrap().value(), 0.5);
        assert_eq!(FeedQuality::new(1.2).unwrap().value(), 1.2);
        assert_eq!(FeedQuality::new(-0.2).unwrap().value(), -0.2);
    }

    #[test]
    fn singular_qualities_are_nudged() {
        let saturated_liquid = FeedQuality::new(1.0).unwrap();
        assert_relative_eq!(saturated_liquid.value(), 1.0 - 1e-8);
        assert!(saturated_liquid.line_slope().is_finite());

        let saturated_vapor = FeedQuality::new(0.0).unwrap();
        assert_relative_eq!(saturated_vapor.value(), 1e-8);
        assert!(saturated_vapor.line_slope().is_finite());
    }

    #[test]
    fn rejects_nan_and_infinities() {
        assert!(matches!(
            FeedQuality::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
        assert!(matches!(
            FeedQuality::new(f64::INFINITY),
            Err(ConstraintError::NotFinite)
        ));
        assert!(matches!(
            FeedQuality::new(f64::NEG_INFINITY),
            Err(ConstraintError::NotFinite)
        ));
    }
}

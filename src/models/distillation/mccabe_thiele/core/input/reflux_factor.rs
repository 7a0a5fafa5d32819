use crate::support::constraint::{ConstraintError, ConstraintResult};

/// Multiplier applied to the minimum reflux ratio to obtain the operating
/// reflux ratio, `R = factor · R_min`.
///
/// A feasible column needs a factor greater than one; typical designs use
/// 1.2 to 2. Factors at or below one are accepted numerically: the
/// construction then pinches at the feed and surfaces as a `NonConvergent`
/// error from the stage-stepping loop rather than hanging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefluxFactor(f64);

impl RefluxFactor {
    /// Constructs a validated reflux factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] for NaN and
    /// [`ConstraintError::NotFinite`] for infinite inputs.
    pub fn new(factor: f64) -> ConstraintResult<Self> {
        if factor.is_nan() {
            return Err(ConstraintError::NotANumber);
        }
        if !factor.is_finite() {
            return Err(ConstraintError::NotFinite);
        }
        Ok(Self(factor))
    }

    /// Returns the factor.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_finite_factors() {
        assert_eq!(RefluxFactor::new(1.8).unwrap().value(), 1.8);
        // Accepted, even though it cannot produce a feasible column.
        assert_eq!(RefluxFactor::new(0.9).unwrap().value(), 0.9);
    }

    #[test]
    fn rejects_nan_and_infinities() {
        assert!(matches!(
            RefluxFactor::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
        assert!(matches!(
            RefluxFactor::new(f64::INFINITY),
            Err(ConstraintError::NotFinite)
        ));
    }
}

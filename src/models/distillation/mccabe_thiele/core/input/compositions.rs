use crate::support::constraint::{Constrained, ConstraintResult, UnitIntervalOpen};

/// Specified stream compositions as light-component mole fractions.
///
/// Each composition is guaranteed to lie strictly inside the unit interval.
/// A sensible separation has `bottoms < feed < distillate`; that ordering is
/// a convention of the caller, not an enforced invariant, since the
/// construction itself fails cleanly (as a non-convergence) when the targets
/// are unreachable.
#[derive(Debug, Clone, Copy)]
pub struct Compositions {
    distillate: f64,
    bottoms: f64,
    feed: f64,
}

impl Compositions {
    /// Constructs validated compositions.
    ///
    /// # Errors
    ///
    /// Returns an error if any mole fraction is outside the open unit
    /// interval (0, 1).
    pub fn new(distillate: f64, bottoms: f64, feed: f64) -> ConstraintResult<Self> {
        let distillate = Constrained::<f64, UnitIntervalOpen>::new(distillate)?;
        let bottoms = Constrained::<f64, UnitIntervalOpen>::new(bottoms)?;
        let feed = Constrained::<f64, UnitIntervalOpen>::new(feed)?;
        Ok(Self::from_constrained(distillate, bottoms, feed))
    }

    /// Constructs compositions from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        distillate: Constrained<f64, UnitIntervalOpen>,
        bottoms: Constrained<f64, UnitIntervalOpen>,
        feed: Constrained<f64, UnitIntervalOpen>,
    ) -> Self {
        Self {
            distillate: distillate.into_inner(),
            bottoms: bottoms.into_inner(),
            feed: feed.into_inner(),
        }
    }

    /// Constructs compositions without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure every mole fraction lies strictly inside the
    /// unit interval. Violating this invariant will result in unexpected
    /// errors or panics.
    #[must_use]
    pub fn new_unchecked(distillate: f64, bottoms: f64, feed: f64) -> Self {
        Self {
            distillate,
            bottoms,
            feed,
        }
    }

    /// Distillate (top product) composition, `xd`.
    #[must_use]
    pub fn distillate(&self) -> f64 {
        self.distillate
    }

    /// Bottoms (bottom product) composition, `xb`.
    #[must_use]
    pub fn bottoms(&self) -> f64 {
        self.bottoms
    }

    /// Feed composition, `xf`.
    #[must_use]
    pub fn feed(&self) -> f64 {
        self.feed
    }
}

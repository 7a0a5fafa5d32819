use crate::support::constraint::{Constrained, ConstraintResult, UnitIntervalLowerOpen};

/// Murphree vapor-phase stage efficiency, `nm ∈ (0, 1]`.
///
/// The fractional approach to vapor-liquid equilibrium achieved on a real
/// stage. Unity recovers ideal equilibrium stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MurphreeEfficiency(f64);

impl MurphreeEfficiency {
    /// Constructs a validated efficiency.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside the lower-open unit
    /// interval (0, 1].
    pub fn new(nm: f64) -> ConstraintResult<Self> {
        let nm = Constrained::<f64, UnitIntervalLowerOpen>::new(nm)?;
        Ok(Self(nm.into_inner()))
    }

    /// The ideal-stage limit, `nm = 1`.
    #[must_use]
    pub fn ideal() -> Self {
        Self(1.0)
    }

    /// Returns the efficiency.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

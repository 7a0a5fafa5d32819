use uom::si::{f64::Pressure, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Pure-component vapor pressures of the binary pair.
///
/// The "light" component is the more volatile of the two; its vapor pressure
/// is expected (but not required) to exceed the heavy component's. Both
/// pressures are guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct VaporPressures {
    light: Pressure,
    heavy: Pressure,
}

impl VaporPressures {
    /// Constructs validated vapor pressures.
    ///
    /// # Errors
    ///
    /// Returns an error if either pressure is not strictly positive.
    pub fn new(light: Pressure, heavy: Pressure) -> ConstraintResult<Self> {
        let light = Constrained::<Pressure, StrictlyPositive>::new(light)?;
        let heavy = Constrained::<Pressure, StrictlyPositive>::new(heavy)?;
        Ok(Self::from_constrained(light, heavy))
    }

    /// Constructs vapor pressures from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        light: Constrained<Pressure, StrictlyPositive>,
        heavy: Constrained<Pressure, StrictlyPositive>,
    ) -> Self {
        Self {
            light: light.into_inner(),
            heavy: heavy.into_inner(),
        }
    }

    /// Constructs vapor pressures without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure both pressures are strictly positive.
    /// Violating this invariant will result in unexpected errors or panics.
    #[must_use]
    pub fn new_unchecked(light: Pressure, heavy: Pressure) -> Self {
        Self { light, heavy }
    }

    /// Returns the light component's vapor pressure.
    #[must_use]
    pub fn light(&self) -> Pressure {
        self.light
    }

    /// Returns the heavy component's vapor pressure.
    #[must_use]
    pub fn heavy(&self) -> Pressure {
        self.heavy
    }

    /// Relative volatility of the pair, α = P_light / P_heavy.
    ///
    /// Dimensionless and strictly positive. Values above one curve the
    /// equilibrium line away from the diagonal; α = 1 means no separation
    /// is possible.
    #[must_use]
    pub fn relative_volatility(&self) -> f64 {
        (self.light / self.heavy).get::<ratio>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::{kilopascal, millimeter_of_mercury};

    #[test]
    fn relative_volatility_is_the_pressure_ratio() {
        let pair = VaporPressures::new(
            Pressure::new::<kilopascal>(300.0),
            Pressure::new::<kilopascal>(74.3),
        )
        .unwrap();

        assert_relative_eq!(pair.relative_volatility(), 4.037685060565276);
    }

    #[test]
    fn relative_volatility_is_unit_independent() {
        let pair = VaporPressures::new(
            Pressure::new::<millimeter_of_mercury>(300.0),
            Pressure::new::<millimeter_of_mercury>(74.3),
        )
        .unwrap();

        assert_relative_eq!(pair.relative_volatility(), 4.037685060565276, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_positive_pressures() {
        assert!(
            VaporPressures::new(
                Pressure::new::<kilopascal>(0.0),
                Pressure::new::<kilopascal>(74.3),
            )
            .is_err()
        );
        assert!(
            VaporPressures::new(
                Pressure::new::<kilopascal>(300.0),
                Pressure::new::<kilopascal>(-1.0),
            )
            .is_err()
        );
    }
}

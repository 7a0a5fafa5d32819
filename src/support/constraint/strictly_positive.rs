use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Use this type with [`Constrained<T, StrictlyPositive>`] to encode strict
/// positivity at the type level. Physical quantities like vapor pressures
/// are a natural fit.
///
/// # Examples
///
/// ```
/// use separation_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Pressure, pressure::kilopascal};
///
/// // Generic constructor:
/// let p = Constrained::<_, StrictlyPositive>::new(Pressure::new::<kilopascal>(300.0)).unwrap();
///
/// // Associated constructor:
/// let y = StrictlyPositive::new(74.3).unwrap();
/// assert_eq!(y.into_inner(), 74.3);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::kilopascal};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert!(StrictlyPositive::new(0.0).is_err());
        assert!(StrictlyPositive::new(-5.0).is_err());
        assert!(matches!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn pressures() {
        let vapor_pressure = Pressure::new::<kilopascal>(300.0);
        assert!(StrictlyPositive::new(vapor_pressure).is_ok());

        let vapor_pressure = Pressure::new::<kilopascal>(0.0);
        assert!(matches!(
            StrictlyPositive::new(vapor_pressure),
            Err(ConstraintError::Zero)
        ));

        let vapor_pressure = Pressure::new::<kilopascal>(-2.0);
        assert!(matches!(
            StrictlyPositive::new(vapor_pressure),
            Err(ConstraintError::Negative)
        ));
    }
}

//! Quadratic root solving with explicit branch selection.
//!
//! Intersections between an equilibrium curve and a straight operating or
//! feed line reduce to quadratics in the liquid composition. Only one of the
//! two roots is physically meaningful, and which one depends on the problem,
//! so callers must pick a [`Branch`] rather than receive both roots.

use thiserror::Error;

/// Leading coefficients below this magnitude are treated as degenerate.
const DEGENERATE_TOL: f64 = 1e-12;

/// Which sign to take in front of the discriminant's square root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Plus,
    Minus,
}

/// Errors that can occur while solving a quadratic.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadraticError {
    /// The leading coefficient is (numerically) zero, so the equation is a
    /// line rather than a parabola. Callers that know the linear case is
    /// meaningful can fall back to [`Quadratic::linear_root`].
    #[error("leading coefficient is zero; the quadratic degenerates to a line")]
    DegenerateLeadingCoefficient,

    /// The discriminant is negative: the curves never meet in real
    /// compositions, which indicates inconsistent inputs.
    #[error("no real roots (discriminant {discriminant:e})")]
    NoRealRoots { discriminant: f64 },
}

/// Coefficients of `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns `b² − 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Whether the leading coefficient is too small for the quadratic
    /// formula to be meaningful.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.a.abs() < DEGENERATE_TOL
    }

    /// Solves for the requested root via the quadratic formula:
    /// `x = (−b ± √(b² − 4ac)) / (2a)`.
    ///
    /// # Errors
    ///
    /// Returns [`QuadraticError::DegenerateLeadingCoefficient`] when `|a|` is
    /// numerically zero and [`QuadraticError::NoRealRoots`] when the
    /// discriminant is negative.
    pub fn root(&self, branch: Branch) -> Result<f64, QuadraticError> {
        if self.is_degenerate() {
            return Err(QuadraticError::DegenerateLeadingCoefficient);
        }

        let discriminant = self.discriminant();
        if discriminant < 0.0 {
            return Err(QuadraticError::NoRealRoots { discriminant });
        }

        let sqrt_discriminant = discriminant.sqrt();
        let numerator = match branch {
            Branch::Plus => -self.b + sqrt_discriminant,
            Branch::Minus => -self.b - sqrt_discriminant,
        };
        Ok(numerator / (2.0 * self.a))
    }

    /// Solves the degenerate linear case `b·x + c = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`QuadraticError::DegenerateLeadingCoefficient`] when `|b|` is
    /// also numerically zero, leaving no equation to solve.
    pub fn linear_root(&self) -> Result<f64, QuadraticError> {
        if self.b.abs() < DEGENERATE_TOL {
            return Err(QuadraticError::DegenerateLeadingCoefficient);
        }
        Ok(-self.c / self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn roots_of_factored_quadratic() {
        // (x − 2)(x + 3) = x² + x − 6
        let q = Quadratic::new(1.0, 1.0, -6.0);
        assert_relative_eq!(q.root(Branch::Plus).unwrap(), 2.0);
        assert_relative_eq!(q.root(Branch::Minus).unwrap(), -3.0);
    }

    #[test]
    fn branches_coincide_at_zero_discriminant() {
        // (x − 1)² = x² − 2x + 1
        let q = Quadratic::new(1.0, -2.0, 1.0);
        assert_relative_eq!(q.discriminant(), 0.0);
        assert_relative_eq!(q.root(Branch::Plus).unwrap(), 1.0);
        assert_relative_eq!(q.root(Branch::Minus).unwrap(), 1.0);
    }

    #[test]
    fn negative_discriminant_is_an_error() {
        // x² + 1 = 0 has no real roots.
        let q = Quadratic::new(1.0, 0.0, 1.0);
        match q.root(Branch::Minus) {
            Err(QuadraticError::NoRealRoots { discriminant }) => {
                assert_relative_eq!(discriminant, -4.0);
            }
            other => panic!("expected NoRealRoots, got: {other:?}"),
        }
    }

    #[test]
    fn degenerate_leading_coefficient_is_an_error() {
        let q = Quadratic::new(0.0, 2.0, -1.0);
        assert_eq!(
            q.root(Branch::Minus),
            Err(QuadraticError::DegenerateLeadingCoefficient)
        );
        assert_relative_eq!(q.linear_root().unwrap(), 0.5);
    }

    #[test]
    fn fully_degenerate_has_no_linear_root() {
        let q = Quadratic::new(0.0, 0.0, 1.0);
        assert_eq!(
            q.linear_root(),
            Err(QuadraticError::DegenerateLeadingCoefficient)
        );
    }
}

use thiserror::Error;

use crate::support::quadratic::QuadraticError;

/// Errors that can occur while performing the McCabe-Thiele construction.
///
/// Every failure is deterministic (a property of the inputs, not of the
/// run), so there is nothing to retry. The construction either returns a
/// complete [`Results`](super::super::Results) or fails atomically with one
/// identified cause.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The input geometry leaves part of the construction undefined, such
    /// as a distillate composition sitting exactly on the feed-line pinch
    /// or a feed line parallel to the rectifying line.
    #[error("singular configuration: {context}")]
    SingularConfiguration {
        /// Which part of the construction became undefined.
        context: String,
    },

    /// A quadratic intersection solve found no real root: the curves never
    /// meet, which indicates inconsistent inputs.
    #[error("no real intersection (discriminant {discriminant:e})")]
    NoRealIntersection {
        /// The negative discriminant of the failing quadratic.
        discriminant: f64,

        /// The 1-based stage index at which inverting the equilibrium
        /// relation failed, when raised during stage stepping.
        stage: Option<usize>,
    },

    /// Stage stepping hit its cap before reaching the bottoms composition.
    ///
    /// Typically caused by a reflux factor at or below one, which pinches
    /// the staircase at the feed, or by an unreachable bottoms target.
    #[error("no convergence within {max_stages} stages (reached x = {last_composition})")]
    NonConvergent {
        /// The stage cap that was exhausted.
        max_stages: usize,

        /// Liquid composition reached by the last completed stage.
        last_composition: f64,
    },
}

impl SolveError {
    /// Creates a singular-configuration error with context.
    pub(in crate::models::distillation::mccabe_thiele::core) fn singular(
        context: impl Into<String>,
    ) -> Self {
        Self::SingularConfiguration {
            context: context.into(),
        }
    }

    /// Maps a quadratic solve failure, attaching the failing stage index
    /// when the failure occurred during stage stepping.
    pub(in crate::models::distillation::mccabe_thiele::core) fn quadratic(
        context: &str,
        stage: Option<usize>,
        source: QuadraticError,
    ) -> Self {
        match source {
            QuadraticError::DegenerateLeadingCoefficient => Self::SingularConfiguration {
                context: format!("{context}: vanishing leading quadratic coefficient"),
            },
            QuadraticError::NoRealRoots { discriminant } => Self::NoRealIntersection {
                discriminant,
                stage,
            },
        }
    }
}

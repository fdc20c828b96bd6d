//! First-class engine invariants.
//!
//! Invariants are logical properties that hold for every [`Game`] the
//! public API can produce. Each one is a standalone type implementing
//! [`Invariant`], so it can be tested in isolation, composed into sets,
//! and re-checked after every state change in debug builds.

pub mod alternating_marks;
pub mod history_coherent;
pub mod index_in_bounds;

pub use alternating_marks::AlternatingMarksInvariant;
pub use history_coherent::HistoryCoherentInvariant;
pub use index_in_bounds::IndexInBoundsInvariant;

use crate::game::Game;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together, collecting every violation.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// # Errors
    ///
    /// Returns one [`InvariantViolation`] per failed invariant.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The full engine invariant set.
pub type GameInvariants = (
    HistoryCoherentInvariant,
    AlternatingMarksInvariant,
    IndexInBoundsInvariant,
);

/// Panics on any violated invariant in debug builds; free in release.
pub(crate) fn debug_assert_invariants(game: &Game) {
    if cfg!(debug_assertions) {
        if let Err(violations) = GameInvariants::check_all(game) {
            let summary = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("engine invariants violated: {summary}");
        }
    }
}

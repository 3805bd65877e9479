//! The abstract description of a search problem. Every search engine only
//! talks to a problem through the [`Problem`] trait, so any puzzle can be
//! plugged in by choosing its own state and action types.

use std::{fmt::Debug, hash::Hash};
use thiserror::Error;

/// A state space search problem.
///
/// Implementations must be pure from the point of view of the search: calling
/// [`Problem::successor`] twice with the same arguments has to produce equal
/// states, and [`Problem::cost`] has to return a finite, non-negative number.
pub trait Problem {
    /// States are compared and hashed by content, they are used as keys when
    /// detecting duplicates.
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Eq + Debug;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Every legal action in `state`, an empty vector for dead ends.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`. Only defined for
    /// actions returned by [`Problem::actions`] for the same state, other
    /// actions are rejected with [`ProblemError::InvalidAction`].
    fn successor(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, ProblemError>;

    /// The cost of applying `action` in `state`, with the same domain as
    /// [`Problem::successor`].
    fn cost(&self, state: &Self::State, action: &Self::Action) -> Result<f64, ProblemError>;
}

/// Raised by problems when the search breaks their contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("action {action} is not applicable in state:\n{state}")]
    InvalidAction { action: String, state: String },
}

impl ProblemError {
    pub fn invalid_action(action: impl Debug, state: impl Into<String>) -> Self {
        ProblemError::InvalidAction {
            action: format!("{:?}", action),
            state: state.into(),
        }
    }
}

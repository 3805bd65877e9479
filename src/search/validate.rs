use crate::search::{Plan, Problem, ProblemError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("step {step}: action {action} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach a goal state, final state is: {state}")]
    GoalNotReached { state: String },
    #[error(transparent)]
    Problem(#[from] ProblemError),
}

/// Replay `plan` from `initial_state`, checking that every action is one the
/// problem enumerates and that the final state is a goal.
pub fn validate<P: Problem>(
    problem: &P,
    initial_state: &P::State,
    plan: &Plan<P::Action>,
) -> Result<(), PlanError> {
    let mut cur_state = initial_state.clone();
    for (step, action) in plan.steps().iter().enumerate() {
        if !problem.actions(&cur_state).contains(action) {
            return Err(PlanError::NotApplicable {
                step,
                action: format!("{:?}", action),
                state: format!("{:?}", cur_state),
            });
        }
        cur_state = problem.successor(&cur_state, action)?;
    }

    if !problem.is_goal(&cur_state) {
        return Err(PlanError::GoalNotReached {
            state: format!("{:?}", cur_state),
        });
    }

    Ok(())
}

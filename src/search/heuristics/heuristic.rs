use crate::search::Problem;
use ordered_float::OrderedFloat;

pub type HeuristicValue = OrderedFloat<f64>;

/// A heuristic estimates the remaining cost from a state to the nearest goal.
/// The search engines treat it as a black box and never look inside.
///
/// A* only returns cost-optimal plans if the heuristic is admissible, and
/// since closed states are never reopened it additionally relies on the
/// heuristic being consistent, i.e. `h(s) <= cost(s, a) + h(successor(s, a))`
/// for every state and applicable action. An inconsistent heuristic does not
/// raise an error, it silently degrades plan quality.
pub trait Heuristic<P: Problem> {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, problem: &P, state: &P::State) -> HeuristicValue;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state sequentially.
    fn evaluate_batch(&mut self, problem: &P, states: &[P::State]) -> Vec<HeuristicValue> {
        states
            .iter()
            .map(|state| self.evaluate(problem, state))
            .collect()
    }
}

/// Any function of the problem and a state is a heuristic.
impl<P, F> Heuristic<P> for F
where
    P: Problem,
    F: FnMut(&P, &P::State) -> f64,
{
    fn evaluate(&mut self, problem: &P, state: &P::State) -> HeuristicValue {
        OrderedFloat(self(problem, state))
    }
}

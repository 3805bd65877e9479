//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{
        action_cost, finish, PriorityFrontier, SearchEngine, SearchOutput, SearchResult,
        TerminationCondition,
    },
    Heuristic, Problem, SearchNodeStatus, SearchSpace, SearchStatistics,
};
use ordered_float::OrderedFloat;
use tracing::debug;

/// Greedy best-first search. The frontier is ordered by heuristic value only,
/// costs play no part in which state is expanded next.
///
/// A state keeps the heuristic value it was first evaluated with, so an entry
/// in the frontier can never be improved and is never replaced.
#[derive(Debug, Default)]
pub struct GreedyBestFirstSearch {
    termination: TerminationCondition,
}

impl GreedyBestFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_termination(termination: TerminationCondition) -> Self {
        Self { termination }
    }
}

impl<P: Problem> SearchEngine<P> for GreedyBestFirstSearch {
    fn search(
        &mut self,
        problem: &P,
        initial_state: P::State,
        heuristic: &mut dyn Heuristic<P>,
    ) -> SearchOutput<P::Action> {
        let mut statistics = SearchStatistics::new();
        self.termination.start();

        let initial_h = heuristic.evaluate(problem, &initial_state);
        statistics.increment_evaluated_nodes();
        statistics.register_heuristic_value(initial_h);
        debug!(initial_heuristic_value = initial_h.into_inner());

        let mut frontier = PriorityFrontier::new();
        let mut search_space = SearchSpace::new(initial_state);
        let root_node = search_space.get_root_node_mut();
        root_node.open_with_f(OrderedFloat(0.), initial_h, initial_h);
        frontier.push(root_node.get_node_id(), initial_h);

        while let Some((node_id, _)) = frontier.pop() {
            let state = search_space.get_state(node_id).clone();
            if problem.is_goal(&state) {
                let plan = search_space.extract_plan(node_id);
                return finish(SearchResult::Success(plan), statistics);
            }
            if let Some(result) = self.termination.should_terminate(&statistics) {
                return finish(result, statistics);
            }

            let node = search_space.get_node_mut(node_id);
            node.close();
            let g_value = node.get_g();
            statistics.increment_expanded_nodes();

            let actions = problem.actions(&state);
            statistics.increment_generated_actions(actions.len());

            let mut new_states = Vec::new();
            let mut new_nodes = Vec::new();
            for action in actions {
                // g is only bookkeeping here, but a broken cost function is
                // still reported
                let child_g = g_value + action_cost(problem, &state, &action)?;
                let successor = problem.successor(&state, &action)?;
                let child_node = search_space.insert_or_get_node(successor, action, node_id);
                if child_node.get_status() == SearchNodeStatus::New {
                    // Opened right away so duplicates among the siblings are
                    // skipped
                    child_node.open_with_f(child_g, OrderedFloat(0.), OrderedFloat(0.));
                    new_nodes.push((child_node.get_node_id(), child_g));
                }
            }
            statistics.increment_generated_nodes(new_nodes.len());

            for (child_id, _) in &new_nodes {
                new_states.push(search_space.get_state(*child_id).clone());
            }
            let h_values = heuristic.evaluate_batch(problem, &new_states);

            for ((child_id, child_g), child_h) in new_nodes.into_iter().zip(h_values) {
                statistics.increment_evaluated_nodes();
                statistics.register_heuristic_value(child_h);
                search_space
                    .get_node_mut(child_id)
                    .open_with_f(child_g, child_h, child_h);
                frontier.push(child_id, child_h);
            }
        }

        finish(SearchResult::Unsolvable, statistics)
    }
}

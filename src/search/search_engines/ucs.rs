//! Uniform cost search

use crate::search::{
    search_engines::{
        action_cost, finish, PriorityFrontier, SearchEngine, SearchOutput, SearchResult,
        TerminationCondition,
    },
    Heuristic, Problem, SearchNodeStatus, SearchSpace, SearchStatistics,
};
use ordered_float::OrderedFloat;

/// Uniform-cost search. The frontier is ordered by accumulated path cost and
/// the goal test is applied when a state is removed from it, so the returned
/// plan is the cheapest one as long as action costs are non-negative.
#[derive(Debug, Default)]
pub struct UniformCostSearch {
    termination: TerminationCondition,
}

impl UniformCostSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_termination(termination: TerminationCondition) -> Self {
        Self { termination }
    }
}

impl<P: Problem> SearchEngine<P> for UniformCostSearch {
    fn search(
        &mut self,
        problem: &P,
        initial_state: P::State,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> SearchOutput<P::Action> {
        let mut statistics = SearchStatistics::new();
        self.termination.start();

        let mut frontier = PriorityFrontier::new();
        let mut search_space = SearchSpace::new(initial_state);
        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), OrderedFloat(0.));
        frontier.push(root_node.get_node_id(), root_node.get_g());

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

            for action in actions {
                let child_g = g_value + action_cost(problem, &state, &action)?;
                let successor = problem.successor(&state, &action)?;
                let child_node =
                    search_space.insert_or_get_node(successor, action.clone(), node_id);
                let child_id = child_node.get_node_id();

                match child_node.get_status() {
                    SearchNodeStatus::New => {
                        child_node.open(child_g, OrderedFloat(0.));
                        statistics.increment_generated_nodes(1);
                        frontier.push(child_id, child_g);
                    }
                    SearchNodeStatus::Open if child_g < child_node.get_g() => {
                        child_node.update_parent(node_id, action);
                        child_node.open(child_g, OrderedFloat(0.));
                        statistics.increment_improved_nodes();
                        frontier.push(child_id, child_g);
                    }
                    _ => {}
                }
            }
        }

        finish(SearchResult::Unsolvable, statistics)
    }
}

//! A* search

use crate::search::{
    search_engines::{
        action_cost, finish, PriorityFrontier, SearchEngine, SearchOutput, SearchResult,
        TerminationCondition,
    },
    Heuristic, Problem, SearchNodeStatus, SearchSpace, SearchStatistics,
};
use ordered_float::OrderedFloat;
use tracing::debug;

/// A* search, ordering the frontier by `f = g + h`.
///
/// Explored states are never reopened. With a consistent heuristic this is
/// sound and the returned plan is the cheapest one. With a heuristic that is
/// only admissible, a state can be expanded before its cheapest path is known
/// and the plan may then be more expensive than the optimum.
#[derive(Debug, Default)]
pub struct AStarSearch {
    termination: TerminationCondition,
}

impl AStarSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_termination(termination: TerminationCondition) -> Self {
        Self { termination }
    }
}

impl<P: Problem> SearchEngine<P> for AStarSearch {
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
        root_node.open(OrderedFloat(0.), initial_h);
        frontier.push(root_node.get_node_id(), root_node.get_f());

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
                let (child_id, child_status) = {
                    let child_node =
                        search_space.insert_or_get_node(successor, action.clone(), node_id);
                    (child_node.get_node_id(), child_node.get_status())
                };

                match child_status {
                    SearchNodeStatus::New => {
                        // Each state is evaluated once, the value is cached
                        // on its node
                        let child_h = heuristic.evaluate(problem, search_space.get_state(child_id));
                        statistics.increment_evaluated_nodes();
                        statistics.increment_generated_nodes(1);
                        statistics.register_heuristic_value(child_h);

                        let child_node = search_space.get_node_mut(child_id);
                        child_node.open(child_g, child_h);
                        frontier.push(child_id, child_node.get_f());
                    }
                    SearchNodeStatus::Open => {
                        let child_node = search_space.get_node_mut(child_id);
                        let child_h = child_node.get_h();
                        if child_g + child_h < child_node.get_f() {
                            child_node.update_parent(node_id, action);
                            child_node.open(child_g, child_h);
                            statistics.increment_improved_nodes();
                            frontier.push(child_id, child_node.get_f());
                        }
                    }
                    SearchNodeStatus::Closed => {}
                }
            }
        }

        finish(SearchResult::Unsolvable, statistics)
    }
}

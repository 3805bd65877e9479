//! Depth first search

use crate::search::{
    search_engines::{finish, SearchEngine, SearchOutput, SearchResult, TerminationCondition},
    Heuristic, Problem, SearchNodeStatus, SearchSpace, SearchStatistics,
};
use ordered_float::OrderedFloat;

/// Depth-first search. The most recently generated state is expanded next and
/// the goal test is applied when a state is popped. Plans are neither
/// shortest nor cheapest, and the search only terminates on finite state
/// spaces.
#[derive(Debug, Default)]
pub struct DepthFirstSearch {
    termination: TerminationCondition,
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_termination(termination: TerminationCondition) -> Self {
        Self { termination }
    }
}

impl<P: Problem> SearchEngine<P> for DepthFirstSearch {
    fn search(
        &mut self,
        problem: &P,
        initial_state: P::State,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> SearchOutput<P::Action> {
        let mut statistics = SearchStatistics::new();
        self.termination.start();

        let mut stack = Vec::new();
        let mut search_space = SearchSpace::new(initial_state);
        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), OrderedFloat(0.));
        stack.push(root_node.get_node_id());

        while let Some(node_id) = stack.pop() {
            if search_space.get_node(node_id).get_status() == SearchNodeStatus::Closed {
                continue;
            }

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
            let depth = node.get_g();
            statistics.increment_expanded_nodes();

            let actions = problem.actions(&state);
            statistics.increment_generated_actions(actions.len());

            for action in actions {
                let successor = problem.successor(&state, &action)?;
                let child_node = search_space.insert_or_get_node(successor, action, node_id);
                if child_node.get_status() == SearchNodeStatus::New {
                    child_node.open(depth + 1., OrderedFloat(0.));
                    statistics.increment_generated_nodes(1);
                    stack.push(child_node.get_node_id());
                }
            }
        }

        finish(SearchResult::Unsolvable, statistics)
    }
}

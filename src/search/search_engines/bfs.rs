//! Breadth first search

use crate::search::{
    search_engines::{finish, SearchEngine, SearchOutput, SearchResult, TerminationCondition},
    Heuristic, Plan, Problem, SearchNodeStatus, SearchSpace, SearchStatistics,
};
use ordered_float::OrderedFloat;
use std::collections::VecDeque;

/// Breadth-first search. States are expanded in order of depth and the goal
/// test is applied when a state is generated, so the first plan found has the
/// fewest actions. Action costs are ignored.
#[derive(Debug, Default)]
pub struct BreadthFirstSearch {
    termination: TerminationCondition,
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_termination(termination: TerminationCondition) -> Self {
        Self { termination }
    }
}

impl<P: Problem> SearchEngine<P> for BreadthFirstSearch {
    fn search(
        &mut self,
        problem: &P,
        initial_state: P::State,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> SearchOutput<P::Action> {
        let statistics = SearchStatistics::new();
        self.termination.start();

        if problem.is_goal(&initial_state) {
            return finish(SearchResult::Success(Plan::empty()), statistics);
        }
        self.expand_layers(problem, initial_state, statistics)
    }
}

impl BreadthFirstSearch {
    fn expand_layers<P: Problem>(
        &mut self,
        problem: &P,
        initial_state: P::State,
        mut statistics: SearchStatistics,
    ) -> SearchOutput<P::Action> {
        let mut queue = VecDeque::new();
        let mut search_space = SearchSpace::new(initial_state);
        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), OrderedFloat(0.));
        queue.push_back(root_node.get_node_id());

        while let Some(node_id) = queue.pop_front() {
            if search_space.get_node(node_id).get_status() == SearchNodeStatus::Closed {
                continue;
            }
            if let Some(result) = self.termination.should_terminate(&statistics) {
                return finish(result, statistics);
            }

            let node = search_space.get_node_mut(node_id);
            node.close();
            let depth = node.get_g();
            statistics.increment_expanded_nodes();

            let state = search_space.get_state(node_id).clone();
            let actions = problem.actions(&state);
            statistics.increment_generated_actions(actions.len());

            for action in actions {
                let successor = problem.successor(&state, &action)?;
                let child_node = search_space.insert_or_get_node(successor, action, node_id);
                // Neither explored nor waiting in the queue
                if child_node.get_status() != SearchNodeStatus::New {
                    continue;
                }
                child_node.open(depth + 1., OrderedFloat(0.));
                let child_id = child_node.get_node_id();
                statistics.increment_generated_nodes(1);

                if problem.is_goal(search_space.get_state(child_id)) {
                    let plan = search_space.extract_plan(child_id);
                    return finish(SearchResult::Success(plan), statistics);
                }
                queue.push_back(child_id);
            }
        }

        finish(SearchResult::Unsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search_engines::SearchError, ZeroHeuristic};
    use crate::test_utils::*;

    fn bfs(problem: &GraphProblem) -> SearchOutput<&'static str> {
        BreadthFirstSearch::new().search(
            problem,
            problem.initial_state(),
            &mut ZeroHeuristic::new(),
        )
    }

    #[test]
    fn finds_plan_with_fewest_actions() {
        let (result, _) = bfs(&diamond_problem()).unwrap();
        assert_eq!(result, SearchResult::Success(Plan::new(vec!["expensive"])));
    }

    #[test]
    fn goal_is_tested_on_generation() {
        // the goal is generated by the first expansion, so the second layer
        // is never expanded
        let problem = GraphProblem::new("S", &["G"])
            .with_edge("S", "a", "A", 1.)
            .with_edge("S", "b", "G", 1.)
            .with_edge("A", "c", "B", 1.);
        let (result, statistics) = bfs(&problem).unwrap();
        assert_eq!(result, SearchResult::Success(Plan::new(vec!["b"])));
        assert_eq!(statistics.expanded_nodes(), 1);
    }

    #[test]
    fn explores_layer_by_layer() {
        let (result, _) = bfs(&layered_problem()).unwrap();
        assert_eq!(result.into_plan().map(|plan| plan.len()), Some(2));
    }

    #[test]
    fn terminates_on_cycles_without_goal() {
        let problem = GraphProblem::new("A", &["Z"])
            .with_edge("A", "next", "B", 1.)
            .with_edge("B", "next", "C", 1.)
            .with_edge("C", "next", "A", 1.);
        let (result, statistics) = bfs(&problem).unwrap();
        assert_eq!(result, SearchResult::Unsolvable);
        assert_eq!(statistics.expanded_nodes(), 3);
    }

    #[test]
    fn invalid_successor_aborts_search() {
        let problem = GraphProblem::new("A", &["B"]).with_broken_action("A", "jump");
        assert!(matches!(bfs(&problem), Err(SearchError::Problem(_))));
    }

    #[test]
    fn expansion_limit_stops_search() {
        let termination = TerminationCondition::new(None, Some(1), None);
        let problem = layered_problem();
        let (result, statistics) = BreadthFirstSearch::with_termination(termination)
            .search(&problem, problem.initial_state(), &mut ZeroHeuristic::new())
            .unwrap();
        assert_eq!(result, SearchResult::ExpansionLimitExceeded);
        assert_eq!(statistics.expanded_nodes(), 1);
    }
}

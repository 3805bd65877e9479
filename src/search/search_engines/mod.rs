//! The search algorithms. Each engine implements [`SearchEngine`], and each
//! has a free function entry point for callers that only want the result.

mod astar;
mod bfs;
mod dfs;
mod frontier;
mod gbfs;
mod search_engine;
mod termination_condition;
mod ucs;

pub use astar::AStarSearch;
pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use frontier::PriorityFrontier;
pub use gbfs::GreedyBestFirstSearch;
pub(crate) use search_engine::{action_cost, finish};
pub use search_engine::{SearchEngine, SearchEngineName, SearchError, SearchOutput, SearchResult};
pub use termination_condition::TerminationCondition;
pub use ucs::UniformCostSearch;

use crate::search::{Heuristic, Problem, ZeroHeuristic};

/// The result of a search without its statistics.
pub type SearchOutcome<A> = Result<SearchResult<A>, SearchError>;

pub fn breadth_first_search<P: Problem>(
    problem: &P,
    initial_state: P::State,
) -> SearchOutcome<P::Action> {
    BreadthFirstSearch::new()
        .search(problem, initial_state, &mut ZeroHeuristic::new())
        .map(|(result, _)| result)
}

pub fn depth_first_search<P: Problem>(
    problem: &P,
    initial_state: P::State,
) -> SearchOutcome<P::Action> {
    DepthFirstSearch::new()
        .search(problem, initial_state, &mut ZeroHeuristic::new())
        .map(|(result, _)| result)
}

pub fn uniform_cost_search<P: Problem>(
    problem: &P,
    initial_state: P::State,
) -> SearchOutcome<P::Action> {
    UniformCostSearch::new()
        .search(problem, initial_state, &mut ZeroHeuristic::new())
        .map(|(result, _)| result)
}

pub fn astar_search<P, H>(
    problem: &P,
    initial_state: P::State,
    mut heuristic: H,
) -> SearchOutcome<P::Action>
where
    P: Problem,
    H: Heuristic<P>,
{
    AStarSearch::new()
        .search(problem, initial_state, &mut heuristic)
        .map(|(result, _)| result)
}

pub fn greedy_best_first_search<P, H>(
    problem: &P,
    initial_state: P::State,
    mut heuristic: H,
) -> SearchOutcome<P::Action>
where
    P: Problem,
    H: Heuristic<P>,
{
    GreedyBestFirstSearch::new()
        .search(problem, initial_state, &mut heuristic)
        .map(|(result, _)| result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate, Plan};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    const ENGINES: [SearchEngineName; 5] = [
        SearchEngineName::Bfs,
        SearchEngineName::Dfs,
        SearchEngineName::Ucs,
        SearchEngineName::Astar,
        SearchEngineName::Gbfs,
    ];

    fn run(engine: SearchEngineName, problem: &GraphProblem) -> SearchResult<&'static str> {
        engine
            .create::<GraphProblem>(TerminationCondition::unlimited())
            .search(problem, problem.initial_state(), &mut table_heuristic)
            .unwrap()
            .0
    }

    #[test]
    fn two_state_problem_is_solved_by_every_engine() {
        let problem = GraphProblem::new("A", &["B"])
            .with_edge("A", "move", "B", 1.)
            .with_heuristic("A", 1.);
        for engine in ENGINES {
            assert_eq!(
                run(engine, &problem),
                SearchResult::Success(Plan::new(vec!["move"])),
                "{:?}",
                engine
            );
        }
    }

    #[test]
    fn disconnected_problem_has_no_solution() {
        let problem = GraphProblem::new("A", &["B"]);
        for engine in ENGINES {
            assert_eq!(run(engine, &problem), SearchResult::Unsolvable, "{:?}", engine);
        }
    }

    #[test]
    fn goal_start_gives_empty_plan() {
        let problem = diamond_problem();
        for engine in ENGINES {
            let result = engine
                .create::<GraphProblem>(TerminationCondition::unlimited())
                .search(&problem, "G", &mut table_heuristic)
                .unwrap()
                .0;
            assert_eq!(result, SearchResult::Success(Plan::empty()), "{:?}", engine);
        }
    }

    #[test]
    fn returned_plans_reach_a_goal() {
        let problems = [
            diamond_problem(),
            layered_problem(),
            tied_problem(),
            misleading_problem(),
        ];
        for problem in problems {
            for engine in ENGINES {
                let plan = run(engine, &problem).into_plan().unwrap();
                assert!(
                    validate(&problem, &problem.initial_state(), &plan).is_ok(),
                    "{:?}",
                    engine
                );
            }
        }
    }

    #[test]
    fn repeated_searches_return_equal_cost() {
        let problem = tied_problem();
        for engine in ENGINES {
            let first = run(engine, &problem).into_plan().unwrap();
            let second = run(engine, &problem).into_plan().unwrap();
            assert_approx_eq!(
                first.cost(&problem, &"S").unwrap(),
                second.cost(&problem, &"S").unwrap()
            );
        }
    }

    #[test]
    fn tied_paths_have_minimum_cost() {
        let problem = tied_problem();
        for engine in [SearchEngineName::Ucs, SearchEngineName::Astar] {
            let plan = run(engine, &problem).into_plan().unwrap();
            assert_eq!(plan.len(), 2);
            assert_approx_eq!(plan.cost(&problem, &"S").unwrap(), 2.);
        }
    }

    #[test]
    fn free_functions_match_engines() {
        let problem = diamond_problem();
        let start = problem.initial_state();
        assert_eq!(
            breadth_first_search(&problem, start).unwrap(),
            run(SearchEngineName::Bfs, &problem)
        );
        assert_eq!(
            depth_first_search(&problem, start).unwrap(),
            run(SearchEngineName::Dfs, &problem)
        );
        assert_eq!(
            uniform_cost_search(&problem, start).unwrap(),
            run(SearchEngineName::Ucs, &problem)
        );
        assert_eq!(
            astar_search(&problem, start, table_heuristic).unwrap(),
            run(SearchEngineName::Astar, &problem)
        );
        assert_eq!(
            greedy_best_first_search(&problem, start, table_heuristic).unwrap(),
            run(SearchEngineName::Gbfs, &problem)
        );
    }

    #[test]
    fn misleading_heuristic_only_affects_informed_search() {
        let problem = misleading_problem();
        let ucs_plan = uniform_cost_search(&problem, "S").unwrap().into_plan().unwrap();
        let astar_plan = astar_search(&problem, "S", table_heuristic)
            .unwrap()
            .into_plan()
            .unwrap();
        assert_approx_eq!(ucs_plan.cost(&problem, &"S").unwrap(), 3.);
        assert_approx_eq!(astar_plan.cost(&problem, &"S").unwrap(), 5.);
    }

    #[test]
    fn engine_names_parse_from_kebab_case() {
        use clap::ValueEnum;
        assert_eq!(
            SearchEngineName::from_str("astar", false),
            Ok(SearchEngineName::Astar)
        );
        assert!(SearchEngineName::Gbfs.is_informed());
        assert!(!SearchEngineName::Ucs.is_informed());
    }
}

use crate::search::{
    search_engines::{
        AStarSearch, BreadthFirstSearch, DepthFirstSearch, GreedyBestFirstSearch,
        TerminationCondition, UniformCostSearch,
    },
    Heuristic, HeuristicValue, Plan, Problem, ProblemError, SearchStatistics,
};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful
    Success(Plan<A>),
    /// The frontier was exhausted without reaching a goal
    Unsolvable,
    /// The search ran out of time
    TimeLimitExceeded,
    /// The search expanded more nodes than allowed
    ExpansionLimitExceeded,
    /// The search used more memory than allowed
    MemoryLimitExceeded,
}

impl<A> SearchResult<A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn plan(&self) -> Option<&Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn into_plan(self) -> Option<Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            _ => None,
        }
    }
}

/// Failures that abort a search. Not finding a plan is not one of them, see
/// [`SearchResult::Unsolvable`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("problem contract violated during expansion: {0}")]
    Problem(#[from] ProblemError),
    #[error("action cost {cost} is negative or not finite")]
    InvalidCost { cost: f64 },
}

pub type SearchOutput<A> = Result<(SearchResult<A>, SearchStatistics), SearchError>;

pub trait SearchEngine<P: Problem> {
    /// Search for a plan from `initial_state` to a goal of `problem`.
    /// Uninformed engines ignore the heuristic.
    fn search(
        &mut self,
        problem: &P,
        initial_state: P::State,
        heuristic: &mut dyn Heuristic<P>,
    ) -> SearchOutput<P::Action>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth-first search, finds plans with the fewest actions.")]
    Bfs,
    #[clap(help = "Depth-first search, no optimality guarantee.")]
    Dfs,
    #[clap(help = "Uniform-cost search, finds cheapest plans.")]
    Ucs,
    #[clap(
        help = "A* search, finds cheapest plans if the heuristic is admissible \
        and consistent."
    )]
    Astar,
    #[clap(help = "Greedy best-first search, follows the heuristic only.")]
    Gbfs,
}

impl SearchEngineName {
    pub fn create<P: Problem>(
        &self,
        termination: TerminationCondition,
    ) -> Box<dyn SearchEngine<P>> {
        match self {
            SearchEngineName::Bfs => Box::new(BreadthFirstSearch::with_termination(termination)),
            SearchEngineName::Dfs => Box::new(DepthFirstSearch::with_termination(termination)),
            SearchEngineName::Ucs => Box::new(UniformCostSearch::with_termination(termination)),
            SearchEngineName::Astar => Box::new(AStarSearch::with_termination(termination)),
            SearchEngineName::Gbfs => {
                Box::new(GreedyBestFirstSearch::with_termination(termination))
            }
        }
    }

    pub fn is_informed(&self) -> bool {
        matches!(self, SearchEngineName::Astar | SearchEngineName::Gbfs)
    }
}

/// The cost of applying `action` in `state`, rejecting values that would
/// break the cost ordering of the frontier.
pub(crate) fn action_cost<P: Problem>(
    problem: &P,
    state: &P::State,
    action: &P::Action,
) -> Result<HeuristicValue, SearchError> {
    let cost = problem.cost(state, action)?;
    if !cost.is_finite() || cost < 0. {
        return Err(SearchError::InvalidCost { cost });
    }
    Ok(OrderedFloat(cost))
}

/// Finalise the statistics and package the result of a search.
pub(crate) fn finish<A>(
    result: SearchResult<A>,
    mut statistics: SearchStatistics,
) -> SearchOutput<A> {
    statistics.finalise_search();
    Ok((result, statistics))
}

use crate::search::{Problem, ProblemError};
use std::collections::{HashMap, HashSet};

/// An explicit graph with named states and actions, used to pin down the
/// exact order in which the engines generate and expand states.
#[derive(Debug, Clone)]
pub struct GraphProblem {
    initial_state: &'static str,
    goals: HashSet<&'static str>,
    /// Outgoing edges in insertion order: (action, target, cost)
    edges: HashMap<&'static str, Vec<(&'static str, &'static str, f64)>>,
    /// Actions that are enumerated but fail when applied
    broken_actions: HashSet<(&'static str, &'static str)>,
    heuristic: HashMap<&'static str, f64>,
}

impl GraphProblem {
    pub fn new(initial_state: &'static str, goals: &[&'static str]) -> Self {
        Self {
            initial_state,
            goals: goals.iter().copied().collect(),
            edges: HashMap::new(),
            broken_actions: HashSet::new(),
            heuristic: HashMap::new(),
        }
    }

    pub fn with_edge(
        mut self,
        from: &'static str,
        action: &'static str,
        to: &'static str,
        cost: f64,
    ) -> Self {
        self.edges.entry(from).or_default().push((action, to, cost));
        self
    }

    pub fn with_heuristic(mut self, state: &'static str, value: f64) -> Self {
        self.heuristic.insert(state, value);
        self
    }

    pub fn with_broken_action(mut self, from: &'static str, action: &'static str) -> Self {
        self.edges.entry(from).or_default().push((action, from, 1.));
        self.broken_actions.insert((from, action));
        self
    }

    /// The heuristic value attached to `state`, zero if none was given.
    pub fn heuristic_value(&self, state: &str) -> f64 {
        self.heuristic.get(state).copied().unwrap_or(0.)
    }

    fn edge(
        &self,
        state: &&'static str,
        action: &&'static str,
    ) -> Result<(&'static str, f64), ProblemError> {
        if self.broken_actions.contains(&(*state, *action)) {
            return Err(ProblemError::invalid_action(action, *state));
        }
        self.edges
            .get(state)
            .and_then(|edges| edges.iter().find(|(name, _, _)| name == action))
            .map(|&(_, to, cost)| (to, cost))
            .ok_or_else(|| ProblemError::invalid_action(action, *state))
    }
}

impl Problem for GraphProblem {
    type State = &'static str;
    type Action = &'static str;

    fn initial_state(&self) -> Self::State {
        self.initial_state
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.edges
            .get(state)
            .map(|edges| edges.iter().map(|(action, _, _)| *action).collect())
            .unwrap_or_default()
    }

    fn successor(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, ProblemError> {
        self.edge(state, action).map(|(to, _)| to)
    }

    fn cost(&self, state: &Self::State, action: &Self::Action) -> Result<f64, ProblemError> {
        self.edge(state, action).map(|(_, cost)| cost)
    }
}

/// Looks up the heuristic values stored on a [`GraphProblem`].
pub fn table_heuristic(problem: &GraphProblem, state: &&'static str) -> f64 {
    problem.heuristic_value(state)
}

/// S reaches the goal G directly for 10, or in three steps for 3. The direct
/// edge is generated first.
pub fn diamond_problem() -> GraphProblem {
    GraphProblem::new("S", &["G"])
        .with_edge("S", "expensive", "G", 10.)
        .with_edge("S", "cheap", "A", 1.)
        .with_edge("A", "detour", "B", 1.)
        .with_edge("B", "finish", "G", 1.)
}

/// Two goal paths of different depth: S -> R -> G and S -> L -> D -> G.
pub fn layered_problem() -> GraphProblem {
    GraphProblem::new("S", &["G"])
        .with_edge("S", "left", "L", 1.)
        .with_edge("S", "right", "R", 1.)
        .with_edge("L", "down", "D", 1.)
        .with_edge("R", "up", "G", 1.)
        .with_edge("D", "on", "G", 1.)
}

/// Two paths to G of equal length and cost.
pub fn tied_problem() -> GraphProblem {
    GraphProblem::new("S", &["G"])
        .with_edge("S", "up", "U", 1.)
        .with_edge("S", "down", "D", 1.)
        .with_edge("U", "up-goal", "G", 1.)
        .with_edge("D", "down-goal", "G", 1.)
}

/// The cheapest plan costs 3 through A, but the heuristic claims A is far
/// from the goal.
pub fn misleading_problem() -> GraphProblem {
    GraphProblem::new("S", &["G"])
        .with_edge("S", "short", "A", 1.)
        .with_edge("A", "short-mid", "B", 1.)
        .with_edge("B", "short-goal", "G", 1.)
        .with_edge("S", "long", "C", 2.5)
        .with_edge("C", "long-goal", "G", 2.5)
        .with_heuristic("A", 10.)
}

pub const SOKOBAN_CORRIDOR_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/sokoban/corridor.txt"));

pub const SOKOBAN_TWO_CRATES_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/sokoban/two_crates.txt"));

pub const SOKOBAN_DEAD_END_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/sokoban/dead_end.txt"));

pub const PARKING_SWAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/parking/swap.txt"));

pub const PARKING_SINGLE_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/parking/single.txt"));

pub const PARKING_THREE_CARS_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/parking/three_cars.txt"));

pub const SOKOBAN_ROOM_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/sokoban/room.txt"));

use crate::{
    problems::{
        grid::manhattan_distance,
        sokoban::{SokobanProblem, SokobanState},
    },
    search::{Heuristic, Problem, ZeroHeuristic},
};

/// Distance from the player to the nearest crate, minus one since the player
/// stops next to it. Consistent but uninformative, it ignores the goals
/// entirely.
pub fn weak_heuristic(_problem: &SokobanProblem, state: &SokobanState) -> f64 {
    state
        .crates
        .iter()
        .map(|&crate_position| manhattan_distance(state.player, crate_position) - 1)
        .min()
        .map_or(0., |distance| distance.max(0) as f64)
}

/// Sum over the crates of the distance to the nearest goal. Every push moves
/// one crate by one cell, so this never overestimates the number of moves.
pub fn strong_heuristic(problem: &SokobanProblem, state: &SokobanState) -> f64 {
    if problem.is_goal(state) {
        return 0.;
    }
    state
        .crates
        .iter()
        .map(|&crate_position| {
            problem
                .goals()
                .iter()
                .map(|&goal| manhattan_distance(crate_position, goal))
                .min()
                .unwrap_or(0)
        })
        .sum::<i32>() as f64
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum SokobanHeuristicName {
    #[clap(help = "The zero heuristic.")]
    Zero,
    #[clap(help = "Distance from the player to the nearest crate.")]
    Weak,
    #[default]
    #[clap(help = "Sum of the distances from each crate to its nearest goal.")]
    Strong,
}

impl SokobanHeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<SokobanProblem>> {
        match self {
            SokobanHeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            SokobanHeuristicName::Weak => Box::new(weak_heuristic),
            SokobanHeuristicName::Strong => Box::new(strong_heuristic),
        }
    }
}

use crate::{
    problems::{
        grid::manhattan_distance,
        parking::{ParkingProblem, ParkingState},
    },
    search::{Heuristic, ZeroHeuristic},
};

/// Distance of every car to its slot, weighted by what one move of that car
/// costs. A move shifts one car by one cell and costs at least its weight, so
/// the estimate is admissible and consistent.
pub fn weighted_manhattan_heuristic(problem: &ParkingProblem, state: &ParkingState) -> f64 {
    state
        .iter()
        .enumerate()
        .filter_map(|(car, &position)| {
            let slot = problem.slot_of(car)?;
            Some(ParkingProblem::base_cost(car) * manhattan_distance(position, slot) as f64)
        })
        .sum()
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum ParkingHeuristicName {
    #[clap(help = "The zero heuristic.")]
    Zero,
    #[default]
    #[clap(help = "Distance of each car to its slot, weighted by its move cost.")]
    WeightedManhattan,
}

impl ParkingHeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<ParkingProblem>> {
        match self {
            ParkingHeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            ParkingHeuristicName::WeightedManhattan => Box::new(weighted_manhattan_heuristic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::ParkingAction;
    use crate::search::{
        search_engines::{astar_search, uniform_cost_search, AStarSearch, SearchEngine},
        Problem,
    };
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn weights_follow_car_order() {
        let problem = ParkingProblem::from_text(PARKING_SWAP_TEXT).unwrap();
        // A is 4 cells from its slot, B as well
        assert_approx_eq!(
            weighted_manhattan_heuristic(&problem, &problem.initial_state()),
            26. * 4. + 25. * 4.
        );
    }

    #[test]
    fn zero_at_goal() {
        let problem = ParkingProblem::from_text(PARKING_SINGLE_TEXT).unwrap();
        let right: ParkingAction = "A R".parse().unwrap();
        let goal = problem.successor(&problem.initial_state(), &right).unwrap();
        let goal = problem.successor(&goal, &right).unwrap();
        assert!(problem.is_goal(&goal));
        assert_approx_eq!(weighted_manhattan_heuristic(&problem, &goal), 0.);
    }

    #[test]
    fn astar_matches_uniform_cost_search() {
        for text in [PARKING_SWAP_TEXT, PARKING_THREE_CARS_TEXT] {
            let problem = ParkingProblem::from_text(text).unwrap();
            let start = problem.initial_state();
            let ucs_plan = uniform_cost_search(&problem, start.clone())
                .unwrap()
                .into_plan()
                .unwrap();
            let astar_plan = astar_search(&problem, start.clone(), weighted_manhattan_heuristic)
                .unwrap()
                .into_plan()
                .unwrap();
            assert_approx_eq!(
                ucs_plan.cost(&problem, &start).unwrap(),
                astar_plan.cost(&problem, &start).unwrap()
            );
        }
    }

    #[test]
    fn heuristic_never_exceeds_plan_cost() {
        let problem = ParkingProblem::from_text(PARKING_THREE_CARS_TEXT).unwrap();
        let mut heuristic = ParkingHeuristicName::WeightedManhattan.create();
        let (result, statistics) = AStarSearch::new()
            .search(&problem, problem.initial_state(), &mut *heuristic)
            .unwrap();
        let plan = result.into_plan().unwrap();
        let estimate = weighted_manhattan_heuristic(&problem, &problem.initial_state());
        assert!(estimate <= plan.cost(&problem, &problem.initial_state()).unwrap());
        assert!(statistics.expanded_nodes() > 0);
    }
}

use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::{Duration, Instant};
use tracing::info;

/// Counters collected during a single search. Every engine returns its own
/// statistics, nothing is shared between searches.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded (moved to the explored set)
    expanded_nodes: usize,
    /// Number of heuristic evaluations
    evaluated_nodes: usize,
    /// Number of unique nodes generated
    generated_nodes: usize,
    /// Number of frontier entries replaced by a cheaper path
    improved_nodes: usize,
    /// Number of applicable actions generated
    generated_actions: usize,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time the search took, set once the search is finalised
    search_duration: Option<Duration>,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            improved_nodes: 0,
            generated_actions: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            search_start_time: Instant::now(),
            search_duration: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            info!(best_heuristic_value = self.best_heuristic_value.into_inner());
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_improved_nodes(&mut self) {
        self.improved_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_actions(&mut self, num_actions: usize) {
        self.generated_actions += num_actions;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn improved_nodes(&self) -> usize {
        self.improved_nodes
    }

    pub fn generated_actions(&self) -> usize {
        self.generated_actions
    }

    pub fn best_heuristic_value(&self) -> HeuristicValue {
        self.best_heuristic_value
    }

    /// Duration of the finalised search, or the time elapsed so far.
    pub fn search_duration(&self) -> Duration {
        self.search_duration
            .unwrap_or_else(|| self.search_start_time.elapsed())
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            improved_nodes = self.improved_nodes,
            generated_actions = self.generated_actions,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        let duration = self.search_start_time.elapsed();
        self.search_duration = Some(duration);
        info!(search_duration = duration.as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn counters_accumulate() {
        let mut statistics = SearchStatistics::new();
        statistics.increment_expanded_nodes();
        statistics.increment_expanded_nodes();
        statistics.increment_generated_nodes(3);
        statistics.increment_generated_actions(5);
        statistics.increment_improved_nodes();
        statistics.increment_evaluated_nodes();

        assert_eq!(statistics.expanded_nodes(), 2);
        assert_eq!(statistics.generated_nodes(), 3);
        assert_eq!(statistics.generated_actions(), 5);
        assert_eq!(statistics.improved_nodes(), 1);
        assert_eq!(statistics.evaluated_nodes(), 1);
    }

    #[test]
    fn best_heuristic_value_only_decreases() {
        let mut statistics = SearchStatistics::new();
        statistics.register_heuristic_value(OrderedFloat(4.));
        statistics.register_heuristic_value(OrderedFloat(6.));
        statistics.register_heuristic_value(OrderedFloat(2.));
        assert_eq!(statistics.best_heuristic_value(), OrderedFloat(2.));
    }

    #[test]
    fn finalised_duration_is_frozen() {
        let mut statistics = SearchStatistics::new();
        statistics.finalise_search();
        let duration = statistics.search_duration();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(statistics.search_duration(), duration);
    }
}

use crate::search::{search_engines::SearchResult, SearchStatistics};
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Bounds on the effort a search may spend. The default has no bounds, so a
/// search runs until it finds a plan or exhausts the frontier.
#[derive(Debug, Clone)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    expansion_limit: Option<usize>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl Default for TerminationCondition {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl TerminationCondition {
    pub fn new(
        time_limit: Option<Duration>,
        expansion_limit: Option<usize>,
        memory_limit_mb: Option<usize>,
    ) -> Self {
        Self {
            time_limit,
            expansion_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn expansion_limit(&self) -> Option<usize> {
        self.expansion_limit
    }

    pub fn memory_limit_mb(&self) -> Option<usize> {
        self.memory_limit_mb
    }

    /// Restart the clock, called by engines when a search begins.
    pub fn start(&mut self) {
        info!(
            time_limit = self.time_limit.map(|d| d.as_secs_f64()),
            expansion_limit = self.expansion_limit,
            memory_limit_mb = self.memory_limit_mb,
        );
        self.start_time = Instant::now();
        self.last_log_time = Instant::now();
        if self.memory_limit_mb.is_some() {
            self.update_memory_usage();
        }
    }

    fn update_memory_usage(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.update_memory_usage();
        info!(
            peak_memory_usage_mb = self.peak_memory_usage_mb,
            time_elapsed = self.start_time.elapsed().as_secs_f64(),
        );
    }

    /// Called before every expansion. Returns the result to report if one of
    /// the limits has been reached.
    pub fn should_terminate<A>(
        &mut self,
        statistics: &SearchStatistics,
    ) -> Option<SearchResult<A>> {
        self.log_if_needed();
        if let Some(expansion_limit) = self.expansion_limit {
            if statistics.expanded_nodes() >= expansion_limit {
                info!(expansion_limit, "expansion limit exceeded");
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                info!("time limit exceeded");
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    info!(peak_usage, "memory limit exceeded");
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}

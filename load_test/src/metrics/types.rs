//! Metric types

use goose::metrics::GooseMetrics;

/// Load generator resource usage.
#[derive(Debug, Clone, Default)]
pub struct SystemMetrics {
    pub cpu_usage: f32,
    pub memory_used_mb: u64,
    pub memory_total_mb: u64,
}

/// What goose reported for a finished run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub duration_secs: usize,
    pub maximum_users: usize,
    pub requests: usize,
    pub failures: usize,
}

impl RunSummary {
    pub fn from_metrics(metrics: &GooseMetrics) -> Self {
        let (requests, failures) = metrics
            .requests
            .values()
            .fold((0, 0), |(total, failed), aggregate| {
                (
                    total + aggregate.success_count + aggregate.fail_count,
                    failed + aggregate.fail_count,
                )
            });

        Self {
            duration_secs: metrics.duration,
            maximum_users: metrics.maximum_users,
            requests,
            failures,
        }
    }

    /// Failed requests as a percentage of all requests.
    pub fn failure_rate(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        self.failures as f64 / self.requests as f64 * 100.0
    }

    pub fn throughput(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.requests as f64 / self.duration_secs as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        let summary = RunSummary {
            duration_secs: 90,
            maximum_users: 600,
            requests: 1800,
            failures: 45,
        };
        assert!((summary.failure_rate() - 2.5).abs() < f64::EPSILON);
        assert!((summary.throughput() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_run() {
        let summary = RunSummary::default();
        assert_eq!(summary.failure_rate(), 0.0);
        assert_eq!(summary.throughput(), 0.0);
    }
}

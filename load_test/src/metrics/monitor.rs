//! Load generator monitor - samples this process's host while goose runs

use std::sync::Arc;

use parking_lot::RwLock;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tokio::time::{interval, Duration};

use super::types::SystemMetrics;

/// CPU usage above which results are likely skewed by the generator itself.
pub const CPU_WARN_THRESHOLD: f32 = 80.0;

#[derive(Clone)]
pub struct GeneratorMonitor {
    system: Arc<RwLock<System>>,
}

impl GeneratorMonitor {
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );

        Self {
            system: Arc::new(RwLock::new(system)),
        }
    }

    pub fn sample(&self) -> SystemMetrics {
        let mut system = self.system.write();
        system.refresh_cpu_all();
        system.refresh_memory();

        SystemMetrics {
            cpu_usage: system.global_cpu_usage(),
            memory_used_mb: system.used_memory() / 1024 / 1024,
            memory_total_mb: system.total_memory() / 1024 / 1024,
        }
    }
}

impl Default for GeneratorMonitor {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_overloaded(metrics: &SystemMetrics) -> bool {
    metrics.cpu_usage > CPU_WARN_THRESHOLD
}

/// Log generator usage every `interval_secs` until the task is aborted.
pub async fn start_periodic_monitor(monitor: GeneratorMonitor, interval_secs: u64) {
    let mut ticker = interval(Duration::from_secs(interval_secs.max(1)));

    loop {
        ticker.tick().await;

        let metrics = monitor.sample();
        if is_overloaded(&metrics) {
            tracing::warn!(
                cpu = metrics.cpu_usage,
                "Load generator CPU above {}%, results may be skewed",
                CPU_WARN_THRESHOLD
            );
        } else {
            tracing::debug!(
                cpu = metrics.cpu_usage,
                memory_used_mb = metrics.memory_used_mb,
                memory_total_mb = metrics.memory_total_mb,
                "Load generator usage"
            );
        }
    }
}

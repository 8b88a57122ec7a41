//! Runner - hand a profile to goose and wait for it to finish

use std::path::PathBuf;

use anyhow::{Context, Result};
use goose::config::GooseConfiguration;
use goose::prelude::*;
use tracing::Instrument;
use uuid::Uuid;

use super::plan::{engine_settings, EngineSettings};
use super::profile::ScenarioProfile;
use crate::metrics::monitor::{self, GeneratorMonitor};
use crate::metrics::reporter;
use crate::metrics::types::RunSummary;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub host: String,
    pub report_file: Option<PathBuf>,
    pub monitor_interval: u64,
}

/// Build the goose attack for `profile` without starting it.
pub fn build_attack(
    profile: &ScenarioProfile,
    options: &RunOptions,
) -> Result<Box<GooseAttack>> {
    let mut attack = GooseAttack::initialize_with_config(GooseConfiguration::default())?
        .register_scenario(profile.exec.scenario()?)
        .set_default(GooseDefault::Host, options.host.as_str())?;

    attack = match engine_settings(&profile.executor) {
        EngineSettings::Constant {
            users,
            hatch_rate,
            run_time,
        } => attack
            .set_default(GooseDefault::Users, users)?
            .set_default(GooseDefault::HatchRate, hatch_rate.to_string().as_str())?
            .set_default(GooseDefault::RunTime, run_time)?,
        EngineSettings::TestPlan(plan) => {
            attack.set_default(GooseDefault::TestPlan, plan.as_str())?
        }
    };

    if let Some(path) = &options.report_file {
        let path = path.to_string_lossy();
        attack = attack.set_default(GooseDefault::ReportFile, path.as_ref())?;
    }

    Ok(attack)
}

pub async fn run(name: &str, profile: &ScenarioProfile, options: &RunOptions) -> Result<RunSummary> {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("run", %run_id, scenario = name);

    async {
        if !profile.executor.is_monotonic_ramp_up() {
            tracing::warn!("Stage targets drop before the final ramp down");
        }

        let attack = build_attack(profile, options)
            .with_context(|| format!("failed to configure scenario '{}'", name))?;

        let monitor_handle = tokio::spawn(
            monitor::start_periodic_monitor(GeneratorMonitor::new(), options.monitor_interval)
                .in_current_span(),
        );

        tracing::info!(
            "Attacking {} with {} VUs at peak over {}s",
            options.host,
            profile.executor.peak_vus(),
            profile.executor.total_duration().as_secs()
        );

        let result = attack.execute().await;
        monitor_handle.abort();

        let metrics = result.with_context(|| format!("scenario '{}' failed", name))?;
        let summary = RunSummary::from_metrics(&metrics);

        reporter::print_final_report(name, profile, &summary);
        tracing::info!(
            requests = summary.requests,
            failures = summary.failures,
            "Load test complete"
        );

        Ok(summary)
    }
    .instrument(span)
    .await
}

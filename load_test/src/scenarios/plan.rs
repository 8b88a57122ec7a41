//! Translate a profile into goose settings

use super::duration::whole_seconds;
use super::profile::Executor;

/// How a profile is expressed to goose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSettings {
    /// Launch every user within the first second, then hold for `run_time` seconds.
    Constant {
        users: usize,
        hatch_rate: usize,
        run_time: usize,
    },

    /// A goose `--test-plan` string, `users,duration;...`.
    TestPlan(String),
}

pub fn engine_settings(executor: &Executor) -> EngineSettings {
    match executor {
        Executor::ConstantVus { vus, duration } => EngineSettings::Constant {
            users: *vus,
            hatch_rate: (*vus).max(1),
            run_time: whole_seconds(*duration) as usize,
        },
        Executor::RampingVus { .. } => EngineSettings::TestPlan(render_test_plan(executor)),
    }
}

pub fn render_test_plan(executor: &Executor) -> String {
    executor
        .plan_steps()
        .iter()
        .map(|(users, duration)| format!("{},{}s", users, whole_seconds(*duration)))
        .collect::<Vec<_>>()
        .join(";")
}

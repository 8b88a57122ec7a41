use std::time::Duration;

use crate::scenarios::profile::{ScenarioProfile, Stage};
use crate::transactions::ExecFn;

/// Scenario run when none is named.
pub const DEFAULT_SCENARIO: &str = "stress_test_375";

const SMOKE_DURATION: Duration = Duration::from_secs(15);
const STAGE_DURATION: Duration = Duration::from_secs(15);

/// Every built-in profile, by name.
pub fn builtin_profiles() -> Vec<(&'static str, ScenarioProfile)> {
    vec![
        ("smoke_test_150", smoke_profile(150)),
        ("smoke_test_250", smoke_profile(250)),
        ("smoke_test_375", smoke_profile(375)),
        ("smoke_test_450", smoke_profile(450)),
        ("stress_test_150", stress_profile(&[25, 50, 75, 100, 150, 0])),
        ("stress_test_250", stress_profile(&[50, 100, 150, 200, 250, 0])),
        (
            "stress_test_375_linear",
            stress_profile(&[75, 150, 225, 300, 375, 0]),
        ),
        (DEFAULT_SCENARIO, active_stress_profile()),
    ]
}

/// Smoke profile
///
/// All VUs start together and hold for 15 seconds, running `smoke`.
pub fn smoke_profile(vus: usize) -> ScenarioProfile {
    ScenarioProfile::constant(vus, SMOKE_DURATION, ExecFn::Smoke)
}

/// Stress profile
///
/// Ramps from zero through `targets`, one 15 second stage per target,
/// running `stress`.
pub fn stress_profile(targets: &[usize]) -> ScenarioProfile {
    let stages = targets
        .iter()
        .map(|target| Stage::new(STAGE_DURATION, *target))
        .collect();
    ScenarioProfile::ramping(0, stages, ExecFn::Stress)
}

/// The stress profile currently in use
///
/// Holds at 100 for a second stage before climbing to 600:
/// - 15s -> 100
/// - 15s -> 100
/// - 15s -> 300
/// - 15s -> 400
/// - 15s -> 600
/// - 15s -> 0
pub fn active_stress_profile() -> ScenarioProfile {
    stress_profile(&[100, 100, 300, 400, 600, 0])
}

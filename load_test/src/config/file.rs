//! Scenario files - JSON in the same shape as a k6 `options.scenarios` block

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::scenarios::duration::parse_duration;
use crate::scenarios::profile::{ScenarioProfile, Stage};
use crate::transactions::ExecFn;

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    scenarios: BTreeMap<String, RawScenario>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "executor")]
enum RawScenario {
    #[serde(rename = "constant-vus")]
    ConstantVus {
        vus: usize,
        duration: String,
        exec: ExecFn,
    },

    #[serde(rename = "ramping-vus")]
    RampingVus {
        #[serde(rename = "startVUs", default)]
        start_vus: usize,
        stages: Vec<RawStage>,
        exec: ExecFn,
    },
}

#[derive(Debug, Deserialize)]
struct RawStage {
    duration: String,
    target: usize,
}

impl RawScenario {
    fn into_profile(self, name: &str) -> Result<ScenarioProfile, ConfigError> {
        match self {
            RawScenario::ConstantVus {
                vus,
                duration,
                exec,
            } => {
                // goose reads a zero run time as "run until canceled"
                let duration = parse_duration(&duration)?;
                if duration.is_zero() {
                    return Err(ConfigError::ZeroDuration {
                        name: name.to_string(),
                    });
                }
                Ok(ScenarioProfile::constant(vus, duration, exec))
            }
            RawScenario::RampingVus {
                start_vus,
                stages,
                exec,
            } => {
                if stages.is_empty() {
                    return Err(ConfigError::EmptyStages {
                        name: name.to_string(),
                    });
                }
                let stages = stages
                    .into_iter()
                    .map(|s| Ok(Stage::new(parse_duration(&s.duration)?, s.target)))
                    .collect::<Result<Vec<_>, ConfigError>>()?;
                Ok(ScenarioProfile::ramping(start_vus, stages, exec))
            }
        }
    }
}

/// Parse scenario definitions from a JSON string.
pub fn parse_scenarios(
    path: &Path,
    text: &str,
) -> Result<Vec<(String, ScenarioProfile)>, ConfigError> {
    let file: ScenarioFile = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    file.scenarios
        .into_iter()
        .map(|(name, raw)| {
            let profile = raw.into_profile(&name)?;
            Ok((name, profile))
        })
        .collect()
}

pub fn load_scenarios(path: &Path) -> Result<Vec<(String, ScenarioProfile)>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenarios = parse_scenarios(path, &text)?;
    tracing::debug!(
        "Loaded {} scenario(s) from {}",
        scenarios.len(),
        path.display()
    );
    Ok(scenarios)
}

// Config module
// Built-in scenario catalog plus optional scenario files

pub mod file;
pub mod profiles;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;
use crate::scenarios::profile::ScenarioProfile;

pub use profiles::DEFAULT_SCENARIO;

/// Scenario name -> execution profile.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    profiles: BTreeMap<String, ScenarioProfile>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.extend(
            profiles::builtin_profiles()
                .into_iter()
                .map(|(name, profile)| (name.to_string(), profile)),
        );
        catalog
    }

    /// Add profiles, replacing any existing entry with the same name.
    pub fn extend(&mut self, profiles: impl IntoIterator<Item = (String, ScenarioProfile)>) {
        for (name, profile) in profiles {
            if self.profiles.insert(name.clone(), profile).is_some() {
                tracing::debug!("Scenario '{}' overridden", name);
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&ScenarioProfile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownScenario {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScenarioProfile)> {
        self.profiles.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}

/// Built-in catalog, overlaid with the scenarios in `config` when given.
pub fn load_catalog(config: Option<&Path>) -> Result<Catalog, ConfigError> {
    let mut catalog = Catalog::builtin();
    if let Some(path) = config {
        catalog.extend(file::load_scenarios(path)?);
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::*;
    use crate::transactions::ExecFn;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.get(DEFAULT_SCENARIO).is_ok());
        assert!(catalog.get("stress_test_375_linear").is_ok());
    }

    #[test]
    fn test_unknown_scenario_lists_available() {
        let err = Catalog::builtin().get("soak_test").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("soak_test"));
        assert!(message.contains("smoke_test_150"));
    }

    #[test]
    fn test_file_overrides_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"scenarios": {{
                "stress_test_375": {{"executor": "constant-vus", "vus": 3,
                    "duration": "5s", "exec": "smoke"}},
                "extra": {{"executor": "constant-vus", "vus": 1,
                    "duration": "1s", "exec": "stress"}}
            }}}}"#
        )
        .unwrap();

        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(
            catalog.get(DEFAULT_SCENARIO).unwrap(),
            &ScenarioProfile::constant(3, Duration::from_secs(5), ExecFn::Smoke)
        );
        assert!(catalog.get("extra").is_ok());
    }

    #[test]
    fn test_load_catalog_without_file() {
        assert_eq!(load_catalog(None).unwrap().len(), 8);
    }
}

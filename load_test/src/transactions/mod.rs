//! Request functions executed by each virtual user.
//!
//! A profile names its function through [`ExecFn`]; the function is wrapped
//! into a goose scenario whose wait time carries the per-iteration pause.

pub mod smoke;
pub mod stress;

use std::fmt;
use std::time::Duration;

use goose::prelude::*;
use serde::{Deserialize, Serialize};

use self::smoke::smoke;
use self::stress::stress;

/// Host the profiles are aimed at unless overridden on the command line.
pub const DEFAULT_HOST: &str = "http://104.236.114.203";

/// Path hit by every request.
pub const TARGET_PATH: &str = "/api/hello";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecFn {
    Smoke,
    Stress,
}

impl ExecFn {
    pub fn name(&self) -> &'static str {
        match self {
            ExecFn::Smoke => "smoke",
            ExecFn::Stress => "stress",
        }
    }

    pub fn pause(&self) -> Duration {
        match self {
            ExecFn::Smoke => smoke::PAUSE,
            ExecFn::Stress => stress::PAUSE,
        }
    }

    /// Build the goose scenario that runs this function in a loop.
    pub fn scenario(&self) -> Result<Scenario, GooseError> {
        let transaction = match self {
            ExecFn::Smoke => transaction!(smoke),
            ExecFn::Stress => transaction!(stress),
        }
        .set_name(self.name());

        Scenario::new(self.name())
            .register_transaction(transaction)
            .set_wait_time(self.pause(), self.pause())
    }
}

impl fmt::Display for ExecFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pauses() {
        assert_eq!(ExecFn::Smoke.pause(), Duration::from_secs(1));
        assert_eq!(ExecFn::Stress.pause(), Duration::from_millis(500));
    }

    #[test]
    fn test_scenario_registers_one_transaction() {
        for exec in [ExecFn::Smoke, ExecFn::Stress] {
            let scenario = exec.scenario().unwrap();
            assert_eq!(scenario.name, exec.name());
            assert_eq!(scenario.transactions.len(), 1);
        }
    }

    #[test]
    fn test_exec_fn_serde_names() {
        let exec: ExecFn = serde_json::from_str("\"stress\"").unwrap();
        assert_eq!(exec, ExecFn::Stress);
        assert_eq!(serde_json::to_string(&ExecFn::Smoke).unwrap(), "\"smoke\"");
        assert!(serde_json::from_str::<ExecFn>("\"soak\"").is_err());
    }
}

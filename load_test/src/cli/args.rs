use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_SCENARIO;
use crate::transactions::DEFAULT_HOST;

/// HTTP Load Testing Tool
#[derive(Parser, Debug)]
#[command(name = "load-test")]
#[command(about = "Smoke and stress load profiles for the /api/hello endpoint")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Mode {
    /// List available scenarios
    List(ListArgs),

    /// Show the stages of a scenario without generating load
    Plan(SelectArgs),

    /// Run a scenario against the target host
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// JSON file with extra or overriding scenarios
    #[arg(long, env = "LOAD_TEST_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    /// Scenario name
    #[arg(long, default_value = DEFAULT_SCENARIO, env = "LOAD_TEST_SCENARIO")]
    pub scenario: String,

    /// JSON file with extra or overriding scenarios
    #[arg(long, env = "LOAD_TEST_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Target host, scheme included
    #[arg(long, default_value = DEFAULT_HOST, env = "LOAD_TEST_HOST")]
    pub host: String,

    /// Write a goose report (.html, .json or .md)
    #[arg(long)]
    pub report_file: Option<PathBuf>,

    /// Load generator sampling interval in seconds
    #[arg(long, default_value = "5")]
    pub monitor_interval: u64,
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use clap::CommandFactory;

    use super::*;

    /// Serializes tests that read or write the LOAD_TEST_* variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_of(subcommand: &str, arg: &str) -> Option<String> {
        let command = Cli::command();
        let sub = command
            .get_subcommands()
            .find(|s| s.get_name() == subcommand)
            .unwrap();
        let env = sub
            .get_arguments()
            .find(|a| a.get_id() == arg)
            .and_then(|a| a.get_env())
            .map(|env| env.to_string_lossy().into_owned());
        env
    }

    #[test]
    fn test_env_fallbacks() {
        assert_eq!(env_of("run", "scenario").as_deref(), Some("LOAD_TEST_SCENARIO"));
        assert_eq!(env_of("run", "host").as_deref(), Some("LOAD_TEST_HOST"));
        assert_eq!(env_of("run", "config").as_deref(), Some("LOAD_TEST_CONFIG"));
        assert_eq!(env_of("plan", "scenario").as_deref(), Some("LOAD_TEST_SCENARIO"));
        assert_eq!(env_of("plan", "config").as_deref(), Some("LOAD_TEST_CONFIG"));
        assert_eq!(env_of("list", "config").as_deref(), Some("LOAD_TEST_CONFIG"));
        assert_eq!(env_of("run", "report_file"), None);
    }

    #[test]
    fn test_env_values_are_parsed() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("LOAD_TEST_SCENARIO", "smoke_test_450");
        std::env::set_var("LOAD_TEST_HOST", "http://staging:8080");
        std::env::set_var("LOAD_TEST_CONFIG", "extra.json");

        let parsed = Cli::try_parse_from(["load-test", "run"]);

        std::env::remove_var("LOAD_TEST_SCENARIO");
        std::env::remove_var("LOAD_TEST_HOST");
        std::env::remove_var("LOAD_TEST_CONFIG");

        let Mode::Run(args) = parsed.unwrap().mode else {
            panic!("expected run mode");
        };
        assert_eq!(args.select.scenario, "smoke_test_450");
        assert_eq!(args.host, "http://staging:8080");
        assert_eq!(args.select.config, Some(PathBuf::from("extra.json")));
    }

    #[test]
    fn test_run_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let cli = Cli::try_parse_from(["load-test", "run"]).unwrap();
        assert!(!cli.verbose);
        let Mode::Run(args) = cli.mode else {
            panic!("expected run mode");
        };
        // Environment may override defaults; only check when unset.
        if std::env::var_os("LOAD_TEST_SCENARIO").is_none() {
            assert_eq!(args.select.scenario, DEFAULT_SCENARIO);
        }
        if std::env::var_os("LOAD_TEST_HOST").is_none() {
            assert_eq!(args.host, DEFAULT_HOST);
        }
        assert_eq!(args.monitor_interval, 5);
        assert!(args.report_file.is_none());
    }

    #[test]
    fn test_run_with_options() {
        let cli = Cli::try_parse_from([
            "load-test",
            "run",
            "--scenario",
            "smoke_test_150",
            "--host",
            "http://localhost:8080",
            "--report-file",
            "report.html",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Mode::Run(args) = cli.mode else {
            panic!("expected run mode");
        };
        assert_eq!(args.select.scenario, "smoke_test_150");
        assert_eq!(args.host, "http://localhost:8080");
        assert_eq!(args.report_file, Some(PathBuf::from("report.html")));
    }

    #[test]
    fn test_plan_and_list() {
        let cli =
            Cli::try_parse_from(["load-test", "plan", "--config", "scenarios.json"]).unwrap();
        let Mode::Plan(args) = cli.mode else {
            panic!("expected plan mode");
        };
        assert_eq!(args.config, Some(PathBuf::from("scenarios.json")));

        assert!(matches!(
            Cli::try_parse_from(["load-test", "list"]).unwrap().mode,
            Mode::List(_)
        ));
        assert!(Cli::try_parse_from(["load-test"]).is_err());
    }
}

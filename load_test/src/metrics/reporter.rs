//! Console output for catalogs, plans and finished runs

use std::io::{self, Write};

use crate::config::Catalog;
use crate::scenarios::duration::format_duration;
use crate::scenarios::plan::{engine_settings, EngineSettings};
use crate::scenarios::profile::{Executor, ScenarioProfile};

use super::types::RunSummary;

/// Print every scenario in the catalog, one per line
pub fn print_catalog(catalog: &Catalog, default: &str) {
    println!("{} scenarios available:\n", catalog.len());
    println!(
        "  {:<26} {:<13} {:<7} {:>6} {:>9}  {}",
        "NAME", "EXECUTOR", "EXEC", "PEAK", "DURATION", "MONOTONIC"
    );

    for (name, profile) in catalog.iter() {
        let marker = if name == default { "*" } else { " " };
        println!(
            "{} {:<26} {:<13} {:<7} {:>6} {:>9}  {}",
            marker,
            name,
            profile.executor.kind(),
            profile.exec,
            profile.executor.peak_vus(),
            format_duration(profile.executor.total_duration()),
            if profile.executor.is_monotonic_ramp_up() {
                "yes"
            } else {
                "no"
            }
        );
    }

    println!("\n  * default scenario");
    let _ = io::stdout().flush();
}

/// Print the stage table for one scenario and how goose will receive it
pub fn print_plan(name: &str, profile: &ScenarioProfile) {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║  Scenario: {:<52}║", fit_width(name, 52));
    println!("╚════════════════════════════════════════════════════════════════╝");

    println!("\n   Executor:             {:>10}", profile.executor.kind());
    println!(
        "   Exec:                 {:>10} (pause {})",
        profile.exec,
        format_duration(profile.exec.pause())
    );
    println!("   Peak VUs:             {:>10}", profile.executor.peak_vus());
    println!(
        "   Total Duration:       {:>10}",
        format_duration(profile.executor.total_duration())
    );

    match &profile.executor {
        Executor::ConstantVus { vus, duration } => {
            println!("\n   Hold {} VUs for {}", vus, format_duration(*duration));
        }
        Executor::RampingVus { start_vus, stages } => {
            println!("\n   STAGES (start at {} VUs)", start_vus);
            let mut elapsed = std::time::Duration::ZERO;
            for (idx, stage) in stages.iter().enumerate() {
                elapsed += stage.duration;
                println!(
                    "   {:>3}. {:>8} -> {:>6} VUs   (t = {})",
                    idx + 1,
                    format_duration(stage.duration),
                    stage.target,
                    format_duration(elapsed)
                );
            }
        }
    }

    match engine_settings(&profile.executor) {
        EngineSettings::Constant {
            users,
            hatch_rate,
            run_time,
        } => println!(
            "\n   Goose: --users {} --hatch-rate {} --run-time {}s",
            users, hatch_rate, run_time
        ),
        EngineSettings::TestPlan(plan) => println!("\n   Goose: --test-plan \"{}\"", plan),
    }
    println!();

    let _ = io::stdout().flush();
}

/// Cut `text` to at most `width` characters, marking the cut with `…`.
fn fit_width(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Print final summary report
pub fn print_final_report(name: &str, profile: &ScenarioProfile, summary: &RunSummary) {
    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║                    FINAL TEST REPORT                           ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    println!("\n📋 SCENARIO");
    println!("   Name:                 {:>10}", name);
    println!(
        "   Planned Duration:     {:>10}",
        format_duration(profile.executor.total_duration())
    );
    println!("   Planned Peak VUs:     {:>10}", profile.executor.peak_vus());

    println!("\n📊 REQUESTS");
    println!("   Total:                {:>10}", summary.requests);
    println!("   Failed:               {:>10}", summary.failures);
    println!("   Failure Rate:         {:>10.2}%", summary.failure_rate());
    println!("   Throughput:           {:>10.2} req/sec", summary.throughput());

    println!("\n👥 USERS");
    println!("   Maximum Launched:     {:>10}", summary.maximum_users);

    println!("\n⏱️  Test Duration: {} seconds", summary.duration_secs);
    println!("════════════════════════════════════════════════════════════════\n");
}

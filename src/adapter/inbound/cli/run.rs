//! Handler for the `run` command.

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::game::Outcome;
use crate::domain::report::CycleReport;
use crate::error::Result;
use crate::port::inbound::operator::runtime::{RunOutcome, RunRequest, RunStartupSnapshot};
use crate::port::outbound::notifier::{MatchNotification, Notifier};

/// Prints each match to the terminal as it is announced.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, event: &MatchNotification) -> Result<()> {
        let won = match event.outcome {
            Outcome::Won => Some(true),
            Outcome::Lost => Some(false),
            Outcome::Drew => None,
        };
        output::match_line(
            &event.detected_at.format("%H:%M:%S").to_string(),
            &event.outcome.to_string(),
            won,
            &describe(event),
        );
        Ok(())
    }
}

/// One-line summary of a match for the terminal.
fn describe(event: &MatchNotification) -> String {
    let mut line = format!(
        "{} {} as {} {} {} ({}m)",
        event.player_label,
        event.queue,
        event.role.short_label(),
        event.champion,
        event.kda(),
        event.duration_secs / 60,
    );
    if let Some(opponent) = &event.opponent {
        line.push_str(&format!(" vs {opponent}"));
    }
    if let Some(side) = event.side_strength {
        line.push_str(&format!(", {side}"));
    }
    line
}

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(&args.config)?;
    let database_path = operator::database_override(args.database.as_deref(), &config_toml)?;
    let machine_output = output::is_json();
    let request = build_run_request(args, config_toml, database_path, machine_output);
    let service = operator::operator();

    if !output::is_quiet() || machine_output {
        let startup = service.prepare_run(&request)?;
        print_startup_config(&startup);
    }

    let sinks: Vec<Box<dyn Notifier>> = vec![Box::new(ConsoleNotifier)];
    match service.execute_run(request, sinks).await? {
        RunOutcome::SingleCycle(report) => print_report(&report),
        RunOutcome::Stopped => output::success("Stopped"),
    }
    Ok(())
}

fn build_run_request(
    args: &RunArgs,
    config_toml: String,
    database_path: Option<String>,
    force_json_logs: bool,
) -> RunRequest {
    RunRequest {
        config_toml,
        log_level: args.log_level.clone(),
        json_logs: args.json_logs || force_json_logs,
        database_path,
        interval_secs: args.interval,
        once: args.once,
    }
}

/// Print startup configuration.
fn print_startup_config(snapshot: &RunStartupSnapshot) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Region", &snapshot.region);
    output::field("Database", &snapshot.database);
    output::field("Interval", format!("{}s", snapshot.interval_secs));
    if output::verbosity() > 0 || !snapshot.roster_ids.is_empty() {
        output::field("Roster", snapshot.roster_ids.len());
    }
    let notifiers = if snapshot.notifiers.is_empty() {
        "none".to_string()
    } else {
        snapshot.notifiers.join(", ")
    };
    output::field("Notifiers", notifiers);
    if !snapshot.api_key_loaded {
        output::warning("RIOT_API_KEY not set");
    }
}

fn print_report(report: &CycleReport) {
    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "run",
            "report": report,
        }));
        return;
    }
    output::section("Cycle");
    output::field("Checked", report.checked);
    output::field("Seeded", report.seeded);
    output::field("Unchanged", report.unchanged);
    output::field("Notified", report.notified);
    if report.retried() > 0 {
        output::field("Retry next", report.retried());
    }
    output::field("Duration", format!("{}ms", report.duration.as_millis()));
}

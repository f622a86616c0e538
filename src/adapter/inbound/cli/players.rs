//! Handlers for the `players` command group.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{PlayersAddArgs, PlayersRemoveArgs, RosterArgs};
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::player::TrackedPlayer;
use crate::error::Result;
use crate::port::inbound::operator::roster::RosterRequest;
use crate::port::inbound::roster::{Deregistration, Registration};

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "Player")]
    label: String,
    #[tabled(rename = "Contexts")]
    contexts: String,
    #[tabled(rename = "Last Match")]
    last_match: String,
}

impl From<&TrackedPlayer> for PlayerRow {
    fn from(player: &TrackedPlayer) -> Self {
        Self {
            label: player.label.clone(),
            contexts: player.contexts.join(", "),
            last_match: player
                .last_seen_match_id
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string),
        }
    }
}

fn roster_request(args: &RosterArgs) -> Result<RosterRequest> {
    let config_toml = operator::read_config_toml(&args.config)?;
    let database_path = operator::database_override(args.database.as_deref(), &config_toml)?;
    Ok(RosterRequest {
        config_toml,
        database_path,
    })
}

/// Execute `players add`.
pub async fn execute_add(args: &PlayersAddArgs) -> Result<()> {
    let request = roster_request(&args.roster)?;
    let registration = operator::operator()
        .add_player(&request, &args.riot_id, &args.context)
        .await?;

    let added = matches!(registration, Registration::Added(_));
    if output::is_json() {
        output::json_output(json!({
            "command": "players.add",
            "riot_id": args.riot_id,
            "context": args.context,
            "puuid": registration.player_id().as_str(),
            "added": added,
        }));
        return Ok(());
    }

    if added {
        output::success(&format!("Tracking {} in {}", args.riot_id, args.context));
    } else {
        output::note(&format!("{} is already tracked in {}", args.riot_id, args.context));
    }
    if output::verbosity() > 0 {
        output::field("PUUID", registration.player_id());
    }
    Ok(())
}

/// Execute `players remove`.
pub async fn execute_remove(args: &PlayersRemoveArgs) -> Result<()> {
    let request = roster_request(&args.roster)?;
    let outcome = operator::operator()
        .remove_player(&request, &args.player, &args.context)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "players.remove",
            "player": args.player,
            "context": args.context,
            "outcome": format!("{outcome:?}"),
        }));
        return Ok(());
    }

    match outcome {
        Deregistration::NotTracked => {
            output::warning(&format!("{} is not tracked in {}", args.player, args.context));
        }
        Deregistration::RemovedFromContext => {
            output::success(&format!("Removed {} from {}", args.player, args.context));
            output::note("Still tracked in other contexts");
        }
        Deregistration::Forgotten => {
            output::success(&format!("Stopped tracking {}", args.player));
        }
    }
    Ok(())
}

/// Execute `players list`.
pub async fn execute_list(args: &RosterArgs) -> Result<()> {
    let request = roster_request(args)?;
    let players = operator::operator().list_players(&request).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "players.list",
            "players": players,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::section("Tracked players");
    if players.is_empty() {
        output::note("(none)");
        output::hint("riftwatch players add <Name#TAG>");
        return Ok(());
    }

    let rows: Vec<PlayerRow> = players.iter().map(PlayerRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}

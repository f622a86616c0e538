//! Command-line interface definitions.
//!
//! Defines the CLI structure for riftwatch using `clap`: running the
//! watcher, managing the roster, and inspecting configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// League of Legends match watcher
#[derive(Parser, Debug)]
#[command(name = "riftwatch")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the riftwatch CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the roster and announce new matches (foreground)
    Run(RunArgs),

    /// Manage tracked players
    #[command(subcommand)]
    Players(PlayersCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `riftwatch players`.
#[derive(Subcommand, Debug)]
pub enum PlayersCommand {
    /// Resolve a Riot ID and start tracking it.
    Add(PlayersAddArgs),
    /// Stop tracking a player in a context.
    Remove(PlayersRemoveArgs),
    /// List tracked players with their last seen match.
    List(RosterArgs),
}

/// Subcommands for `riftwatch config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Config file and database location shared by roster commands.
#[derive(Parser, Debug)]
pub struct RosterArgs {
    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Database file path (default: ~/.riftwatch/riftwatch.db)
    #[arg(long)]
    pub database: Option<PathBuf>,
}

/// Arguments for `riftwatch players add`.
#[derive(Parser, Debug)]
pub struct PlayersAddArgs {
    /// Riot ID in `GameName#TagLine` form
    pub riot_id: String,

    /// Subscription context (e.g. a channel name)
    #[arg(long, default_value = "default")]
    pub context: String,

    #[command(flatten)]
    pub roster: RosterArgs,
}

/// Arguments for `riftwatch players remove`.
#[derive(Parser, Debug)]
pub struct PlayersRemoveArgs {
    /// Registered Riot ID or account id
    pub player: String,

    /// Subscription context to remove the player from
    #[arg(long, default_value = "default")]
    pub context: String,

    #[command(flatten)]
    pub roster: RosterArgs,
}

/// Arguments for `riftwatch config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the configuration file
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Run a single cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Database file path (default: ~/.riftwatch/riftwatch.db)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Seconds between cycles (minimum 10)
    #[arg(long)]
    pub interval: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::try_parse_from(["riftwatch", "run"]).unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(!args.once);
        assert!(!args.json_logs);
        assert!(args.database.is_none());
        assert!(args.interval.is_none());
        assert_eq!(args.config, paths::default_config());
    }

    #[test]
    fn parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "riftwatch",
            "run",
            "--once",
            "--interval",
            "30",
            "--log-level",
            "debug",
            "--database",
            "/tmp/r.db",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.once);
        assert_eq!(args.interval, Some(30));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.database, Some(PathBuf::from("/tmp/r.db")));
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from(["riftwatch", "--json", "-vv", "--color", "never", "run"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn parse_players_add_with_context() {
        let cli = Cli::try_parse_from([
            "riftwatch",
            "players",
            "add",
            "Faker#KR1",
            "--context",
            "lobby",
        ])
        .unwrap();
        let Commands::Players(PlayersCommand::Add(args)) = cli.command else {
            panic!("expected players add");
        };
        assert_eq!(args.riot_id, "Faker#KR1");
        assert_eq!(args.context, "lobby");
    }

    #[test]
    fn players_remove_defaults_context() {
        let cli = Cli::try_parse_from(["riftwatch", "players", "remove", "Faker#KR1"]).unwrap();
        let Commands::Players(PlayersCommand::Remove(args)) = cli.command else {
            panic!("expected players remove");
        };
        assert_eq!(args.context, "default");
    }

    #[test]
    fn players_add_requires_riot_id() {
        assert!(Cli::try_parse_from(["riftwatch", "players", "add"]).is_err());
    }
}

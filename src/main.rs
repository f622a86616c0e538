use clap::Parser;

use riftwatch::adapter::inbound::cli::command::{
    Cli, ColorChoice, Commands, ConfigCommand, PlayersCommand,
};
use riftwatch::adapter::inbound::cli::output::{self, OutputConfig};
use riftwatch::adapter::inbound::cli::{config, operator, players, run};
use riftwatch::error::Result;
use riftwatch::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if operator::install(Box::new(Operator::new())).is_err() {
        output::error("operator already installed");
        std::process::exit(2);
    }

    if let Err(err) = dispatch(cli.command).await {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Players(PlayersCommand::Add(args)) => players::execute_add(&args).await,
        Commands::Players(PlayersCommand::Remove(args)) => players::execute_remove(&args).await,
        Commands::Players(PlayersCommand::List(args)) => players::execute_list(&args).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}

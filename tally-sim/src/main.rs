use clap::Parser;
use tally_sim::{
    cli::{Cli, Command},
    config::SimConfig,
    runner,
    setup::{ensure_config, write_default_config},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = match &cli.log_filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,tally_ledger=debug")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command.clone().unwrap_or(Command::Run) {
        Command::Init { force } => {
            if force {
                write_default_config(&cli.config)?;
            } else if !ensure_config(&cli.config)? {
                info!("Config already exists at {}; use --force to overwrite.", cli.config.display());
            }
        }
        Command::Run => {
            ensure_config(&cli.config)?;
            info!("Config: {}", cli.config.display());

            let config = SimConfig::load_from_file(&cli.config).map_err(|e| {
                error!("Failed to load config: {}", e);
                e
            })?;

            let outcome = runner::run(&config)?;
            runner::report(&outcome);
        }
    }

    Ok(())
}

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod loader;
pub mod models;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use config::Config;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        Some(cli::Commands::Serve) => cli::cmd_serve(&config).await,
        Some(cli::Commands::Load { path }) => cli::cmd_load(&config, path).await,
        Some(cli::Commands::Init) => cli::cmd_init(),
        None => {
            use clap::CommandFactory;
            cli::Cli::command().print_help()?;
            Ok(())
        }
    }
}

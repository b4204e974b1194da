use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use erstats_cli::cli::{Cli, Command, ConfigAction};
use erstats_cli::{commands, config};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Command::Render(args) => {
            let config = config::load_from(&config_path)?;
            commands::render(&args, &config)
        }
        Command::QuickStats { json } => commands::quick_stats(json),
        Command::Hospitals => commands::hospitals(),
        Command::Validate => commands::validate(),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&config_path),
            ConfigAction::Init => commands::config_init(&config_path),
            ConfigAction::Reset => commands::config_reset(&config_path),
        },
    }
}

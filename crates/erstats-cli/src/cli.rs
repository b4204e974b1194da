use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use erstats_export::Format;

#[derive(Debug, Parser)]
#[command(
    name = "erstats",
    version,
    about = "Render the ER+ breast cancer statistics dashboard"
)]
pub struct Cli {
    /// Config file to use instead of the per-user one.
    #[arg(long, global = true, env = "ERSTATS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the full dashboard.
    Render(RenderArgs),
    /// Print the sidebar quick stats.
    QuickStats {
        #[arg(long)]
        json: bool,
    },
    /// List the hospitals accepted by `render --hospital`.
    Hospitals,
    /// Check every record set against its schema.
    Validate,
    /// Inspect or manage the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// html, json, markdown or docx. Defaults to the configured format.
    #[arg(long, short)]
    pub format: Option<Format>,

    /// Output file. Text formats go to stdout when omitted.
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Hospital shown in the detail lookup.
    #[arg(long)]
    pub hospital: Option<String>,

    /// Active top-level tab, zero-based.
    #[arg(long, default_value_t = 0)]
    pub tab: usize,

    /// Active tab inside "Affordable Options", zero-based.
    #[arg(long, default_value_t = 0)]
    pub affordability_tab: usize,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective config as JSON.
    Show,
    /// Write a default config file if none exists.
    Init,
    /// Delete the config file.
    Reset,
}

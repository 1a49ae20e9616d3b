//! findeck - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// findeck - terminal finance dashboard with a drag-to-reorder widget grid
#[derive(Parser, Debug)]
#[command(name = "findeck")]
#[command(version)]
#[command(about = "Terminal finance dashboard with a drag-to-reorder widget grid")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of grid columns
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: Option<u16>,

    /// Country code pre-filled on the sign-up screen
    #[arg(long)]
    pub country_code: Option<String>,

    /// Go straight to the dashboard
    #[arg(long)]
    pub skip_signup: bool,

    /// Start with edit mode on
    #[arg(short, long)]
    pub edit: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = findeck::config::load_config_with_precedence(args.config.clone())?;
        let merged = findeck::config::merge_config(config_file);
        let with_env = findeck::config::apply_env_overrides(merged);

        // Flags only override when given
        let skip_signup_override = args.skip_signup.then_some(true);
        findeck::config::apply_cli_overrides(
            with_env,
            args.columns.map(usize::from),
            args.country_code.clone(),
            skip_signup_override,
        )
    };

    findeck::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    findeck::view::run_with_config(&config, args.edit)?;

    Ok(())
}

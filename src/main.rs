//! Waitlist Admin - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use waitlist_admin::model::AppError;

/// Waitlist Admin - TUI for reviewing service provider signups
#[derive(Parser, Debug)]
#[command(name = "waitlist-admin")]
#[command(version)]
#[command(about = "Terminal dashboard for reviewing service provider waitlist entries")]
pub struct Args {
    /// JSON file with an array of provider records (bundled sample if omitted)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with a search query in place
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start with the filter sidebar hidden
    #[arg(long)]
    pub hide_filters: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = waitlist_admin::config::load_config_with_precedence(args.config.clone())?;
        let merged = waitlist_admin::config::merge_config(config_file);
        let with_env = waitlist_admin::config::apply_env_overrides(merged);
        waitlist_admin::config::apply_cli_overrides(with_env, args.data.clone(), args.hide_filters)
    };

    waitlist_admin::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let source = waitlist_admin::source::RecordSource::from_path(config.data_file.clone());
    let store = source.load()?;

    let color = waitlist_admin::view::ColorConfig::from_env_and_args(args.no_color);
    let cli_args = waitlist_admin::view::CliArgs::new(args.search, color);

    waitlist_admin::view::run_with_source(store, &config, cli_args)?;

    info!("Exited cleanly");
    Ok(())
}

//! Standings CLI: operator tool for the tournament standings overlay.
//!
//! Usage:
//!   standings show [--json]            Show ranked standings
//!   standings teams                    List the roster in entry order
//!   standings info [--json]            Show tournament branding and styling
//!   standings view                     Print the overlay view model as JSON
//!   standings set-team <ID> [FIELDS]   Edit one team
//!   standings set-info <PATCH>         Merge a JSON patch into the configuration
//!   standings reset                    Restore default teams and configuration
//!   standings export --content <PNG>   Composite and save a screenshot
//!   standings init [--force]           Write the configuration file

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use standings_common::config::AppConfig;
use standings_store::{
    BackgroundWriter, FileStorage, PersistenceAdapter, StoreContext, TournamentStore,
};

mod commands;

#[derive(Parser)]
#[command(
    name = "standings",
    about = "Tournament standings overlay editor and exporter",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Storage directory (overrides the configured data_dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show ranked standings
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the roster in entry order
    Teams,

    /// Show tournament branding and styling
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the overlay view model consumed by presentation surfaces
    View,

    /// Edit one team
    SetTeam {
        /// Team id (e.g. team-3)
        id: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Logo reference
        #[arg(long)]
        logo: Option<String>,

        /// Wins
        #[arg(long)]
        wins: Option<u32>,

        /// Placement points
        #[arg(long)]
        pp: Option<u32>,

        /// Kill points
        #[arg(long)]
        kp: Option<u32>,
    },

    /// Merge a JSON patch into the configuration, e.g. '{"hostName":"Apex Cup"}'
    SetInfo {
        /// camelCase JSON object with the fields to change
        patch: String,
    },

    /// Restore default teams and configuration
    Reset,

    /// Composite the background skin and a rendered content layer into a PNG
    Export {
        /// Rendered overlay content (PNG, transparent where the skin shows)
        #[arg(long)]
        content: PathBuf,

        /// Directory receiving tournament-screenshot.png
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_error) = match AppConfig::try_load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    standings_common::logging::init_logging(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Using default configuration");
    }

    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    tracing::debug!(data_dir = %config.data_dir.display(), "Opening tournament storage");
    let storage = FileStorage::open(&config.data_dir)
        .map_err(|e| anyhow::anyhow!("Failed to open storage: {e}"))?;
    let adapter = PersistenceAdapter::new(Arc::new(storage));
    let (writer, writer_handle) = BackgroundWriter::spawn(adapter.clone());
    let context = StoreContext::with_store(TournamentStore::open(&adapter, Box::new(writer)));

    let result = match cli.command {
        Commands::Show { json } => commands::show::run(&context, json),
        Commands::Teams => commands::show::teams(&context),
        Commands::Info { json } => commands::info::run(&context, json),
        Commands::View => commands::info::view(&context),
        Commands::SetTeam {
            id,
            name,
            logo,
            wins,
            pp,
            kp,
        } => commands::edit::set_team(&context, id, name, logo, wins, pp, kp),
        Commands::SetInfo { patch } => commands::edit::set_info(&context, &patch),
        Commands::Reset => commands::edit::reset(&context),
        Commands::Export {
            content,
            output_dir,
        } => commands::export::run(&context, &config, content, output_dir).await,
        Commands::Init { force } => commands::init::run(&config, force),
    };

    let stats = writer_handle
        .shutdown()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to persist changes: {e}"))?;
    if stats.failed > 0 {
        anyhow::bail!("{} change(s) could not be saved", stats.failed);
    }

    result
}

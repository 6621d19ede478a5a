//! # Taskflow - in-memory task board
//!
//! ```bash
//! # Open the board with the sample tasks
//! taskflow
//!
//! # Print in-progress tasks, highest priority first
//! taskflow list --status in-progress --sort priority
//!
//! # Stats as of a given day
//! taskflow stats --now 2025-11-06 --json
//! ```
//!
//! Nothing is persisted: every run starts from the sample data (or an empty
//! board with `--empty`). An optional `~/.taskflow/config.toml` sets the
//! initial search, filters and sort order.

use clap::Parser;
use tracing::{debug, info};

use taskflow::cli::Cli;
use taskflow::cmd::*;
use taskflow::config::{default_config_path, Config};
use taskflow::logging::{self, LogTarget};
use taskflow::seed::sample_projects;
use taskflow::store::TaskStore;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&LogTarget::parse(&cli.log), cli.verbose) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let query = match config.view.to_query() {
        Ok(query) => query,
        Err(e) => {
            eprintln!("error: {}: {e}", config_path.display());
            std::process::exit(1);
        }
    };

    let store = if cli.empty || !config.store.seed {
        TaskStore::new()
    } else {
        TaskStore::seeded()
    };
    info!(tasks = store.len(), "store ready");
    debug!(?query, "initial view");

    let session = Session { store, query, projects: sample_projects() };

    let result = match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => cmd_ui(session),
        Commands::List { search, status, priority, sort, json } => {
            let query = apply_list_overrides(session.query.clone(), search, status, priority, sort);
            cmd_list(&session, &query, json)
        }
        Commands::Stats { now, json } => cmd_stats(&session, now, json),
        Commands::Projects { json } => cmd_projects(&session, json),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

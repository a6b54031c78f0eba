//! storefront - replay state-slice actions from a JSON file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use storefront::config::Config;
use storefront::logging::init_tracing;
use storefront::replay::{load_actions, replay};
use storefront::store::{Action, Store};

/// storefront - storefront state slices
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (default: platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dispatch actions from a JSON file into a fresh store and print the result
    Replay {
        /// JSON array of actions
        file: PathBuf,

        /// Print only one slice
        #[arg(long, value_enum)]
        slice: Option<SliceArg>,

        /// Print compact JSON regardless of config
        #[arg(long)]
        compact: bool,
    },

    /// List every action type the store understands
    Actions,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SliceArg {
    Auth,
    Products,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config_path, config) = match &cli.config {
        Some(path) => (path.clone(), Config::load_from(path)),
        None => {
            let path = Config::config_path();
            let config = Config::load_or_default(&path);
            (path, config)
        }
    };
    let config = config.context("Failed to load configuration")?;

    init_tracing(&config.logging);
    tracing::debug!(
        path = %config_path.display(),
        from_file = config_path.exists(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Replay {
            file,
            slice,
            compact,
        } => {
            let actions = load_actions(&file)
                .with_context(|| format!("Failed to load actions from {}", file.display()))?;

            let mut store = Store::new();
            let summary = replay(&mut store, actions);
            tracing::info!(
                dispatched = summary.dispatched,
                changed = summary.changed,
                "Replay finished"
            );

            let pretty = config.output.pretty && !compact;
            let output = match slice {
                None => to_json(&store, pretty),
                Some(SliceArg::Auth) => to_json(store.auth(), pretty),
                Some(SliceArg::Products) => to_json(store.catalog(), pretty),
            }?;
            println!("{output}");
        }
        Commands::Actions => {
            for kind in Action::vocabulary() {
                println!("{kind}");
            }
        }
    }

    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize state")
}

// Shelf - terminal client for a Product REST API
//
// Lists, adds, edits and deletes products held by a remote `/product`
// endpoint, either interactively or through headless subcommands.
//
// Architecture:
// - Store (reqwest): the only code that talks HTTP
// - Screens: per-screen state machines that hand out requests
// - TUI (ratatui): draws screens and runs requests on spawned tasks
// - CLI (clap): runs the same screens inline and prints the result

mod cli;
mod config;
mod form;
mod logging;
mod product;
mod screens;
mod store;
mod sync;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, VERSION};
use logging::{LogBuffer, LogSink};
use screens::Route;
use store::RemoteProductStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management runs before anything that could fail on a bad file
    if let Some(Commands::Config { show, reset, path }) = cli.command {
        return cli::handle_config(show, reset, path, cli.api_url);
    }

    // Write a commented template on first run so the options are discoverable
    Config::ensure_config_exists();
    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    match cli.command {
        Some(command) => {
            let _guard = logging::init(&config.logging, LogSink::Stderr)?;
            let store = RemoteProductStore::new(&config.api_url)?;
            let mut stdout = std::io::stdout().lock();
            cli::run_command(command, &store, &mut stdout).await
        }
        None => {
            let log_buffer = LogBuffer::new();
            let _guard = logging::init(&config.logging, LogSink::Buffer(log_buffer.clone()))?;
            let store = RemoteProductStore::new(&config.api_url)?;
            tracing::info!("shelf v{} using {}", VERSION, store.base_url());
            tui::run_tui(config, store, log_buffer, Route::Home).await
        }
    }
}

//! Contact Book - Main entry point
//!
//! Loads the saved contacts, runs the console until the user exits or a
//! termination signal arrives, then saves the contacts back.

use anyhow::Result;
use clap::Parser;
use contact_book::repositories::{BookRepository, JsonFileRepository};
use contact_book::{run_console, Config, ExitReason, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Console assistant bot for your contacts.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the json file with saved contacts
    #[arg(long)]
    file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env_with_file(args.file)?;

    // Logs go to stderr so they never mix with console output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using contacts file {}", config.contacts_file.display());

    let repository =
        Arc::new(JsonFileRepository::new(config.contacts_file.clone())) as Arc<dyn BookRepository>;
    let mut session = match Session::open(repository).await {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to open contact book: {}", e);
            return Err(e.into());
        }
    };

    let reason = run_console(
        &mut session,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        termination_signal(),
    )
    .await?;
    info!("Console stopped: {:?}", reason);

    let saved = session.close().await;

    if reason == ExitReason::Signal {
        // The stdin reader may still be parked on a blocking read; don't wait for it.
        let code = match &saved {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
        std::process::exit(code);
    }

    saved?;
    info!("Contact book shutdown complete");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn termination_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                warn!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

mod app;
mod keys;
mod paths;
mod terminal;
mod ui;
mod widgets;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use artic_lib::ArticClient;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use crate::app::App;
use crate::terminal::TerminalGuard;

/// Errors that end the session.
#[derive(Debug, Error)]
enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("client error: {0}")]
    Client(#[from] artic_lib::error::Error),
}

fn init_logging() {
    paths::rotate_logs();

    let path = paths::log_file().unwrap_or_else(|| PathBuf::from(paths::FALLBACK_LOG));
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
        }
        Err(e) => eprintln!("Logging disabled, cannot create {}: {}", path.display(), e),
    }
}

async fn run() -> Result<(), AppError> {
    let client = ArticClient::new()?;
    info!("starting against {}", client.base_url());

    let mut terminal = TerminalGuard::new()?;
    App::new(Arc::new(client)).run(&mut terminal).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and tests)
pub use app::{App, Session};
pub use config::DATA_SOURCE;
pub use data::{DatasetSource, FetchError, source_for};
pub use models::RegulatoryDataset;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL or file path of the regulatory dataset document
    #[arg(long)]
    pub source: Option<String>,
}

impl Cli {
    pub fn source_location(&self) -> &str {
        self.source
            .as_deref()
            .unwrap_or(DATA_SOURCE.default_location())
    }
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

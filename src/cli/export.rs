//! Export command implementation
//!
//! Dumps the active content bundle to stdout, mostly useful as a starting
//! point for a custom content file.

use anyhow::{Context, Result};

use questdeck::content::Content;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Toml,
    Json,
}

/// Serialize the content bundle to stdout
pub fn export_command(content: &Content, format: ExportFormat) -> Result<()> {
    let text = match format {
        ExportFormat::Toml => {
            toml::to_string_pretty(content).context("Failed to serialize content as TOML")?
        }
        ExportFormat::Json => {
            serde_json::to_string_pretty(content).context("Failed to serialize content as JSON")?
        }
    };

    println!("{text}");
    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use questdeck::content::Content;

mod cli;

use cli::export::ExportFormat;

#[derive(Parser)]
#[command(name = "questdeck")]
#[command(about = "QuestCode Academy - gamified learning-progress dashboard")]
#[command(version)]
struct Cli {
    /// Path to a content file (defaults to ~/.questdeck/content.toml)
    #[arg(short = 'C', long, global = true)]
    content: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard GUI
    Gui,

    /// Print the quest board
    Quests {
        /// Only show quests from this module
        #[arg(long)]
        module: Option<String>,

        /// Only show quests with this status
        #[arg(long)]
        status: Option<String>,
    },

    /// Print the learning path
    Path,

    /// Print the character sheet
    Character,

    /// Dump the active content bundle to stdout
    Export {
        #[arg(long, value_enum, default_value = "toml")]
        format: ExportFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let content = Content::load(cli.content.as_deref());

    match cli.command {
        Some(Commands::Quests { module, status }) => {
            cli::quests::quests_command(&content, module, status)?;
        }
        Some(Commands::Path) => {
            cli::path::path_command(&content)?;
        }
        Some(Commands::Character) => {
            cli::character::character_command(&content)?;
        }
        Some(Commands::Export { format }) => {
            cli::export::export_command(&content, format)?;
        }
        Some(Commands::Gui) | None => {
            // Default: run the GUI
            questdeck::gui::run_gui(content)?;
        }
    }

    Ok(())
}

//! GUI runner - launches the questdeck window

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::content::Content;

use super::app::QuestDeckApp;

/// Run the dashboard over the given content
pub fn run_gui(content: Content) -> Result<()> {
    info!("[questdeck] Starting GUI...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 720.0])
            .with_min_inner_size([720.0, 480.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = QuestDeckApp::new(content);

    eframe::run_native(
        "questdeck",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}

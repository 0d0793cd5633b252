//! Small shared widgets: card frames, badges, painter-drawn progress bars

use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui, Vec2};

use super::theme::{BG_CARD, BG_HIGHLIGHT, BG_TROUGH, TEXT_MUTED};

/// Standard card frame; locked cards pass a dimming stroke color
pub fn card_frame(accent: Color32) -> Frame {
    Frame::new()
        .fill(BG_CARD)
        .corner_radius(CornerRadius::same(8))
        .stroke(Stroke::new(1.0, accent.linear_multiply(0.4)))
        .inner_margin(Margin::same(12))
}

/// A small colored pill badge
pub fn badge(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(
        RichText::new(text)
            .color(color)
            .background_color(color.linear_multiply(0.15))
            .size(11.0),
    );
}

/// A dimmer outline-style badge for secondary tags
pub fn tag(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .color(TEXT_MUTED)
            .background_color(BG_HIGHLIGHT)
            .size(10.0),
    );
}

/// Painter-drawn progress bar. `fraction` is not clamped; the fill is, so an
/// overfull value just draws a full bar.
pub fn progress_bar(ui: &mut Ui, width: f32, height: f32, fraction: f32, fill: Color32) {
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());

    ui.painter().rect_filled(rect, 4, BG_TROUGH);

    let fill_width = rect.width() * fraction.min(1.0);
    if fill_width > 0.0 {
        let fill_rect = egui::Rect::from_min_size(rect.min, Vec2::new(fill_width, height));
        ui.painter().rect_filled(fill_rect, 4, fill);
    }
}

/// Row of technology tags
pub fn tech_tags(ui: &mut Ui, technologies: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for tech in technologies {
            tag(ui, tech);
        }
    });
}

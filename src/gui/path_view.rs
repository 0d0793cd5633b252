//! Learning path view: the ordered module / boss-battle progression

use eframe::egui::{self, RichText, Ui};

use crate::domain::{resolve_unlocks, NodeKind, PathNode, QuestStatus};

use super::app::QuestDeckApp;
use super::style::{kind_icon, node_action, status_color, status_icon};
use super::theme::{ACCENT_GOLD, ACCENT_PURPLE, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use super::widgets::{badge, card_frame, progress_bar, tech_tags};

impl QuestDeckApp {
    pub(super) fn render_learning_path(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Full-Stack Learning Path")
                    .size(22.0)
                    .color(ACCENT_PURPLE)
                    .strong(),
            );
            ui.label(
                RichText::new(
                    "Complete quests, defeat bosses, and level up your coding skills!",
                )
                .color(TEXT_DIM),
            );
        });
        ui.add_space(12.0);

        let path = &self.content.path;
        let mut clicked: Option<String> = None;

        for (index, node) in path.iter().enumerate() {
            if index > 0 {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("↓").color(TEXT_MUTED));
                });
            }
            if render_path_node(ui, node, path) {
                clicked = Some(format!("{} \"{}\"", node_action(node.status).label, node.title));
            }
            ui.add_space(6.0);
        }

        if let Some(message) = clicked {
            self.activity = Some(message);
        }
    }
}

/// Render one node card; returns true when its action button was clicked
fn render_path_node(ui: &mut Ui, node: &PathNode, path: &[PathNode]) -> bool {
    let accent = status_color(node.status);
    let locked = node.status == QuestStatus::Locked;
    let mut clicked = false;

    card_frame(accent).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        if locked {
            ui.disable();
        }

        ui.horizontal(|ui| {
            ui.label(RichText::new(status_icon(node.status)).size(20.0).color(accent));
            if let Some(crown) = kind_icon(node.kind) {
                ui.label(RichText::new(crown).size(16.0).color(ACCENT_GOLD));
            }
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&node.title)
                        .size(16.0)
                        .color(TEXT_PRIMARY)
                        .strong(),
                );
                ui.label(RichText::new(&node.description).small().color(TEXT_DIM));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("⭐ {} XP", node.xp_reward))
                            .color(ACCENT_GOLD)
                            .strong(),
                    );
                    if let Some(level) = node.required_level {
                        badge(ui, &format!("Level {level}+"), TEXT_MUTED);
                    }
                });
            });
        });

        if node.progress > 0 {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "Progress: {} / {} quests",
                        node.quests_completed, node.quests_total
                    ))
                    .small()
                    .color(TEXT_MUTED),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{}%", node.progress))
                            .small()
                            .color(accent),
                    );
                });
            });
            progress_bar(ui, ui.available_width(), 8.0, node.progress_fraction(), accent);
        }

        ui.add_space(6.0);
        tech_tags(ui, &node.technologies);

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let count_caption = match node.kind {
                NodeKind::BossBattle => "Epic Boss Battle".to_string(),
                NodeKind::Module => format!("{} Quests", node.quests_total),
            };
            ui.label(RichText::new(count_caption).small().color(TEXT_MUTED));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let action = node_action(node.status);
                let button = egui::Button::new(RichText::new(action.label).color(action.color));
                if ui.add_enabled(action.enabled, button).clicked() {
                    clicked = true;
                }
            });
        });

        if node.shows_unlocks() {
            let titles = resolve_unlocks(node, path);
            if !titles.is_empty() {
                ui.add_space(4.0);
                ui.separator();
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("Unlocks:").small().color(TEXT_MUTED));
                    for title in titles {
                        badge(ui, title, TEXT_DIM);
                    }
                });
            }
        }
    });

    clicked
}

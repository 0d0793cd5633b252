//! Quest board view: quests grouped by module

use eframe::egui::{self, RichText, Ui};

use crate::domain::{group_by_module, Quest, QuestStatus};

use super::app::QuestDeckApp;
use super::style::{difficulty_color, quest_action, status_color, status_icon};
use super::theme::{ACCENT_CYAN, ACCENT_GOLD, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use super::widgets::{badge, card_frame, progress_bar, tech_tags};

impl QuestDeckApp {
    pub(super) fn render_quest_board(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Quest Board")
                    .size(22.0)
                    .color(ACCENT_CYAN)
                    .strong(),
            );
            ui.label(
                RichText::new("Choose your adventure and master the full-stack journey")
                    .color(TEXT_DIM),
            );
        });
        ui.add_space(12.0);

        let mut clicked: Option<String> = None;

        for group in group_by_module(&self.content.quests) {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(group.module)
                        .size(17.0)
                        .color(TEXT_PRIMARY)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    badge(
                        ui,
                        &format!("{} / {} Complete", group.completed(), group.quests.len()),
                        TEXT_DIM,
                    );
                });
            });
            ui.separator();
            ui.add_space(4.0);

            for quest in &group.quests {
                if render_quest_card(ui, quest) {
                    clicked = Some(format!(
                        "{} \"{}\"",
                        quest_action(quest.status).label,
                        quest.title
                    ));
                }
                ui.add_space(6.0);
            }
            ui.add_space(10.0);
        }

        if let Some(message) = clicked {
            self.activity = Some(message);
        }
    }
}

/// Render one quest card; returns true when its action button was clicked
fn render_quest_card(ui: &mut Ui, quest: &Quest) -> bool {
    let accent = status_color(quest.status);
    let mut clicked = false;

    card_frame(accent).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        if quest.status == QuestStatus::Locked {
            ui.disable();
        }

        ui.horizontal(|ui| {
            ui.label(RichText::new(status_icon(quest.status)).size(16.0).color(accent));
            badge(ui, quest.difficulty.label(), difficulty_color(quest.difficulty));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("⭐ {} XP", quest.xp_reward))
                        .color(ACCENT_GOLD)
                        .strong(),
                );
            });
        });

        ui.add_space(4.0);
        ui.label(
            RichText::new(&quest.title)
                .size(15.0)
                .color(TEXT_PRIMARY)
                .strong(),
        );
        ui.label(RichText::new(&quest.description).small().color(TEXT_DIM));

        if quest.shows_progress() {
            if let Some(fraction) = quest.progress_fraction() {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Progress").small().color(TEXT_MUTED));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}%", quest.progress.unwrap_or(0)))
                                .small()
                                .color(accent),
                        );
                    });
                });
                progress_bar(ui, ui.available_width(), 8.0, fraction, accent);
            }
        }

        ui.add_space(6.0);
        tech_tags(ui, &quest.technologies);

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("⏱ {}", quest.estimated_time))
                    .small()
                    .color(TEXT_MUTED),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let action = quest_action(quest.status);
                let button = egui::Button::new(RichText::new(action.label).color(action.color));
                if ui.add_enabled(action.enabled, button).clicked() {
                    clicked = true;
                }
            });
        });

        if !quest.prerequisites.is_empty() {
            ui.add_space(4.0);
            ui.separator();
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Prerequisites:").small().color(TEXT_MUTED));
                for prereq in &quest.prerequisites {
                    badge(ui, prereq, TEXT_DIM);
                }
            });
        }
    });

    clicked
}

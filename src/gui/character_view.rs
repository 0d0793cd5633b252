//! Character profile view: sheet, equipment grid, stat bars

use eframe::egui::{self, RichText, Ui};

use crate::domain::{CharacterSheet, LevelTitle, SLOT_ORDER};

use super::app::QuestDeckApp;
use super::style::{rarity_color, slot_icon};
use super::theme::{
    ACCENT_GOLD, ACCENT_PURPLE, BG_HIGHLIGHT, STATUS_COMPLETED, TEXT_DIM, TEXT_MUTED,
    TEXT_PRIMARY,
};
use super::widgets::{badge, card_frame, progress_bar};

impl QuestDeckApp {
    pub(super) fn render_character_profile(&mut self, ui: &mut Ui) {
        let character = &self.content.character;
        let achievements = &self.content.recent_achievements;

        render_overview(ui, character);
        ui.add_space(10.0);

        ui.columns(2, |columns| {
            render_equipment(&mut columns[0], character);
            render_stats(&mut columns[1], character, achievements);
        });
    }
}

fn render_overview(ui: &mut Ui, character: &CharacterSheet) {
    card_frame(ACCENT_PURPLE).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new("Code Warrior")
                        .size(18.0)
                        .color(TEXT_PRIMARY)
                        .strong(),
                );
                ui.horizontal(|ui| {
                    badge(ui, &format!("Lv {}", character.level), ACCENT_PURPLE);
                    ui.label(
                        RichText::new(LevelTitle::for_level(character.level))
                            .color(TEXT_DIM),
                    );
                });
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("🏆 {} Quests", character.quests_completed))
                            .color(ACCENT_GOLD)
                            .strong(),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{} Modules Mastered",
                            character.modules_completed
                        ))
                        .small()
                        .color(TEXT_MUTED),
                    );
                });
            });
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Experience Points").color(TEXT_PRIMARY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{} / {} XP", character.xp, character.xp_to_next))
                        .color(ACCENT_GOLD)
                        .strong(),
                );
            });
        });
        progress_bar(ui, ui.available_width(), 12.0, character.xp_fraction(), ACCENT_GOLD);
    });
}

fn render_equipment(ui: &mut Ui, character: &CharacterSheet) {
    card_frame(TEXT_MUTED).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new("🛡 Equipment").size(15.0).color(TEXT_PRIMARY).strong());
        ui.add_space(8.0);

        // Slot grid: each fixed slot, filled or empty
        ui.horizontal_wrapped(|ui| {
            for slot in SLOT_ORDER {
                let worn = character.equipped_in(slot);
                let color = worn.map(|e| rarity_color(e.rarity)).unwrap_or(TEXT_MUTED);
                let tooltip = worn
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| format!("Empty {slot} slot"));

                egui::Frame::new()
                    .fill(BG_HIGHLIGHT)
                    .corner_radius(6.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(slot_icon(slot)).size(18.0).color(color));
                    })
                    .response
                    .on_hover_text(tooltip);
            }
        });

        ui.add_space(10.0);
        ui.label(RichText::new("EQUIPPED ITEMS").small().color(TEXT_MUTED));
        for item in &character.equipment {
            let color = rarity_color(item.rarity);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&item.name).color(color).strong());
                    ui.label(
                        RichText::new(format!("{} {}", item.rarity, item.slot))
                            .small()
                            .color(TEXT_MUTED),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    badge(ui, &format!("+{} INT", item.stats.intelligence), color);
                });
            });
            ui.add_space(4.0);
        }
    });
}

fn render_stats(ui: &mut Ui, character: &CharacterSheet, achievements: &[String]) {
    card_frame(TEXT_MUTED).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            RichText::new("⭐ Character Stats")
                .size(15.0)
                .color(TEXT_PRIMARY)
                .strong(),
        );
        ui.add_space(8.0);

        for (name, value, fraction) in character.total_stats.bar_fractions() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(name).color(TEXT_PRIMARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(value.to_string()).color(ACCENT_GOLD).strong());
                });
            });
            progress_bar(ui, ui.available_width(), 8.0, fraction, ACCENT_PURPLE);
            ui.add_space(6.0);
        }

        if !achievements.is_empty() {
            ui.add_space(6.0);
            ui.separator();
            ui.label(RichText::new("RECENT ACHIEVEMENTS").small().color(TEXT_MUTED));
            ui.add_space(4.0);
            for achievement in achievements {
                badge(ui, achievement, STATUS_COMPLETED);
                ui.add_space(2.0);
            }
        }
    });
}

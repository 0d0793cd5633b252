//! The main application shell: hero header, tab selector, footer

use eframe::egui::{self, RichText};

use crate::content::Content;

use super::theme::{
    ACCENT_CYAN, ACCENT_GOLD, BG_CARD, BG_PRIMARY, STATUS_COMPLETED, STATUS_IN_PROGRESS,
    TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

/// The active view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Path,
    Quests,
    Character,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Path => "🗺 Learning Path",
            Tab::Quests => "🎯 Quests",
            Tab::Character => "👤 Character",
        }
    }
}

/// Main questdeck application state
pub struct QuestDeckApp {
    pub(super) content: Content,
    pub(super) active_tab: Tab,
    /// One-line record of the last action click, shown in the footer
    pub(super) activity: Option<String>,
}

impl QuestDeckApp {
    pub fn new(content: Content) -> Self {
        Self {
            content,
            active_tab: Tab::Path,
            activity: None,
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("QuestCode Academy")
                    .size(28.0)
                    .color(ACCENT_GOLD)
                    .strong(),
            );
            ui.label(
                RichText::new(
                    "Master full-stack development through epic quests and RPG-style progression",
                )
                .color(TEXT_DIM),
            );
        });
        ui.add_space(12.0);

        // Quick stats bar
        let stat_cards: [(&str, String, &str); 4] = {
            let header = &self.content.header;
            [
                ("👑", header.level.to_string(), "Current Level"),
                ("⭐", header.xp.to_string(), "Total XP"),
                ("⚡", header.streak.to_string(), "Day Streak"),
                ("🏆", header.total_quests.to_string(), "Quests Complete"),
            ]
        };
        ui.horizontal(|ui| {
            for (icon, value, caption) in stat_cards {
                egui::Frame::new()
                    .fill(BG_CARD)
                    .corner_radius(8.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_min_width(110.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(icon).size(16.0));
                                ui.label(
                                    RichText::new(value)
                                        .size(20.0)
                                        .color(TEXT_PRIMARY)
                                        .strong(),
                                );
                            });
                            ui.label(RichText::new(caption).small().color(TEXT_MUTED));
                        });
                    });
            }
        });
        ui.add_space(8.0);

        // Tab selector
        ui.horizontal(|ui| {
            for tab in [Tab::Path, Tab::Quests, Tab::Character] {
                let selected = self.active_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.active_tab = tab;
                }
            }
        });
        ui.add_space(4.0);
    }

    fn render_footer(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new("This Week's Progress")
                        .color(TEXT_PRIMARY)
                        .strong(),
                );
                ui.label(
                    RichText::new(format!(
                        "You've earned {} XP this week! Keep up the great work!",
                        self.content.header.weekly_xp
                    ))
                    .small()
                    .color(TEXT_DIM),
                );
                if let Some(activity) = &self.activity {
                    ui.label(RichText::new(activity).small().color(ACCENT_CYAN));
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new("Continue Learning").color(STATUS_IN_PROGRESS))
                    .clicked()
                {
                    self.active_tab = Tab::Path;
                }
                if ui
                    .button(RichText::new("View Achievements").color(STATUS_COMPLETED))
                    .clicked()
                {
                    self.active_tab = Tab::Character;
                }
            });
        });
        ui.add_space(6.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_on_path_tab_with_no_activity() {
        let app = QuestDeckApp::new(Content::builtin());
        assert_eq!(app.active_tab, Tab::Path);
        assert!(app.activity.is_none());
        assert_eq!(app.content.quests.len(), Content::builtin().quests.len());
    }
}

impl eframe::App for QuestDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = BG_PRIMARY;
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            self.render_footer(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    match self.active_tab {
                        Tab::Path => self.render_learning_path(ui),
                        Tab::Quests => self.render_quest_board(ui),
                        Tab::Character => self.render_character_profile(ui),
                    }
                    ui.add_space(16.0);
                });
        });
    }
}

//! Status-driven display rules
//!
//! The lookup tables shared by all three views: status to color, icon glyph,
//! and action affordance; difficulty and rarity to badge colors.

use eframe::egui::Color32;

use crate::domain::{Difficulty, NodeKind, QuestStatus, Rarity, SlotKind};

use super::theme::{
    DIFF_ADVANCED, DIFF_BEGINNER, DIFF_EXPERT, DIFF_INTERMEDIATE, RARITY_COMMON, RARITY_EPIC,
    RARITY_LEGENDARY, RARITY_RARE, RARITY_UNCOMMON, STATUS_AVAILABLE, STATUS_COMPLETED,
    STATUS_IN_PROGRESS, STATUS_LOCKED,
};

/// Get the color for a quest or node status
pub fn status_color(status: QuestStatus) -> Color32 {
    match status {
        QuestStatus::Locked => STATUS_LOCKED,
        QuestStatus::Available => STATUS_AVAILABLE,
        QuestStatus::InProgress => STATUS_IN_PROGRESS,
        QuestStatus::Completed => STATUS_COMPLETED,
    }
}

/// Get the icon glyph for a status
pub fn status_icon(status: QuestStatus) -> &'static str {
    match status {
        QuestStatus::Locked => "🔒",
        QuestStatus::Available => "🎯",
        QuestStatus::InProgress => "⚡",
        QuestStatus::Completed => "✔",
    }
}

/// Crown marker for boss-battle nodes
pub fn kind_icon(kind: NodeKind) -> Option<&'static str> {
    match kind {
        NodeKind::Module => None,
        NodeKind::BossBattle => Some("👑"),
    }
}

/// Glyph for an equipment slot on the character grid
pub fn slot_icon(slot: SlotKind) -> &'static str {
    match slot {
        SlotKind::Helmet => "⛑",
        SlotKind::Sword => "⚔",
        SlotKind::Armor => "🛡",
        SlotKind::Boots => "👢",
        SlotKind::Trinket => "💎",
    }
}

/// The action affordance a status maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub color: Color32,
    /// Locked and completed actions render but do nothing
    pub enabled: bool,
}

/// Action button for a quest card
pub fn quest_action(status: QuestStatus) -> Action {
    match status {
        QuestStatus::Completed => Action {
            label: "🏆 Completed",
            color: STATUS_COMPLETED,
            enabled: false,
        },
        QuestStatus::InProgress => Action {
            label: "▶ Continue",
            color: STATUS_IN_PROGRESS,
            enabled: true,
        },
        QuestStatus::Locked => Action {
            label: "🔒 Locked",
            color: STATUS_LOCKED,
            enabled: false,
        },
        QuestStatus::Available => Action {
            label: "🎯 Start Quest",
            color: STATUS_AVAILABLE,
            enabled: true,
        },
    }
}

/// Action button for a path node; same table, journey-flavored labels
pub fn node_action(status: QuestStatus) -> Action {
    match status {
        QuestStatus::Completed => Action {
            label: "⭐ Mastered",
            color: STATUS_COMPLETED,
            enabled: false,
        },
        QuestStatus::InProgress => Action {
            label: "Continue Journey",
            color: STATUS_IN_PROGRESS,
            enabled: true,
        },
        QuestStatus::Locked => Action {
            label: "Locked",
            color: STATUS_LOCKED,
            enabled: false,
        },
        QuestStatus::Available => Action {
            label: "Begin Quest",
            color: STATUS_AVAILABLE,
            enabled: true,
        },
    }
}

/// Badge color for a difficulty tier
pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Beginner => DIFF_BEGINNER,
        Difficulty::Intermediate => DIFF_INTERMEDIATE,
        Difficulty::Advanced => DIFF_ADVANCED,
        Difficulty::Expert => DIFF_EXPERT,
    }
}

/// Text color for a rarity tier
pub fn rarity_color(rarity: Rarity) -> Color32 {
    match rarity {
        Rarity::Common => RARITY_COMMON,
        Rarity::Uncommon => RARITY_UNCOMMON,
        Rarity::Rare => RARITY_RARE,
        Rarity::Epic => RARITY_EPIC,
        Rarity::Legendary => RARITY_LEGENDARY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [QuestStatus; 4] = [
        QuestStatus::Locked,
        QuestStatus::Available,
        QuestStatus::InProgress,
        QuestStatus::Completed,
    ];

    #[test]
    fn test_every_status_has_icon_and_action() {
        for status in ALL_STATUSES {
            assert!(!status_icon(status).is_empty());
            assert!(!quest_action(status).label.is_empty());
            assert!(!node_action(status).label.is_empty());
        }
    }

    #[test]
    fn test_only_actionable_statuses_enable_buttons() {
        for status in ALL_STATUSES {
            let actionable =
                matches!(status, QuestStatus::Available | QuestStatus::InProgress);
            assert_eq!(quest_action(status).enabled, actionable);
            assert_eq!(node_action(status).enabled, actionable);
        }
    }

    #[test]
    fn test_action_color_matches_status_color() {
        for status in ALL_STATUSES {
            assert_eq!(quest_action(status).color, status_color(status));
        }
    }
}

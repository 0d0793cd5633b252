use serde::{Deserialize, Serialize};

/// The status of a quest or path node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    /// Not yet reachable; prerequisites or level gate unmet
    Locked,
    /// Reachable but not started
    Available,
    /// Started, partially complete
    InProgress,
    /// Finished
    Completed,
}

impl QuestStatus {
    /// Get the status marker string used in content files
    pub fn as_marker(&self) -> &'static str {
        match self {
            QuestStatus::Locked => "locked",
            QuestStatus::Available => "available",
            QuestStatus::InProgress => "in_progress",
            QuestStatus::Completed => "completed",
        }
    }

    /// Parse a marker string back into a status
    pub fn from_marker(s: &str) -> Option<Self> {
        match s {
            "locked" => Some(QuestStatus::Locked),
            "available" => Some(QuestStatus::Available),
            "in_progress" => Some(QuestStatus::InProgress),
            "completed" => Some(QuestStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_marker())
    }
}

/// The kind of a learning-path node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A regular module of quests
    Module,
    /// A checkpoint challenge gating further progress
    BossBattle,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Module => "module",
            NodeKind::BossBattle => "boss_battle",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Difficulty tier of a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rarity tier of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Equipment slot kinds; one of each on the character grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Helmet,
    Sword,
    Armor,
    Boots,
    Trinket,
}

/// The fixed slot layout of the equipment grid, in display order
pub const SLOT_ORDER: [SlotKind; 5] = [
    SlotKind::Helmet,
    SlotKind::Sword,
    SlotKind::Armor,
    SlotKind::Boots,
    SlotKind::Trinket,
];

impl SlotKind {
    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Helmet => "helmet",
            SlotKind::Sword => "sword",
            SlotKind::Armor => "armor",
            SlotKind::Boots => "boots",
            SlotKind::Trinket => "trinket",
        }
    }
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_marker_roundtrip() {
        for status in [
            QuestStatus::Locked,
            QuestStatus::Available,
            QuestStatus::InProgress,
            QuestStatus::Completed,
        ] {
            assert_eq!(QuestStatus::from_marker(status.as_marker()), Some(status));
        }
        assert_eq!(QuestStatus::from_marker("done"), None);
    }

    #[test]
    fn test_status_serde_uses_snake_case() {
        let json = serde_json::to_string(&QuestStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        assert!(serde_json::from_str::<QuestStatus>("\"boss_battle\"").is_err());
    }

    #[test]
    fn test_slot_order_covers_all_slots() {
        assert_eq!(SLOT_ORDER.len(), 5);
        for slot in [
            SlotKind::Helmet,
            SlotKind::Sword,
            SlotKind::Armor,
            SlotKind::Boots,
            SlotKind::Trinket,
        ] {
            assert!(SLOT_ORDER.contains(&slot));
        }
    }
}

//! Character sheet, equipment, and the header stat bar

use serde::{Deserialize, Serialize};

use super::{Rarity, SlotKind};

/// The three character sub-scores, also used per item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub intelligence: u32,
    pub creativity: u32,
    pub debugging: u32,
}

/// Stat bars are drawn against a fixed denominator
pub const STAT_SCALE: u32 = 100;

impl StatBlock {
    /// Fill fractions for the three stat bars, in display order
    /// (intelligence, creativity, debugging), scaled against [`STAT_SCALE`].
    pub fn bar_fractions(&self) -> [(&'static str, u32, f32); 3] {
        let frac = |v: u32| v as f32 / STAT_SCALE as f32;
        [
            ("Intelligence", self.intelligence, frac(self.intelligence)),
            ("Creativity", self.creativity, frac(self.creativity)),
            ("Debugging", self.debugging, frac(self.debugging)),
        ]
    }
}

/// A piece of equipment shown on the character grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub slot: SlotKind,
    pub rarity: Rarity,
    pub stats: StatBlock,
}

/// The character sheet backing the profile view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub total_xp: u32,
    pub quests_completed: u32,
    pub modules_completed: u32,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    pub total_stats: StatBlock,
}

impl CharacterSheet {
    /// XP bar fill fraction: xp / xp_to_next, unclamped like the original
    /// bar width. A zero divisor reads as a full bar.
    pub fn xp_fraction(&self) -> f32 {
        if self.xp_to_next == 0 {
            1.0
        } else {
            self.xp as f32 / self.xp_to_next as f32
        }
    }

    /// Find the item occupying a slot, if any. Linear scan over the worn set.
    pub fn equipped_in(&self, slot: SlotKind) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.slot == slot)
    }
}

/// Stats for the hero header and weekly-progress footer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderStats {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    /// Consecutive active days
    pub streak: u32,
    pub total_quests: u32,
    pub weekly_xp: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> CharacterSheet {
        CharacterSheet {
            level: 12,
            xp: 2350,
            xp_to_next: 3000,
            total_xp: 15750,
            quests_completed: 47,
            modules_completed: 8,
            equipment: vec![Equipment {
                id: "1".to_string(),
                name: "Mystic Code Crown".to_string(),
                slot: SlotKind::Helmet,
                rarity: Rarity::Epic,
                stats: StatBlock {
                    intelligence: 15,
                    creativity: 10,
                    debugging: 5,
                },
            }],
            total_stats: StatBlock {
                intelligence: 87,
                creativity: 64,
                debugging: 92,
            },
        }
    }

    #[test]
    fn test_xp_fraction() {
        let s = sheet();
        assert!((s.xp_fraction() - 2350.0 / 3000.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_xp_fraction_zero_divisor_reads_full() {
        let mut s = sheet();
        s.xp_to_next = 0;
        assert_eq!(s.xp_fraction(), 1.0);
    }

    #[test]
    fn test_equipped_in_slot() {
        let s = sheet();
        assert_eq!(
            s.equipped_in(SlotKind::Helmet).map(|e| e.name.as_str()),
            Some("Mystic Code Crown")
        );
        assert!(s.equipped_in(SlotKind::Boots).is_none());
    }

    #[test]
    fn test_stat_bar_fractions() {
        let s = sheet();
        let bars = s.total_stats.bar_fractions();
        assert_eq!(bars[0].0, "Intelligence");
        assert_eq!(bars[0].1, 87);
        assert!((bars[2].2 - 0.92).abs() < f32::EPSILON);
    }
}

//! Quest records and the quest-board grouping

use serde::{Deserialize, Serialize};

use super::{Difficulty, QuestStatus};

/// A single learning task with reward and status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Grouping key for the quest board
    pub module: String,
    pub difficulty: Difficulty,
    pub xp_reward: u32,
    /// Free text, e.g. "45 min"
    pub estimated_time: String,
    pub status: QuestStatus,
    /// Percent complete (0-100); only meaningful for in-progress quests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    /// Titles of quests that must be completed first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Quest {
    /// Progress as a 0.0-1.0 fill fraction; None unless a progress value is set
    pub fn progress_fraction(&self) -> Option<f32> {
        self.progress.map(|p| p as f32 / 100.0)
    }

    /// Whether the card should draw its progress bar. The original board only
    /// draws the bar for in-progress quests with a nonzero progress value.
    pub fn shows_progress(&self) -> bool {
        self.status == QuestStatus::InProgress && self.progress.is_some_and(|p| p > 0)
    }
}

/// A module's quests on the board, in source order
#[derive(Debug)]
pub struct ModuleGroup<'a> {
    pub module: &'a str,
    pub quests: Vec<&'a Quest>,
}

impl ModuleGroup<'_> {
    pub fn completed(&self) -> usize {
        self.quests
            .iter()
            .filter(|q| q.status == QuestStatus::Completed)
            .count()
    }
}

/// Group quests by their module key, preserving first-seen module order and
/// per-module quest order.
pub fn group_by_module(quests: &[Quest]) -> Vec<ModuleGroup<'_>> {
    let mut groups: Vec<ModuleGroup<'_>> = Vec::new();

    for quest in quests {
        match groups.iter_mut().find(|g| g.module == quest.module) {
            Some(group) => group.quests.push(quest),
            None => groups.push(ModuleGroup {
                module: &quest.module,
                quests: vec![quest],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(id: &str, module: &str, status: QuestStatus) -> Quest {
        Quest {
            id: id.to_string(),
            title: format!("Quest {id}"),
            description: String::new(),
            module: module.to_string(),
            difficulty: Difficulty::Beginner,
            xp_reward: 100,
            estimated_time: "30 min".to_string(),
            status,
            progress: None,
            prerequisites: Vec::new(),
            technologies: Vec::new(),
        }
    }

    #[test]
    fn test_grouping_preserves_insertion_order() {
        let quests = vec![
            quest("1", "Frontend Basics", QuestStatus::Completed),
            quest("2", "Backend Development", QuestStatus::Available),
            quest("3", "Frontend Basics", QuestStatus::InProgress),
        ];

        let groups = group_by_module(&quests);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].module, "Frontend Basics");
        assert_eq!(groups[0].quests.len(), 2);
        assert_eq!(groups[0].quests[1].id, "3");
        assert_eq!(groups[1].module, "Backend Development");
    }

    #[test]
    fn test_group_completed_count() {
        let quests = vec![
            quest("1", "Frontend Basics", QuestStatus::Completed),
            quest("2", "Frontend Basics", QuestStatus::Completed),
            quest("3", "Frontend Basics", QuestStatus::InProgress),
        ];

        let groups = group_by_module(&quests);
        assert_eq!(groups[0].completed(), 2);
    }

    #[test]
    fn test_shows_progress_requires_in_progress_and_value() {
        let mut q = quest("1", "m", QuestStatus::InProgress);
        assert!(!q.shows_progress());
        q.progress = Some(65);
        assert!(q.shows_progress());
        q.status = QuestStatus::Available;
        assert!(!q.shows_progress());
        // matches the original guard: a literal 0 draws nothing
        q.status = QuestStatus::InProgress;
        q.progress = Some(0);
        assert!(!q.shows_progress());
    }
}

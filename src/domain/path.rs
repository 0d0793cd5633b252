//! Learning-path nodes and unlock resolution

use serde::{Deserialize, Serialize};

use super::{NodeKind, QuestStatus};

/// A module or boss-battle checkpoint in the progression sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathNode {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: NodeKind,
    pub status: QuestStatus,
    /// Percent complete (0-100)
    pub progress: u8,
    pub quests_total: u32,
    pub quests_completed: u32,
    pub xp_reward: u32,
    /// Character level gate, shown as a badge when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_level: Option<u32>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Ids of nodes this one unlocks on completion
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unlocks: Vec<String>,
}

impl PathNode {
    pub fn progress_fraction(&self) -> f32 {
        self.progress as f32 / 100.0
    }

    /// Unlocks are previewed on every node except locked ones
    pub fn shows_unlocks(&self) -> bool {
        !self.unlocks.is_empty() && self.status != QuestStatus::Locked
    }
}

/// Resolve a node's unlock ids to titles by linear lookup over the path.
/// Unknown ids are skipped; the content lint reports them separately.
pub fn resolve_unlocks<'a>(node: &PathNode, path: &'a [PathNode]) -> Vec<&'a str> {
    node.unlocks
        .iter()
        .filter_map(|id| path.iter().find(|n| &n.id == id))
        .map(|n| n.title.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, title: &str, unlocks: &[&str]) -> PathNode {
        PathNode {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            kind: NodeKind::Module,
            status: QuestStatus::Available,
            progress: 0,
            quests_total: 10,
            quests_completed: 0,
            xp_reward: 500,
            required_level: None,
            technologies: Vec::new(),
            unlocks: unlocks.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_resolve_unlocks_known_ids() {
        let path = vec![
            node("html", "HTML Foundations", &["css"]),
            node("css", "CSS Mastery", &[]),
        ];
        assert_eq!(resolve_unlocks(&path[0], &path), vec!["CSS Mastery"]);
    }

    #[test]
    fn test_resolve_unlocks_skips_unknown_ids() {
        let path = vec![
            node("html", "HTML Foundations", &["css", "missing"]),
            node("css", "CSS Mastery", &[]),
        ];
        assert_eq!(resolve_unlocks(&path[0], &path), vec!["CSS Mastery"]);
    }

    #[test]
    fn test_locked_nodes_hide_unlocks() {
        let mut n = node("a", "A", &["b"]);
        assert!(n.shows_unlocks());
        n.status = QuestStatus::Locked;
        assert!(!n.shows_unlocks());
    }
}

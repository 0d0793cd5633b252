//! Content consistency pass
//!
//! Nothing here fails the load: content mistakes are surfaced as warnings and
//! the views render whatever they were given.

use std::collections::HashSet;

use tracing::warn;

use super::Content;

/// A single consistency finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintFinding {
    /// A quest or node carries a progress value above 100
    ProgressOutOfRange { id: String, progress: u8 },
    /// A node reports more completed quests than it has
    CountExceedsTotal {
        id: String,
        completed: u32,
        total: u32,
    },
    DuplicateQuestId { id: String },
    DuplicateNodeId { id: String },
    /// A node unlocks an id no node in the path has
    UnknownUnlock { id: String, unlock: String },
}

impl std::fmt::Display for LintFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LintFinding::ProgressOutOfRange { id, progress } => {
                write!(f, "{id}: progress {progress} exceeds 100")
            }
            LintFinding::CountExceedsTotal {
                id,
                completed,
                total,
            } => write!(f, "{id}: {completed} quests completed of only {total}"),
            LintFinding::DuplicateQuestId { id } => write!(f, "duplicate quest id {id}"),
            LintFinding::DuplicateNodeId { id } => write!(f, "duplicate path node id {id}"),
            LintFinding::UnknownUnlock { id, unlock } => {
                write!(f, "{id}: unlocks unknown node {unlock}")
            }
        }
    }
}

/// Check a content set for internal consistency
pub fn lint(content: &Content) -> Vec<LintFinding> {
    let mut findings = Vec::new();

    let mut quest_ids = HashSet::new();
    for quest in &content.quests {
        if !quest_ids.insert(quest.id.as_str()) {
            findings.push(LintFinding::DuplicateQuestId {
                id: quest.id.clone(),
            });
        }
        if let Some(p) = quest.progress {
            if p > 100 {
                findings.push(LintFinding::ProgressOutOfRange {
                    id: quest.id.clone(),
                    progress: p,
                });
            }
        }
    }

    let mut node_ids = HashSet::new();
    for node in &content.path {
        if !node_ids.insert(node.id.as_str()) {
            findings.push(LintFinding::DuplicateNodeId {
                id: node.id.clone(),
            });
        }
        if node.progress > 100 {
            findings.push(LintFinding::ProgressOutOfRange {
                id: node.id.clone(),
                progress: node.progress,
            });
        }
        if node.quests_completed > node.quests_total {
            findings.push(LintFinding::CountExceedsTotal {
                id: node.id.clone(),
                completed: node.quests_completed,
                total: node.quests_total,
            });
        }
    }

    for node in &content.path {
        for unlock in &node.unlocks {
            if !node_ids.contains(unlock.as_str()) {
                findings.push(LintFinding::UnknownUnlock {
                    id: node.id.clone(),
                    unlock: unlock.clone(),
                });
            }
        }
    }

    findings
}

/// Run the lint and log each finding
pub fn report(content: &Content) {
    for finding in lint(content) {
        warn!("[content] {}", finding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::domain::QuestStatus;

    #[test]
    fn test_builtin_content_is_clean() {
        assert!(lint(&Content::builtin()).is_empty());
    }

    #[test]
    fn test_lint_flags_progress_overflow() {
        let mut content = Content::builtin();
        content.quests[0].progress = Some(130);
        content.quests[0].status = QuestStatus::InProgress;
        let findings = lint(&content);
        assert!(findings.iter().any(|f| matches!(
            f,
            LintFinding::ProgressOutOfRange { progress: 130, .. }
        )));
    }

    #[test]
    fn test_lint_flags_count_over_total() {
        let mut content = Content::builtin();
        content.path[0].quests_completed = content.path[0].quests_total + 3;
        let findings = lint(&content);
        assert!(findings
            .iter()
            .any(|f| matches!(f, LintFinding::CountExceedsTotal { .. })));
    }

    #[test]
    fn test_lint_flags_duplicate_and_unknown_ids() {
        let mut content = Content::builtin();
        let dup = content.quests[0].clone();
        content.quests.push(dup);
        content.path[0].unlocks.push("nowhere".to_string());

        let findings = lint(&content);
        assert!(findings
            .iter()
            .any(|f| matches!(f, LintFinding::DuplicateQuestId { .. })));
        assert!(findings.iter().any(
            |f| matches!(f, LintFinding::UnknownUnlock { unlock, .. } if unlock == "nowhere")
        ));
    }
}

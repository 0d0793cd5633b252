//! Quest board command implementation

use anyhow::Result;

use questdeck::content::Content;
use questdeck::domain::{group_by_module, QuestStatus};

/// Print the quest board, optionally filtered by module and/or status
pub fn quests_command(
    content: &Content,
    module: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let status_filter = match status.as_deref() {
        Some(s) => match QuestStatus::from_marker(&s.to_lowercase()) {
            Some(status) => Some(status),
            None => {
                eprintln!("Unknown status: {s}");
                return Ok(());
            }
        },
        None => None,
    };

    let mut printed = 0usize;
    for group in group_by_module(&content.quests) {
        if let Some(wanted) = &module {
            if !group.module.eq_ignore_ascii_case(wanted) {
                continue;
            }
        }

        let quests: Vec<_> = group
            .quests
            .iter()
            .filter(|q| status_filter.is_none_or(|s| q.status == s))
            .collect();
        if quests.is_empty() {
            continue;
        }

        println!(
            "{} ({} / {} complete)\n",
            group.module,
            group.completed(),
            group.quests.len()
        );

        for quest in quests {
            println!(
                "  [{}] {} ({}, {} XP, {})",
                quest.status, quest.title, quest.difficulty, quest.xp_reward, quest.estimated_time
            );
            println!("    {}", quest.description);

            if let Some(progress) = quest.progress {
                println!("    Progress: {progress}%");
            }
            if !quest.prerequisites.is_empty() {
                println!("    Requires: {}", quest.prerequisites.join(", "));
            }
            if !quest.technologies.is_empty() {
                println!("    Tech: {}", quest.technologies.join(", "));
            }

            println!();
            printed += 1;
        }
    }

    if printed == 0 {
        println!("No quests found.");
    }

    Ok(())
}

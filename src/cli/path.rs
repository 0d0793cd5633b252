//! Learning path command implementation

use anyhow::Result;

use questdeck::content::Content;
use questdeck::domain::{resolve_unlocks, NodeKind};

/// Print the learning path top to bottom
pub fn path_command(content: &Content) -> Result<()> {
    if content.path.is_empty() {
        println!("The learning path is empty.");
        return Ok(());
    }

    println!("Learning Path ({} stops):\n", content.path.len());

    for node in &content.path {
        let marker = match node.kind {
            NodeKind::BossBattle => "BOSS",
            NodeKind::Module => "    ",
        };

        println!("  {marker} [{}] {} - {} XP", node.status, node.title, node.xp_reward);
        println!("         {}", node.description);
        println!(
            "         {} / {} quests ({}%)",
            node.quests_completed, node.quests_total, node.progress
        );

        if let Some(level) = node.required_level {
            println!("         Requires level {level}");
        }

        let unlocks = resolve_unlocks(node, &content.path);
        if !unlocks.is_empty() {
            println!("         Unlocks: {}", unlocks.join(", "));
        }

        println!();
    }

    Ok(())
}

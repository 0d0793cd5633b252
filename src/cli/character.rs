//! Character sheet command implementation

use anyhow::Result;

use questdeck::content::Content;
use questdeck::domain::{LevelTitle, SLOT_ORDER};

/// Print the character sheet
pub fn character_command(content: &Content) -> Result<()> {
    let character = &content.character;

    println!(
        "Code Warrior - Level {} {}",
        character.level,
        LevelTitle::for_level(character.level)
    );
    println!(
        "  XP: {} / {} ({:.0}%)  (total {})",
        character.xp,
        character.xp_to_next,
        character.xp_fraction() * 100.0,
        character.total_xp
    );
    println!(
        "  {} quests completed, {} modules mastered\n",
        character.quests_completed, character.modules_completed
    );

    println!("Equipment:");
    for slot in SLOT_ORDER {
        match character.equipped_in(slot) {
            Some(item) => println!(
                "  {:8} {} ({}) +{} INT +{} CRE +{} DBG",
                slot.label(),
                item.name,
                item.rarity,
                item.stats.intelligence,
                item.stats.creativity,
                item.stats.debugging
            ),
            None => println!("  {:8} (empty)", slot.label()),
        }
    }

    println!("\nStats:");
    for (name, value, _) in character.total_stats.bar_fractions() {
        println!("  {name:12} {value:3}");
    }

    if !content.recent_achievements.is_empty() {
        println!("\nRecent achievements:");
        for achievement in &content.recent_achievements {
            println!("  {achievement}");
        }
    }

    Ok(())
}

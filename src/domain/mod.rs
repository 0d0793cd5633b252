//! Domain records backing the three dashboard views
//!
//! Everything here is plain immutable data plus pure helpers; the views own
//! no state beyond the active tab.

mod character;
mod level;
mod path;
mod quest;
mod status;

pub use character::{CharacterSheet, Equipment, HeaderStats, StatBlock};
pub use level::{LevelTitle, TITLES};
pub use path::{resolve_unlocks, PathNode};
pub use quest::{group_by_module, ModuleGroup, Quest};
pub use status::{Difficulty, NodeKind, QuestStatus, Rarity, SlotKind, SLOT_ORDER};

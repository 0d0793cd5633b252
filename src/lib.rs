//! questdeck - QuestCode Academy
//!
//! A gamified learning-progress dashboard: a character profile, a linear
//! learning path of modules and boss battles, and a quest board grouped by
//! module. The whole app renders one immutable [`content::Content`] bundle;
//! there is no server, no persistence, and no state beyond the active tab.
//!
//! ## Views
//!
//! 1. **Learning Path**: ordered module/boss-battle progression with unlock
//!    previews.
//! 2. **Quest Board**: quests grouped by module with status-driven cards.
//! 3. **Character**: sheet, equipment grid, and stat bars.

pub mod content;
pub mod domain;
pub mod gui;

pub use domain::*;

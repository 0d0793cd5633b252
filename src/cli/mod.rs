//! Terminal command implementations

pub mod character;
pub mod export;
pub mod path;
pub mod quests;

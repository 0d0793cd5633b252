//! GUI module for the questdeck dashboard
//!
//! Three tabbed views over one immutable content bundle: the learning path,
//! the quest board, and the character profile. All rendering is driven by
//! the status lookup tables in [`style`].

pub mod app;
mod character_view;
mod path_view;
mod quest_board;
pub mod runner;
pub mod style;
pub mod theme;
mod widgets;

pub use app::QuestDeckApp;
pub use runner::run_gui;

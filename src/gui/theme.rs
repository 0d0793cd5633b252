//! GUI Theme: "Cosmic Academy" - dark fantasy dashboard palette
//!
//! Color constants for the questdeck GUI.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Background: deep space blue
pub const BG_PRIMARY: Color32 = Color32::from_rgb(16, 18, 28);
/// Card background
pub const BG_CARD: Color32 = Color32::from_rgb(26, 29, 43);
/// Hovered / highlighted card background
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(36, 41, 60);
/// Progress bar trough
pub const BG_TROUGH: Color32 = Color32::from_rgb(40, 44, 64);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 245);
pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 155, 180);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 105, 130);

// ═══════════════════════════════════════════════════════════════════════════
// STATUS COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const STATUS_LOCKED: Color32 = Color32::from_rgb(110, 115, 135);
pub const STATUS_AVAILABLE: Color32 = Color32::from_rgb(90, 200, 250);
pub const STATUS_IN_PROGRESS: Color32 = Color32::from_rgb(255, 200, 60);
pub const STATUS_COMPLETED: Color32 = Color32::from_rgb(80, 220, 120);

// ═══════════════════════════════════════════════════════════════════════════
// DIFFICULTY COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const DIFF_BEGINNER: Color32 = Color32::from_rgb(80, 220, 120);
pub const DIFF_INTERMEDIATE: Color32 = Color32::from_rgb(255, 190, 60);
pub const DIFF_ADVANCED: Color32 = Color32::from_rgb(250, 90, 90);
pub const DIFF_EXPERT: Color32 = Color32::from_rgb(255, 150, 40);

// ═══════════════════════════════════════════════════════════════════════════
// RARITY COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const RARITY_COMMON: Color32 = Color32::from_rgb(160, 165, 180);
pub const RARITY_UNCOMMON: Color32 = Color32::from_rgb(100, 220, 130);
pub const RARITY_RARE: Color32 = Color32::from_rgb(90, 150, 255);
pub const RARITY_EPIC: Color32 = Color32::from_rgb(190, 110, 255);
pub const RARITY_LEGENDARY: Color32 = Color32::from_rgb(255, 160, 40);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_GOLD: Color32 = Color32::from_rgb(255, 200, 90);
pub const ACCENT_PURPLE: Color32 = Color32::from_rgb(190, 120, 255);
pub const ACCENT_CYAN: Color32 = Color32::from_rgb(0, 230, 200);

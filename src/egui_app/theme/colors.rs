//! Color Constants
//!
//! The palette used by the users desk: a dark page with light cards.

use eframe::egui::Color32;

/// Page background
pub const BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x23, 0x2B);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x2A, 0x31, 0x3C);

/// Form and user card background
pub const CARD_BG: Color32 = Color32::from_rgb(0xF4, 0xF1, 0xEC);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC9, 0xC2, 0xB6);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xEE, 0xEA);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x22, 0x26, 0x2E);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x70, 0x7B);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x53, 0x53);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Accent color for primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(0x3B, 0x6E, 0xA5);

/// Hover item background
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0x4A, 0x57, 0x6B);

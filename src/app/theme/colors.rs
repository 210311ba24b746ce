//! Color Constants for the MedConnect Theme
//!
//! Light clinical palette: sky blue accents the patient side, emerald
//! the doctor side, warm grays carry the chrome.

use eframe::egui::Color32;

/// Page background
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Card/panel surface
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

/// Header/footer surface
pub const HEADER_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Subtle inset surface (empty states)
pub const INSET_BG: Color32 = Color32::from_rgb(0xF3, 0xF4, 0xF6);

/// Primary accent - sky, patient side
pub const SKY: Color32 = Color32::from_rgb(0x0E, 0xA5, 0xE9);

/// Sky accent, darker for hover and links
pub const SKY_DARK: Color32 = Color32::from_rgb(0x02, 0x84, 0xC7);

/// Sky tint for selected patient toggles and avatars
pub const SKY_TINT: Color32 = Color32::from_rgb(0xE0, 0xF2, 0xFE);

/// Text on a sky tint
pub const SKY_TEXT: Color32 = Color32::from_rgb(0x07, 0x59, 0x85);

/// Secondary accent - emerald, doctor side
pub const EMERALD: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);

/// Emerald accent, darker for hover
pub const EMERALD_DARK: Color32 = Color32::from_rgb(0x05, 0x96, 0x69);

/// Emerald tint for selected doctor toggles
pub const EMERALD_TINT: Color32 = Color32::from_rgb(0xD1, 0xFA, 0xE5);

/// Text on an emerald tint
pub const EMERALD_TEXT: Color32 = Color32::from_rgb(0x06, 0x5F, 0x46);

/// Primary body text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Headings
pub const TEXT_HEADING: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Secondary text (labels, captions)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x4B, 0x55, 0x63);

/// Muted text (footer, placeholders)
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Neutral button background
pub const BUTTON_NEUTRAL: Color32 = Color32::from_rgb(0xF3, 0xF4, 0xF6);

/// Input border
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Error banner background
pub const ERROR_BG: Color32 = Color32::from_rgb(0xFE, 0xF2, 0xF2);

/// Error banner border
pub const ERROR_BORDER: Color32 = Color32::from_rgb(0xFE, 0xCA, 0xCA);

/// Error text
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);

/// Inline field error text
pub const FIELD_ERROR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Text on filled accent buttons
pub const TEXT_ON_ACCENT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

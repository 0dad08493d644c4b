// Theme module - Color constants and theme re-exports
//
// This module provides the color palette for the network map. Colors
// follow the Ghana flag (red, gold, green, black star) on a dark slate
// background.

pub mod default;

use ratatui::style::Color;

/// Primary accent - headquarters, borders, titles
/// RGB: (252, 209, 22)
pub const STAR_GOLD: Color = Color::Rgb(252, 209, 22);

/// Regional offices and emphasized connections
/// RGB: (0, 158, 96)
pub const FOREST_GREEN: Color = Color::Rgb(0, 158, 96);

/// Ministries and alerts
/// RGB: (227, 52, 67)
pub const FLAG_RED: Color = Color::Rgb(227, 52, 67);

/// Agencies
/// RGB: (96, 165, 250)
pub const SKY_BLUE: Color = Color::Rgb(96, 165, 250);

/// Commissions
/// RGB: (192, 132, 252)
pub const ORCHID: Color = Color::Rgb(192, 132, 252);

/// General text, inactive nodes
/// RGB: (203, 213, 225)
pub const SLATE_TEXT: Color = Color::Rgb(203, 213, 225);

/// Dimmed connection lines and secondary text
/// RGB: (71, 85, 105)
pub const SLATE_DIM: Color = Color::Rgb(71, 85, 105);

/// Highlight background for the hovered node
/// RGB: (30, 41, 59)
pub const HIGHLIGHT_BG: Color = Color::Rgb(30, 41, 59);

pub use default::*;

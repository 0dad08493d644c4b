// Theme functions
//
// Maps office categories and emphasis state to colors and glyphs, plus the
// color interpolation used for the pulse animation.

use ratatui::style::Color;

use super::{FLAG_RED, FOREST_GREEN, ORCHID, SKY_BLUE, SLATE_DIM, STAR_GOLD};
use crate::registry::Category;

/// Node color for a category
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Headquarters => STAR_GOLD,
        Category::Ministry => FLAG_RED,
        Category::Agency => SKY_BLUE,
        Category::Commission => ORCHID,
        Category::Regional => FOREST_GREEN,
    }
}

/// Node glyph for a category; active nodes use the filled variant
pub fn category_glyph(category: Category, active: bool) -> &'static str {
    match (category, active) {
        (Category::Headquarters, _) => "★",
        (Category::Ministry, true) => "■",
        (Category::Ministry, false) => "□",
        (Category::Agency, true) => "◆",
        (Category::Agency, false) => "◇",
        (Category::Commission, true) => "▲",
        (Category::Commission, false) => "△",
        (Category::Regional, true) => "●",
        (Category::Regional, false) => "○",
    }
}

/// Color of a headquarters to region connection line
pub fn connection_color(active: bool) -> Color {
    if active {
        FOREST_GREEN
    } else {
        SLATE_DIM
    }
}

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// # Arguments
/// * `color1` - Starting color as (r, g, b) tuple
/// * `color2` - Ending color as (r, g, b) tuple
/// * `ratio` - Interpolation ratio (0.0 = color1, 1.0 = color2)
pub fn interpolate_color(color1: (u8, u8, u8), color2: (u8, u8, u8), ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let r = (color1.0 as f32 + (color2.0 as f32 - color1.0 as f32) * ratio) as u8;
    let g = (color1.1 as f32 + (color2.1 as f32 - color1.1 as f32) * ratio) as u8;
    let b = (color1.2 as f32 + (color2.2 as f32 - color1.2 as f32) * ratio) as u8;
    Color::Rgb(r, g, b)
}

/// Triangle wave over the pulse phase: 0 -> 1 -> 0 across one cycle
pub fn pulse_ratio(pulse_phase: f32) -> f32 {
    let phase = pulse_phase.rem_euclid(1.0);
    if phase < 0.5 {
        phase * 2.0
    } else {
        (1.0 - phase) * 2.0
    }
}

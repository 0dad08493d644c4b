// UI rendering module
//
// This module contains all UI rendering components for ghanet.
// The main draw() function orchestrates rendering of all UI panels.

mod banner;
mod inspector;
mod network_map;
mod status_bar;

use crate::app::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use banner::render_banner;
use inspector::render_inspector;
use network_map::render_network_map;
use status_bar::render_status_bar;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let size = f.area();

    // Main layout: banner, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Banner
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_banner(f, chunks[0], app);

    // Body: network map + inspector
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Network map
            Constraint::Percentage(35), // Inspector
        ])
        .split(chunks[1]);

    render_network_map(f, body_chunks[0], app);
    render_inspector(f, body_chunks[1], app);

    render_status_bar(f, chunks[2], app);
}

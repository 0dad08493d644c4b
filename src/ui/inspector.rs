// Node Inspector rendering module
//
// Renders the detail panel for the hovered location, the throughput
// sparkline, and the list of connections radiating from headquarters.

use crate::app::{AppState, NodeVitals};
use crate::registry::{Category, Location};
use crate::theme::{
    category_color, category_glyph, FOREST_GREEN, SLATE_DIM, SLATE_TEXT, STAR_GOLD,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Sparkline},
    Frame,
};

// ============================================================================
// Inspector View Model
// ============================================================================

/// View model for the inspector panel
///
/// Contains all data needed to render the inspector, extracted from AppState.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorView {
    /// Hovered location name, or idle text
    pub target_name: String,
    pub target_glyph: &'static str,
    pub target_color: Color,
    pub city: Option<String>,
    pub category: Option<Category>,
    /// Plane coordinates of the hovered location
    pub position: Option<(f64, f64)>,
    /// Whether the hovered location has a connection to headquarters
    pub connected_to_hq: bool,
    pub vitals: Option<NodeVitals>,
    pub has_selection: bool,
}

impl Default for InspectorView {
    fn default() -> Self {
        Self {
            target_name: "Hover a node to inspect it".to_string(),
            target_glyph: "·",
            target_color: SLATE_DIM,
            city: None,
            category: None,
            position: None,
            connected_to_hq: false,
            vitals: None,
            has_selection: false,
        }
    }
}

/// Build InspectorView from AppState
pub fn build_inspector_view(app: &AppState) -> InspectorView {
    match app.map.hovered() {
        Some(location) => build_location_view(location, app.map.vitals()),
        None => InspectorView::default(),
    }
}

fn build_location_view(location: &Location, vitals: Option<NodeVitals>) -> InspectorView {
    InspectorView {
        target_name: location.name.clone(),
        target_glyph: category_glyph(location.category, true),
        target_color: category_color(location.category),
        city: Some(location.city.clone()),
        category: Some(location.category),
        position: Some((location.position.x, location.position.y)),
        connected_to_hq: location.is_regional(),
        vitals,
        has_selection: true,
    }
}

fn field(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<9}", label), Style::default().fg(SLATE_DIM)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

pub fn render_inspector(f: &mut Frame, area: Rect, app: &AppState) {
    let view = build_inspector_view(app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Node details
            Constraint::Length(5),  // Sparkline
            Constraint::Min(0),     // Connection list
        ])
        .split(area);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} {}", view.target_glyph, view.target_name),
                Style::default()
                    .fg(view.target_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if view.has_selection {
        if let Some(city) = &view.city {
            lines.push(field("City", city.clone(), SLATE_TEXT));
        }
        if let Some(category) = view.category {
            lines.push(field("Type", category.label().to_string(), SLATE_TEXT));
        }
        if let Some((x, y)) = view.position {
            lines.push(field("Grid", format!("{:.0}, {:.0}", x, y), SLATE_TEXT));
        }
        let link = if view.connected_to_hq {
            ("linked to HQ".to_string(), FOREST_GREEN)
        } else if view.category == Some(Category::Headquarters) {
            ("network hub".to_string(), STAR_GOLD)
        } else {
            ("Accra cluster".to_string(), SLATE_TEXT)
        };
        lines.push(field("Link", link.0, link.1));
        if let Some(vitals) = view.vitals {
            lines.push(field(
                "Vitals",
                format!("{}ms · {:.2}% up", vitals.latency_ms, vitals.uptime_pct),
                FOREST_GREEN,
            ));
        }
    } else {
        lines.push(Line::from(vec![Span::styled(
            "  Tab / arrows or the mouse move the hover",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]));
    }

    let details = Paragraph::new(lines).block(
        Block::default()
            .title(vec![
                Span::styled(
                    "━ Node Inspector ",
                    Style::default().fg(STAR_GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled("━━━━━━", Style::default().fg(STAR_GOLD)),
            ])
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(STAR_GOLD)),
    );
    f.render_widget(details, chunks[0]);

    // Sparkline of per-tick throughput increments
    let history: Vec<u64> = app.map.throughput_history().iter().copied().collect();
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .title(vec![Span::styled(
                    " Throughput per tick ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )])
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(STAR_GOLD)),
        )
        .data(&history)
        .style(Style::default().fg(FOREST_GREEN))
        .max(150);
    f.render_widget(sparkline, chunks[1]);

    // Headquarters to region connections, emphasized one first
    let model = app.map.render_model();
    let mut link_lines = vec![Line::from("")];
    let mut connections = model.connections.clone();
    connections.sort_by_key(|c| !c.active);
    for conn in &connections {
        let (marker, style) = if conn.active {
            (
                "  ━━▶ ",
                Style::default()
                    .fg(FOREST_GREEN)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ──▷ ", Style::default().fg(SLATE_DIM))
        };
        link_lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(conn.to.city.clone(), style),
        ]));
    }
    if connections.is_empty() {
        link_lines.push(Line::from(vec![Span::styled(
            "  (no regional offices)",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]));
    }

    let links = Paragraph::new(link_lines).block(
        Block::default()
            .title(vec![Span::styled(
                format!(
                    " Regional Links ({}/{}) ",
                    model.active_connection_count(),
                    connections.len()
                ),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )])
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(STAR_GOLD)),
    );
    f.render_widget(links, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LocationRegistry;

    fn app() -> AppState {
        AppState::with_seed(LocationRegistry::ghana().unwrap(), 11)
    }

    #[test]
    fn test_idle_view_without_hover() {
        let view = build_inspector_view(&app());
        assert!(!view.has_selection);
        assert_eq!(view, InspectorView::default());
    }

    #[test]
    fn test_regional_view() {
        let mut app = app();
        app.map.hover_enter("Ashanti Regional Office");
        let view = build_inspector_view(&app);

        assert!(view.has_selection);
        assert_eq!(view.target_name, "Ashanti Regional Office");
        assert_eq!(view.city.as_deref(), Some("Kumasi"));
        assert_eq!(view.category, Some(Category::Regional));
        assert_eq!(view.position, Some((42.0, 62.0)));
        assert!(view.connected_to_hq);
        assert!(view.vitals.is_some());
    }

    #[test]
    fn test_ministry_view_not_connected() {
        let mut app = app();
        app.map.hover_enter("Ministry of Finance");
        let view = build_inspector_view(&app);

        assert_eq!(view.category, Some(Category::Ministry));
        assert!(!view.connected_to_hq);
        assert_eq!(view.target_color, category_color(Category::Ministry));
    }
}

// Network map rendering module
//
// Renders the office network on a braille canvas: connection lines from
// headquarters to each regional office, particles flowing along the
// emphasized connection, a pulsing ring around headquarters, and one glyph
// per office.

use crate::app::{AppState, MapSettings, RenderModel};
use crate::registry::{Category, Position, PLANE_EXTENT};
use crate::theme::{
    category_color, category_glyph, connection_color, interpolate_color, pulse_ratio,
    HIGHLIGHT_BG, SLATE_TEXT, STAR_GOLD,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthChar;

// Offsets of the particles along an emphasized connection (0.0 to 1.0)
const PARTICLE_OFFSETS: [f32; 3] = [0.0, 0.33, 0.66];

// Symbol used to render particles on edges
const PARTICLE_SYMBOL: &str = "•";

/// Base radius of the pulsing ring around headquarters (canvas units)
const HQ_RING_RADIUS: f64 = 3.0;

/// Extra radius reached at the peak of the pulse
const HQ_RING_SWELL: f64 = 2.5;

/// Maximum label width in terminal cells
const MAX_LABEL_WIDTH: usize = 18;

/// Horizontal gap between a glyph and its label, in terminal cells
const LABEL_GAP_CELLS: f64 = 2.0;

/// Convert a plane position (y down) to canvas coordinates (y up)
pub fn to_canvas(position: Position) -> (f64, f64) {
    (position.x, PLANE_EXTENT - position.y)
}

/// Calculate particle position along an edge for the flow animation
///
/// Linear interpolation from `start` to `end` at `(pulse_phase + offset) % 1`.
pub fn particle_position(
    start: (f64, f64),
    end: (f64, f64),
    pulse_phase: f32,
    offset: f32,
) -> (f64, f64) {
    let t = ((pulse_phase + offset) % 1.0) as f64;
    let x = start.0 + (end.0 - start.0) * t;
    let y = start.1 + (end.1 - start.1) * t;
    (x, y)
}

/// Truncate `text` to at most `max_width` terminal cells, adding an ellipsis
pub fn truncate_label(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Node prepared for canvas drawing
#[derive(Debug, Clone, PartialEq)]
pub struct MapNode {
    pub x: f64,
    pub y: f64,
    pub glyph: &'static str,
    pub color: Color,
    pub active: bool,
    pub hovered: bool,
    /// Label text, None when labels are hidden for this node
    pub label: Option<String>,
}

/// Connection prepared for canvas drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapEdge {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub active: bool,
}

/// Build drawable nodes from the render model
///
/// With labels enabled, headquarters and regional offices show their city and
/// the hovered node shows its full (truncated) name. The Accra cluster stays
/// unlabeled unless hovered to keep the map readable.
pub fn build_map_nodes(model: &RenderModel<'_>, settings: &MapSettings) -> Vec<MapNode> {
    model
        .nodes
        .iter()
        .map(|node| {
            let loc = node.location;
            let (x, y) = to_canvas(loc.position);
            let label = if !settings.labels_enabled {
                None
            } else if node.hovered {
                Some(truncate_label(&loc.name, MAX_LABEL_WIDTH))
            } else if matches!(loc.category, Category::Headquarters | Category::Regional) {
                Some(truncate_label(&loc.city, MAX_LABEL_WIDTH))
            } else {
                None
            };

            MapNode {
                x,
                y,
                glyph: category_glyph(loc.category, node.active),
                color: category_color(loc.category),
                active: node.active,
                hovered: node.hovered,
                label,
            }
        })
        .collect()
}

/// Build drawable connection lines from the render model
pub fn build_map_edges(model: &RenderModel<'_>) -> Vec<MapEdge> {
    model
        .connections
        .iter()
        .map(|conn| MapEdge {
            from: to_canvas(conn.from.position),
            to: to_canvas(conn.to.position),
            active: conn.active,
        })
        .collect()
}

pub fn render_network_map(f: &mut Frame, area: Rect, app: &mut AppState) {
    // Split: summary line + canvas
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let canvas_block = Block::default()
        .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(STAR_GOLD));

    // Remember where nodes land on screen for pointer hit-testing
    let canvas_area = canvas_block.inner(chunks[1]);
    app.map_area = Some(canvas_area);
    let label_offset =
        LABEL_GAP_CELLS * PLANE_EXTENT / f64::from(canvas_area.width.saturating_sub(1).max(1));

    let app: &AppState = app;
    let model = app.map.render_model();

    let hovered_text = model
        .hovered
        .map(|loc| truncate_label(&loc.name, 28))
        .unwrap_or_else(|| "none".to_string());
    let summary = Paragraph::new(Line::from(vec![
        Span::styled(" ◉ ", Style::default().fg(STAR_GOLD)),
        Span::styled(
            format!(
                "Offices: {} | Regions: {} | Hover: {}",
                model.nodes.len(),
                model.connections.len(),
                hovered_text
            ),
            Style::default().fg(SLATE_TEXT),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(STAR_GOLD))
            .title(vec![Span::styled(
                "━ Ghana Digital Network ━",
                Style::default().fg(STAR_GOLD).add_modifier(Modifier::BOLD),
            )]),
    );
    f.render_widget(summary, chunks[0]);

    let nodes = build_map_nodes(&model, &app.map_settings);
    let edges = build_map_edges(&model);
    let hq = to_canvas(app.map.registry().headquarters().position);

    let pulse_phase = app.pulse_phase;
    let animations_enabled = app.map_settings.animations_enabled;
    let ring_color = interpolate_color((120, 100, 10), (252, 209, 22), pulse_ratio(pulse_phase));
    let particle_color = interpolate_color((0, 110, 70), (160, 255, 200), pulse_ratio(pulse_phase));
    let ring_radius = if animations_enabled {
        HQ_RING_RADIUS + HQ_RING_SWELL * f64::from(pulse_ratio(pulse_phase))
    } else {
        HQ_RING_RADIUS
    };

    let canvas = Canvas::default()
        .block(canvas_block)
        .marker(Marker::Braille)
        .x_bounds([0.0, PLANE_EXTENT])
        .y_bounds([0.0, PLANE_EXTENT])
        .paint(move |ctx| {
            // Dimmed connections first, emphasized ones on top
            for edge in edges.iter().filter(|e| !e.active) {
                ctx.draw(&CanvasLine {
                    x1: edge.from.0,
                    y1: edge.from.1,
                    x2: edge.to.0,
                    y2: edge.to.1,
                    color: connection_color(false),
                });
            }
            for edge in edges.iter().filter(|e| e.active) {
                ctx.draw(&CanvasLine {
                    x1: edge.from.0,
                    y1: edge.from.1,
                    x2: edge.to.0,
                    y2: edge.to.1,
                    color: connection_color(true),
                });
            }

            ctx.draw(&Circle {
                x: hq.0,
                y: hq.1,
                radius: ring_radius,
                color: ring_color,
            });

            ctx.layer();

            if animations_enabled {
                for edge in edges.iter().filter(|e| e.active) {
                    for &offset in &PARTICLE_OFFSETS {
                        let (px, py) = particle_position(edge.from, edge.to, pulse_phase, offset);
                        ctx.print(
                            px,
                            py,
                            Span::styled(PARTICLE_SYMBOL, Style::default().fg(particle_color)),
                        );
                    }
                }
            }

            // Labels before glyphs so a long label never hides a neighbour
            for node in &nodes {
                if let Some(label) = &node.label {
                    let label_style = if node.hovered {
                        Style::default()
                            .fg(node.color)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(SLATE_TEXT)
                    };
                    ctx.print(
                        node.x + label_offset,
                        node.y,
                        Span::styled(label.clone(), label_style),
                    );
                }
            }

            for node in &nodes {
                let mut style = Style::default().fg(node.color);
                if node.active {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if node.hovered {
                    style = style.bg(HIGHLIGHT_BG);
                }
                ctx.print(node.x, node.y, Span::styled(node.glyph, style));
            }
        });

    f.render_widget(canvas, chunks[1]);
}

// Banner rendering module
//
// Renders the top banner with the title, tagline and live metrics readout.

use crate::app::AppState;
use crate::theme::{FLAG_RED, FOREST_GREEN, SLATE_TEXT, STAR_GOLD};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Format an integer with comma thousands separators
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn render_banner(f: &mut Frame, area: Rect, app: &AppState) {
    let metrics = app.map.render_model().metrics;

    let banner_text = vec![
        Line::from(vec![
            Span::styled("  ▌", Style::default().fg(FLAG_RED)),
            Span::styled("▌", Style::default().fg(STAR_GOLD)),
            Span::styled("▌ ", Style::default().fg(FOREST_GREEN)),
            Span::styled(
                "GHANA DIGITAL NETWORK",
                Style::default().fg(STAR_GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   OHCS E-Library · connecting the civil service",
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " ● LIVE ",
                Style::default().fg(FOREST_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Active links: ", Style::default().fg(SLATE_TEXT)),
            Span::styled(
                metrics.active_links.to_string(),
                Style::default().fg(FOREST_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Data throughput: ", Style::default().fg(SLATE_TEXT)),
            Span::styled(
                format!("{} GB", format_thousands(metrics.data_throughput)),
                Style::default().fg(STAR_GOLD).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let banner = Paragraph::new(banner_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(STAR_GOLD)),
        )
        .alignment(Alignment::Left);

    f.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::METRICS_TICK_MS;
    use crate::registry::LocationRegistry;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12847), "12,847");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_banner_shows_render_model_metrics() {
        let mut app = AppState::with_seed(LocationRegistry::ghana().unwrap(), 9);
        app.on_tick_at(Instant::now() + Duration::from_millis(METRICS_TICK_MS * 2));
        let metrics = app.map.render_model().metrics;
        assert_eq!(app.map.tick_count(), 1);

        let mut terminal = Terminal::new(TestBackend::new(100, 6)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_banner(f, area, &app);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(text.contains(&format!("Active links: {}", metrics.active_links)));
        assert!(text.contains(&format!("{} GB", format_thousands(metrics.data_throughput))));
    }
}

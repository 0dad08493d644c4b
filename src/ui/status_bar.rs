// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts and toggle indicators.

use crate::app::AppState;
use crate::theme::{FOREST_GREEN, SLATE_TEXT, STAR_GOLD};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// One key hint; lower priority numbers are shown first
struct Hint {
    priority: u8,
    key: &'static str,
    desc: &'static str,
    color: Color,
}

static HINTS: [Hint; 6] = [
    Hint {
        priority: 1,
        key: "Q:",
        desc: "Quit | ",
        color: Color::Red,
    },
    Hint {
        priority: 1,
        key: "Tab/←→:",
        desc: "Hover | ",
        color: STAR_GOLD,
    },
    Hint {
        priority: 1,
        key: "Esc:",
        desc: "Leave | ",
        color: STAR_GOLD,
    },
    Hint {
        priority: 2,
        key: "R:",
        desc: "Remount | ",
        color: STAR_GOLD,
    },
    Hint {
        priority: 2,
        key: "A:",
        desc: "Anim | ",
        color: STAR_GOLD,
    },
    Hint {
        priority: 2,
        key: "t:",
        desc: "Labels | ",
        color: STAR_GOLD,
    },
];

/// Pick the hints that fit in `available_width` cells, by priority
fn visible_hints(available_width: usize) -> Vec<&'static Hint> {
    let mut shown = Vec::new();
    let mut used = 0;
    for priority in 1..=2 {
        for hint in HINTS.iter().filter(|h| h.priority == priority) {
            let len = hint.key.chars().count() + hint.desc.chars().count();
            if used + len <= available_width {
                shown.push(hint);
                used += len;
            }
        }
    }
    shown
}

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    // Subtract borders and the leading marker
    let available_width = area.width.saturating_sub(4) as usize;

    let mut spans = vec![Span::styled(" ★ ", Style::default().fg(STAR_GOLD))];
    for hint in visible_hints(available_width) {
        spans.push(Span::styled(
            hint.key,
            Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(hint.desc));
    }

    spans.push(Span::raw(" "));
    spans.extend(build_toggle_indicators(app));

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(STAR_GOLD)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

fn indicator(key: &'static str, on: bool) -> [Span<'static>; 3] {
    let (state, color) = if on {
        ("ON", FOREST_GREEN)
    } else {
        ("OFF", SLATE_TEXT)
    };
    [
        Span::styled(key, Style::default().fg(SLATE_TEXT)),
        Span::styled(state, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled("] ", Style::default().fg(SLATE_TEXT)),
    ]
}

/// Build toggle status indicator spans: [A:ON/OFF] [t:ON/OFF] [tick:N]
pub fn build_toggle_indicators(app: &AppState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    spans.extend(indicator("[A:", app.map_settings.animations_enabled));
    spans.extend(indicator("[t:", app.map_settings.labels_enabled));
    spans.push(Span::styled("[tick:", Style::default().fg(SLATE_TEXT)));
    spans.push(Span::styled(
        app.map.tick_count().to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("]", Style::default().fg(SLATE_TEXT)));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LocationRegistry;

    #[test]
    fn test_narrow_bar_keeps_priority_hints() {
        let shown = visible_hints(30);
        assert!(shown.iter().all(|h| h.priority == 1));
        assert!(shown.iter().any(|h| h.key == "Q:"));
    }

    #[test]
    fn test_wide_bar_shows_all_hints() {
        assert_eq!(visible_hints(200).len(), HINTS.len());
    }

    #[test]
    fn test_toggle_indicators_reflect_settings() {
        let mut app = AppState::with_seed(LocationRegistry::ghana().unwrap(), 1);
        app.map_settings.labels_enabled = false;

        let text: String = build_toggle_indicators(&app)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "[A:ON] [t:OFF] [tick:0]");
    }
}

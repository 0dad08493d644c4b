// Keyboard and pointer event handling
//
// This module translates terminal input into application state updates:
// keys for navigation and toggles, mouse movement for hover enter/leave.

use super::AppState;
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q` - Quit the application
/// - `Tab`, `Right`, `Down` - Hover the next location
/// - `BackTab`, `Left`, `Up` - Hover the previous location
/// - `Esc` - Leave the hovered location
/// - `r`, `R` - Remount the map (reset metrics and hover)
/// - `a`, `A` - Toggle connection animations
/// - `t`, `T` - Toggle city labels
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.running = false;
            false
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Down => {
            app.focus_next();
            true
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Up => {
            app.focus_previous();
            true
        }
        KeyCode::Esc => {
            app.clear_hover();
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.remount();
            true
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.map_settings.animations_enabled = !app.map_settings.animations_enabled;
            true
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.map_settings.labels_enabled = !app.map_settings.labels_enabled;
            true
        }
        _ => true,
    }
}

/// Handle mouse events; only movement matters for hover
pub fn handle_mouse_event(app: &mut AppState, event: MouseEvent) {
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.pointer_moved(event.column, event.row);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::TimerState;
    use crate::registry::LocationRegistry;
    use crossterm::event::{KeyModifiers, MouseButton};
    use ratatui::layout::Rect;

    fn app() -> AppState {
        AppState::with_seed(LocationRegistry::ghana().unwrap(), 7)
    }

    fn hovered(app: &AppState) -> Option<String> {
        app.map.interaction().hovered().map(str::to_string)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();

        assert!(app.running);
        let result = handle_key_event(&mut app, KeyCode::Char('q'));
        assert!(!result);
        assert!(!app.running);

        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Char('Q'));
        assert!(!result);
        assert!(!app.running);
    }

    #[test]
    fn test_esc_clears_hover_without_quitting() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Tab);
        assert!(hovered(&app).is_some());

        assert!(handle_key_event(&mut app, KeyCode::Esc));
        assert!(app.running);
        assert_eq!(hovered(&app), None);
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = app();

        handle_key_event(&mut app, KeyCode::Tab);
        assert_eq!(hovered(&app).as_deref(), Some("OHCS Headquarters"));

        handle_key_event(&mut app, KeyCode::Down);
        assert_eq!(hovered(&app).as_deref(), Some("Ministry of Finance"));

        handle_key_event(&mut app, KeyCode::Right);
        assert_eq!(hovered(&app).as_deref(), Some("Ministry of Education"));

        handle_key_event(&mut app, KeyCode::Up);
        assert_eq!(hovered(&app).as_deref(), Some("Ministry of Finance"));

        handle_key_event(&mut app, KeyCode::BackTab);
        handle_key_event(&mut app, KeyCode::Left);
        assert_eq!(hovered(&app).as_deref(), Some("Upper West Regional Office"));
    }

    #[test]
    fn test_remount_key_resets_hover() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Tab);
        assert!(hovered(&app).is_some());

        handle_key_event(&mut app, KeyCode::Char('r'));
        assert_eq!(hovered(&app), None);
        assert_eq!(app.map.timer_state(), TimerState::Running);
    }

    #[test]
    fn test_toggle_animations() {
        let mut app = app();

        assert!(app.map_settings.animations_enabled);
        handle_key_event(&mut app, KeyCode::Char('a'));
        assert!(!app.map_settings.animations_enabled);
        handle_key_event(&mut app, KeyCode::Char('A'));
        assert!(app.map_settings.animations_enabled);
    }

    #[test]
    fn test_toggle_labels() {
        let mut app = app();

        assert!(app.map_settings.labels_enabled);
        handle_key_event(&mut app, KeyCode::Char('t'));
        assert!(!app.map_settings.labels_enabled);
        handle_key_event(&mut app, KeyCode::Char('T'));
        assert!(app.map_settings.labels_enabled);
    }

    #[test]
    fn test_toggles_persist_across_ticks() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('a'));
        handle_key_event(&mut app, KeyCode::Char('t'));

        for _ in 0..10 {
            app.on_tick();
        }

        assert!(!app.map_settings.animations_enabled);
        assert!(!app.map_settings.labels_enabled);
    }

    #[test]
    fn test_mouse_move_hovers_node() {
        let mut app = app();
        app.map_area = Some(Rect::new(0, 0, 101, 101));

        // Volta Regional Office sits at (78, 66)
        handle_mouse_event(&mut app, mouse(MouseEventKind::Moved, 78, 66));
        assert_eq!(hovered(&app).as_deref(), Some("Volta Regional Office"));

        // Clicks do not change hover
        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 5, 5),
        );
        assert_eq!(hovered(&app).as_deref(), Some("Volta Regional Office"));

        // Moving outside the canvas leaves the node
        handle_mouse_event(&mut app, mouse(MouseEventKind::Moved, 150, 150));
        assert_eq!(hovered(&app), None);
    }
}

// Application state management
//
// This module contains the host AppState that mounts the network map
// component, drives its timer and animation clock, and translates terminal
// pointer and keyboard input into hover enter/leave events.

pub mod component;
pub mod config;
pub mod event;
pub mod interaction;

// Re-export the types the UI layer works with
pub use component::{MapComponent, NodeVitals};
pub use config::{MapSettings, MetricsConfig, RefreshConfig};
pub use interaction::RenderModel;

use crate::registry::{Location, LocationRegistry, Position, PLANE_EXTENT};
use config::{PICK_RADIUS_CELLS, PULSE_STEP, PULSE_TICK_MS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;
use std::rc::Rc;
use std::time::Instant;

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// The mounted network map
    pub map: MapComponent<StdRng>,

    /// Shared registry, reused on every remount
    registry: Rc<LocationRegistry>,

    metrics_config: MetricsConfig,

    /// Fixed seed for reproducible runs; entropy when None
    seed: Option<u64>,

    /// Number of mounts so far (seeded runs derive each mount's seed from it)
    mount_count: u64,

    /// Host refresh interval
    pub refresh_config: RefreshConfig,

    /// Map visual settings (animations, labels)
    pub map_settings: MapSettings,

    /// Pulse phase for particle animation (0.0 ~ 1.0)
    pub pulse_phase: f32,

    /// Last pulse tick time
    last_pulse: Instant,

    /// Inner canvas area of the last drawn map, used for pointer hit-testing
    pub map_area: Option<Rect>,
}

impl AppState {
    /// Create a new AppState with an entropy-seeded random source
    pub fn new(registry: LocationRegistry) -> Self {
        Self::build(registry, None)
    }

    /// Create a new AppState whose simulated values are reproducible
    pub fn with_seed(registry: LocationRegistry, seed: u64) -> Self {
        Self::build(registry, Some(seed))
    }

    fn build(registry: LocationRegistry, seed: Option<u64>) -> Self {
        let now = Instant::now();
        let registry = Rc::new(registry);
        let metrics_config = MetricsConfig::default();
        let rng = Self::rng_for(seed, 0);
        let map = MapComponent::mount(Rc::clone(&registry), &metrics_config, rng, now);

        Self {
            running: true,
            map,
            registry,
            metrics_config,
            seed,
            mount_count: 1,
            refresh_config: RefreshConfig::new(),
            map_settings: MapSettings::default(),
            pulse_phase: 0.0,
            last_pulse: now,
            map_area: None,
        }
    }

    fn rng_for(seed: Option<u64>, mount: u64) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(mount)),
            None => StdRng::from_entropy(),
        }
    }

    /// Update state on each loop iteration
    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    /// Advance the pulse animation and let the metrics timer fire
    pub fn on_tick_at(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_pulse).as_millis();
        if elapsed >= PULSE_TICK_MS {
            self.last_pulse = now;
            self.pulse_phase += PULSE_STEP;
            if self.pulse_phase >= 1.0 {
                self.pulse_phase = 0.0;
            }
        }

        self.map.on_tick(now);
    }

    /// Unmount the map and mount a fresh one
    pub fn remount(&mut self) {
        self.remount_at(Instant::now());
    }

    pub fn remount_at(&mut self, now: Instant) {
        self.map.unmount();
        let rng = Self::rng_for(self.seed, self.mount_count);
        self.mount_count += 1;
        self.map = MapComponent::mount(Rc::clone(&self.registry), &self.metrics_config, rng, now);
    }

    /// Move the hover to the location named `target`, emitting leave then enter
    fn move_hover(&mut self, target: Option<String>) {
        let current = self.map.interaction().hovered().map(str::to_string);
        if current == target {
            return;
        }
        if let Some(name) = current {
            self.map.hover_leave(&name);
        }
        if let Some(name) = target {
            self.map.hover_enter(&name);
        }
    }

    fn hovered_index(&self) -> Option<usize> {
        self.map
            .interaction()
            .hovered()
            .and_then(|name| self.registry.index_of(name))
    }

    /// Hover the next location in registry order (wrapping)
    pub fn focus_next(&mut self) {
        let len = self.registry.len();
        let next = match self.hovered_index() {
            Some(idx) => (idx + 1) % len,
            None => 0,
        };
        let target = self.registry.by_index(next).map(|l| l.name.clone());
        self.move_hover(target);
    }

    /// Hover the previous location in registry order (wrapping)
    pub fn focus_previous(&mut self) {
        let len = self.registry.len();
        let prev = match self.hovered_index() {
            Some(0) | None => len.saturating_sub(1),
            Some(idx) => idx - 1,
        };
        let target = self.registry.by_index(prev).map(|l| l.name.clone());
        self.move_hover(target);
    }

    /// Leave the hovered location, if any
    pub fn clear_hover(&mut self) {
        self.move_hover(None);
    }

    /// Pointer moved to terminal cell (`column`, `row`)
    ///
    /// Hit-tests the map canvas. Moving onto a node hovers it, moving off a
    /// node or out of the canvas leaves it.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let target = self
            .map_area
            .and_then(|area| location_at(&self.registry, area, column, row))
            .map(|loc| loc.name.clone());
        self.move_hover(target);
    }

    /// Pointer left the terminal or the canvas
    pub fn pointer_left(&mut self) {
        self.clear_hover();
    }
}

/// Terminal cell where the map canvas draws a glyph for `position`
///
/// Mirrors the canvas label placement: the plane is scaled onto
/// `width - 1` by `height - 1` cells and truncated.
pub fn glyph_cell(area: Rect, position: Position) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let x_res = f64::from(area.width) - 1.0;
    let y_res = f64::from(area.height) - 1.0;

    // Canvas coordinates have y growing upwards
    let canvas_y = PLANE_EXTENT - position.y;
    let column = (position.x * x_res / PLANE_EXTENT) as u16;
    let row = ((PLANE_EXTENT - canvas_y) * y_res / PLANE_EXTENT) as u16;
    Some((area.x + column, area.y + row))
}

/// Location under terminal cell (`column`, `row`) of the map canvas in `area`
///
/// An exact glyph hit wins; glyphs later in registry order are drawn on top,
/// so they win shared cells. Otherwise the closest glyph within
/// `PICK_RADIUS_CELLS`, ties going to the earlier entry.
pub fn location_at(
    registry: &LocationRegistry,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<&Location> {
    let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
    let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
    if !inside_x || !inside_y {
        return None;
    }

    let cells: Vec<(&Location, (u16, u16))> = registry
        .iter()
        .filter_map(|loc| glyph_cell(area, loc.position).map(|cell| (loc, cell)))
        .collect();

    if let Some((loc, _)) = cells.iter().rev().find(|(_, cell)| *cell == (column, row)) {
        return Some(*loc);
    }

    cells
        .iter()
        .map(|(loc, (c, r))| (*loc, column.abs_diff(*c).max(row.abs_diff(*r))))
        .filter(|(_, dist)| *dist <= PICK_RADIUS_CELLS)
        .min_by_key(|(_, dist)| *dist)
        .map(|(loc, _)| loc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::TimerState;
    use config::{SEED_ACTIVE_LINKS, SEED_DATA_THROUGHPUT};
    use std::time::Duration;

    fn app() -> AppState {
        AppState::with_seed(LocationRegistry::ghana().unwrap(), 42)
    }

    fn hovered(app: &AppState) -> Option<String> {
        app.map.interaction().hovered().map(str::to_string)
    }

    #[test]
    fn test_new_app_is_mounted_with_seeds() {
        let app = app();
        assert!(app.running);
        assert_eq!(app.map.timer_state(), TimerState::Running);
        assert_eq!(app.map.metrics().active_links, SEED_ACTIVE_LINKS);
        assert_eq!(app.map.metrics().data_throughput, SEED_DATA_THROUGHPUT);
        assert_eq!(hovered(&app), None);
    }

    #[test]
    fn test_mount_hover_unmount_remount() {
        let mut app = app();
        let t0 = Instant::now();
        let interval = MetricsConfig::default().tick_interval;

        app.focus_next();
        assert_eq!(hovered(&app).as_deref(), Some("OHCS Headquarters"));
        app.map.on_tick(t0 + interval * 3);

        app.remount_at(t0 + interval * 4);

        assert_eq!(app.map.timer_state(), TimerState::Running);
        assert_eq!(hovered(&app), None);
        assert_eq!(app.map.metrics().active_links, SEED_ACTIVE_LINKS);
        assert_eq!(app.map.metrics().data_throughput, SEED_DATA_THROUGHPUT);
    }

    #[test]
    fn test_focus_navigation_wraps() {
        let mut app = app();
        let len = LocationRegistry::ghana().unwrap().len();

        app.focus_previous();
        assert_eq!(hovered(&app).as_deref(), Some("Upper West Regional Office"));

        app.focus_next();
        assert_eq!(hovered(&app).as_deref(), Some("OHCS Headquarters"));

        for _ in 0..len {
            app.focus_next();
        }
        assert_eq!(hovered(&app).as_deref(), Some("OHCS Headquarters"));

        app.clear_hover();
        assert_eq!(hovered(&app), None);
    }

    #[test]
    fn test_glyph_cell_follows_canvas_scaling() {
        // 101x51 cells: one column per plane unit, one row per two units
        let area = Rect::new(10, 5, 101, 51);

        assert_eq!(glyph_cell(area, Position::new(0.0, 0.0)), Some((10, 5)));
        assert_eq!(glyph_cell(area, Position::new(100.0, 100.0)), Some((110, 55)));
        assert_eq!(glyph_cell(area, Position::new(50.0, 50.0)), Some((60, 30)));
        assert_eq!(glyph_cell(area, Position::new(42.0, 63.0)), Some((52, 36)));

        // Small canvases truncate rather than round
        let small = Rect::new(0, 0, 50, 12);
        assert_eq!(glyph_cell(small, Position::new(62.0, 80.0)), Some((30, 8)));
        assert_eq!(glyph_cell(small, Position::new(78.0, 66.0)), Some((38, 7)));

        assert!(glyph_cell(Rect::new(0, 0, 0, 0), Position::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_location_at_prefers_exact_glyph_cell() {
        let registry = LocationRegistry::ghana().unwrap();
        // 80x24 terminal map canvas, where the Accra cluster is tight
        let area = Rect::new(1, 8, 50, 12);

        for loc in registry.iter() {
            let (column, row) = glyph_cell(area, loc.position).unwrap();
            let hit = location_at(&registry, area, column, row);
            assert_eq!(hit.map(|l| l.name.as_str()), Some(loc.name.as_str()));
        }

        assert!(location_at(&registry, area, 0, 8).is_none());
        assert!(location_at(&registry, area, 1, 20).is_none());
    }

    #[test]
    fn test_pointer_hover_enter_and_leave() {
        let mut app = app();
        // 101x101 cells so that one cell is one plane unit
        app.map_area = Some(Rect::new(0, 0, 101, 101));

        // Northern Regional Office sits at (52, 28)
        app.pointer_moved(52, 28);
        assert_eq!(hovered(&app).as_deref(), Some("Northern Regional Office"));
        assert_eq!(app.map.render_model().active_connection_count(), 1);

        // A neighbouring cell stays on the same node
        app.pointer_moved(53, 27);
        assert_eq!(hovered(&app).as_deref(), Some("Northern Regional Office"));

        // Empty space leaves it
        app.pointer_moved(90, 5);
        assert_eq!(hovered(&app), None);

        // Straight onto another node
        app.pointer_moved(24, 14);
        assert_eq!(hovered(&app).as_deref(), Some("Upper West Regional Office"));
        app.pointer_moved(58, 10);
        assert_eq!(hovered(&app).as_deref(), Some("Upper East Regional Office"));

        app.pointer_left();
        assert_eq!(hovered(&app), None);
    }

    #[test]
    fn test_pointer_ignored_before_first_draw() {
        let mut app = app();
        app.pointer_moved(52, 28);
        assert_eq!(hovered(&app), None);
    }

    #[test]
    fn test_pulse_phase_wraps() {
        let mut app = app();
        let t0 = Instant::now();
        for i in 1..=40u32 {
            app.on_tick_at(t0 + Duration::from_millis(u64::from(i) * 150));
            assert!((0.0..1.0).contains(&app.pulse_phase));
        }
    }

    #[test]
    fn test_metrics_tick_through_host_loop() {
        let mut app = app();
        let t0 = Instant::now();
        let interval = MetricsConfig::default().tick_interval;

        app.on_tick_at(t0 + interval + Duration::from_millis(5));
        let metrics = app.map.metrics();
        assert!((43..=52).contains(&metrics.active_links));
        assert!((12897..=12996).contains(&metrics.data_throughput));
    }
}

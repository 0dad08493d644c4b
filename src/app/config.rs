// Application configuration types
//
// This module contains configuration structs and constants for:
// - Live metrics simulation (seeds, bounds, tick interval)
// - Host refresh interval
// - Network map visual settings

use std::ops::RangeInclusive;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Active link count shown at mount
pub const SEED_ACTIVE_LINKS: u32 = 47;

/// Cumulative throughput shown at mount
pub const SEED_DATA_THROUGHPUT: u64 = 12847;

/// Lower clamp bound for active links
pub const ACTIVE_LINKS_MIN: u32 = 30;

/// Upper clamp bound for active links
pub const ACTIVE_LINKS_MAX: u32 = 99;

/// Signed random-walk step applied to active links on each tick
pub const ACTIVE_LINKS_STEP: RangeInclusive<i64> = -4..=5;

/// Positive throughput increment drawn on each tick
pub const THROUGHPUT_STEP: RangeInclusive<u64> = 50..=149;

/// Metrics timer interval in milliseconds
pub const METRICS_TICK_MS: u64 = 2000;

/// Number of throughput increments kept for the sparkline
pub const HISTORY_LEN: usize = 60;

/// Host UI refresh interval in milliseconds
pub const UI_REFRESH_MS: u64 = 100;

/// Tick interval for the pulse animation
pub const PULSE_TICK_MS: u128 = 100;

/// Pulse phase advance per animation tick
pub const PULSE_STEP: f32 = 0.05;

/// How many cells away from a glyph the pointer may land and still hover it
pub const PICK_RADIUS_CELLS: u16 = 1;

// ============================================================================
// Configuration Structs
// ============================================================================

/// Live metrics simulation settings
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Interval between metric ticks while mounted
    pub tick_interval: Duration,
    pub seed_active_links: u32,
    pub seed_data_throughput: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(METRICS_TICK_MS),
            seed_active_links: SEED_ACTIVE_LINKS,
            seed_data_throughput: SEED_DATA_THROUGHPUT,
        }
    }
}

/// Host refresh interval
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// How long the host waits for input before redrawing
    pub ui_refresh_ms: u64,
}

impl RefreshConfig {
    pub fn new() -> Self {
        Self {
            ui_refresh_ms: UI_REFRESH_MS,
        }
    }

    /// Get UI refresh interval as Duration
    pub fn ui_interval(&self) -> Duration {
        Duration::from_millis(self.ui_refresh_ms)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual settings for the network map panel
#[derive(Debug, Clone)]
pub struct MapSettings {
    /// Animate particles along emphasized connections (toggle with 'a' key)
    pub animations_enabled: bool,

    /// Show city labels next to nodes (toggle with 't' key)
    pub labels_enabled: bool,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            labels_enabled: true,
        }
    }
}

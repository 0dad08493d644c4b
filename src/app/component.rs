// Network map component
//
// The self-contained widget the host mounts: registry, hover interaction and
// live metrics with its timer. Mounting seeds everything fresh; unmounting
// cancels the timer and drops the hover. Nothing carries over between mounts.

use super::config::MetricsConfig;
use super::interaction::{Interaction, RenderModel};
use crate::metrics::{LiveMetrics, MetricsSimulator, TimerState};
use crate::registry::{Location, LocationRegistry};
use rand::Rng;
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::time::Instant;

/// Simulated round-trip range shown for a hovered node
const VITALS_LATENCY_MS: RangeInclusive<u32> = 10..=59;

/// Simulated uptime range shown for a hovered node
const VITALS_UPTIME_PCT: RangeInclusive<f32> = 99.0..=99.99;

/// Presentation-only jitter regenerated on each hover enter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeVitals {
    pub latency_ms: u32,
    pub uptime_pct: f32,
}

impl NodeVitals {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            latency_ms: rng.gen_range(VITALS_LATENCY_MS),
            uptime_pct: rng.gen_range(VITALS_UPTIME_PCT),
        }
    }
}

/// A mounted network map
pub struct MapComponent<R> {
    registry: Rc<LocationRegistry>,
    interaction: Interaction,
    simulator: MetricsSimulator<R>,
    vitals: Option<NodeVitals>,
    mounted: bool,
}

impl<R> MapComponent<R> {
    /// Mount with fresh hover and seeded metrics, starting the metrics timer
    pub fn mount(
        registry: Rc<LocationRegistry>,
        config: &MetricsConfig,
        rng: R,
        now: Instant,
    ) -> Self {
        let mut simulator = MetricsSimulator::new(config, rng);
        simulator.start(now);

        tracing::info!(
            locations = registry.len(),
            regions = registry.regional_offices().count(),
            "Network map mounted"
        );

        Self {
            registry,
            interaction: Interaction::new(),
            simulator,
            vitals: None,
            mounted: true,
        }
    }

    /// Cancel the metrics timer and drop the hover
    ///
    /// Safe to call more than once; only the first call has an effect.
    pub fn unmount(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.mounted = false;
        self.simulator.stop();
        self.interaction.clear();
        self.vitals = None;
        tracing::info!(ticks = self.simulator.tick_count(), "Network map unmounted");
        true
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn metrics(&self) -> LiveMetrics {
        self.simulator.metrics()
    }

    /// Throughput increments of recent ticks, oldest first
    pub fn throughput_history(&self) -> &VecDeque<u64> {
        self.simulator.history()
    }

    pub fn tick_count(&self) -> u64 {
        self.simulator.tick_count()
    }

    pub fn timer_state(&self) -> TimerState {
        self.simulator.timer_state()
    }

    pub fn hovered(&self) -> Option<&Location> {
        self.interaction.hovered().and_then(|name| self.registry.get(name))
    }

    pub fn vitals(&self) -> Option<NodeVitals> {
        self.vitals
    }

    /// Pointer left the location named `name`
    pub fn hover_leave(&mut self, name: &str) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(location) = self.registry.get(name) else {
            tracing::warn!(location = %name, "Hover leave for unknown location");
            return false;
        };
        let cleared = self.interaction.on_hover_leave(location);
        if cleared {
            self.vitals = None;
        }
        cleared
    }

    pub fn render_model(&self) -> RenderModel<'_> {
        self.interaction.render_model(&self.registry, self.simulator.metrics())
    }
}

impl<R: Rng> MapComponent<R> {
    /// Let the metrics timer fire if due
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.simulator.poll(now)
    }

    /// Pointer entered the location named `name`
    ///
    /// Unknown identifiers are ignored. A change of hover regenerates the
    /// displayed vitals.
    pub fn hover_enter(&mut self, name: &str) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(location) = self.registry.get(name) else {
            tracing::warn!(location = %name, "Hover enter for unknown location");
            return false;
        };
        let changed = self.interaction.on_hover_enter(location);
        if changed {
            self.vitals = Some(NodeVitals::sample(self.simulator.rng_mut()));
        }
        changed
    }
}

impl<R> Drop for MapComponent<R> {
    fn drop(&mut self) {
        self.unmount();
    }
}

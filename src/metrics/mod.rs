// Live metrics simulation module
//
// Simulates the slowly fluctuating network-activity readout shown in the
// banner. Values are cosmetic telemetry: a bounded random walk for active
// links and a strictly increasing throughput counter, advanced by a timer
// that is owned by the simulator and scoped to the mounted component.

use crate::app::config::{
    MetricsConfig, ACTIVE_LINKS_MAX, ACTIVE_LINKS_MIN, ACTIVE_LINKS_STEP, HISTORY_LEN,
    THROUGHPUT_STEP,
};
use rand::Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Current telemetry values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveMetrics {
    /// Active link count, always within ACTIVE_LINKS_MIN..=ACTIVE_LINKS_MAX
    pub active_links: u32,
    /// Cumulative simulated traffic, strictly increasing per tick
    pub data_throughput: u64,
}

impl LiveMetrics {
    /// Seed values shown at mount, before any tick
    pub fn seeded(config: &MetricsConfig) -> Self {
        Self {
            active_links: config.seed_active_links.clamp(ACTIVE_LINKS_MIN, ACTIVE_LINKS_MAX),
            data_throughput: config.seed_data_throughput,
        }
    }

    /// Compute the next values, returning them with the throughput increment
    pub fn step<R: Rng + ?Sized>(&self, rng: &mut R) -> (Self, u64) {
        let delta = rng.gen_range(ACTIVE_LINKS_STEP);
        let active_links = (i64::from(self.active_links) + delta)
            .clamp(i64::from(ACTIVE_LINKS_MIN), i64::from(ACTIVE_LINKS_MAX))
            as u32;

        let increment = rng.gen_range(THROUGHPUT_STEP);
        let next = Self {
            active_links,
            data_throughput: self.data_throughput.saturating_add(increment),
        };
        (next, increment)
    }
}

/// Lifecycle of the recurring metrics timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Created, not yet started
    Idle,
    /// Armed and firing every interval
    Running,
    /// Cancelled; never fires again
    Stopped,
}

/// Recurring timer driven by the host event loop
///
/// The timer does not spawn anything: the host calls `poll` with the current
/// instant and the timer reports whether a tick is due. A stalled loop yields
/// a single tick and re-arms from `now`, so there are no catch-up bursts.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    next_due: Option<Instant>,
    state: TimerState,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
            state: TimerState::Idle,
        }
    }

    /// Arm the timer. Only an idle timer can start; returns whether it did.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.state != TimerState::Idle {
            return false;
        }
        self.state = TimerState::Running;
        self.next_due = Some(now + self.interval);
        true
    }

    /// Cancel the timer. Returns true only for the call that actually stopped it.
    pub fn stop(&mut self) -> bool {
        let was_running = self.state == TimerState::Running;
        self.state = TimerState::Stopped;
        self.next_due = None;
        was_running
    }

    /// Report whether a tick is due at `now`, re-arming if so
    pub fn poll(&mut self, now: Instant) -> bool {
        match (self.state, self.next_due) {
            (TimerState::Running, Some(due)) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Owns the live metrics, their random source and their timer
pub struct MetricsSimulator<R> {
    metrics: LiveMetrics,
    rng: R,
    timer: TickTimer,
    /// Throughput increments of the most recent ticks (oldest first)
    history: VecDeque<u64>,
    tick_count: u64,
}

impl<R> MetricsSimulator<R> {
    pub fn new(config: &MetricsConfig, rng: R) -> Self {
        Self {
            metrics: LiveMetrics::seeded(config),
            rng,
            timer: TickTimer::new(config.tick_interval),
            history: VecDeque::with_capacity(HISTORY_LEN),
            tick_count: 0,
        }
    }

    pub fn start(&mut self, now: Instant) -> bool {
        let started = self.timer.start(now);
        if started {
            tracing::debug!(
                interval_ms = self.timer.interval().as_millis() as u64,
                "Metrics timer started"
            );
        }
        started
    }

    /// Cancel the timer; safe to call any number of times
    pub fn stop(&mut self) -> bool {
        let stopped = self.timer.stop();
        if stopped {
            tracing::debug!(ticks = self.tick_count, "Metrics timer stopped");
        }
        stopped
    }

    pub fn metrics(&self) -> LiveMetrics {
        self.metrics
    }

    pub fn history(&self) -> &VecDeque<u64> {
        &self.history
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    /// Borrow the random source for presentation-only jitter
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: Rng> MetricsSimulator<R> {
    /// Advance the metrics if the timer is due. Returns whether a tick fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) {
        let (next, increment) = self.metrics.step(&mut self.rng);
        self.metrics = next;
        self.tick_count += 1;

        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(increment);

        tracing::debug!(
            active_links = next.active_links,
            data_throughput = next.data_throughput,
            "Metrics tick"
        );
    }
}

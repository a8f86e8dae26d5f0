//! Frame-driven tick scheduler.
//!
//! The render loop feeds elapsed frame time into [`SimulationClock::advance`],
//! which answers whether a generation is due. Ticks are never interrupted:
//! changing the rate leaves the already scheduled tick alone and only the
//! following one uses the new period.

use std::time::Duration;

/// Generations per second, clamped to `MIN..=MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TickRate(u32);

impl TickRate {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 30;
    pub const STEP: u32 = 1;

    pub fn new(ticks_per_second: u32) -> Self {
        Self(ticks_per_second.clamp(Self::MIN, Self::MAX))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Time between ticks: 1000ms / ticks-per-second
    pub fn period(self) -> Duration {
        Duration::from_secs(1) / self.0
    }

    /// Move by `steps` increments of `STEP`, clamped
    pub fn stepped(self, steps: i32) -> Self {
        let delta = steps.saturating_mul(Self::STEP as i32);
        Self::new(self.0.saturating_add_signed(delta))
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self(10)
    }
}

/// Schedules generations against accumulated frame time.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    rate: TickRate,
    /// Frame time seen so far
    now: Duration,
    /// When the next tick fires; `None` while cancelled
    deadline: Option<Duration>,
}

impl SimulationClock {
    pub fn new(rate: TickRate) -> Self {
        Self { rate, now: Duration::ZERO, deadline: None }
    }

    pub const fn rate(&self) -> TickRate {
        self.rate
    }

    pub const fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Schedule the first tick one period from now. No-op when already running.
    pub fn start(&mut self) {
        if self.deadline.is_none() {
            self.deadline = Some(self.now + self.rate.period());
            log::debug!("clock started at {} ticks/s", self.rate.get());
        }
    }

    /// Stop ticking. Cancelling an idle clock is harmless.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            log::debug!("clock cancelled");
        }
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.cancel();
        } else {
            self.start();
        }
    }

    /// Change the rate. The pending tick keeps its deadline.
    pub fn set_rate(&mut self, rate: TickRate) {
        self.rate = rate;
    }

    pub fn step_rate(&mut self, steps: i32) {
        self.set_rate(self.rate.stepped(steps));
    }

    /// Fraction of the current period already elapsed, 0.0 when idle
    pub fn phase(&self) -> f32 {
        let Some(deadline) = self.deadline else {
            return 0.0;
        };
        let remaining = deadline.saturating_sub(self.now).as_secs_f32();
        (1.0 - remaining / self.rate.period().as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Add frame time. Returns true when a tick is due; at most one per call.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.now += dt;

        let Some(deadline) = self.deadline else {
            return false;
        };
        if self.now < deadline {
            return false;
        }

        let period = self.rate.period();
        let next = deadline + period;
        // A stalled frame must not trigger a burst of catch-up ticks
        self.deadline = Some(if next <= self.now { self.now + period } else { next });
        true
    }
}

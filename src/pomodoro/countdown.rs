//! Countdown driver: second-granularity countdown of a single phase

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::display::{format_clock, DisplaySurface, TickHandle, TICK_INTERVAL};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverState {
    #[default]
    Idle,
    Running,
    Expired,
}

/// What a delivered tick did to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running, this many seconds left
    Continued(u64),
    /// Reached zero
    Expired,
    /// Stale or unexpected handle, nothing changed
    Ignored,
}

/// Counts one phase down to zero, one scheduled tick at a time.
///
/// At most one tick is pending. A tick is only accepted when its handle is
/// the pending one, so a tick that was cancelled but still got delivered has
/// no effect.
#[derive(Debug, Default)]
pub struct CountdownDriver {
    state: DriverState,
    remaining_seconds: u64,
    pending: Option<TickHandle>,
}

impl CountdownDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down from `seconds`, replacing any countdown in progress
    pub fn begin<S: DisplaySurface>(&mut self, surface: &mut S, seconds: u64) {
        if let Some(handle) = self.pending.take() {
            debug!("Replacing pending tick {}", handle.id());
            surface.cancel_tick(handle);
        }

        self.remaining_seconds = seconds;
        self.state = DriverState::Running;
        surface.render_time(&format_clock(seconds));
        self.pending = Some(surface.schedule_tick(TICK_INTERVAL));
    }

    /// Handle a tick delivered by the surface
    pub fn on_tick<S: DisplaySurface>(&mut self, surface: &mut S, handle: TickHandle) -> TickOutcome {
        if self.state != DriverState::Running || self.pending != Some(handle) {
            debug!("Ignoring stale tick {}", handle.id());
            return TickOutcome::Ignored;
        }
        self.pending = None;

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        surface.render_time(&format_clock(self.remaining_seconds));

        if self.remaining_seconds > 0 {
            self.pending = Some(surface.schedule_tick(TICK_INTERVAL));
            TickOutcome::Continued(self.remaining_seconds)
        } else {
            self.state = DriverState::Expired;
            TickOutcome::Expired
        }
    }

    /// Drop the pending tick, if any, and go idle
    pub fn cancel<S: DisplaySurface>(&mut self, surface: &mut S) {
        if let Some(handle) = self.pending.take() {
            surface.cancel_tick(handle);
        }
        self.remaining_seconds = 0;
        self.state = DriverState::Idle;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending
    }
}

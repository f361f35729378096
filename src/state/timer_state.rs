//! Timer status snapshot handed out by the timer task

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pomodoro::{DisplayFrame, DisplaySurface, DriverState, Phase, PomodoroTimer};

/// Everything a client needs to draw the timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerStatus {
    pub frame: DisplayFrame,
    pub cycle: u64,
    pub phase: Option<Phase>,
    pub state: DriverState,
    pub remaining_seconds: u64,
    pub completed_work_sessions: u64,
    pub updated_at: DateTime<Utc>,
}

impl TimerStatus {
    /// Status before the timer was ever started
    pub fn new() -> Self {
        Self {
            frame: DisplayFrame::idle(),
            cycle: 0,
            phase: None,
            state: DriverState::Idle,
            remaining_seconds: 0,
            completed_work_sessions: 0,
            updated_at: Utc::now(),
        }
    }

    /// Capture the current state of a timer together with its rendered frame
    pub fn capture<S: DisplaySurface>(timer: &PomodoroTimer<S>, frame: DisplayFrame) -> Self {
        Self {
            frame,
            cycle: timer.cycle(),
            phase: timer.phase(),
            state: timer.driver_state(),
            remaining_seconds: timer.remaining_seconds(),
            completed_work_sessions: timer.completed_work_sessions(),
            updated_at: Utc::now(),
        }
    }
}

impl Default for TimerStatus {
    fn default() -> Self {
        Self::new()
    }
}

//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{pomodoro::PhasePlan, state::TimerStatus};

/// API response structure for the button endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Phase that was started, if any
    pub plan: Option<PhasePlan>,
    pub timer: TimerStatus,
}

impl ActionResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, plan: Option<PhasePlan>, timer: TimerStatus) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            plan,
            timer,
        }
    }

    /// A new phase was started
    pub fn started(plan: PhasePlan, timer: TimerStatus) -> Self {
        let message = format!("Cycle {} started: {} for {}s", plan.cycle, plan.label, plan.duration_seconds);
        Self::new("started".to_string(), message, Some(plan), timer)
    }

    /// Start was pressed while a phase was running
    pub fn ignored(timer: TimerStatus) -> Self {
        Self::new(
            "ignored".to_string(),
            "Timer is already running".to_string(),
            None,
            timer,
        )
    }

    /// The timer was reset
    pub fn reset(timer: TimerStatus) -> Self {
        Self::new("reset".to_string(), "Timer reset".to_string(), None, timer)
    }
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerStatus,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

//! State management module
//! 
//! This module contains the shared application state and the timer snapshot
//! the timer task answers with.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, TimerCommand};
pub use timer_state::TimerStatus;

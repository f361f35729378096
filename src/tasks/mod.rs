//! Background tasks module
//! 
//! This module contains the timer task that runs alongside the HTTP server
//! and the display surface it drives.

pub mod pomodoro_task;
pub mod surface;

// Re-export main items
pub use pomodoro_task::{pomodoro_task, TimerOptions};
pub use surface::TokioSurface;

//! Tomato Timer - a Pomodoro countdown timer
//! 
//! The core in [`pomodoro`] cycles through work and break phases and counts
//! each one down a second at a time. The rest of the crate hosts it on tokio
//! and exposes the Start and Reset buttons over HTTP.

pub mod config;
pub mod error;
pub mod pomodoro;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;

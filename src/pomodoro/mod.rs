//! Pomodoro core
//!
//! The phase scheduler, the countdown driver and the timer that combines them.
//! Nothing here knows about tokio; time only moves when the display surface
//! hands a scheduled tick back.

pub mod countdown;
pub mod display;
pub mod phase;
pub mod timer;

// Re-export main types
pub use countdown::{CountdownDriver, DriverState, TickOutcome};
pub use display::{format_clock, tally_marks, ColorTag, DisplayFrame, DisplaySurface, TickHandle};
pub use phase::{LongBreakRule, Phase, PhasePlan, PhaseScheduler};
pub use timer::{DoubleStartPolicy, PomodoroTimer, StartOutcome};

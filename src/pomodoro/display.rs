//! Display surface boundary and the text it renders

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between two countdown ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Mark drawn once per completed work session
pub const TALLY_MARK: char = '✓';

/// Time text shown before the first start and after a reset
pub const IDLE_TIME_TEXT: &str = "00:00";

/// Phase label shown before the first start and after a reset
pub const IDLE_LABEL: &str = "Timer";

/// Colour attached to a phase label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Green,
    Pink,
    Red,
}

impl ColorTag {
    /// Hex value of the colour
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTag::Green => "#9bdeac",
            ColorTag::Pink => "#e2979c",
            ColorTag::Red => "#e7305b",
        }
    }
}

/// Opaque id of one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Whatever shows the timer and delivers its ticks.
///
/// A scheduled tick is handed back to the timer as its `TickHandle` once the
/// delay has elapsed. `cancel_tick` must tolerate handles that already fired
/// or were never issued.
pub trait DisplaySurface {
    fn render_time(&mut self, text: &str);
    fn render_phase_label(&mut self, text: &str, color: ColorTag);
    fn render_tally(&mut self, marks: &str);
    fn schedule_tick(&mut self, delay: Duration) -> TickHandle;
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Last rendered state of a display surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFrame {
    pub time: String,
    pub label: String,
    pub color: ColorTag,
    pub tally: String,
}

impl DisplayFrame {
    /// Frame shown before anything was started
    pub fn idle() -> Self {
        Self {
            time: IDLE_TIME_TEXT.to_string(),
            label: IDLE_LABEL.to_string(),
            color: ColorTag::Green,
            tally: String::new(),
        }
    }
}

impl Default for DisplayFrame {
    fn default() -> Self {
        Self::idle()
    }
}

/// Format seconds as `m:ss`, minutes unpadded
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// One tally mark per completed work session
pub fn tally_marks(sessions: u64) -> String {
    let count = usize::try_from(sessions).unwrap_or(usize::MAX);
    std::iter::repeat(TALLY_MARK).take(count).collect()
}

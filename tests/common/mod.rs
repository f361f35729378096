use std::time::Duration;

use tomato_timer::pomodoro::{ColorTag, DisplaySurface, TickHandle};

/// Surface that remembers every render and never fires ticks on its own
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub times: Vec<String>,
    pub labels: Vec<(String, ColorTag)>,
    pub tallies: Vec<String>,
    pub scheduled: Vec<TickHandle>,
    pub cancelled: Vec<TickHandle>,
    next_id: u64,
}

impl RecordingSurface {
    pub fn last_time(&self) -> &str {
        self.times.last().map(String::as_str).unwrap_or("")
    }

    pub fn last_label(&self) -> Option<&(String, ColorTag)> {
        self.labels.last()
    }

    pub fn last_tally(&self) -> &str {
        self.tallies.last().map(String::as_str).unwrap_or("")
    }
}

impl DisplaySurface for RecordingSurface {
    fn render_time(&mut self, text: &str) {
        self.times.push(text.to_string());
    }

    fn render_phase_label(&mut self, text: &str, color: ColorTag) {
        self.labels.push((text.to_string(), color));
    }

    fn render_tally(&mut self, marks: &str) {
        self.tallies.push(marks.to_string());
    }

    fn schedule_tick(&mut self, _delay: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle::new(self.next_id);
        self.scheduled.push(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.cancelled.push(handle);
    }
}

//! Display surface backed by the tokio runtime

use std::{collections::HashMap, time::Duration};
use tokio::{sync::mpsc, task::AbortHandle, time::sleep};
use tracing::{debug, info};

use crate::pomodoro::{ColorTag, DisplayFrame, DisplaySurface, TickHandle};

/// Keeps the last rendered frame and turns scheduled ticks into sleeping tasks.
///
/// Each tick is a spawned task that sends its handle on `tick_tx` once the
/// delay elapses. Cancelling aborts the task; a handle that was already sent
/// is left for the timer to reject.
#[derive(Debug)]
pub struct TokioSurface {
    frame: DisplayFrame,
    tick_tx: mpsc::UnboundedSender<TickHandle>,
    sleepers: HashMap<TickHandle, AbortHandle>,
    next_tick: u64,
}

impl TokioSurface {
    /// Create a surface and the receiver its ticks arrive on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TickHandle>) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let surface = Self {
            frame: DisplayFrame::idle(),
            tick_tx,
            sleepers: HashMap::new(),
            next_tick: 0,
        };
        (surface, tick_rx)
    }

    pub fn frame(&self) -> &DisplayFrame {
        &self.frame
    }

    /// Number of tick tasks that have not been delivered or cancelled
    pub fn pending_ticks(&self) -> usize {
        self.sleepers
            .values()
            .filter(|sleeper| !sleeper.is_finished())
            .count()
    }
}

impl DisplaySurface for TokioSurface {
    fn render_time(&mut self, text: &str) {
        debug!("Time: {}", text);
        self.frame.time = text.to_string();
    }

    fn render_phase_label(&mut self, text: &str, color: ColorTag) {
        info!("Phase: {} ({})", text, color.hex());
        self.frame.label = text.to_string();
        self.frame.color = color;
    }

    fn render_tally(&mut self, marks: &str) {
        debug!("Tally: {:?}", marks);
        self.frame.tally = marks.to_string();
    }

    fn schedule_tick(&mut self, delay: Duration) -> TickHandle {
        self.next_tick += 1;
        let handle = TickHandle::new(self.next_tick);

        let tick_tx = self.tick_tx.clone();
        let sleeper = tokio::spawn(async move {
            sleep(delay).await;
            // The receiver is gone only when the timer task has stopped
            let _ = tick_tx.send(handle);
        });

        self.sleepers.retain(|_, sleeper| !sleeper.is_finished());
        self.sleepers.insert(handle, sleeper.abort_handle());
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if let Some(sleeper) = self.sleepers.remove(&handle) {
            debug!("Cancelling tick {}", handle.id());
            sleeper.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pomodoro::display::TICK_INTERVAL;

    #[tokio::test(start_paused = true)]
    async fn scheduled_tick_is_delivered_after_delay() {
        let (mut surface, mut ticks) = TokioSurface::new();

        let handle = surface.schedule_tick(TICK_INTERVAL);

        assert_eq!(ticks.recv().await, Some(handle));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_tick_never_arrives() {
        let (mut surface, mut ticks) = TokioSurface::new();

        let cancelled = surface.schedule_tick(TICK_INTERVAL);
        surface.cancel_tick(cancelled);
        let kept = surface.schedule_tick(Duration::from_secs(2));
        assert_eq!(surface.pending_ticks(), 1);

        assert_eq!(ticks.recv().await, Some(kept));
    }

    #[tokio::test]
    async fn cancelling_unknown_handle_is_noop() {
        let (mut surface, _ticks) = TokioSurface::new();
        surface.cancel_tick(TickHandle::new(42));
        assert_eq!(surface.pending_ticks(), 0);
    }

    #[test]
    fn renders_update_frame() {
        let (mut surface, _ticks) = TokioSurface::new();

        surface.render_time("24:59");
        surface.render_phase_label("WORK!", ColorTag::Green);
        surface.render_tally("✓");

        assert_eq!(surface.frame().time, "24:59");
        assert_eq!(surface.frame().label, "WORK!");
        assert_eq!(surface.frame().tally, "✓");
    }
}

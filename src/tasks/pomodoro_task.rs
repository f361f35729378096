//! Timer background task

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    pomodoro::{DoubleStartPolicy, LongBreakRule, PomodoroTimer, TickOutcome},
    state::{TimerCommand, TimerStatus},
};
use super::surface::TokioSurface;

/// Policies the timer task runs with
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerOptions {
    pub long_break: LongBreakRule,
    pub double_start: DoubleStartPolicy,
    /// Start the first work phase as soon as the task runs
    pub autostart: bool,
}

/// Background task that owns the Pomodoro timer.
///
/// Button presses and ticks are handled one at a time in this loop, so a
/// tick queued before a reset is seen after it and rejected by its stale
/// handle.
pub async fn pomodoro_task(
    mut commands: mpsc::Receiver<TimerCommand>,
    options: TimerOptions,
) {
    info!(
        "Starting pomodoro task (long break: {:?}, double start: {:?})",
        options.long_break, options.double_start
    );

    let (surface, mut ticks) = TokioSurface::new();
    let mut timer = PomodoroTimer::with_policies(surface, options.long_break, options.double_start);

    if options.autostart {
        info!("Autostart enabled, starting first phase");
        timer.start();
    }

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    info!("Command channel closed, stopping pomodoro task");
                    break;
                };

                match command {
                    TimerCommand::Start { reply } => {
                        let outcome = timer.start();
                        if reply.send((outcome, status_of(&timer))).is_err() {
                            warn!("Start caller went away before the reply");
                        }
                    }
                    TimerCommand::Reset { reply } => {
                        timer.reset();
                        debug!("{} tick tasks still pending after reset", timer.surface().pending_ticks());
                        if reply.send(status_of(&timer)).is_err() {
                            warn!("Reset caller went away before the reply");
                        }
                    }
                    TimerCommand::Snapshot { reply } => {
                        if reply.send(status_of(&timer)).is_err() {
                            warn!("Snapshot caller went away before the reply");
                        }
                    }
                }
            }

            Some(handle) = ticks.recv() => {
                match timer.on_tick(handle) {
                    TickOutcome::Ignored => {}
                    TickOutcome::Continued(remaining) => {
                        debug!("Tick {}: {}s left in cycle {}", handle.id(), remaining, timer.cycle());
                    }
                    TickOutcome::Expired => {
                        info!(
                            "Phase expired, now in cycle {} with {} work sessions done",
                            timer.cycle(),
                            timer.completed_work_sessions()
                        );
                    }
                }
            }
        }
    }

    // Drop any tick still sleeping
    timer.reset();
}

fn status_of(timer: &PomodoroTimer<TokioSurface>) -> TimerStatus {
    TimerStatus::capture(timer, timer.surface().frame().clone())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tokio::{sync::oneshot, time::sleep};

    use super::*;
    use crate::pomodoro::{DriverState, StartOutcome};

    async fn snapshot(commands: &mpsc::Sender<TimerCommand>) -> TimerStatus {
        let (reply, rx) = oneshot::channel();
        commands.send(TimerCommand::Snapshot { reply }).await.unwrap();
        rx.await.unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn snapshot_follows_ticks() {
        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(pomodoro_task(rx, TimerOptions::default()));

        let (reply, started) = oneshot::channel();
        tx.send(TimerCommand::Start { reply }).await.unwrap();
        let (outcome, status) = started.await.unwrap();
        assert!(matches!(outcome, StartOutcome::Started(_)));
        assert_eq!(status.frame.time, "25:00");

        sleep(Duration::from_millis(2500)).await;

        let status = snapshot(&tx).await;
        assert_eq!(status.state, DriverState::Running);
        assert_eq!(status.remaining_seconds, 1498);
        assert_eq!(status.frame.time, "24:58");
    }

    #[tokio::test(start_paused = true)]
    async fn snapshot_after_reset_is_idle() {
        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(pomodoro_task(
            rx,
            TimerOptions {
                autostart: true,
                ..TimerOptions::default()
            },
        ));
        assert_eq!(snapshot(&tx).await.cycle, 1);

        let (reply, done) = oneshot::channel();
        tx.send(TimerCommand::Reset { reply }).await.unwrap();
        assert_eq!(done.await.unwrap().frame.time, "00:00");

        sleep(Duration::from_secs(3)).await;

        let status = snapshot(&tx).await;
        assert_eq!(status.state, DriverState::Idle);
        assert_eq!(status.frame.time, "00:00");
        assert_eq!(status.cycle, 0);
    }

    #[tokio::test]
    async fn keeps_serving_after_caller_drops_reply() {
        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(pomodoro_task(rx, TimerOptions::default()));

        let (reply, abandoned) = oneshot::channel();
        drop(abandoned);
        tx.send(TimerCommand::Snapshot { reply }).await.unwrap();

        assert_eq!(snapshot(&tx).await.state, DriverState::Idle);
    }
}

//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::{error::TimerError, pomodoro::StartOutcome};
use super::TimerStatus;

/// Capacity of the command channel into the timer task
const COMMAND_BUFFER: usize = 32;

/// Button presses and queries handled by the timer task
#[derive(Debug)]
pub enum TimerCommand {
    Start { reply: oneshot::Sender<(StartOutcome, TimerStatus)> },
    Reset { reply: oneshot::Sender<TimerStatus> },
    Snapshot { reply: oneshot::Sender<TimerStatus> },
}

/// Main application state shared between the HTTP handlers and the timer task
#[derive(Debug)]
pub struct AppState {
    /// Commands for the timer task
    pub command_tx: mpsc::Sender<TimerCommand>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState and the receiving end of its command channel
    pub fn new(port: u16, host: String) -> (Self, mpsc::Receiver<TimerCommand>) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);

        let state = Self {
            command_tx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        };
        (state, command_rx)
    }

    /// Press the Start button
    pub async fn press_start(&self) -> Result<(StartOutcome, TimerStatus), TimerError> {
        let (reply, rx) = oneshot::channel();
        self.send(TimerCommand::Start { reply }).await?;
        self.record_action("start");
        rx.await.map_err(|_| TimerError::NoReply("start"))
    }

    /// Press the Reset button
    pub async fn press_reset(&self) -> Result<TimerStatus, TimerError> {
        let (reply, rx) = oneshot::channel();
        self.send(TimerCommand::Reset { reply }).await?;
        self.record_action("reset");
        rx.await.map_err(|_| TimerError::NoReply("reset"))
    }

    /// Ask the timer task for a fresh status
    pub async fn snapshot(&self) -> Result<TimerStatus, TimerError> {
        let (reply, rx) = oneshot::channel();
        self.send(TimerCommand::Snapshot { reply }).await?;
        rx.await.map_err(|_| TimerError::NoReply("snapshot"))
    }

    async fn send(&self, command: TimerCommand) -> Result<(), TimerError> {
        debug!("Sending command: {:?}", command);
        self.command_tx
            .send(command)
            .await
            .map_err(|_| TimerError::TaskClosed)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn commands_fail_when_task_is_gone() {
        let (state, rx) = AppState::new(0, "127.0.0.1".to_string());
        drop(rx);

        assert!(matches!(state.press_start().await, Err(TimerError::TaskClosed)));
        assert!(matches!(state.press_reset().await, Err(TimerError::TaskClosed)));
        assert_eq!(state.get_last_action(), (None, None));
    }

    #[tokio::test]
    async fn dropped_reply_is_reported() {
        let (state, mut rx) = AppState::new(0, "127.0.0.1".to_string());
        tokio::spawn(async move {
            // Swallow the command without answering
            let _ = rx.recv().await;
        });

        assert!(matches!(state.snapshot().await, Err(TimerError::NoReply("snapshot"))));
    }

    #[tokio::test]
    async fn action_recorded_once_task_accepts_it() {
        let (state, mut rx) = AppState::new(0, "127.0.0.1".to_string());
        tokio::spawn(async move {
            if let Some(TimerCommand::Reset { reply }) = rx.recv().await {
                let _ = reply.send(TimerStatus::new());
            }
        });

        state.press_reset().await.unwrap();

        let (action, at) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("reset"));
        assert!(at.is_some());
    }
}

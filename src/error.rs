//! Errors raised at the boundary between the HTTP API and the timer task

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimerError {
    /// The timer task has stopped and no longer accepts commands
    #[error("timer task is not running")]
    TaskClosed,

    /// The timer task dropped a command without answering it
    #[error("timer task did not answer the {0} command")]
    NoReply(&'static str),
}

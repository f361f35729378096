//! Signal handling for graceful shutdown

use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::{error, info};

/// Wait for shutdown signals (SIGTERM, SIGINT)
pub async fn shutdown_signal() {
    let mut signals = match Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]) {
        Ok(signals) => signals,
        Err(e) => {
            error!("Failed to create signal handler: {}", e);
            return futures::future::pending::<()>().await;
        }
    };

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
}

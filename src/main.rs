//! Tomato Timer - a Pomodoro countdown timer
//! 
//! This is the main entry point for the tomato-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use tomato_timer::{
    config::Config,
    pomodoro::phase::{LONG_BREAK_MINUTES, SHORT_BREAK_MINUTES, WORK_MINUTES},
    state::AppState,
    api::create_router,
    tasks::pomodoro_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("tomato_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting tomato-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, double_start={:?}, long_break={:?}",
          config.host, config.port, config.on_double_start, config.long_break);
    info!("Phases: {}min work / {}min short break / {}min long break",
          WORK_MINUTES, SHORT_BREAK_MINUTES, LONG_BREAK_MINUTES);

    // Create application state
    let (state, commands) = AppState::new(config.port, config.host.clone());
    let state = Arc::new(state);

    // Start the timer task
    let options = config.timer_options();
    tokio::spawn(async move {
        pomodoro_task(commands, options).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start button");
    info!("  POST /reset  - Reset button");
    info!("  GET  /status - Current time, phase and tally");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

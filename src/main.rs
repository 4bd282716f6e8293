//! RoundDown - a circular countdown timer
//!
//! This is the main entry point for the rounddown application.

use std::sync::Arc;
use tokio::{net::TcpListener, sync::Notify};
use tracing::info;

use rounddown::{
    config::Config,
    state::AppState,
    api::create_router,
    host::{AnnounceChannel, TerminalRenderer},
    tasks::spawn_countdown_driver,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("rounddown={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let countdown_config = config.countdown_config()?;

    info!("Starting rounddown v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={:?}, smooth={}, policy={:?}",
          config.host, config.port, countdown_config.duration,
          countdown_config.smooth, countdown_config.add_policy);

    // Spawn the countdown driver; completion wakes main when asked to exit
    let completed = Arc::new(Notify::new());
    let notifier = Arc::clone(&completed);
    let (sink, announcements) = AnnounceChannel::new();
    let driver = spawn_countdown_driver(
        countdown_config,
        TerminalRenderer::stdout(),
        sink,
        move |_| {
            info!("Countdown reached zero");
            notifier.notify_one();
        },
    );

    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        driver.controls,
        driver.snapshots,
        announcements,
    ));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start          - Start or restart the countdown");
    info!("  POST /stop           - Stop the countdown");
    info!("  POST /pause          - Pause a running countdown");
    info!("  POST /resume         - Resume a paused countdown");
    info!("  POST /add/:units     - Add time");
    info!("  POST /extend/:units  - Give back elapsed time");
    info!("  POST /radius/:radius - Resize the circle");
    info!("  GET  /status         - Check current countdown");
    info!("  GET  /health         - Health check");

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
        _ = completed.notified(), if config.exit_on_complete => {
            info!("Countdown complete, exiting");
        }
    }

    println!();
    info!("Server shutdown complete");
    Ok(())
}

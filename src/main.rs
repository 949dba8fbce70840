//! DevClash - countdown and scroll-state service for the hackathon site
//!
//! This is the main entry point for the devclash server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use devclash::{
    api::create_router,
    config::Config,
    countdown::SystemClock,
    scroll::ScrollTracker,
    state::AppState,
    tasks::spawn_countdown_ticker,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("devclash={},tower_http=info", config.log_level()))
        .init();

    info!("Starting devclash server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, start={}, end={}",
        config.host, config.port, config.start, config.end
    );

    let tick_interval = config.tick_interval()?;

    // A bad event window is reported inside AppState::new and only
    // suppresses the countdown; the scroll endpoints keep working.
    let state = Arc::new(AppState::new(
        config.countdown(),
        tick_interval,
        ScrollTracker::new(config.scroll_settings()),
        config.port,
        config.host.clone(),
    ));
    state.log_summary();

    let ticker = state.countdown.map(|_| {
        spawn_countdown_ticker(Arc::clone(&state), Arc::new(SystemClock), tick_interval)
    });

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /countdown - Current countdown phase and time left");
    info!("  POST /scroll    - Scroll state for a page scroll sample");
    info!("  GET  /nav       - Navigation links");
    info!("  GET  /status    - Server and event window status");
    info!("  GET  /health    - Health check");

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

    if let Some(ticker) = ticker {
        ticker.stop().await;
    }

    info!("Server shutdown complete");
    Ok(())
}

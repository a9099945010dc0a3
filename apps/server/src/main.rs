use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobfit_server::config::{Config, RuntimeMode};
use jobfit_server::credentials::{self, CredentialPrompt, TerminalPrompt};
use jobfit_server::gemini::{self, GeminiClient};
use jobfit_server::routes::build_router;
use jobfit_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a malformed PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("jobfit_server={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobFit server v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the Gemini credential: environment, then stored config, then
    // interactive setup when a terminal is attached. Captured once here and
    // immutable for the process lifetime.
    let env_key = std::env::var(credentials::ENV_VAR).ok();
    let config_path = credentials::config_path();
    let terminal = TerminalPrompt::detect();
    let api_key = credentials::resolve_key(
        env_key,
        config_path.as_deref(),
        terminal.as_ref().map(|prompt| prompt as &dyn CredentialPrompt),
    );

    if api_key.is_none() {
        error!("No GEMINI_API_KEY found in environment variables or user config");
        if config.mode == RuntimeMode::Development {
            anyhow::bail!("GEMINI_API_KEY not found in environment variables");
        }
        // Packaged builds keep running; generation requests fail individually
        // until a key is configured.
    } else {
        info!("Gemini AI configured successfully (model: {})", gemini::MODEL);
    }

    let completion = Arc::new(GeminiClient::new(api_key));
    let state = AppState::new(completion, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("JobFit is running at http://localhost:{}", config.port);

    if config.mode.is_packaged() {
        spawn_browser_opener(config.port);
        info!("You can access the application in your web browser");
        info!("Press Ctrl+C to quit");
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Opens the default browser at the server address shortly after startup.
/// Fire-and-forget: a failure is logged, never fatal.
fn spawn_browser_opener(port: u16) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let url = format!("http://localhost:{port}");
        info!("Opening browser at {url}");
        if let Err(e) = open::that(&url) {
            warn!("Could not open browser: {e}");
        }
    });
}

//! VenueLens CRM Analytics Service
//!
//! Serves derived analytics for a venue/events CRM dashboard:
//! - Five-stage lead funnel metrics
//! - Monthly revenue rollups
//! - Per-channel conversion performance
//! - Mined time-of-day / day-of-week insights
//! - Manager digest with a deterministic rule-based fallback

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{info, warn};

use api::{router, AppState};
use datasource::{DataSource, JsonFileSource, MemorySource};
use telemetry::{health, init_tracing_from_env};

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    #[serde(default)]
    source: SourceConfig,
}

/// Data-source configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct SourceConfig {
    /// "json" reads record files from `data_dir`; "memory" starts with
    /// empty lists (useful for smoke-testing the endpoints).
    #[serde(default = "default_source_kind")]
    kind: String,
    #[serde(default = "default_data_dir")]
    data_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_source_kind() -> String {
    "json".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            source: SourceConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: default_source_kind(),
            data_dir: default_data_dir(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    info!("Starting VenueLens analytics service v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config()?;
    info!(
        source_kind = %config.source.kind,
        data_dir = %config.source.data_dir,
        "Loaded configuration"
    );

    // Build the data source
    let source: Arc<dyn DataSource> = match config.source.kind.as_str() {
        "memory" => Arc::new(MemorySource::new()),
        "json" => Arc::new(JsonFileSource::new(&config.source.data_dir)),
        other => anyhow::bail!("Unknown source kind: {other}"),
    };

    // Record startup health
    if source.is_healthy() {
        health().datasource.set_healthy();
        info!("Data source: healthy");
    } else {
        health().datasource.set_unhealthy("Data directory missing");
        warn!("Data source: unhealthy (data directory missing?)");
    }
    // No text generator is wired in this binary; the digest endpoint
    // serves the rule-based fallback and health reports degraded.
    health().assist.set_unhealthy("No text generator configured");

    // Create application state and router
    let state = AppState::new(source);
    let app = router(state);

    // Start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("VENUELENS")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Manual overrides for the nested source config from environment
    // The config crate's nested parsing doesn't work reliably with underscored field names
    if let Ok(kind) = std::env::var("VENUELENS_SOURCE_KIND") {
        config.source.kind = kind;
    }
    if let Ok(data_dir) = std::env::var("VENUELENS_SOURCE_DATA_DIR") {
        config.source.data_dir = data_dir;
    }

    Ok(config)
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}

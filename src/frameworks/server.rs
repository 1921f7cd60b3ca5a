// Framework bootstrap for the actions gateway.

use crate::domain::instagram::InstagramSource;
use crate::frameworks::config::{GatewayConfig, InstagramMode};
use crate::interface_adapters::clients::{
    GraphCredentials, GraphInstagramClient, MockInstagramSource,
};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, SystemClock};
use std::io::Result;
use std::sync::Arc;

// Output shape of the gateway's log lines, picked by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    // Only `json` (any case) switches to structured lines; anything else stays compact.
    fn from_setting(setting: Option<&str>) -> Self {
        match setting.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

// Process-wide setup before config is read: `.env`, the log subscriber, the panic hook.
fn init_gateway_logging() {
    // A missing .env file is the normal case outside local development.
    if let Err(err) = dotenvy::dotenv()
        && !err.not_found()
    {
        eprintln!("ignoring unreadable .env file: {err}");
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let format = LogFormat::from_setting(std::env::var("LOG_FORMAT").ok().as_deref());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().with_current_span(true).init(),
        LogFormat::Compact => builder.compact().init(),
    }

    // Route panic messages and backtraces through the subscriber.
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "gateway task panicked");
    }));
}

// Serve the gateway on an already bound listener until the process exits.
pub async fn run(listener: tokio::net::TcpListener, config: GatewayConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&config)?;
    let app = routes::app(state);

    tracing::info!(%address, instagram_mode = ?config.instagram.mode, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_gateway_logging();

    let config = GatewayConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    tracing::debug!(?config, "configuration loaded");

    let address = config.bind_addr;

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

pub fn build_state(config: &GatewayConfig) -> Result<Arc<AppState>> {
    if config.api_token.is_none() {
        tracing::warn!("API_TOKEN is not set; every protected route will answer 401");
    }

    let clock = Arc::new(SystemClock);
    let instagram: Arc<dyn InstagramSource> = match config.instagram.mode {
        InstagramMode::Mock => Arc::new(MockInstagramSource::new(SystemClock)),
        InstagramMode::Live => {
            let credentials = match (&config.instagram.user_id, &config.instagram.access_token) {
                (Some(ig_user_id), Some(access_token)) => Some(GraphCredentials {
                    ig_user_id: ig_user_id.clone(),
                    access_token: access_token.clone(),
                }),
                _ => {
                    // Not fatal: the fetch endpoint reports it per request.
                    tracing::warn!("IG_USER_ID or IG_ACCESS_TOKEN is not set");
                    None
                }
            };
            let client = GraphInstagramClient::new(
                config.instagram.graph_base_url.clone(),
                config.instagram.graph_version.clone(),
                credentials,
                config.instagram.timeout,
            )
            .map_err(|e| std::io::Error::other(format!("failed to initialize graph client: {e}")))?;
            tracing::debug!(
                graph_base_url = %config.instagram.graph_base_url,
                graph_version = %config.instagram.graph_version,
                timeout_ms = config.instagram.timeout.map(|t| t.as_millis() as u64),
                "graph client configured"
            );
            Arc::new(client)
        }
    };

    Ok(Arc::new(AppState {
        api_token: config.api_token.as_deref().map(Arc::from),
        instagram,
        clock,
    }))
}

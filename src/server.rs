use crate::{
    config::{
        parse_log_level, parse_non_empty_string, parse_u16_with_bounds, ConfigSource, EnvSource,
    },
    logging::{LogLevel, Logger, DEFAULT_LOG_LEVEL},
};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::json;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_source(&EnvSource)
    }

    pub fn from_source(source: &impl ConfigSource) -> Self {
        Self {
            port: parse_u16_with_bounds(source, "PORT", DEFAULT_PORT, (1, u16::MAX)),
            dist_dir: parse_non_empty_string(source, "DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
            log_level: parse_log_level(source, "LOG_LEVEL", DEFAULT_LOG_LEVEL),
        }
    }
}

/// Static file router for the built bundle. Unknown paths get the index page
/// so in-page anchors keep working after a reload.
pub fn router(config: &ServerConfig, logger: Logger) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(logger, access_log))
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let logger = Logger::new(config.log_level);
    let bind_address = format!("0.0.0.0:{}", config.port);
    let app = router(&config, logger);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    logger.info(
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn access_log(State(logger): State<Logger>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    let level = if status.is_server_error() {
        LogLevel::Warn
    } else {
        LogLevel::Info
    };
    logger.event(
        level,
        "http_request",
        json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "elapsed_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", chrono::Utc::now().timestamp_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

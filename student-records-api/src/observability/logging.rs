//! Structured logging setup and request correlation.
//!
//! # Examples
//!
//! ```rust,no_run
//! use student_records_api::observability::logging::{init_logging, LogConfig};
//!
//! init_logging(LogConfig::default()).expect("Failed to initialize logging");
//! ```

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::{str::FromStr, time::Instant};
use tracing::{info, Instrument};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};
use uuid::Uuid;

/// HTTP header for request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format for production (machine-readable)
    Json,
    /// Pretty format for development (human-readable)
    Pretty,
    /// Compact format for minimal output
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("Unknown log format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Fallback level when `RUST_LOG` is not set.
    pub level: String,
    /// Explicit filter directive; overrides both `RUST_LOG` and `level`.
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: "info".to_string(),
            filter: None,
        }
    }
}

/// Initialize the logging system with the given configuration
pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = if let Some(ref filter) = config.filter {
        EnvFilter::try_new(filter)?
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
    };

    match config.format {
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(json_layer).try_init()?;
        }
        LogFormat::Pretty => {
            let pretty_layer = fmt::layer()
                .pretty()
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(pretty_layer).try_init()?;
        }
        LogFormat::Compact => {
            let compact_layer = fmt::layer()
                .compact()
                .with_filter(env_filter);

            tracing_subscriber::registry().with(compact_layer).try_init()?;
        }
    }

    info!("Logging system initialized with format: {:?}", config.format);
    Ok(())
}

/// Reuse the caller's request id or mint one.
pub fn extract_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Tag every request with a correlation id and log its outcome.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = extract_request_id(request.headers());
    let method = request.method().clone();
    let uri = request.uri().clone();

    let span = tracing::info_span!("request", request.id = %request_id);
    let mut response = next.run(request).instrument(span.clone()).await;

    span.in_scope(|| {
        info!(
            request.method = %method,
            request.uri = %uri,
            response.status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

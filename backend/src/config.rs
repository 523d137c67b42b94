use std::time::Duration;

use anyhow::Context;
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub fun_fact_base_url: String,
    pub fun_fact_timeout: Duration,
    pub json_logs: bool,
    pub cors: CorsConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let timeout_ms: u64 = std::env::var("FUN_FACT_TIMEOUT_MS")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .context("FUN_FACT_TIMEOUT_MS must be a number of milliseconds")?;
        if timeout_ms == 0 {
            anyhow::bail!("FUN_FACT_TIMEOUT_MS must be greater than zero");
        }

        Ok(Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into()),
            fun_fact_base_url: std::env::var("FUN_FACT_BASE_URL")
                .unwrap_or_else(|_| "http://numbersapi.com".into()),
            fun_fact_timeout: Duration::from_millis(timeout_ms),
            json_logs: std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")),
            cors: CorsConfig {
                origins: list_var("CORS_ORIGINS"),
                methods: list_var("CORS_METHODS"),
                headers: list_var("CORS_HEADERS"),
                allow_credentials: std::env::var("CORS_ALLOW_CREDENTIALS")
                    .unwrap_or_else(|_| "true".into())
                    .parse()
                    .context("CORS_ALLOW_CREDENTIALS must be true or false")?,
            },
        })
    }
}

/// Comma-separated env list, `*` when unset.
fn list_var(name: &str) -> Vec<String> {
    std::env::var(name)
        .unwrap_or_else(|_| "*".into())
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Allowed origins, methods and headers. Built once at startup and handed to
/// [`crate::api::router`].
///
/// A `*` entry permits everything. Browsers refuse a literal `*` on credentialed
/// requests, so with `allow_credentials` set the wildcard echoes the request instead.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub origins: Vec<String>,
    pub methods: Vec<String>,
    pub headers: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsConfig {
    /// Everything allowed, credentials included.
    pub fn open() -> Self {
        Self {
            origins: vec!["*".into()],
            methods: vec!["*".into()],
            headers: vec!["*".into()],
            allow_credentials: true,
        }
    }

    pub fn layer(&self) -> CorsLayer {
        let origin = if is_wildcard(&self.origins) {
            if self.allow_credentials {
                AllowOrigin::mirror_request()
            } else {
                AllowOrigin::from(Any)
            }
        } else {
            AllowOrigin::list(
                self.origins
                    .iter()
                    .filter_map(|o| o.parse::<HeaderValue>().ok()),
            )
        };

        let methods = if is_wildcard(&self.methods) {
            if self.allow_credentials {
                AllowMethods::mirror_request()
            } else {
                AllowMethods::from(Any)
            }
        } else {
            AllowMethods::list(
                self.methods
                    .iter()
                    .filter_map(|m| m.to_ascii_uppercase().parse::<Method>().ok()),
            )
        };

        let headers = if is_wildcard(&self.headers) {
            if self.allow_credentials {
                AllowHeaders::mirror_request()
            } else {
                AllowHeaders::from(Any)
            }
        } else {
            AllowHeaders::list(
                self.headers
                    .iter()
                    .filter_map(|h| h.parse::<HeaderName>().ok()),
            )
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(self.allow_credentials)
    }
}

fn is_wildcard(list: &[String]) -> bool {
    list.iter().any(|v| v == "*")
}

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

#[derive(thiserror::Error, Debug)]
pub enum FunFactError {
    #[error("fun fact request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("fun fact source answered {0}")]
    Status(reqwest::StatusCode),
}

/// Text used whenever no fact can be fetched for `n`.
pub fn fallback_fact(n: i64) -> String {
    format!("{n} is a number with interesting mathematical properties.")
}

/// Remote source of trivia about non-negative integers.
#[async_trait]
pub trait FunFactSource: Send + Sync {
    /// Single attempt, no retries.
    async fn lookup(&self, n: u64) -> Result<String, FunFactError>;

    /// Fact for `n`, degrading to [`fallback_fact`] for negatives and on any
    /// lookup failure.
    async fn fun_fact(&self, n: i64) -> String {
        let Ok(key) = u64::try_from(n) else {
            return fallback_fact(n);
        };
        match self.lookup(key).await {
            Ok(fact) => fact,
            Err(e) => {
                tracing::warn!(number = n, "Using fallback fun fact: {}", e);
                fallback_fact(n)
            }
        }
    }
}

/// numbersapi.com style source: `GET {base_url}/{n}/math`, plain-text body.
#[derive(Clone, Debug)]
pub struct NumbersApi {
    client: reqwest::Client,
    base_url: String,
}

impl NumbersApi {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build fun fact HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl FunFactSource for NumbersApi {
    async fn lookup(&self, n: u64) -> Result<String, FunFactError> {
        let url = format!("{}/{}/math", self.base_url, n);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(FunFactError::Status(status));
        }

        Ok(resp.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client(base_url: &str, timeout_ms: u64) -> NumbersApi {
        NumbersApi::new(base_url, Duration::from_millis(timeout_ms)).unwrap()
    }

    #[tokio::test]
    async fn returns_body_verbatim() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/28/math");
                then.status(200)
                    .header("Content-Type", "text/plain")
                    .body("28 is the second perfect number.");
            })
            .await;

        let fact = client(&server.base_url(), 2_000).fun_fact(28).await;

        api_mock.assert_async().await;
        assert_eq!(fact, "28 is the second perfect number.");
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_ignored() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/6/math");
                then.status(200).body("6 is perfect.");
            })
            .await;

        let api = client(&format!("{}/", server.base_url()), 2_000);
        assert_eq!(api.lookup(6).await.unwrap(), "6 is perfect.");
        api_mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_ok_status_falls_back() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/42/math");
                then.status(500).body("boom");
            })
            .await;

        let api = client(&server.base_url(), 2_000);
        assert!(matches!(
            api.lookup(42).await,
            Err(FunFactError::Status(s)) if s == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert_eq!(api.fun_fact(42).await, fallback_fact(42));
        api_mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn slow_source_times_out_to_fallback() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/7/math");
                then.status(200)
                    .body("too late")
                    .delay(Duration::from_millis(1_000));
            })
            .await;

        let fact = client(&server.base_url(), 50).fun_fact(7).await;
        assert_eq!(fact, fallback_fact(7));
    }

    #[tokio::test]
    async fn unreachable_source_falls_back() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let fact = client("http://127.0.0.1:9", 500).fun_fact(5).await;
        assert_eq!(fact, fallback_fact(5));
    }

    #[tokio::test]
    async fn negative_number_is_never_requested() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).body("unexpected");
            })
            .await;

        let fact = client(&server.base_url(), 2_000).fun_fact(-17).await;

        assert_eq!(fact, "-17 is a number with interesting mathematical properties.");
        api_mock.assert_hits_async(0).await;
    }
}

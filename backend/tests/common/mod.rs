#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use number_classifier_backend::{
    api,
    config::CorsConfig,
    fun_fact::{FunFactError, FunFactSource},
    AppState,
};

/// Fun-fact source that never touches the network.
#[derive(Clone, Default)]
pub struct StubFacts {
    pub fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl StubFacts {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FunFactSource for StubFacts {
    async fn lookup(&self, n: u64) -> Result<String, FunFactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(FunFactError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
        } else {
            Ok(format!("{n} is a stubbed fact."))
        }
    }
}

/// Spin up a real Axum server on a random port with the given fun-fact source
/// and CORS policy, returning its address.
pub async fn setup_test_app_with(facts: StubFacts, cors: CorsConfig) -> SocketAddr {
    let app = api::router(AppState::new(facts), &cors);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Open CORS policy and a stub source that always succeeds.
pub async fn setup_test_app() -> (SocketAddr, StubFacts) {
    let facts = StubFacts::default();
    let addr = setup_test_app_with(facts.clone(), CorsConfig::open()).await;
    (addr, facts)
}

/// Build a reqwest client (reusable across requests in a test).
pub fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// GET the classify endpoint with a raw query string (without the leading `?`).
pub async fn classify(addr: SocketAddr, query: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let resp = http_client()
        .get(format!("http://{}/api/classify-number?{}", addr, query))
        .send()
        .await
        .expect("Classify request failed");

    let status = resp.status();
    let body = resp.json().await.expect("Response should be JSON");
    (status, body)
}

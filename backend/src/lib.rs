pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod fun_fact;
pub mod models;

use std::sync::Arc;

use fun_fact::FunFactSource;

/// Shared application state available to all handlers via axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    pub fun_facts: Arc<dyn FunFactSource>,
}

impl AppState {
    pub fn new(fun_facts: impl FunFactSource + 'static) -> Self {
        Self {
            fun_facts: Arc::new(fun_facts),
        }
    }
}

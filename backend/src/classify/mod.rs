pub mod input;
pub mod properties;

use anyhow::Context;

use crate::{
    fun_fact::FunFactSource,
    models::classification::{
        ClassificationError, ClassificationResult, ClassifyResponse, Property,
    },
};

/// Everything about a number that does not need the network.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericProperties {
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u32,
}

impl NumericProperties {
    pub fn of(n: i64) -> Self {
        let is_prime = properties::is_prime(n);
        Self {
            is_prime,
            // a prime's only proper divisor is 1
            is_perfect: !is_prime && properties::is_perfect(n),
            properties: properties::properties(n),
            digit_sum: properties::digit_sum(n),
        }
    }
}

/// Classifies `n`, running the numeric checks on the blocking pool while the
/// fun fact is fetched.
pub async fn classify(n: i64, source: &dyn FunFactSource) -> anyhow::Result<ClassificationResult> {
    let numeric = tokio::task::spawn_blocking(move || NumericProperties::of(n));
    let (numeric, fun_fact) = tokio::join!(numeric, source.fun_fact(n));
    let numeric = numeric.context("numeric classification task failed")?;

    Ok(ClassificationResult {
        number: n,
        is_prime: numeric.is_prime,
        is_perfect: numeric.is_perfect,
        properties: numeric.properties,
        digit_sum: numeric.digit_sum,
        fun_fact,
    })
}

/// Parses the raw `number` token and classifies it, or describes why it could not.
pub async fn classify_input(
    raw: Option<&str>,
    source: &dyn FunFactSource,
) -> anyhow::Result<ClassifyResponse> {
    match input::parse_number(raw) {
        Ok(n) => {
            tracing::debug!(number = n, "classifying");
            Ok(ClassifyResponse::Success(classify(n, source).await?))
        }
        Err(e) => {
            tracing::debug!("rejected input: {}", e);
            Ok(ClassifyResponse::Failure(ClassificationError::from(e)))
        }
    }
}

use serde::Serialize;

use crate::classify::input::InputError;

/// Query string of `GET /api/classify-number`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ClassifyParams {
    pub number: Option<String>,
}

impl ClassifyParams {
    /// Builds the params from raw query pairs. A repeated `number` keeps its
    /// last value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let number = pairs
            .into_iter()
            .filter(|(key, _)| key == "number")
            .map(|(_, value)| value)
            .last();
        Self { number }
    }
}

/// Tags reported in `properties`, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Odd,
    Even,
}

/// Successful classification of a parsed integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

/// Body returned when the input is not a usable integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationError {
    pub number: String,
    pub error: bool,
}

impl From<InputError> for ClassificationError {
    fn from(err: InputError) -> Self {
        let number = match err {
            InputError::Missing => "undefined".to_string(),
            InputError::Alphabetic => "alphabet".to_string(),
            InputError::NonNumeric(raw) => raw,
        };
        Self {
            number,
            error: true,
        }
    }
}

/// Either body; both are sent with status 200.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassifyResponse {
    Success(ClassificationResult),
    Failure(ClassificationError),
}

/// Why a raw `number` token could not be turned into an integer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("number parameter missing")]
    Missing,

    #[error("number is alphabetic")]
    Alphabetic,

    #[error("not an integer: {0:?}")]
    NonNumeric(String),
}

/// Parses the raw query token as a base-10 `i64`.
///
/// Accepts an optional `+`/`-` followed by ASCII digits; whitespace, decimals,
/// exponents and out-of-range values are rejected. A rejected token made only
/// of letters is reported as [`InputError::Alphabetic`], anything else (the empty
/// string included) is echoed back in [`InputError::NonNumeric`].
pub fn parse_number(raw: Option<&str>) -> Result<i64, InputError> {
    let raw = raw.ok_or(InputError::Missing)?;

    raw.parse::<i64>().map_err(|_| {
        if !raw.is_empty() && raw.chars().all(char::is_alphabetic) {
            InputError::Alphabetic
        } else {
            InputError::NonNumeric(raw.to_string())
        }
    })
}

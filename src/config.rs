#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Default upper bound on the number of hints joined into one response.
pub const DEFAULT_MAX_HINTS_PER_RESPONSE: usize = 2;

/// Returns the maximum number of hints joined into a single response, read
/// from `SQLTUTOR_MAX_HINTS`. Unset, unparseable, or zero values fall back to
/// the default of two.
pub fn max_hints_per_response() -> usize {
    std::env::var("SQLTUTOR_MAX_HINTS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|&value| value > 0)
        .unwrap_or(DEFAULT_MAX_HINTS_PER_RESPONSE)
}

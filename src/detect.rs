#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;

use crate::constants::{
    AGGREGATION_CUES, DOTTED_TOKEN_PATTERN, FILTERING_CUES, MULTI_TABLE_CUES,
};

/// Returns whether the assignment text implies filtering rows, such as
/// "only", "except", or a comparison.
pub fn mentions_filtering(description: &str) -> bool {
    contains_any_cue(description, &FILTERING_CUES)
}

/// Returns whether the assignment text implies grouping or aggregate
/// calculations, such as "count", "total", or "per".
pub fn mentions_aggregation(description: &str) -> bool {
    contains_any_cue(description, &AGGREGATION_CUES)
}

/// Returns whether the exercise appears to span more than one table: either
/// the schema names at least two distinct `table.column` tokens, or the
/// assignment text uses combining language ("join", "combine", "relate").
///
/// An empty schema simply contributes zero tokens; the assignment text is
/// still consulted.
pub fn mentions_multiple_tables(description: &str, schema: &str) -> bool {
    let distinct_tokens = DOTTED_TOKEN_PATTERN
        .find_iter(schema)
        .map(|token| token.as_str())
        .unique()
        .count();

    distinct_tokens >= 2 || contains_any_cue(description, &MULTI_TABLE_CUES)
}

/// Case-insensitive substring membership check against a cue set.
fn contains_any_cue(text: &str, cues: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    cues.iter().any(|cue| lowered.contains(cue))
}

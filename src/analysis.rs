#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::constants::{
    FROM_PATTERN, GROUP_BY_PATTERN, JOIN_PATTERN, MINIMAL_ATTEMPT_LENGTH, ORDER_BY_PATTERN,
    SELECT_PATTERN, WHERE_PATTERN,
};

/// Coarse classification of how complete a query attempt is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Nothing written yet, or too little to assess.
    Empty,
    /// At most one recognizable SQL clause.
    Beginning,
    /// Two or three recognizable SQL clauses.
    Partial,
    /// Four or more recognizable SQL clauses.
    Advanced,
}

impl Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Quality::Empty => "empty",
            Quality::Beginning => "beginning",
            Quality::Partial => "partial",
            Quality::Advanced => "advanced",
        };
        write!(f, "{name}")
    }
}

/// A specific problem detected in an attempt, such as a missing clause.
///
/// No variants exist yet; the analysis carries the slot so finer-grained
/// diagnostics can be added without changing the shape of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Issue {}

/// The result of sizing up a student's query attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptAnalysis {
    /// The completeness tier the attempt falls into.
    pub quality: Quality,
    /// Specific problems detected in the attempt; always empty for now.
    pub issues:  Vec<Issue>,
}

impl AttemptAnalysis {
    /// Classifies a query attempt by counting which of the six clause
    /// keywords (`SELECT`, `FROM`, `WHERE`, `GROUP BY`, `JOIN`, `ORDER BY`)
    /// appear in it, case-insensitively. Attempts shorter than ten characters
    /// after trimming are `Empty` regardless of content.
    ///
    /// Classification is a pure function of the query text; identical input
    /// always yields the identical tier.
    pub fn of(query: &str) -> Self {
        let trimmed = query.trim();

        if trimmed.len() < MINIMAL_ATTEMPT_LENGTH {
            return Self {
                quality: Quality::Empty,
                issues:  Vec::new(),
            };
        }

        let clause_patterns = [
            &*SELECT_PATTERN,
            &*FROM_PATTERN,
            &*WHERE_PATTERN,
            &*GROUP_BY_PATTERN,
            &*JOIN_PATTERN,
            &*ORDER_BY_PATTERN,
        ];
        let keyword_count = clause_patterns
            .iter()
            .filter(|pattern| pattern.is_match(trimmed))
            .count();

        let quality = match keyword_count {
            0 | 1 => Quality::Beginning,
            2 | 3 => Quality::Partial,
            _ => Quality::Advanced,
        };

        tracing::debug!("attempt matched {keyword_count} clause keywords, classified {quality}");

        Self {
            quality,
            issues: Vec::new(),
        }
    }
}

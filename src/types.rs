#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Everything the tutor needs to know about one exchange: the exercise, the
/// tables it runs against, and the student's current attempt. Any field may
/// be omitted; missing text is treated as empty rather than as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
#[builder(doc)]
pub struct HintRequest {
    /// The exercise prompt shown to the student.
    #[serde(default)]
    pub assignment_description: String,
    /// The schema of the tables the exercise runs against.
    #[serde(default)]
    pub table_schema:           String,
    /// A few example rows from those tables.
    #[serde(default)]
    pub sample_rows:            String,
    /// The student's current query attempt; may be empty.
    #[serde(default)]
    pub user_sql_query:         String,
}

/// A short advisory message for the student. Always natural language; never
/// contains SQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hint(String);

impl Hint {
    /// Returns the hint text.
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<String> for Hint {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

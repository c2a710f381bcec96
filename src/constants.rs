#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Presence check for a `SELECT` keyword anywhere in the query.
    pub static ref SELECT_PATTERN: Regex =
        Regex::new(r"(?i)SELECT").expect("SELECT pattern is valid");

    /// Presence check for a `FROM` keyword anywhere in the query.
    pub static ref FROM_PATTERN: Regex = Regex::new(r"(?i)FROM").expect("FROM pattern is valid");

    /// Presence check for a `WHERE` keyword anywhere in the query.
    pub static ref WHERE_PATTERN: Regex =
        Regex::new(r"(?i)WHERE").expect("WHERE pattern is valid");

    /// Presence check for a `GROUP BY` clause, tolerating any whitespace
    /// between the two words.
    pub static ref GROUP_BY_PATTERN: Regex =
        Regex::new(r"(?i)GROUP\s+BY").expect("GROUP BY pattern is valid");

    /// Presence check for a `JOIN` keyword anywhere in the query.
    pub static ref JOIN_PATTERN: Regex = Regex::new(r"(?i)JOIN").expect("JOIN pattern is valid");

    /// Presence check for an `ORDER BY` clause, tolerating any whitespace
    /// between the two words.
    pub static ref ORDER_BY_PATTERN: Regex =
        Regex::new(r"(?i)ORDER\s+BY").expect("ORDER BY pattern is valid");

    /// Matches `table.column`-shaped tokens in schema text.
    pub static ref DOTTED_TOKEN_PATTERN: Regex =
        Regex::new(r"\b\w+\.\w+\b").expect("dotted token pattern is valid");
}

/// Attempts shorter than this after trimming are treated as empty.
pub const MINIMAL_ATTEMPT_LENGTH: usize = 10;

/// Orientation hints for students who have not written anything yet.
pub const STARTING_HINTS: [&str; 4] = [
    "Think about what data you need to retrieve and which table contains that information.",
    "Consider what the question is asking you to find - is it filtering, counting, or combining \
     data?",
    "Start by identifying which table has the information you need, then think about how to \
     extract the specific data requested.",
    "Remember that SQL queries typically begin by selecting what you want to see, then \
     specifying where that data comes from.",
];

/// Improvement hints for attempts that have some clauses in place.
pub const IMPROVEMENT_HINTS: [&str; 4] = [
    "Double-check that your filtering conditions match all the requirements mentioned in the \
     question.",
    "Consider whether you need to handle any edge cases, such as null values or empty results.",
    "Think about the order of operations in your query - are you filtering before or after \
     grouping?",
    "Verify that you're selecting all the columns or calculations that the question asks for.",
];

/// Refinement hints for attempts that are nearly complete.
pub const REFINEMENT_HINTS: [&str; 3] = [
    "Consider whether there are any edge cases in the data that your current approach might \
     miss.",
    "Think about whether your query could be simplified or if there's a more efficient way to \
     express the same logic.",
    "Review the sample data to ensure your query handles all possible scenarios correctly.",
];

/// Targeted hint when the attempt lacks a filter the assignment calls for.
pub const MISSING_FILTER_HINT: &str = "Consider whether you need to filter the data based on \
                                       specific conditions mentioned in the question.";

/// Targeted hint when the attempt lacks grouping the assignment calls for.
pub const MISSING_AGGREGATION_HINT: &str = "Think about whether you need to group data together \
                                            or perform calculations across multiple rows.";

/// Targeted hint when the attempt lacks a join the assignment calls for.
pub const MISSING_JOIN_HINT: &str = "The question might require combining information from \
                                     multiple tables - consider how they relate to each other.";

/// Fallback hint when no targeted gap is detected in a beginning attempt.
pub const REVIEW_REQUIREMENTS_HINT: &str = "Review the question requirements carefully - are \
                                            there any conditions or calculations you haven't \
                                            addressed yet?";

/// Words in an assignment that imply row filtering.
pub const FILTERING_CUES: [&str; 8] = [
    "where",
    "filter",
    "only",
    "except",
    "excluding",
    "greater",
    "less",
    "equal",
];

/// Words in an assignment that imply grouping or aggregate calculations.
pub const AGGREGATION_CUES: [&str; 9] = [
    "count", "sum", "average", "total", "group", "each", "per", "maximum", "minimum",
];

/// Words in an assignment that imply combining data from several tables.
pub const MULTI_TABLE_CUES: [&str; 3] = ["join", "combine", "relate"];

//! # sqltutor
//!
//! A tutoring engine for SQL exercises. Given the assignment text, the table
//! schema, and a student's current attempt, it gauges how far along the
//! attempt is and responds with a short, encouraging hint. Hints are natural
//! language only; the tutor never hands back SQL.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// For classifying a query attempt into a quality tier
pub mod analysis;
/// Environment-backed configuration values
pub mod config;
/// A module defining fixed hint pools, keyword patterns, and cue sets
pub mod constants;
/// Lexical detectors for intent cues in assignment text
pub mod detect;
/// The hint engine and its per-tier strategies
pub mod engine;
/// Request and hint value types
pub mod types;

pub use analysis::{AttemptAnalysis, Issue, Quality};
pub use engine::HintEngine;
pub use types::{Hint, HintRequest};

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

use crate::{
    analysis::{AttemptAnalysis, Quality},
    config,
    constants::{
        GROUP_BY_PATTERN, IMPROVEMENT_HINTS, JOIN_PATTERN, MISSING_AGGREGATION_HINT,
        MISSING_FILTER_HINT, MISSING_JOIN_HINT, REFINEMENT_HINTS, REVIEW_REQUIREMENTS_HINT,
        STARTING_HINTS, WHERE_PATTERN,
    },
    detect,
    types::{Hint, HintRequest},
};

/// Generates hints for SQL exercise attempts without revealing solutions.
///
/// Each call to [`HintEngine::provide_hint`] classifies the attempt into a
/// quality tier and answers with a hint matched to that tier. Hint selection
/// within a tier may be randomized; the random source is injectable so tests
/// can pin exact picks.
pub struct HintEngine {
    /// Source of uniform random indices for pool selection.
    rng: Box<dyn RngCore>,
    /// Upper bound on the number of hints joined into one response.
    max_hints_per_response: usize,
}

impl Default for HintEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HintEngine {
    /// Creates an engine backed by the thread-local random generator. The
    /// response cap is read from `SQLTUTOR_MAX_HINTS` (default 2).
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }

    /// Creates an engine with a caller-supplied random source.
    pub fn with_rng(rng: impl RngCore + 'static) -> Self {
        Self {
            rng: Box::new(rng),
            max_hints_per_response: config::max_hints_per_response(),
        }
    }

    /// Creates an engine seeded for reproducible hint selection.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// a setter for the response cap, overriding the environment value
    pub fn set_max_hints_per_response(mut self, value: usize) -> Self {
        self.max_hints_per_response = value;
        self
    }

    /// Produces a hint for the student's current attempt.
    ///
    /// Classifies the attempt, runs the strategy for its tier, and joins the
    /// resulting hints (capped at the response limit) with single spaces.
    /// Every strategy currently yields exactly one hint, so the join is a
    /// pass-through today, but the contract supports more.
    pub fn provide_hint(&mut self, request: &HintRequest) -> Hint {
        let analysis = AttemptAnalysis::of(&request.user_sql_query);

        let hints = match analysis.quality {
            Quality::Empty => vec![self.starting_hint()],
            Quality::Beginning => vec![Self::conceptual_hint(request)],
            Quality::Partial => vec![self.improvement_hint()],
            Quality::Advanced => vec![self.refinement_hint()],
        };

        tracing::debug!("responding to a {} attempt with {} hint(s)", analysis.quality, hints.len());

        Hint::from(
            hints
                .into_iter()
                .take(self.max_hints_per_response)
                .join(" "),
        )
    }

    /// Strategy for empty attempts: a random orientation hint about what to
    /// select and where the data lives.
    fn starting_hint(&mut self) -> &'static str {
        self.pick(&STARTING_HINTS)
    }

    /// Strategy for beginning attempts: an ordered list of (gap, hint) pairs
    /// checked in priority order, falling back to a generic nudge to re-read
    /// the requirements. Deterministic; no random draw.
    fn conceptual_hint(request: &HintRequest) -> &'static str {
        let query = &request.user_sql_query;
        let description = &request.assignment_description;

        let targeted = [
            (
                !WHERE_PATTERN.is_match(query) && detect::mentions_filtering(description),
                MISSING_FILTER_HINT,
            ),
            (
                !GROUP_BY_PATTERN.is_match(query) && detect::mentions_aggregation(description),
                MISSING_AGGREGATION_HINT,
            ),
            (
                !JOIN_PATTERN.is_match(query)
                    && detect::mentions_multiple_tables(description, &request.table_schema),
                MISSING_JOIN_HINT,
            ),
        ];

        targeted
            .into_iter()
            .find_map(|(applies, hint)| applies.then_some(hint))
            .unwrap_or(REVIEW_REQUIREMENTS_HINT)
    }

    /// Strategy for partial attempts: a random hint about refining
    /// conditions, edge cases, clause ordering, or selected columns.
    fn improvement_hint(&mut self) -> &'static str {
        self.pick(&IMPROVEMENT_HINTS)
    }

    /// Strategy for advanced attempts: a random hint about edge cases,
    /// simplification, or validating against the sample data.
    fn refinement_hint(&mut self) -> &'static str {
        self.pick(&REFINEMENT_HINTS)
    }

    /// Picks uniformly at random from a fixed hint pool.
    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool[self.rng.random_range(0..pool.len())]
    }
}

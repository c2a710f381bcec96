use rand::{Rng, SeedableRng, rngs::StdRng};
use sqltutor::{
    HintEngine, HintRequest,
    constants::{
        IMPROVEMENT_HINTS, MISSING_AGGREGATION_HINT, MISSING_FILTER_HINT, MISSING_JOIN_HINT,
        REFINEMENT_HINTS, REVIEW_REQUIREMENTS_HINT, STARTING_HINTS,
    },
};

/// Builds a request around the given assignment and query, with the demo
/// schema attached.
fn request(assignment: &str, query: &str) -> HintRequest {
    HintRequest::builder()
        .assignment_description(assignment)
        .table_schema("customers (id, name, email)\norders (id, customer_id, order_date, total)")
        .sample_rows("Sample data...")
        .user_sql_query(query)
        .build()
}

#[test]
fn empty_attempt_draws_from_starting_pool() {
    let mut engine = HintEngine::seeded(7);
    let hint = engine.provide_hint(&request("Find all customers", ""));
    assert!(STARTING_HINTS.contains(&hint.as_str()));
}

#[test]
fn partial_attempt_draws_from_improvement_pool() {
    let mut engine = HintEngine::seeded(7);
    let hint = engine.provide_hint(&request("Find all customers", "SELECT * FROM customers"));
    assert!(IMPROVEMENT_HINTS.contains(&hint.as_str()));
}

#[test]
fn advanced_attempt_draws_from_refinement_pool() {
    let mut engine = HintEngine::seeded(7);
    let hint = engine.provide_hint(&request(
        "Find all customers who have placed more than 5 orders",
        "SELECT name, COUNT(*) FROM customers JOIN orders ON customers.id = orders.customer_id \
         GROUP BY name HAVING COUNT(*) > 5",
    ));
    assert!(REFINEMENT_HINTS.contains(&hint.as_str()));
}

#[test]
fn identical_seeds_yield_identical_hints() {
    let req = request("Find all customers", "");
    let first = HintEngine::seeded(42).provide_hint(&req);
    let second = HintEngine::seeded(42).provide_hint(&req);
    assert_eq!(first, second);
}

#[test]
fn seeded_selection_matches_the_raw_draw() {
    let seed = 13;
    let expected = STARTING_HINTS[StdRng::seed_from_u64(seed).random_range(0..STARTING_HINTS.len())];
    let hint = HintEngine::seeded(seed).provide_hint(&request("Find all customers", ""));
    assert_eq!(hint.as_str(), expected);
}

#[test]
fn beginning_attempt_missing_filter_gets_the_filter_hint() {
    let mut engine = HintEngine::seeded(0);
    let hint = engine.provide_hint(&request(
        "Show only customers with a balance greater than zero",
        "SELECT customer names",
    ));
    assert_eq!(hint.as_str(), MISSING_FILTER_HINT);
}

#[test]
fn beginning_attempt_missing_grouping_gets_the_aggregation_hint() {
    let mut engine = HintEngine::seeded(0);
    let hint = engine.provide_hint(&request(
        "Count the orders placed by customers",
        "SELECT customer names",
    ));
    assert_eq!(hint.as_str(), MISSING_AGGREGATION_HINT);
}

#[test]
fn beginning_attempt_missing_join_gets_the_join_hint() {
    let mut engine = HintEngine::seeded(0);
    let hint = engine.provide_hint(&request(
        "Combine customer and order information",
        "SELECT everything",
    ));
    assert_eq!(hint.as_str(), MISSING_JOIN_HINT);
}

#[test]
fn filter_gap_outranks_aggregation_gap() {
    // Both filtering ("only") and aggregation ("count", "per") cues are
    // present; the filter hint comes first in priority order.
    let mut engine = HintEngine::seeded(0);
    let hint = engine.provide_hint(&request(
        "Count only the recent orders per day",
        "SELECT everything",
    ));
    assert_eq!(hint.as_str(), MISSING_FILTER_HINT);
}

#[test]
fn present_clause_suppresses_its_targeted_hint() {
    // The attempt already has a WHERE, so the filter gap does not apply even
    // though the assignment carries a filtering cue.
    let mut engine = HintEngine::seeded(0);
    let hint = engine.provide_hint(&request(
        "Show only active users",
        "WHERE status active",
    ));
    assert_eq!(hint.as_str(), REVIEW_REQUIREMENTS_HINT);
}

#[test]
fn beginning_attempt_with_no_detected_gap_gets_the_fallback() {
    let mut engine = HintEngine::seeded(0);
    let hint = engine.provide_hint(&request(
        "Find all customers who have placed more than 5 orders",
        "FROM customers table",
    ));
    assert_eq!(hint.as_str(), REVIEW_REQUIREMENTS_HINT);
}

#[test]
fn beginning_hints_are_deterministic_across_seeds() {
    let req = request("Show only customers with a balance greater than zero", "SELECT customers");
    let first = HintEngine::seeded(1).provide_hint(&req);
    let second = HintEngine::seeded(999).provide_hint(&req);
    assert_eq!(first, second);
}

#[test]
fn hints_never_contain_sql_syntax() {
    let pooled = STARTING_HINTS
        .iter()
        .chain(IMPROVEMENT_HINTS.iter())
        .chain(REFINEMENT_HINTS.iter())
        .chain(
            [
                MISSING_FILTER_HINT,
                MISSING_AGGREGATION_HINT,
                MISSING_JOIN_HINT,
                REVIEW_REQUIREMENTS_HINT,
            ]
            .iter(),
        );

    for hint in pooled {
        assert!(!hint.contains("SELECT"), "hint leaks SQL: {hint}");
        assert!(!hint.contains('*'), "hint leaks SQL: {hint}");
        assert!(!hint.contains('='), "hint leaks SQL: {hint}");
        assert!(!hint.contains("customers"), "hint leaks table names: {hint}");
        assert!(!hint.contains("orders"), "hint leaks table names: {hint}");
    }
}

#[test]
fn response_cap_override_still_yields_a_pool_hint() {
    let mut engine = HintEngine::seeded(3).set_max_hints_per_response(1);
    let hint = engine.provide_hint(&request("Find all customers", ""));
    assert!(STARTING_HINTS.contains(&hint.as_str()));
}

#[test]
fn missing_json_fields_normalize_to_empty_text() {
    let req: HintRequest = serde_json::from_str("{}").expect("empty object should deserialize");
    assert!(req.user_sql_query.is_empty());

    let hint = HintEngine::seeded(5).provide_hint(&req);
    assert!(STARTING_HINTS.contains(&hint.as_str()));
}

#[test]
fn builder_defaults_every_field_to_empty() {
    let req = HintRequest::builder().build();
    assert!(req.assignment_description.is_empty());
    assert!(req.table_schema.is_empty());
    assert!(req.sample_rows.is_empty());
    assert!(req.user_sql_query.is_empty());
}

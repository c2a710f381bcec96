use sqltutor::detect::{mentions_aggregation, mentions_filtering, mentions_multiple_tables};

#[test]
fn filtering_cues_are_detected() {
    assert!(mentions_filtering("Show only the customers from Ohio"));
    assert!(mentions_filtering("Exclude orders EXCEPT those from 2023"));
    assert!(mentions_filtering("List products with a price greater than 10"));
    assert!(mentions_filtering("Find rows where the status is active"));
}

#[test]
fn filtering_cues_are_absent_in_plain_prompts() {
    assert!(!mentions_filtering("List every product name"));
    assert!(!mentions_filtering(""));
}

#[test]
fn aggregation_cues_are_detected() {
    assert!(mentions_aggregation("Count the orders for every customer"));
    assert!(mentions_aggregation("What is the AVERAGE order value?"));
    assert!(mentions_aggregation("Show revenue per region"));
    assert!(mentions_aggregation("Find the maximum price in each category"));
}

#[test]
fn aggregation_cues_are_absent_in_plain_prompts() {
    assert!(!mentions_aggregation("Show the customer emails"));
    assert!(!mentions_aggregation(""));
}

#[test]
fn schema_with_two_distinct_dotted_tokens_implies_multiple_tables() {
    let schema = "customers.id references orders.customer_id";
    assert!(mentions_multiple_tables("List the data", schema));
}

#[test]
fn repeated_dotted_token_does_not_count_twice() {
    let schema = "customers.id customers.id";
    assert!(!mentions_multiple_tables("List the data", schema));
}

#[test]
fn plain_schema_falls_back_to_description_keywords() {
    // This schema spells out columns in parentheses, so it contains zero
    // table.column-shaped tokens; only the description can tip the detector.
    let schema = "customers (id, name, email)\norders (id, customer_id, order_date, total)";
    assert!(!mentions_multiple_tables(
        "Find all customers who have placed more than 5 orders",
        schema
    ));
    assert!(mentions_multiple_tables("Combine customers with their orders", schema));
    assert!(mentions_multiple_tables("Relate each order to its customer", schema));
    assert!(mentions_multiple_tables("JOIN the two tables", schema));
}

#[test]
fn empty_schema_still_honors_description_keywords() {
    assert!(mentions_multiple_tables("Combine data from both tables", ""));
    assert!(!mentions_multiple_tables("List the customers", ""));
}

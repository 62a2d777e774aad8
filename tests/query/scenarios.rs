//! Worked query examples, end to end through `run_query`.
//!
//! Index for every test unless noted:
//! - cat -> {docA: 2, docB: 1}
//! - dog -> {docA: 3}

use super::common::{cat_dog_index, make_index, pairs, ranked, run_counting_opens};
use wikiquery::{search, Error, QueryError};

// ============================================================================
// SINGLE TERM
// ============================================================================

#[test]
fn test_single_term_ranked_ascending() {
    let results = search(&cat_dog_index(), ["cat"]).unwrap();
    assert_eq!(ranked(&results), pairs(&[("docB", 1), ("docA", 2)]));
}

#[test]
fn test_unknown_single_term_is_empty() {
    let results = search(&cat_dog_index(), ["unicorn"]).unwrap();
    assert!(results.is_empty());
}

// ============================================================================
// AND
// ============================================================================

#[test]
fn test_explicit_and() {
    let results = search(&cat_dog_index(), ["cat", "AND", "dog"]).unwrap();
    assert_eq!(ranked(&results), pairs(&[("docB", 0), ("docA", 5)]));
}

#[test]
fn test_implicit_and_matches_explicit() {
    let index = cat_dog_index();
    let implicit = search(&index, ["cat", "dog"]).unwrap();
    let explicit = search(&index, ["cat", "AND", "dog"]).unwrap();
    assert_eq!(implicit, explicit);
}

#[test]
fn test_and_order_changes_document_set() {
    let index = cat_dog_index();
    let cat_dog = search(&index, ["cat", "AND", "dog"]).unwrap();
    let dog_cat = search(&index, ["dog", "AND", "cat"]).unwrap();

    // Left operand drives which documents appear
    assert_eq!(cat_dog.len(), 2);
    assert_eq!(dog_cat.len(), 1);
    assert_eq!(ranked(&dog_cat), pairs(&[("docA", 5)]));
}

// ============================================================================
// OR
// ============================================================================

#[test]
fn test_or_unions_and_sums() {
    let index = make_index(&[
        ("cat", &[("docA", 2), ("docB", 1)]),
        ("bird", &[("docA", 1), ("docC", 6)]),
    ]);
    let results = search(&index, ["cat", "OR", "bird"]).unwrap();
    assert_eq!(
        ranked(&results),
        pairs(&[("docB", 1), ("docA", 3), ("docC", 6)])
    );
}

#[test]
fn test_operators_fold_left_to_right() {
    let index = make_index(&[
        ("cat", &[("docA", 2), ("docB", 1)]),
        ("dog", &[("docA", 3)]),
        ("bird", &[("docC", 4)]),
    ]);

    // (cat OR bird) AND dog: docC survives at zero because OR brought it in
    let results = search(&index, ["cat", "OR", "bird", "AND", "dog"]).unwrap();
    assert_eq!(
        ranked(&results),
        pairs(&[("docB", 0), ("docC", 0), ("docA", 5)])
    );
}

// ============================================================================
// EXCLUSION
// ============================================================================

#[test]
fn test_exclusion_removes_documents() {
    let index = make_index(&[
        ("cat", &[("docA", 2), ("docB", 1)]),
        ("dog", &[("docA", 5)]),
    ]);
    let results = search(&index, ["cat", "-dog"]).unwrap();
    assert_eq!(ranked(&results), pairs(&[("docB", 1)]));
}

#[test]
fn test_exclusion_before_first_term() {
    let index = make_index(&[
        ("cat", &[("docA", 2), ("docB", 1)]),
        ("dog", &[("docA", 5)]),
    ]);
    let results = search(&index, ["-dog", "cat"]).unwrap();
    assert_eq!(ranked(&results), pairs(&[("docB", 1)]));
}

#[test]
fn test_exclusion_of_unknown_term_changes_nothing() {
    let index = cat_dog_index();
    let results = search(&index, ["cat", "-unicorn"]).unwrap();
    assert_eq!(results, search(&index, ["cat"]).unwrap());
}

#[test]
fn test_exclusion_applies_after_or() {
    let index = make_index(&[
        ("cat", &[("docA", 2)]),
        ("bird", &[("docC", 4)]),
        ("feather", &[("docC", 1)]),
    ]);
    // -feather comes before OR bird but is subtracted last
    let results = search(&index, ["cat", "-feather", "OR", "bird"]).unwrap();
    assert_eq!(ranked(&results), pairs(&[("docA", 2)]));
}

#[test]
fn test_operand_after_operator_is_not_an_exclusion() {
    let index = make_index(&[
        ("cat", &[("docA", 2), ("docB", 1)]),
        ("dog", &[("docA", 5)]),
    ]);
    // "-dog" is looked up literally as the OR operand, and nothing matches it
    let results = search(&index, ["cat", "OR", "-dog"]).unwrap();
    assert_eq!(ranked(&results), pairs(&[("docB", 1), ("docA", 2)]));
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_empty_stream_reports_no_valid_term() {
    let (result, opens) = run_counting_opens(&[], cat_dog_index());
    assert!(matches!(result, Err(Error::Query(QueryError::NoValidTerm))));
    assert_eq!(opens, 0);
}

#[test]
fn test_only_operators_and_exclusions_report_no_valid_term() {
    let (result, opens) = run_counting_opens(&["AND", "-cat", "OR"], cat_dog_index());
    assert!(matches!(result, Err(Error::Query(QueryError::NoValidTerm))));
    assert_eq!(opens, 0);
}

#[test]
fn test_no_valid_term_message() {
    assert_eq!(
        QueryError::NoValidTerm.to_string(),
        "Please enter at least one valid search term."
    );
}

#[test]
fn test_empty_token_seeds_an_empty_result() {
    // "" matches nothing, and AND is driven by its left side
    let results = search(&cat_dog_index(), ["", "cat"]).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_lone_empty_token_is_a_valid_query() {
    let (result, opens) = run_counting_opens(&[""], cat_dog_index());
    assert!(result.unwrap().is_empty());
    assert_eq!(opens, 1);
}

#[test]
fn test_bare_dash_leaves_results_alone() {
    let index = cat_dog_index();
    let results = search(&index, ["cat", "-"]).unwrap();
    assert_eq!(results, search(&index, ["cat"]).unwrap());
}

#[test]
fn test_trailing_operator_is_ignored() {
    let index = cat_dog_index();
    let truncated = search(&index, ["cat", "AND"]).unwrap();
    assert_eq!(truncated, search(&index, ["cat"]).unwrap());
}

#[test]
fn test_store_opened_once_for_valid_query() {
    let (result, opens) = run_counting_opens(&["cat", "dog", "-bird"], cat_dog_index());
    assert!(result.is_ok());
    assert_eq!(opens, 1);
}

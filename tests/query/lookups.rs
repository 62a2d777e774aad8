//! Lookup ordering: one blocking lookup per term, strictly in token order,
//! exclusions last.

use super::common::{cat_dog_index, RecordingIndex};
use wikiquery::{run_query, search, Additive, QueryPlan, StoreError};

fn lookups_for(tokens: &[&str]) -> Vec<String> {
    let store = RecordingIndex::new(cat_dog_index());
    let _ = search(&store, tokens.iter().copied());
    store.lookups()
}

#[test]
fn test_single_term_single_lookup() {
    assert_eq!(lookups_for(&["cat"]), vec!["cat"]);
}

#[test]
fn test_lookups_follow_token_order() {
    assert_eq!(
        lookups_for(&["cat", "AND", "dog", "OR", "bird", "fish"]),
        vec!["cat", "dog", "bird", "fish"]
    );
}

#[test]
fn test_exclusions_are_looked_up_last_in_collection_order() {
    assert_eq!(
        lookups_for(&["-x", "cat", "-y", "dog", "-z"]),
        vec!["cat", "dog", "x", "y", "z"]
    );
}

#[test]
fn test_operator_operand_is_looked_up_verbatim() {
    assert_eq!(lookups_for(&["cat", "OR", "-dog"]), vec!["cat", "-dog"]);
    assert_eq!(lookups_for(&["cat", "AND", "OR"]), vec!["cat", "OR"]);
}

#[test]
fn test_no_lookups_without_a_term() {
    assert!(lookups_for(&[]).is_empty());
    assert!(lookups_for(&["OR", "-cat"]).is_empty());
}

#[test]
fn test_empty_token_is_looked_up_as_a_term() {
    assert_eq!(lookups_for(&["", "cat"]), vec!["", "cat"]);
    assert_eq!(lookups_for(&["cat", ""]), vec!["cat", ""]);
}

#[test]
fn test_bare_dash_looks_up_the_empty_term_last() {
    assert_eq!(lookups_for(&["-", "cat", "dog"]), vec!["cat", "dog", ""]);
}

#[test]
fn test_trailing_operator_issues_no_extra_lookup() {
    assert_eq!(lookups_for(&["cat", "OR"]), vec!["cat"]);
}

#[test]
fn test_repeated_terms_are_looked_up_each_time() {
    assert_eq!(lookups_for(&["cat", "cat"]), vec!["cat", "cat"]);
}

#[test]
fn test_plan_lookups_match_store_lookups() {
    let tokens = ["-fish", "cat", "OR", "dog", "bird", "-eel", "AND"];
    let plan = QueryPlan::parse(tokens).unwrap();
    let planned: Vec<&str> = plan.lookups().collect();

    let store = RecordingIndex::new(cat_dog_index());
    run_query(tokens, Additive, || Ok::<_, StoreError>(&store)).unwrap();

    assert_eq!(store.lookups(), planned);
}

use super::*;
use crate::test_helpers::{item, list};

fn ready(lists: Vec<GroceryList>) -> ExploreState {
    let mut state = ExploreState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket, Ok(lists));
    state
}

#[test]
fn view_is_loading_before_first_response() {
    let mut state = ExploreState::default();
    assert_eq!(state.view(), ExploreView::Loading);
    state.begin_load();
    assert_eq!(state.view(), ExploreView::Loading);
}

#[test]
fn empty_fetch_is_empty_not_error() {
    assert_eq!(ready(vec![]).view(), ExploreView::Empty);
}

#[test]
fn failed_fetch_projects_error_message() {
    let mut state = ExploreState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket, Err(ApiError::status("Failed to fetch public lists", 503)));
    assert_eq!(state.view(), ExploreView::Error("Failed to fetch public lists (HTTP 503)".to_owned()));
}

#[test]
fn lists_view_is_sorted_newest_first() {
    let state = ready(vec![list("old", "bob", "Old", true, 1, vec![]), list("new", "carol", "New", true, 5, vec![])]);
    let ExploreView::Lists(lists) = state.view() else {
        panic!("expected lists");
    };
    let ids: Vec<_> = lists.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["new", "old"]);
}

#[test]
fn stale_load_is_ignored() {
    let mut state = ExploreState::default();
    let first = state.begin_load();
    let second = state.begin_load();
    assert!(!state.finish_load(first, Ok(vec![list("a", "bob", "A", true, 1, vec![])])));
    assert!(state.finish_load(second, Ok(vec![])));
    assert_eq!(state.view(), ExploreView::Empty);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_patches_only_the_target_item() {
    let mut state = ready(vec![list(
        "l1",
        "bob",
        "Party",
        true,
        1,
        vec![item("i1", "Chips", false, 1), item("i2", "Soda", false, 2)],
    )]);
    assert!(state.begin_toggle("i1"));
    state.finish_toggle("l1", "i1", Ok(item("i1", "Chips", true, 1)));
    assert!(state.lists[0].items[0].completed);
    assert!(!state.lists[0].items[1].completed);
    assert!(!state.is_pending("i1"));
}

#[test]
fn second_toggle_on_pending_item_is_ignored() {
    let mut state = ready(vec![]);
    assert!(state.begin_toggle("i1"));
    assert!(!state.begin_toggle("i1"));
    assert!(state.begin_toggle("i2"));
    assert_eq!(state.pending.len(), 2);
}

#[test]
fn toggle_failure_keeps_lists_and_clears_pending() {
    let mut state = ready(vec![list("l1", "bob", "Party", true, 1, vec![item("i1", "Chips", false, 1)])]);
    state.begin_toggle("i1");
    state.finish_toggle("l1", "i1", Err(ApiError::status("Failed to toggle item", 500)));
    assert!(!state.is_pending("i1"));
    assert_eq!(state.toggle_error.as_deref(), Some("Failed to toggle item (HTTP 500)"));
    assert!(matches!(state.view(), ExploreView::Lists(lists) if lists.len() == 1));
}

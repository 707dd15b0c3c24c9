use super::*;
use crate::test_helpers::{item, list};

#[test]
fn items_sort_incomplete_first_then_newest() {
    let items = vec![item("a", "A", false, 2), item("b", "B", true, 3), item("c", "C", false, 1)];
    let order: Vec<_> = sorted_items(&items).into_iter().map(|i| i.id).collect();
    assert_eq!(order, ["a", "c", "b"]);
}

#[test]
fn sorting_does_not_touch_the_input() {
    let items = vec![item("old", "Old", false, 1), item("new", "New", false, 5)];
    let _ = sorted_items(&items);
    assert_eq!(items[0].id, "old");
}

#[test]
fn completed_items_also_sort_newest_first() {
    let items = vec![item("x", "X", true, 1), item("y", "Y", true, 9), item("z", "Z", false, 0)];
    let order: Vec<_> = sorted_items(&items).into_iter().map(|i| i.id).collect();
    assert_eq!(order, ["z", "y", "x"]);
}

#[test]
fn lists_sort_newest_first() {
    let lists = vec![list("l1", "alice", "Old", false, 10, vec![]), list("l2", "bob", "New", false, 20, vec![])];
    let order: Vec<_> = sorted_lists(&lists).into_iter().map(|l| l.id).collect();
    assert_eq!(order, ["l2", "l1"]);
    assert_eq!(first_list_id(&lists).as_deref(), Some("l2"));
}

#[test]
fn first_list_id_of_empty_collection_is_none() {
    assert_eq!(first_list_id(&[]), None);
}

#[test]
fn completion_summary_counts_completed_items() {
    let weekend = list("l1", "alice", "Weekend", false, 1, vec![item("i1", "Milk", true, 1)]);
    assert_eq!(completion_summary(&weekend), "1 of 1 items completed");
}

#[test]
fn row_subtitle_pluralizes() {
    let one = list("l1", "alice", "One", true, 1, vec![item("i1", "Milk", false, 1)]);
    let two = list("l2", "alice", "Two", true, 1, vec![item("i1", "Milk", true, 1), item("i2", "Eggs", false, 2)]);
    assert_eq!(list_row_subtitle(&one), "1 item • 0 completed");
    assert_eq!(list_row_subtitle(&two), "2 items • 1 completed");
    assert_eq!(item_count_label(0), "0 items");
}

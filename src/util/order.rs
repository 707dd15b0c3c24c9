//! Presentation ordering and summary text for lists and items.
//!
//! DESIGN
//! ======
//! Sorting is a render-time projection. These helpers return new vectors and
//! never reorder stored state, so server order stays the source of truth.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use std::cmp::Ordering;

use crate::net::types::{GroceryItem, GroceryList};

/// Incomplete items first, then newest first.
pub fn compare_items(a: &GroceryItem, b: &GroceryItem) -> Ordering {
    a.completed.cmp(&b.completed).then_with(|| b.created_at.cmp(&a.created_at))
}

/// Newest lists first.
pub fn compare_lists(a: &GroceryList, b: &GroceryList) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

pub fn sorted_items(items: &[GroceryItem]) -> Vec<GroceryItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(compare_items);
    sorted
}

pub fn sorted_lists(lists: &[GroceryList]) -> Vec<GroceryList> {
    let mut sorted = lists.to_vec();
    sorted.sort_by(compare_lists);
    sorted
}

/// Id of the list that sorts first, if any.
pub fn first_list_id(lists: &[GroceryList]) -> Option<String> {
    lists.iter().min_by(|a, b| compare_lists(a, b)).map(|list| list.id.clone())
}

/// `"1 of 3 items completed"`, shown under the active list.
pub fn completion_summary(list: &GroceryList) -> String {
    format!("{} of {} items completed", list.completed_count(), list.items.len())
}

/// `"3 items • 1 completed"`, shown on collection rows.
pub fn list_row_subtitle(list: &GroceryList) -> String {
    let total = list.items.len();
    let plural = if total == 1 { "" } else { "s" };
    format!("{total} item{plural} • {} completed", list.completed_count())
}

/// `"3 items"` badge.
pub fn item_count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} item{plural}")
}

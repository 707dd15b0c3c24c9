//! Busy and error state for the active list editor.
//!
//! The list contents themselves live in `ListsState`; this only tracks what
//! the editor has in flight.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    /// Number of editor requests awaiting a response.
    pub in_flight: u32,
    /// Item ids with a toggle or remove in flight.
    pub pending_items: BTreeSet<String>,
    pub error: Option<String>,
}

impl EditorState {
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_pending(&self, item_id: &str) -> bool {
        self.pending_items.contains(item_id)
    }

    /// Mark a request in flight. Returns `false` if `item_id` is already busy.
    pub fn begin(&mut self, item_id: Option<&str>) -> bool {
        if let Some(id) = item_id {
            if !self.pending_items.insert(id.to_owned()) {
                return false;
            }
        }
        self.in_flight += 1;
        self.error = None;
        true
    }

    pub fn finish(&mut self, item_id: Option<&str>, error: Option<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if let Some(id) = item_id {
            self.pending_items.remove(id);
        }
        if error.is_some() {
            self.error = error;
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

//! Browse state for the explore tab.
//!
//! DESIGN
//! ======
//! Rendering goes through [`ExploreState::view`], a projection with exactly
//! one of loading, error, empty, or lists. An empty result is a normal state.
//! Toggle failures are kept apart from load failures so a bad toggle shows a
//! banner without hiding the lists already on screen.

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;

use std::collections::BTreeSet;

use crate::net::error::ApiError;
use crate::net::types::{GroceryItem, GroceryList};
use crate::state::lists::LoadPhase;
use crate::util::order::sorted_lists;

/// What the explore tab renders.
#[derive(Clone, Debug, PartialEq)]
pub enum ExploreView {
    Loading,
    Error(String),
    Empty,
    Lists(Vec<GroceryList>),
}

#[derive(Clone, Debug, Default)]
pub struct ExploreState {
    pub lists: Vec<GroceryList>,
    pub phase: LoadPhase,
    pub load_error: Option<String>,
    pub toggle_error: Option<String>,
    /// Item ids with a toggle in flight.
    pub pending: BTreeSet<String>,
    /// Fetch only other users' public lists.
    pub hide_own: bool,
    pub load_seq: u64,
}

impl ExploreState {
    pub fn begin_load(&mut self) -> u64 {
        self.phase = LoadPhase::Loading;
        self.load_error = None;
        self.toggle_error = None;
        self.load_seq += 1;
        self.load_seq
    }

    /// Apply a load result. Returns `false` when the ticket is stale.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<GroceryList>, ApiError>) -> bool {
        if ticket != self.load_seq {
            return false;
        }
        match result {
            Ok(lists) => {
                self.lists = lists;
                self.phase = LoadPhase::Ready;
            }
            Err(e) => {
                self.phase = LoadPhase::Error;
                self.load_error = Some(e.to_string());
            }
        }
        true
    }

    pub fn view(&self) -> ExploreView {
        match self.phase {
            LoadPhase::Idle | LoadPhase::Loading => ExploreView::Loading,
            LoadPhase::Error => {
                ExploreView::Error(self.load_error.clone().unwrap_or_else(|| "Failed to load public lists".to_owned()))
            }
            LoadPhase::Ready if self.lists.is_empty() => ExploreView::Empty,
            LoadPhase::Ready => ExploreView::Lists(sorted_lists(&self.lists)),
        }
    }

    pub fn is_pending(&self, item_id: &str) -> bool {
        self.pending.contains(item_id)
    }

    /// Mark `item_id` pending. Returns `false` if a toggle is already running.
    pub fn begin_toggle(&mut self, item_id: &str) -> bool {
        if !self.pending.insert(item_id.to_owned()) {
            return false;
        }
        self.toggle_error = None;
        true
    }

    /// Clear the pending marker and patch the one toggled item.
    pub fn finish_toggle(&mut self, list_id: &str, item_id: &str, result: Result<GroceryItem, ApiError>) {
        self.pending.remove(item_id);
        match result {
            Ok(updated) => {
                let slot = self
                    .lists
                    .iter_mut()
                    .find(|l| l.id == list_id)
                    .and_then(|l| l.items.iter_mut().find(|i| i.id == item_id));
                if let Some(slot) = slot {
                    *slot = updated;
                }
            }
            Err(e) => self.toggle_error = Some(e.to_string()),
        }
    }

    pub fn reset(&mut self) {
        let load_seq = self.load_seq + 1;
        *self = Self { load_seq, ..Self::default() };
    }
}

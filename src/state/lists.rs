//! Collection state for the public/private tabs and the current selection.
//!
//! DESIGN
//! ======
//! This struct is the single owner of every loaded list, including the one
//! being edited. The editor reads the selected list by id instead of holding
//! its own copy, and item mutations patch the list here, so the collection
//! rows and the editor cannot disagree.
//!
//! Loads are numbered. A response whose ticket is not the latest
//! `load_seq` belongs to a superseded scope or refresh and is ignored.

#[cfg(test)]
#[path = "lists_test.rs"]
mod lists_test;

use std::collections::BTreeSet;

use crate::net::error::ApiError;
use crate::net::types::{GroceryItem, GroceryList};
use crate::util::order::first_list_id;

/// Fetch lifecycle shared by the collection and explore views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Which lists the collection shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListScope {
    pub username: String,
    pub is_public: bool,
}

/// Inline "+ New List" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub open: bool,
    pub name: String,
    pub pending: bool,
    /// Scope the in-flight create was submitted from.
    pub target: Option<ListScope>,
}

/// Inline rename form on one list row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameForm {
    pub list_id: String,
    pub name: String,
    pub pending: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ListsState {
    pub scope: Option<ListScope>,
    pub lists: Vec<GroceryList>,
    pub phase: LoadPhase,
    pub error: Option<String>,
    pub selected_id: Option<String>,
    pub load_seq: u64,
    /// Bumped after each successful item mutation; the collection refetches on change.
    pub refresh_seq: u64,
    pub create: CreateForm,
    /// List awaiting delete confirmation.
    pub pending_delete: Option<String>,
    /// Lists whose DELETE is in flight.
    pub deleting: BTreeSet<String>,
    pub rename: Option<RenameForm>,
}

impl ListsState {
    // =========================================================================
    // Loading
    // =========================================================================

    /// Start a load for `scope` and return its ticket.
    pub fn begin_load(&mut self, scope: ListScope) -> u64 {
        if self.scope.as_ref() != Some(&scope) {
            self.lists.clear();
            self.selected_id = None;
            self.rename = None;
            self.pending_delete = None;
        }
        self.scope = Some(scope);
        self.phase = LoadPhase::Loading;
        self.error = None;
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
                self.reconcile_selection();
            }
            Err(e) => {
                self.phase = LoadPhase::Error;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// True only while the first load runs with nothing cached.
    pub fn is_initial_loading(&self) -> bool {
        self.phase == LoadPhase::Loading && self.lists.is_empty()
    }

    fn reconcile_selection(&mut self) {
        if let Some(id) = &self.selected_id {
            if !self.contains(id) {
                self.selected_id = None;
            }
        }
        if self.selected_id.is_none() {
            self.selected_id = first_list_id(&self.lists);
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn contains(&self, list_id: &str) -> bool {
        self.lists.iter().any(|l| l.id == list_id)
    }

    pub fn select(&mut self, list_id: &str) {
        if self.contains(list_id) {
            self.selected_id = Some(list_id.to_owned());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_list(&self) -> Option<&GroceryList> {
        let id = self.selected_id.as_deref()?;
        self.lists.iter().find(|l| l.id == id)
    }

    fn list_mut(&mut self, list_id: &str) -> Option<&mut GroceryList> {
        self.lists.iter_mut().find(|l| l.id == list_id)
    }

    // =========================================================================
    // Create
    // =========================================================================

    pub fn open_create(&mut self) {
        self.create = CreateForm { open: true, ..CreateForm::default() };
    }

    pub fn cancel_create(&mut self) {
        self.create = CreateForm::default();
    }

    /// Validate the form and mark it pending; returns the scope to create
    /// in and the trimmed name.
    pub fn begin_create(&mut self) -> Option<(ListScope, String)> {
        let scope = self.scope.clone()?;
        let name = self.create.name.trim();
        if name.is_empty() || self.create.pending {
            return None;
        }
        let name = name.to_owned();
        self.create.pending = true;
        self.create.target = Some(scope.clone());
        self.error = None;
        Some((scope, name))
    }

    /// Apply a create result. Returns `false` when the collection has moved
    /// to another scope (or been reset) since the form was submitted.
    pub fn finish_create(&mut self, scope: &ListScope, result: Result<GroceryList, ApiError>) -> bool {
        let current = self.create.pending
            && self.create.target.as_ref() == Some(scope)
            && self.scope.as_ref() == Some(scope);
        if !current {
            if self.create.target.as_ref() == Some(scope) {
                self.create = CreateForm::default();
            }
            return false;
        }
        match result {
            Ok(list) => {
                self.selected_id = Some(list.id.clone());
                self.lists.push(list);
                self.create = CreateForm::default();
            }
            Err(e) => {
                self.create.pending = false;
                self.create.target = None;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Arm the confirmation dialog. Ignored while that list's delete is in flight.
    pub fn request_delete(&mut self, list_id: &str) {
        if self.deleting.contains(list_id) {
            return;
        }
        self.pending_delete = Some(list_id.to_owned());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Consume the confirmed delete target and mark it in flight.
    pub fn confirm_delete(&mut self) -> Option<String> {
        let id = self.pending_delete.take()?;
        if !self.deleting.insert(id.clone()) {
            return None;
        }
        self.error = None;
        Some(id)
    }

    /// Record a failed delete. Dropped if the collection was reset meanwhile.
    pub fn fail_delete(&mut self, list_id: &str, error: &ApiError) {
        if self.deleting.remove(list_id) {
            self.error = Some(error.to_string());
        }
    }

    /// Drop a list the server no longer has; reselect if it was selected.
    pub fn apply_deleted(&mut self, list_id: &str) {
        self.deleting.remove(list_id);
        self.lists.retain(|l| l.id != list_id);
        if self.rename.as_ref().is_some_and(|r| r.list_id == list_id) {
            self.rename = None;
        }
        if self.selected_id.as_deref() == Some(list_id) {
            self.selected_id = first_list_id(&self.lists);
        }
    }

    // =========================================================================
    // Rename
    // =========================================================================

    pub fn start_rename(&mut self, list_id: &str) {
        let Some(list) = self.lists.iter().find(|l| l.id == list_id) else {
            return;
        };
        self.rename = Some(RenameForm { list_id: list.id.clone(), name: list.name.clone(), pending: false });
    }

    pub fn cancel_rename(&mut self) {
        self.rename = None;
    }

    /// Validate the rename form; returns `(list_id, trimmed_name)`.
    pub fn begin_rename(&mut self) -> Option<(String, String)> {
        let form = self.rename.as_mut()?;
        let name = form.name.trim();
        if name.is_empty() || form.pending {
            return None;
        }
        let request = (form.list_id.clone(), name.to_owned());
        form.pending = true;
        self.error = None;
        Some(request)
    }

    /// Apply a rename result for `list_id`. The server copy's name is kept
    /// whenever the list is still cached; the form and error are touched only
    /// while that rename is still the pending one.
    pub fn finish_rename(&mut self, list_id: &str, result: Result<GroceryList, ApiError>) -> bool {
        let current = self.rename.as_ref().is_some_and(|r| r.pending && r.list_id == list_id);
        match result {
            Ok(renamed) => {
                if let Some(list) = self.list_mut(&renamed.id) {
                    list.name = renamed.name;
                }
                if current {
                    self.rename = None;
                }
            }
            Err(e) => {
                if !current {
                    return false;
                }
                if let Some(form) = self.rename.as_mut() {
                    form.pending = false;
                }
                self.error = Some(e.to_string());
            }
        }
        current
    }

    // =========================================================================
    // Item patches (after server acknowledgment)
    // =========================================================================

    pub fn push_item(&mut self, list_id: &str, item: GroceryItem) -> bool {
        let Some(list) = self.list_mut(list_id) else {
            return false;
        };
        list.items.push(item);
        true
    }

    pub fn patch_item(&mut self, list_id: &str, item: GroceryItem) -> bool {
        let Some(slot) = self.list_mut(list_id).and_then(|l| l.items.iter_mut().find(|i| i.id == item.id)) else {
            return false;
        };
        *slot = item;
        true
    }

    pub fn drop_item(&mut self, list_id: &str, item_id: &str) -> bool {
        let Some(list) = self.list_mut(list_id) else {
            return false;
        };
        list.items.retain(|i| i.id != item_id);
        true
    }

    pub fn drop_completed(&mut self, list_id: &str) -> bool {
        let Some(list) = self.list_mut(list_id) else {
            return false;
        };
        list.items.retain(|i| !i.completed);
        true
    }

    /// Replace a list with a fresh server copy.
    pub fn replace_list(&mut self, list: GroceryList) -> bool {
        let Some(slot) = self.list_mut(&list.id) else {
            return false;
        };
        *slot = list;
        true
    }

    pub fn bump_refresh(&mut self) {
        self.refresh_seq += 1;
    }

    /// Forget everything; in-flight loads become stale.
    pub fn reset(&mut self) {
        let load_seq = self.load_seq + 1;
        *self = Self { load_seq, ..Self::default() };
    }
}

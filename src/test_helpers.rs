//! Builders and in-memory fakes shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::net::api::ListApi;
use crate::net::error::ApiError;
use crate::net::types::{GroceryItem, GroceryList};
use crate::util::storage::{KeyValueStore, StoreError};

/// Timestamp `secs` seconds after a fixed epoch.
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

pub fn item(id: &str, text: &str, completed: bool, secs: i64) -> GroceryItem {
    GroceryItem { id: id.to_owned(), text: text.to_owned(), completed, created_at: at(secs) }
}

pub fn list(id: &str, username: &str, name: &str, is_public: bool, secs: i64, items: Vec<GroceryItem>) -> GroceryList {
    GroceryList {
        id: id.to_owned(),
        username: username.to_owned(),
        name: name.to_owned(),
        is_public,
        created_at: at(secs),
        items,
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// Key-value store that can be switched into a failing mode.
#[derive(Default)]
pub struct MemoryStore {
    label: &'static str,
    values: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
}

impl MemoryStore {
    pub fn named(label: &'static str) -> Self {
        Self { label, ..Self::default() }
    }

    pub fn failing(label: &'static str) -> Self {
        let store = Self::named(label);
        store.failing.set(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.get() { Err(StoreError::Unavailable(self.label)) } else { Ok(()) }
    }
}

impl KeyValueStore for MemoryStore {
    fn name(&self) -> &'static str {
        self.label
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check()?;
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check()?;
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check()?;
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// MemoryListApi
// =============================================================================

/// In-memory backend with the same semantics as the REST server.
#[derive(Default)]
pub struct MemoryListApi {
    lists: RefCell<Vec<GroceryList>>,
    clock: Cell<i64>,
    failing: Cell<bool>,
    calls: Cell<usize>,
}

impl MemoryListApi {
    pub fn with_lists(lists: Vec<GroceryList>) -> Self {
        let api = Self::default();
        api.clock.set(1_000);
        *api.lists.borrow_mut() = lists;
        api
    }

    /// Make every following call fail with HTTP 500.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn snapshot(&self, list_id: &str) -> Option<GroceryList> {
        self.lists.borrow().iter().find(|l| l.id == list_id).cloned()
    }

    fn enter(&self, action: &str) -> Result<i64, ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.failing.get() {
            return Err(ApiError::status(action, 500));
        }
        let tick = self.clock.get() + 1;
        self.clock.set(tick);
        Ok(tick)
    }

    fn filtered(&self, keep: impl Fn(&GroceryList) -> bool) -> Vec<GroceryList> {
        let mut lists: Vec<_> = self.lists.borrow().iter().filter(|l| keep(l)).cloned().collect();
        lists.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        lists
    }

    fn with_list<T>(
        &self,
        action: &str,
        list_id: &str,
        f: impl FnOnce(&mut GroceryList) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let mut lists = self.lists.borrow_mut();
        let list = lists.iter_mut().find(|l| l.id == list_id).ok_or_else(|| ApiError::status(action, 404))?;
        f(list)
    }
}

#[async_trait(?Send)]
impl ListApi for MemoryListApi {
    async fn lists_for_user(&self, username: &str, is_public: bool) -> Result<Vec<GroceryList>, ApiError> {
        self.enter("Failed to fetch lists")?;
        Ok(self.filtered(|l| l.username == username && l.is_public == is_public))
    }

    async fn create_list(&self, username: &str, name: &str, is_public: bool) -> Result<GroceryList, ApiError> {
        let tick = self.enter("Failed to create list")?;
        let created = list(&format!("list-{tick}"), username, name, is_public, tick, vec![]);
        self.lists.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn add_item(&self, list_id: &str, text: &str) -> Result<GroceryItem, ApiError> {
        let tick = self.enter("Failed to add item")?;
        self.with_list("Failed to add item", list_id, |l| {
            let added = item(&format!("item-{tick}"), text, false, tick);
            l.items.push(added.clone());
            Ok(added)
        })
    }

    async fn toggle_item(&self, list_id: &str, item_id: &str) -> Result<GroceryItem, ApiError> {
        self.enter("Failed to toggle item")?;
        self.with_list("Failed to toggle item", list_id, |l| {
            let target =
                l.items.iter_mut().find(|i| i.id == item_id).ok_or_else(|| ApiError::status("Failed to toggle item", 404))?;
            target.completed = !target.completed;
            Ok(target.clone())
        })
    }

    async fn remove_item(&self, list_id: &str, item_id: &str) -> Result<(), ApiError> {
        self.enter("Failed to remove item")?;
        self.with_list("Failed to remove item", list_id, |l| {
            l.items.retain(|i| i.id != item_id);
            Ok(())
        })
    }

    async fn clear_completed(&self, list_id: &str) -> Result<(), ApiError> {
        self.enter("Failed to clear completed items")?;
        self.with_list("Failed to clear completed items", list_id, |l| {
            l.items.retain(|i| !i.completed);
            Ok(())
        })
    }

    async fn public_lists(&self) -> Result<Vec<GroceryList>, ApiError> {
        self.enter("Failed to fetch public lists")?;
        Ok(self.filtered(|l| l.is_public))
    }

    async fn public_lists_excluding(&self, username: &str) -> Result<Vec<GroceryList>, ApiError> {
        self.enter("Failed to fetch public lists")?;
        Ok(self.filtered(|l| l.is_public && l.username != username))
    }

    async fn list_by_id(&self, list_id: &str) -> Result<Option<GroceryList>, ApiError> {
        self.enter("Failed to fetch list")?;
        Ok(self.snapshot(list_id))
    }

    async fn delete_list(&self, list_id: &str) -> Result<(), ApiError> {
        self.enter("Failed to delete list")?;
        let mut lists = self.lists.borrow_mut();
        let before = lists.len();
        lists.retain(|l| l.id != list_id);
        if lists.len() == before {
            return Err(ApiError::status("Failed to delete list", 404));
        }
        Ok(())
    }

    async fn rename_list(&self, list_id: &str, name: &str) -> Result<GroceryList, ApiError> {
        self.enter("Failed to update list name")?;
        self.with_list("Failed to update list name", list_id, |l| {
            l.name = name.to_owned();
            Ok(l.clone())
        })
    }
}

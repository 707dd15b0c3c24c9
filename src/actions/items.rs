//! Item mutations on the selected list.
//!
//! Each operation resolves the selected list id up front, runs one service
//! call tracked by [`EditorState`], and on success patches that list and
//! bumps `refresh_seq`. A failure is recorded on the editor and reported to
//! the caller as `None`/`false`.

use std::future::Future;

use crate::net::api::ListApi;
use crate::net::error::ApiError;
use crate::net::types::GroceryItem;
use crate::state::Store;
use crate::state::editor::EditorState;
use crate::state::lists::ListsState;

fn selected_id(lists: &impl Store<ListsState>) -> Option<String> {
    lists.read(|s| s.selected_id.clone()).flatten()
}

async fn tracked<T>(
    editor: &impl Store<EditorState>,
    item_id: Option<&str>,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Option<T> {
    if !editor.write(|e| e.begin(item_id)).unwrap_or(false) {
        return None;
    }
    let result = call.await;
    let error = result.as_ref().err().map(ToString::to_string);
    editor.write(|e| e.finish(item_id, error));
    result.ok()
}

pub async fn add_item<A: ListApi + ?Sized>(
    api: &A,
    lists: &impl Store<ListsState>,
    editor: &impl Store<EditorState>,
    text: &str,
) -> Option<GroceryItem> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let list_id = selected_id(lists)?;
    let item = tracked(editor, None, api.add_item(&list_id, text)).await?;
    lists.write(|s| {
        s.push_item(&list_id, item.clone());
        s.bump_refresh();
    });
    Some(item)
}

pub async fn toggle_item<A: ListApi + ?Sized>(
    api: &A,
    lists: &impl Store<ListsState>,
    editor: &impl Store<EditorState>,
    item_id: &str,
) -> Option<GroceryItem> {
    let list_id = selected_id(lists)?;
    let item = tracked(editor, Some(item_id), api.toggle_item(&list_id, item_id)).await?;
    lists.write(|s| {
        s.patch_item(&list_id, item.clone());
        s.bump_refresh();
    });
    Some(item)
}

pub async fn remove_item<A: ListApi + ?Sized>(
    api: &A,
    lists: &impl Store<ListsState>,
    editor: &impl Store<EditorState>,
    item_id: &str,
) -> bool {
    let Some(list_id) = selected_id(lists) else {
        return false;
    };
    if tracked(editor, Some(item_id), api.remove_item(&list_id, item_id)).await.is_none() {
        return false;
    }
    lists.write(|s| {
        s.drop_item(&list_id, item_id);
        s.bump_refresh();
    });
    true
}

pub async fn clear_completed<A: ListApi + ?Sized>(
    api: &A,
    lists: &impl Store<ListsState>,
    editor: &impl Store<EditorState>,
) -> bool {
    let Some(list_id) = selected_id(lists) else {
        return false;
    };
    if tracked(editor, None, api.clear_completed(&list_id)).await.is_none() {
        return false;
    }
    lists.write(|s| {
        s.drop_completed(&list_id);
        s.bump_refresh();
    });
    true
}

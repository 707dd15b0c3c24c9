//! Collection loads and list-level mutations.

use crate::net::api::ListApi;
use crate::net::error::ApiError;
use crate::net::types::GroceryList;
use crate::state::Store;
use crate::state::editor::EditorState;
use crate::state::lists::{ListScope, ListsState};

async fn fetch<A: ListApi + ?Sized>(api: &A, scope: &ListScope) -> Result<Vec<GroceryList>, ApiError> {
    if scope.is_public { api.public_lists().await } else { api.lists_for_user(&scope.username, false).await }
}

/// Load the lists for `scope`. Returns `true` if the result was applied.
pub async fn load<A: ListApi + ?Sized>(api: &A, lists: &impl Store<ListsState>, scope: ListScope) -> bool {
    let Some(ticket) = lists.write(|s| s.begin_load(scope.clone())) else {
        return false;
    };
    log::debug!("loading lists for {} (public={}, load={ticket})", scope.username, scope.is_public);
    let result = fetch(api, &scope).await;
    let applied = lists.write(|s| s.finish_load(ticket, result)).unwrap_or(false);
    if !applied {
        log::debug!("dropped stale list load {ticket}");
    }
    applied
}

/// Retry with the current scope.
pub async fn reload<A: ListApi + ?Sized>(api: &A, lists: &impl Store<ListsState>) -> bool {
    let Some(scope) = lists.read(|s| s.scope.clone()).flatten() else {
        return false;
    };
    load(api, lists, scope).await
}

/// Submit the create form in the current scope.
pub async fn create<A: ListApi + ?Sized>(api: &A, lists: &impl Store<ListsState>) -> bool {
    let Some((scope, name)) = lists.write(ListsState::begin_create).flatten() else {
        return false;
    };
    let result = api.create_list(&scope.username, &name, scope.is_public).await;
    let created = result.is_ok();
    let applied = lists.write(|s| s.finish_create(&scope, result)).unwrap_or(false);
    if !applied {
        log::debug!("dropped create result for stale scope {} (public={})", scope.username, scope.is_public);
    }
    created && applied
}

/// Delete the list awaiting confirmation.
pub async fn confirm_delete<A: ListApi + ?Sized>(api: &A, lists: &impl Store<ListsState>) -> bool {
    let Some(list_id) = lists.write(ListsState::confirm_delete).flatten() else {
        return false;
    };
    match api.delete_list(&list_id).await {
        Ok(()) => {
            lists.write(|s| s.apply_deleted(&list_id));
            true
        }
        Err(e) => {
            lists.write(|s| s.fail_delete(&list_id, &e));
            false
        }
    }
}

/// Submit the rename form.
pub async fn rename<A: ListApi + ?Sized>(api: &A, lists: &impl Store<ListsState>) -> bool {
    let Some((list_id, name)) = lists.write(ListsState::begin_rename).flatten() else {
        return false;
    };
    let result = api.rename_list(&list_id, &name).await;
    let renamed = result.is_ok();
    let applied = lists.write(|s| s.finish_rename(&list_id, result)).unwrap_or(false);
    renamed && applied
}

/// Refetch the selected list. A list the server no longer has is dropped
/// and the selection cleared.
pub async fn reload_selected<A: ListApi + ?Sized>(
    api: &A,
    lists: &impl Store<ListsState>,
    editor: &impl Store<EditorState>,
) -> bool {
    let Some(list_id) = lists.read(|s| s.selected_id.clone()).flatten() else {
        return false;
    };
    if !editor.write(|e| e.begin(None)).unwrap_or(false) {
        return false;
    }
    match api.list_by_id(&list_id).await {
        Ok(Some(fresh)) => {
            editor.write(|e| e.finish(None, None));
            lists.write(|s| s.replace_list(fresh));
            true
        }
        Ok(None) => {
            log::warn!("list {list_id} no longer exists");
            editor.write(|e| e.finish(None, None));
            lists.write(|s| {
                s.apply_deleted(&list_id);
                s.clear_selection();
            });
            false
        }
        Err(e) => {
            editor.write(|ed| ed.finish(None, Some(e.to_string())));
            false
        }
    }
}

//! Login, logout and tab switching.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::USERNAME_STORAGE_KEY;
use crate::state::Store;
use crate::state::editor::EditorState;
use crate::state::explore::ExploreState;
use crate::state::lists::ListsState;
use crate::state::session::{ListTab, SessionState};
use crate::util::storage::{KeyValueStore, UserStorage};

/// Log in with a remembered username, if one is stored.
pub fn restore<P: KeyValueStore, S: KeyValueStore>(
    storage: &UserStorage<P, S>,
    session: &impl Store<SessionState>,
) -> bool {
    let Some(saved) = storage.get(USERNAME_STORAGE_KEY) else {
        return false;
    };
    let restored = session.write(|s| s.log_in(&saved)).flatten();
    if let Some(name) = &restored {
        log::info!("restored session for {name}");
    }
    restored.is_some()
}

/// Log in with the login form's draft and remember the trimmed name.
pub fn log_in<P: KeyValueStore, S: KeyValueStore>(
    storage: &UserStorage<P, S>,
    session: &impl Store<SessionState>,
) -> bool {
    let draft = session.read(|s| s.draft.clone()).unwrap_or_default();
    let Some(name) = session.write(|s| s.log_in(&draft)).flatten() else {
        return false;
    };
    storage.set(USERNAME_STORAGE_KEY, &name);
    log::info!("logged in as {name}");
    true
}

/// Forget the user and every view's cached state.
pub fn switch_user<P: KeyValueStore, S: KeyValueStore>(
    storage: &UserStorage<P, S>,
    session: &impl Store<SessionState>,
    lists: &impl Store<ListsState>,
    editor: &impl Store<EditorState>,
    explore: &impl Store<ExploreState>,
) {
    session.write(SessionState::log_out);
    lists.write(ListsState::reset);
    editor.write(|e| *e = EditorState::default());
    explore.write(ExploreState::reset);
    storage.remove(USERNAME_STORAGE_KEY);
    log::info!("switched user");
}

/// Change tab; the selection never carries across tabs.
pub fn switch_tab(session: &impl Store<SessionState>, lists: &impl Store<ListsState>, tab: ListTab) {
    session.write(|s| s.switch_tab(tab));
    lists.write(ListsState::clear_selection);
}

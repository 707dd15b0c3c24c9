//! Editor for the selected list: add, toggle, remove and clear completed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selected list is read from `ListsState` by id; this component holds
//! no copy of it. Mutations go through `actions::items`, which patch the
//! shared collection and bump `refresh_seq` so list rows stay in step.
//! The refresh button refetches just this list; if the server no longer
//! has it, it drops out of the collection.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::add_item_form::AddItemForm;
use crate::components::grocery_item_row::GroceryItemRow;
use crate::net::api::HttpListApi;
use crate::net::types::GroceryList;
use crate::state::editor::EditorState;
use crate::state::lists::ListsState;
use crate::util::order::{completion_summary, sorted_items};

#[component]
pub fn ListEditor() -> impl IntoView {
    let api = expect_context::<HttpListApi>();
    let lists = expect_context::<RwSignal<ListsState>>();
    let editor = expect_context::<RwSignal<EditorState>>();

    let selected = Memo::new(move |_| lists.with(|s| s.selected_list().cloned()));
    let pending = Memo::new(move |_| editor.with(|e| e.pending_items.clone()));
    let busy = Signal::derive(move || editor.with(EditorState::is_busy));

    let on_add = Callback::new({
        let api = api.clone();
        move |text: String| {
            let api = api.clone();
            spawn_local(async move {
                actions::items::add_item(&api, &lists, &editor, &text).await;
            });
        }
    });

    let on_toggle = Callback::new({
        let api = api.clone();
        move |item_id: String| {
            let api = api.clone();
            spawn_local(async move {
                actions::items::toggle_item(&api, &lists, &editor, &item_id).await;
            });
        }
    });

    let on_remove = Callback::new({
        let api = api.clone();
        move |item_id: String| {
            let api = api.clone();
            spawn_local(async move {
                actions::items::remove_item(&api, &lists, &editor, &item_id).await;
            });
        }
    });

    let on_clear = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            spawn_local(async move {
                actions::items::clear_completed(&api, &lists, &editor).await;
            });
        }
    });

    let on_refresh = Callback::new(move |()| {
        let api = api.clone();
        spawn_local(async move {
            actions::lists::reload_selected(&api, &lists, &editor).await;
        });
    });

    let items_view = move || {
        let Some(list) = selected.get() else {
            return ().into_any();
        };
        let pending = pending.get();
        let rows = sorted_items(&list.items)
            .into_iter()
            .map(|item| {
                let item_pending = pending.contains(&item.id);
                view! { <GroceryItemRow item=item pending=item_pending on_toggle=on_toggle on_remove=on_remove/> }
            })
            .collect::<Vec<_>>();
        if rows.is_empty() {
            view! {
                <div class="list-editor__empty">
                    <p>"No items in this grocery list yet."</p>
                    <p>"Add some items above to get started!"</p>
                </div>
            }
                .into_any()
        } else {
            rows.into_any()
        }
    };

    let summary = move || {
        selected
            .get()
            .filter(|list| !list.items.is_empty())
            .map(|list| view! { <div class="list-editor__summary"><p>{completion_summary(&list)}</p></div> })
    };

    let clear_button = move || {
        selected.with(|l| l.as_ref().is_some_and(GroceryList::has_completed)).then(|| {
            view! {
                <button class="btn btn--danger list-editor__clear" on:click=move |_| on_clear.run(())>
                    "Clear Completed"
                </button>
            }
        })
    };

    view! {
        <Show
            when=move || selected.with(Option::is_some)
            fallback=|| {
                view! {
                    <div class="list-editor list-editor--empty">
                        <p>"Select a list from above to start managing your grocery items."</p>
                    </div>
                }
            }
        >
            <div class="list-editor">
                <div class="list-editor__header">
                    <h2 class="list-editor__name">{move || selected.with(|l| l.as_ref().map(|l| l.name.clone()))}</h2>
                    <div class="list-editor__actions">
                        <button
                            class="btn list-editor__refresh"
                            on:click=move |_| on_refresh.run(())
                            disabled=move || busy.get()
                            title="Refresh list"
                            aria-label="Refresh list"
                        >
                            "↻"
                        </button>
                        {clear_button}
                    </div>
                </div>
                <AddItemForm on_add=on_add disabled=busy/>
                <div class="list-editor__items">{items_view}</div>
                {summary}
            </div>
        </Show>
    }
}

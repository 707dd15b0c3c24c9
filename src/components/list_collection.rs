//! Public/private list collection with create, rename, delete and selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted for the public and private tabs. The scope comes from the session
//! (username + tab visibility); the collection reloads whenever the scope or
//! `refresh_seq` changes. Both are read through memos so writes to
//! `ListsState` made by the load itself do not retrigger it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::api::HttpListApi;
use crate::net::types::GroceryList;
use crate::state::lists::{ListScope, ListsState};
use crate::state::session::SessionState;
use crate::util::order::{list_row_subtitle, sorted_lists};

#[component]
pub fn ListCollection() -> impl IntoView {
    let api = expect_context::<HttpListApi>();
    let session = expect_context::<RwSignal<SessionState>>();
    let lists = expect_context::<RwSignal<ListsState>>();

    let scope = Memo::new(move |_| {
        session.with(|s| {
            let is_public = s.tab.visibility()?;
            let username = s.username.clone()?;
            Some(ListScope { username, is_public })
        })
    });
    let refresh_seq = Memo::new(move |_| lists.with(|s| s.refresh_seq));
    let is_public = move || scope.with(|s| s.as_ref().is_some_and(|s| s.is_public));

    Effect::new({
        let api = api.clone();
        move || {
            let _ = refresh_seq.get();
            let Some(scope) = scope.get() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                actions::lists::load(&api, &lists, scope).await;
            });
        }
    });

    let on_retry = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            spawn_local(async move {
                actions::lists::reload(&api, &lists).await;
            });
        }
    });

    let on_create = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            spawn_local(async move {
                actions::lists::create(&api, &lists).await;
            });
        }
    });

    let on_rename = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            spawn_local(async move {
                actions::lists::rename(&api, &lists).await;
            });
        }
    });

    let on_delete_confirm = Callback::new(move |()| {
        let api = api.clone();
        spawn_local(async move {
            actions::lists::confirm_delete(&api, &lists).await;
        });
    });
    let on_delete_cancel = Callback::new(move |()| lists.update(ListsState::cancel_delete));

    let heading = move || if is_public() { "All Public Lists" } else { "My Private Lists" };
    let empty_message =
        move || if is_public() { "There are no public lists yet." } else { "You have no private lists yet." };

    // Rows depend on the rename target but not its draft text, so typing in
    // the rename input does not rebuild the row under the cursor.
    let row_model = Memo::new(move |_| {
        lists.with(|s| {
            let rename = s.rename.as_ref().map(|r| (r.list_id.clone(), r.pending));
            (sorted_lists(&s.lists), s.selected_id.clone(), rename)
        })
    });

    let rows = move || {
        let (all, selected_id, rename) = row_model.get();
        all.into_iter()
            .map(|list| {
                let selected = selected_id.as_deref() == Some(list.id.as_str());
                let renaming = rename.as_ref().filter(|(id, _)| *id == list.id).map(|(_, pending)| *pending);
                view! { <ListRow list=list selected=selected renaming=renaming on_rename=on_rename/> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !lists.with(ListsState::is_initial_loading)
            fallback=|| view! { <div class="list-collection__loading">"Loading your lists..."</div> }
        >
            <section class="list-collection">
                <header class="list-collection__header">
                    <h3 class="list-collection__title">{heading}</h3>
                    <button class="btn btn--primary" on:click=move |_| lists.update(ListsState::open_create)>
                        "+ New List"
                    </button>
                </header>
                <Show when=move || lists.with(|s| s.error.is_some())>
                    <div class="list-collection__error" role="alert">
                        <p>{move || lists.with(|s| s.error.clone().unwrap_or_default())}</p>
                        <button class="btn" on:click=move |_| on_retry.run(())>
                            "Retry"
                        </button>
                    </div>
                </Show>
                <Show when=move || lists.with(|s| s.create.open)>
                    <CreateListForm on_submit=on_create/>
                </Show>
                <div class="list-collection__rows">
                    <Show
                        when=move || lists.with(|s| !s.lists.is_empty())
                        fallback=move || {
                            view! {
                                <div class="list-collection__empty">
                                    <p>{empty_message}</p>
                                    <p>"Create a list to get started!"</p>
                                </div>
                            }
                        }
                    >
                        {rows}
                    </Show>
                </div>
            </section>
        </Show>
        <Show when=move || lists.with(|s| s.pending_delete.is_some())>
            <ConfirmDialog
                title="Delete List"
                message="Are you sure you want to delete this list? This action cannot be undone."
                confirm_label="Delete"
                on_confirm=on_delete_confirm
                on_cancel=on_delete_cancel
            />
        </Show>
    }
}

/// Inline "+ New List" form bound to `ListsState::create`.
#[component]
fn CreateListForm(on_submit: Callback<()>) -> impl IntoView {
    let lists = expect_context::<RwSignal<ListsState>>();
    let name = move || lists.with(|s| s.create.name.clone());
    let can_submit = move || lists.with(|s| !s.create.pending && !s.create.name.trim().is_empty());

    view! {
        <form
            class="list-collection__create"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <input
                class="list-collection__input"
                type="text"
                placeholder="Enter list name..."
                autofocus=true
                prop:value=name
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    lists.update(|s| s.create.name = value);
                }
            />
            <div class="list-collection__create-actions">
                <button class="btn btn--success" type="submit" disabled=move || !can_submit()>
                    "Create"
                </button>
                <button class="btn" type="button" on:click=move |_| lists.update(ListsState::cancel_create)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

#[component]
fn ListRow(
    list: GroceryList,
    selected: bool,
    /// `Some(pending)` while this row shows the rename form.
    renaming: Option<bool>,
    on_rename: Callback<()>,
) -> impl IntoView {
    let lists = expect_context::<RwSignal<ListsState>>();
    let subtitle = list_row_subtitle(&list);
    let select_id = list.id.clone();
    let rename_id = list.id.clone();
    let delete_id = list.id.clone();

    let title = match renaming {
        Some(pending) => view! {
            <form
                class="list-row__rename"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_rename.run(());
                }
                on:click=move |ev| ev.stop_propagation()
            >
                <input
                    class="list-row__rename-input"
                    type="text"
                    prop:value=lists.with_untracked(|s| s.rename.as_ref().map(|r| r.name.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        lists.update(|s| {
                            if let Some(form) = s.rename.as_mut() {
                                form.name = value;
                            }
                        });
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            lists.update(ListsState::cancel_rename);
                        }
                    }
                />
                <button class="btn btn--primary" type="submit" disabled=pending>
                    "Save"
                </button>
                <button class="btn" type="button" on:click=move |_| lists.update(ListsState::cancel_rename)>
                    "Cancel"
                </button>
            </form>
        }
            .into_any(),
        None => view! {
            <h4 class="list-row__name">
                {list.name}
                <span class="list-row__owner">{format!(" (created by {})", list.username)}</span>
            </h4>
        }
            .into_any(),
    };

    view! {
        <div class="list-row" class:list-row--selected=selected on:click=move |_| lists.update(|s| s.select(&select_id))>
            <div class="list-row__body">
                {title}
                <p class="list-row__subtitle">{subtitle}</p>
            </div>
            <button
                class="list-row__action"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    lists.update(|s| s.start_rename(&rename_id));
                }
                title="Rename list"
                aria-label="Rename list"
            >
                "✎"
            </button>
            <button
                class="list-row__action list-row__action--danger"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    lists.update(|s| s.request_delete(&delete_id));
                }
                title="Delete list"
                aria-label="Delete list"
            >
                "✕"
            </button>
        </div>
    }
}

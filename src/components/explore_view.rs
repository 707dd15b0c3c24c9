//! Explore tab: every public list, with per-item toggles.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::net::api::HttpListApi;
use crate::net::types::GroceryList;
use crate::state::explore::{ExploreState, ExploreView as Projection};
use crate::state::session::SessionState;
use crate::util::order::{item_count_label, sorted_items};

#[component]
pub fn ExploreView() -> impl IntoView {
    let api = expect_context::<HttpListApi>();
    let session = expect_context::<RwSignal<SessionState>>();
    let explore = expect_context::<RwSignal<ExploreState>>();

    let username = Memo::new(move |_| session.with(|s| s.username.clone()));
    let hide_own = Memo::new(move |_| explore.with(|s| s.hide_own));

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            let name = username.get_untracked().unwrap_or_default();
            spawn_local(async move {
                actions::explore::load(&api, &explore, &name).await;
            });
        }
    });

    Effect::new(move || {
        let _ = (username.get(), hide_own.get());
        load.run(());
    });

    let on_toggle = Callback::new(move |(list_id, item_id): (String, String)| {
        let api = api.clone();
        spawn_local(async move {
            actions::explore::toggle(&api, &explore, &list_id, &item_id).await;
        });
    });

    let projection = Memo::new(move |_| explore.with(ExploreState::view));

    view! {
        <section class="explore">
            {move || match projection.get() {
                Projection::Loading => view! { <div class="explore__loading">"Loading public lists..."</div> }.into_any(),
                Projection::Error(message) => {
                    view! {
                        <div class="explore__error" role="alert">
                            <p>{message}</p>
                            <button class="btn btn--primary" on:click=move |_| load.run(())>
                                "Retry"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                Projection::Empty => {
                    view! {
                        <div class="explore__empty">
                            <h3>"No Public Lists"</h3>
                            <p>"No other users have created public grocery lists yet."</p>
                            <p>"Share your own public list to see it here!"</p>
                        </div>
                    }
                        .into_any()
                }
                Projection::Lists(lists) => {
                    let cards = lists
                        .into_iter()
                        .map(|list| view! { <PublicListCard list=list on_toggle=on_toggle/> })
                        .collect::<Vec<_>>();
                    view! {
                        <h2 class="explore__title">"Public Lists"</h2>
                        <p class="explore__intro">
                            "Here are all the public grocery lists on the platform. Here you can view and check off items from any public list. If you want to create a new list or edit an existing one, please use the \"Public Lists\" tab instead."
                        </p>
                        <Show when=move || explore.with(|s| s.toggle_error.is_some())>
                            <div class="explore__error" role="alert">
                                <p>{move || explore.with(|s| s.toggle_error.clone().unwrap_or_default())}</p>
                            </div>
                        </Show>
                        {cards}
                    }
                        .into_any()
                }
            }}
            <label class="explore__filter">
                <input
                    type="checkbox"
                    prop:checked=move || hide_own.get()
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        explore.update(|s| s.hide_own = checked);
                    }
                />
                " Hide my lists"
            </label>
        </section>
    }
}

#[component]
fn PublicListCard(list: GroceryList, on_toggle: Callback<(String, String)>) -> impl IntoView {
    let explore = expect_context::<RwSignal<ExploreState>>();
    let total = list.items.len();
    let completed = list.completed_count();

    let items = sorted_items(&list.items)
        .into_iter()
        .map(|item| {
            let pending_id = item.id.clone();
            let pending = move || explore.with(|s| s.is_pending(&pending_id));
            let ids = (list.id.clone(), item.id.clone());
            let click_ids = ids.clone();
            view! {
                <div class="explore-item" class:explore-item--completed=item.completed>
                    <input
                        type="checkbox"
                        prop:checked=item.completed
                        disabled=pending.clone()
                        on:change=move |_| on_toggle.run(ids.clone())
                    />
                    <span class="explore-item__text" on:click=move |_| on_toggle.run(click_ids.clone())>
                        {item.text}
                    </span>
                    <Show when=pending>
                        <span class="explore-item__spinner" aria-label="Updating">"⟳"</span>
                    </Show>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="explore-card">
            <header class="explore-card__header">
                <div>
                    <h3 class="explore-card__name">{list.name.clone()}</h3>
                    <p class="explore-card__owner">{format!("by {}", list.username)}</p>
                </div>
                <span class="explore-card__count">{item_count_label(total)}</span>
            </header>
            {if items.is_empty() {
                view! { <p class="explore-card__empty">"This list is empty."</p> }.into_any()
            } else {
                view! { <div class="explore-card__items">{items}</div> }.into_any()
            }}
            {(total > 0).then(|| view! { <div class="explore-card__summary">{format!("{completed} of {total} completed")}</div> })}
        </article>
    }
}

//! Logged-in shell: header, tabs and the active view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The public and private tabs share one `ListCollection` + `ListEditor`
//! pair scoped by tab visibility; the explore tab swaps both out for
//! `ExploreView`. Switching tab always drops the selection.

use leptos::prelude::*;

use crate::actions;
use crate::components::explore_view::ExploreView;
use crate::components::list_collection::ListCollection;
use crate::components::list_editor::ListEditor;
use crate::components::theme_switch::ThemeSwitch;
use crate::state::editor::EditorState;
use crate::state::explore::ExploreState;
use crate::state::lists::ListsState;
use crate::state::session::{ListTab, SessionState};
use crate::util::storage::browser_user_storage;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let lists = expect_context::<RwSignal<ListsState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let explore = expect_context::<RwSignal<ExploreState>>();

    let username = move || session.with(|s| s.username.clone().unwrap_or_default());
    let is_explore = Memo::new(move |_| session.with(|s| s.tab == ListTab::Explore));

    let on_switch_user = move |_| {
        actions::session::switch_user(&browser_user_storage(), &session, &lists, &editor, &explore);
    };

    let tabs = ListTab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="tab"
                    class:tab--active=move || session.with(|s| s.tab == tab)
                    on:click=move |_| actions::session::switch_tab(&session, &lists, tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <div class="home-page__bar">
                    <h1>"Grocery Lists"</h1>
                    <h2 class="home-page__welcome">{move || format!("Welcome, {}!", username())}</h2>
                    <div class="home-page__actions">
                        <ThemeSwitch/>
                        <button class="btn btn--secondary" on:click=on_switch_user>
                            "Switch User"
                        </button>
                    </div>
                </div>
                <nav class="home-page__tabs">{tabs}</nav>
            </header>
            <main class="home-page__main">
                <Show when=move || editor.with(|e| e.error.is_some())>
                    <div class="home-page__error" role="alert">
                        <p>{move || editor.with(|e| e.error.clone().unwrap_or_default())}</p>
                        <button class="btn" on:click=move |_| editor.update(EditorState::dismiss_error) aria-label="Dismiss">
                            "✕"
                        </button>
                    </div>
                </Show>
                <Show
                    when=move || is_explore.get()
                    fallback=|| {
                        view! {
                            <ListCollection/>
                            <ListEditor/>
                        }
                    }
                >
                    <ExploreView/>
                </Show>
            </main>
        </div>
    }
}

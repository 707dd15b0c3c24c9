//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::actions;
use crate::config::ClientConfig;
use crate::net::api::HttpListApi;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::{
    editor::EditorState, explore::ExploreState, lists::ListsState, session::SessionState, ui::UiState,
};
use crate::util::storage::browser_user_storage;
use crate::util::theme;

/// Root application component.
///
/// Provides the service client and every view-model as context, restores a
/// remembered session and applies the stored theme before first render.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = HttpListApi::from_config(&config);
    log::debug!("using API at {}", api.base_url());

    let session = RwSignal::new(SessionState::default());
    let lists = RwSignal::new(ListsState::default());
    let editor = RwSignal::new(EditorState::default());
    let explore = RwSignal::new(ExploreState::default());
    let ui = RwSignal::new(UiState { theme: theme::read_preference(), system_dark: theme::system_prefers_dark() });

    theme::apply(ui.get_untracked().theme);
    actions::session::restore(&browser_user_storage(), &session);

    provide_context(api);
    provide_context(session);
    provide_context(lists);
    provide_context(editor);
    provide_context(explore);
    provide_context(ui);

    view! {
        <Title text="Grocery Lists"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootPage/>
            </Routes>
        </Router>
    }
}

/// Login gate.
#[component]
fn RootPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let logged_in = Memo::new(move |_| session.with(SessionState::is_logged_in));

    view! {
        <Show when=move || logged_in.get() fallback=LoginPage>
            <HomePage/>
        </Show>
    }
}

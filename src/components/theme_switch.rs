//! Header light/dark switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Sets dark unless the stored theme is already dark, then light.
#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let next = ui.get_untracked().theme.switched();
        theme::persist(next);
        theme::apply(next);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button class="btn theme-switch" on:click=on_click aria-label="Light/Dark Mode Toggle" title="Toggle theme">
            {move || if ui.get().is_dark() { "☀" } else { "☾" }}
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}

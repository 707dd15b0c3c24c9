//! Login-card dark mode toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Flips whatever is currently on screen, resolving `System` first.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let system_dark = theme::system_prefers_dark();
        let next = ui.get_untracked().theme.flipped(system_dark);
        theme::persist(next);
        theme::apply(next);
        ui.update(|u| {
            u.theme = next;
            u.system_dark = system_dark;
        });
    };

    let label = move || if ui.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" };

    view! {
        <button class="dark-mode-toggle" on:click=on_click aria-label=label>
            <span class="dark-mode-toggle__icon">{move || if ui.get().is_dark() { "☀️" } else { "🌙" }}</span>
        </button>
    }
}

//! Username-only login card.

use leptos::prelude::*;

use crate::actions;
use crate::components::dark_mode_toggle::DarkModeToggle;
use crate::state::session::SessionState;
use crate::util::storage::browser_user_storage;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions::session::log_in(&browser_user_storage(), &session);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <h1>"Grocery List App"</h1>
                    <DarkModeToggle/>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label" for="username">
                        "Enter your username:"
                    </label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        required=true
                        prop:value=move || session.with(|s| s.draft.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            session.update(|s| s.draft = value);
                        }
                    />
                    <button class="login-button" type="submit">
                        "Continue"
                    </button>
                </form>
                <p class="login-card__hint">
                    "No password required - just enter any username to get started!"
                    <Show when=move || session.with(SessionState::has_draft)>
                        <br/>
                        <span>"Welcome back! Your username was remembered."</span>
                    </Show>
                </p>
            </div>
        </div>
    }
}

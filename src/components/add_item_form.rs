//! Text input for adding an item to the active list.

use leptos::prelude::*;

/// Emits trimmed, non-empty text and clears itself.
#[component]
pub fn AddItemForm(on_add: Callback<String>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let text = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = text.get_untracked().trim().to_owned();
        if value.is_empty() || disabled.get_untracked() {
            return;
        }
        on_add.run(value);
        text.set(String::new());
    };

    view! {
        <form class="add-item-form" on:submit=on_submit>
            <input
                class="add-item-form__input"
                type="text"
                placeholder="Add a grocery item..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <button
                class="btn btn--primary add-item-form__submit"
                type="submit"
                disabled=move || disabled.get() || text.get().trim().is_empty()
            >
                "Add"
            </button>
        </form>
    }
}

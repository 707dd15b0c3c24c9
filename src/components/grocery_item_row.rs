//! One item row in the active list editor.

use leptos::prelude::*;

use crate::net::types::GroceryItem;

#[component]
pub fn GroceryItemRow(
    item: GroceryItem,
    #[prop(optional)] pending: bool,
    on_toggle: Callback<String>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let toggle_id = item.id.clone();
    let remove_id = item.id.clone();

    view! {
        <div class="grocery-item" class:grocery-item--completed=item.completed>
            <label class="grocery-item__main">
                <input
                    class="grocery-item__checkbox"
                    type="checkbox"
                    prop:checked=item.completed
                    disabled=pending
                    on:change=move |_| on_toggle.run(toggle_id.clone())
                />
                <span class="grocery-item__text">{item.text}</span>
            </label>
            <button
                class="grocery-item__remove"
                disabled=pending
                on:click=move |_| on_remove.run(remove_id.clone())
                aria-label="Remove item"
                title="Remove item"
            >
                "✕"
            </button>
        </div>
    }
}

//! Explore tab loads and per-item toggles.

use crate::net::api::ListApi;
use crate::state::Store;
use crate::state::explore::ExploreState;

/// Load public lists, leaving out `username`'s own when `hide_own` is set.
pub async fn load<A: ListApi + ?Sized>(api: &A, explore: &impl Store<ExploreState>, username: &str) -> bool {
    let Some((ticket, hide_own)) = explore.write(|s| (s.begin_load(), s.hide_own)) else {
        return false;
    };
    log::debug!("loading public lists (hide_own={hide_own}, load={ticket})");
    let result = if hide_own { api.public_lists_excluding(username).await } else { api.public_lists().await };
    explore.write(|s| s.finish_load(ticket, result)).unwrap_or(false)
}

/// Toggle one item. Ignored while the same item already has a toggle in flight.
pub async fn toggle<A: ListApi + ?Sized>(
    api: &A,
    explore: &impl Store<ExploreState>,
    list_id: &str,
    item_id: &str,
) -> bool {
    if !explore.write(|s| s.begin_toggle(item_id)).unwrap_or(false) {
        return false;
    }
    let result = api.toggle_item(list_id, item_id).await;
    let toggled = result.is_ok();
    explore.write(|s| s.finish_toggle(list_id, item_id, result));
    toggled
}

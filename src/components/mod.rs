//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render view-model projections and spawn `actions` flows on
//! user input. Shared state comes from the context providers in `app`.

pub mod add_item_form;
pub mod confirm_dialog;
pub mod dark_mode_toggle;
pub mod explore_view;
pub mod grocery_item_row;
pub mod list_collection;
pub mod list_editor;
pub mod theme_switch;

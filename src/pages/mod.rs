//! Page modules for the two top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The root route renders `LoginPage` or `HomePage` depending on whether the
//! session has a username. Pages compose `components` and own no state.

pub mod home;
pub mod login;

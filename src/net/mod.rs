//! Networking modules for the grocery-list REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs requests, `types` defines the wire schema and the domain
//! model it maps into, and `error` is the single failure type views display.

pub mod api;
pub mod error;
pub mod types;

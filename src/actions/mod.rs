//! Async flows that connect view-model state to the list service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components spawn these on the browser event loop. Each flow reads what it
//! needs from a [`Store`](crate::state::Store), awaits one service call, and
//! applies the result through the view-model's transition methods. Flows are
//! generic over [`ListApi`](crate::net::api::ListApi) and `Store`, so tests
//! drive them with in-memory fakes and `RefCell` state.
//!
//! TRADE-OFFS
//! ==========
//! Requests are never cancelled. A result that arrives after its view was
//! torn down is dropped by the store; a superseded load is dropped by its
//! ticket.

pub mod explore;
pub mod items;
pub mod lists;
pub mod session;

//! Browser-facing helpers shared across views.

pub mod encode;
pub mod order;
pub mod storage;
pub mod theme;

//! View-model state for each screen region.
//!
//! DESIGN
//! ======
//! Every view keeps its state in a plain struct with pure transition methods.
//! The application root wraps each struct in an `RwSignal` and provides it as
//! context; components render projections of it and async actions mutate it
//! through [`Store`], so the same flows run against a `RefCell` in tests.

pub mod editor;
pub mod explore;
pub mod lists;
pub mod session;
pub mod ui;

use std::cell::RefCell;

use leptos::prelude::*;

/// Shared mutable access to one view-model.
///
/// Both methods return `None` once the backing signal has been disposed, so
/// a response arriving after its view unmounted is dropped.
pub trait Store<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> Store<T> for RwSignal<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> Store<T> for RefCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

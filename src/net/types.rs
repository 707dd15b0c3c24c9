//! Wire DTOs and the domain model they are transformed into.
//!
//! DESIGN
//! ======
//! The REST backend speaks snake_case with ISO-8601 strings. Wire structs
//! mirror that payload exactly; `TryFrom` conversions rename fields and parse
//! timestamps so the rest of the client only ever sees the domain shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// A single entry in a grocery list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroceryItem {
    /// Server-assigned identifier (UUID string).
    pub id: String,
    pub text: String,
    /// Flipped only by a server toggle round trip.
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// A named, owned collection of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroceryList {
    /// Server-assigned identifier (UUID string).
    pub id: String,
    /// Owner chosen at creation; never changes.
    pub username: String,
    pub name: String,
    /// Fixed at creation. Decides which tab can discover the list.
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    /// Server order. Views always re-sort before rendering.
    pub items: Vec<GroceryItem>,
}

impl GroceryList {
    /// Number of items currently marked completed.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn has_completed(&self) -> bool {
        self.items.iter().any(|item| item.completed)
    }
}

/// Item object as returned by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct WireItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

/// List object as returned by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct WireList {
    pub id: String,
    pub username: String,
    pub name: String,
    pub is_public: bool,
    pub created_at: String,
    #[serde(default)]
    pub items: Vec<WireItem>,
}

/// `POST /lists/` body.
#[derive(Debug, Serialize)]
pub struct CreateListBody<'a> {
    pub username: &'a str,
    pub name: &'a str,
    pub is_public: bool,
}

/// `POST /lists/{id}/items/` body.
#[derive(Debug, Serialize)]
pub struct AddItemBody<'a> {
    pub text: &'a str,
}

/// `PUT /lists/{id}/` body.
#[derive(Debug, Serialize)]
pub struct RenameListBody<'a> {
    pub name: &'a str,
}

/// Parse a backend timestamp (`2024-05-01T12:30:00.123456Z` or with a numeric offset).
///
/// # Errors
///
/// Returns [`ApiError`] when the string is not RFC 3339.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| ApiError::decode(format!("invalid timestamp {raw:?}: {e}")))
}

impl TryFrom<WireItem> for GroceryItem {
    type Error = ApiError;

    fn try_from(wire: WireItem) -> Result<Self, Self::Error> {
        Ok(Self {
            created_at: parse_timestamp(&wire.created_at)?,
            id: wire.id,
            text: wire.text,
            completed: wire.completed,
        })
    }
}

impl TryFrom<WireList> for GroceryList {
    type Error = ApiError;

    fn try_from(wire: WireList) -> Result<Self, Self::Error> {
        let items = wire
            .items
            .into_iter()
            .map(GroceryItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            created_at: parse_timestamp(&wire.created_at)?,
            id: wire.id,
            username: wire.username,
            name: wire.name,
            is_public: wire.is_public,
            items,
        })
    }
}

/// Transform a wire list array into domain lists.
///
/// # Errors
///
/// Fails on the first list carrying an unparseable timestamp.
pub fn transform_lists(wire: Vec<WireList>) -> Result<Vec<GroceryList>, ApiError> {
    wire.into_iter().map(GroceryList::try_from).collect()
}

//! Session identity and the active tab.
//!
//! DESIGN
//! ======
//! The username is the only identity. It is kept apart from list data so
//! logging out can reset every other view-model without touching this one's
//! invariants: logged in means `username` is a non-empty trimmed string.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Which collection the main area shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListTab {
    /// Public lists from every user.
    #[default]
    Public,
    /// The current user's private lists.
    Private,
    /// Read-mostly browse view across all public lists.
    Explore,
}

impl ListTab {
    pub const ALL: [Self; 3] = [Self::Public, Self::Private, Self::Explore];

    pub fn label(self) -> &'static str {
        match self {
            Self::Public => "Public Lists",
            Self::Private => "Private Lists",
            Self::Explore => "Explore Lists",
        }
    }

    /// Visibility filter for the collection view; `None` for explore.
    pub fn visibility(self) -> Option<bool> {
        match self {
            Self::Public => Some(true),
            Self::Private => Some(false),
            Self::Explore => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub username: Option<String>,
    /// Login form input.
    pub draft: String,
    pub tab: ListTab,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// Drives the "username was remembered" hint on the login card.
    pub fn has_draft(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Log in as the trimmed `raw`; returns the stored name, or `None` when blank.
    pub fn log_in(&mut self, raw: &str) -> Option<String> {
        let name = raw.trim();
        if name.is_empty() {
            return None;
        }
        self.username = Some(name.to_owned());
        self.draft = name.to_owned();
        Some(name.to_owned())
    }

    pub fn log_out(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` when the tab actually changed.
    pub fn switch_tab(&mut self, tab: ListTab) -> bool {
        let changed = self.tab != tab;
        self.tab = tab;
        changed
    }
}

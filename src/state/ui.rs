//! Local UI chrome state.

use crate::util::theme::Theme;

/// Shared by the header switch and the login-card toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Snapshot of `prefers-color-scheme: dark` taken when the theme was applied.
    pub system_dark: bool,
}

impl UiState {
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark(self.system_dark)
    }
}

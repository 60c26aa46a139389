//! Local UI chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use roster::Theme;

/// Presentation state shared across pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Theme reflected on `<body>`; `None` until a preference is restored or toggled.
    pub theme: Option<Theme>,
}

impl UiState {
    /// Icon for the theme toggle button.
    pub fn toggle_icon(&self) -> &'static str {
        if self.theme == Some(Theme::Dark) { "☀" } else { "☾" }
    }
}

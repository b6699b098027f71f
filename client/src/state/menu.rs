//! Open/closed state of the narrow-viewport overlay menu and the signed-in
//! avatar menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Popup menu visibility. Each instance is owned by a single component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Ways the overlay can be dismissed. All of them close the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    CloseButton,
    Backdrop,
    EscapeKey,
    Navigation,
    OutsideClick,
}

impl MenuState {
    /// State after the hamburger control is pressed.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// State after any dismissal path fires.
    #[must_use]
    pub fn dismissed(self, _by: Dismissal) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Dismissal triggered by a window-level `keydown`, if any.
    ///
    /// Listens regardless of where focus is; a closed menu ignores keys.
    pub fn key_dismissal(self, key: &str) -> Option<Dismissal> {
        (self.is_open() && is_dismiss_key(key)).then_some(Dismissal::EscapeKey)
    }
}

/// Whether a `keydown` key name dismisses an open overlay.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

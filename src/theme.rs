//! Dark/light theme selection and persistence.
//!
//! The active theme is expressed as one of two mutually exclusive classes on
//! the theme root (`<body>` by default) and mirrored to the preference store so
//! it survives reloads. At startup the stored value wins, then the OS-level
//! `prefers-color-scheme`, then light.

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;
use crate::consts::{STORED_DARK, STORED_LIGHT};
use crate::dom::{ColorScheme, PageElement, PreferenceStore};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Value written to the preference store.
    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Dark => STORED_DARK,
            Self::Light => STORED_LIGHT,
        }
    }

    /// Interpret a stored value. Only `"dark"` means dark.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == STORED_DARK { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Decide the startup theme from the stored value and the OS signal.
///
/// An empty stored string counts as no preference.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, os_prefers_dark: bool) -> Theme {
    match stored {
        Some(value) if !value.is_empty() => Theme::from_stored(value),
        _ if os_prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Applies themes to the page and persists them.
///
/// The status element is optional: without it only the status text update is
/// skipped.
pub struct ThemeController<E, S> {
    root: E,
    status: Option<E>,
    store: S,
    config: ThemeConfig,
}

impl<E: PageElement, S: PreferenceStore> ThemeController<E, S> {
    #[must_use]
    pub fn new(root: E, status: Option<E>, store: S, config: ThemeConfig) -> Self {
        Self { root, status, store, config }
    }

    pub fn apply_dark(&self) {
        self.apply(Theme::Dark);
    }

    pub fn apply_light(&self) {
        self.apply(Theme::Light);
    }

    /// Swap the root classes, update the status text, persist the choice.
    ///
    /// Every step runs even if an earlier one was rejected by the host.
    pub fn apply(&self, theme: Theme) {
        let (add, remove) = match theme {
            Theme::Dark => (&self.config.dark_class, &self.config.light_class),
            Theme::Light => (&self.config.light_class, &self.config.dark_class),
        };
        if let Err(e) = self.root.remove_class(remove) {
            log::warn!("theme: {e}");
        }
        if let Err(e) = self.root.add_class(add) {
            log::warn!("theme: {e}");
        }

        match &self.status {
            Some(status) => status.set_text(self.status_text(theme)),
            None => log::debug!("theme: no status element"),
        }

        if let Err(e) = self.store.save(&self.config.storage_key, theme.stored_value()) {
            log::warn!("theme: preference not saved: {e}");
        }
        log::debug!("theme: applied {theme:?}");
    }

    /// Apply the opposite of the current theme and return it.
    ///
    /// A root with no theme class is treated as light.
    pub fn toggle(&self) -> Theme {
        let next = self.current().unwrap_or(Theme::Light).opposite();
        self.apply(next);
        next
    }

    /// The theme indicated by the root's classes.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        if self.root.has_class(&self.config.dark_class) {
            Some(Theme::Dark)
        } else if self.root.has_class(&self.config.light_class) {
            Some(Theme::Light)
        } else {
            None
        }
    }

    /// The persisted preference, if readable and set.
    #[must_use]
    pub fn stored(&self) -> Option<String> {
        match self.store.load(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("theme: preference unreadable: {e}");
                None
            }
        }
    }

    /// Resolve and apply the startup theme.
    ///
    /// The OS signal is only consulted when nothing is stored.
    pub fn initialize(&self, scheme: &impl ColorScheme) -> Theme {
        let stored = self.stored();
        let os_dark = match stored.as_deref() {
            Some(value) if !value.is_empty() => false,
            _ => scheme.prefers_dark(),
        };
        let theme = resolve_initial(stored.as_deref(), os_dark);
        self.apply(theme);
        theme
    }

    fn status_text(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.config.dark_status,
            Theme::Light => &self.config.light_status,
        }
    }
}

//! Session context and startup sequence.

use std::cell::RefCell;

use crate::dom::{ColorScheme, PageElement, PreferenceStore};
use crate::error::PageError;
use crate::nav::{Navigator, Reveal};
use crate::theme::{Theme, ThemeController};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Outcome of [`Page::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Startup {
    pub theme: Theme,
    /// Pending reveal for the default section, if it exists.
    pub reveal: Option<Reveal>,
}

/// Everything the page behaviors need for one session, built once at
/// page-ready and held until unload.
pub struct Page<E, S, C> {
    pub theme: ThemeController<E, S>,
    pub nav: Navigator<E>,
    scheme: C,
}

impl<E: PageElement, S: PreferenceStore, C: ColorScheme> Page<E, S, C> {
    #[must_use]
    pub fn new(theme: ThemeController<E, S>, nav: Navigator<E>, scheme: C) -> Self {
        Self { theme, nav, scheme }
    }

    /// Apply the initial theme, then show the default section.
    pub fn start(&mut self) -> Startup {
        let theme = self.theme.initialize(&self.scheme);
        let reveal = self.nav.show_default();
        log::info!(
            "page: started with {theme:?} theme, section {}",
            self.nav.current_section().as_deref().unwrap_or("<none>")
        );
        Startup { theme, reveal }
    }

    pub fn show_section(&mut self, section_id: &str) -> Option<Reveal> {
        self.nav.show_section(section_id)
    }

    pub fn reveal(&self, token: Reveal) -> bool {
        self.nav.reveal(token)
    }
}

/// Holds the one page mounted in a document.
///
/// Free-standing entry points look the mounted page up here so they act with
/// the configuration it was mounted with.
pub struct MountSlot<T>(RefCell<Option<T>>);

impl<T: Clone> MountSlot<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(RefCell::new(None))
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Store the mounted page.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::AlreadyMounted`] if a page is already held; the
    /// existing page is kept.
    pub fn occupy(&self, mounted: T) -> Result<(), PageError> {
        let mut slot = self.0.borrow_mut();
        if slot.is_some() {
            return Err(PageError::AlreadyMounted);
        }
        *slot = Some(mounted);
        Ok(())
    }

    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.0.borrow().clone()
    }
}

impl<T: Clone> Default for MountSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Host traits between the page logic and the browser.
//!
//! Implementations are expected to behave like DOM handles: cheap to clone,
//! and mutated through a shared reference. The `web` module implements them
//! for `web-sys` types; tests use in-memory doubles.

use crate::error::DomError;

pub type DomResult<T = ()> = Result<T, DomError>;

/// Layout state forced on a content section through its inline `display`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Hidden,
    Block,
}

impl Display {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Block => "block",
        }
    }
}

/// An element the page logic reads or mutates.
pub trait PageElement {
    fn add_class(&self, class: &str) -> DomResult;
    fn remove_class(&self, class: &str) -> DomResult;
    fn has_class(&self, class: &str) -> bool;
    fn set_display(&self, display: Display) -> DomResult;
    fn set_text(&self, text: &str);
    /// The element's `id` attribute, empty when unset.
    fn dom_id(&self) -> String;
    /// A `data-*` attribute value by its dataset key.
    fn data(&self, key: &str) -> Option<String>;
}

/// Durable string key-value storage (`localStorage`).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> DomResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> DomResult;
}

/// The OS-level appearance signal.
pub trait ColorScheme {
    fn prefers_dark(&self) -> bool;
}

impl ColorScheme for bool {
    fn prefers_dark(&self) -> bool {
        *self
    }
}

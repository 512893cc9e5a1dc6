//! Error types.
//!
//! Core operations never fail outright: host failures surface as [`DomError`]
//! values that callers log and step past. [`PageError`] is reserved for the
//! browser entry points, where a missing window or document means there is
//! nothing to mount on.

/// A host mutation or read that the browser rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("class list update failed: {0}")]
    ClassList(String),
    #[error("style update failed: {0}")]
    Style(String),
    #[error("storage access failed: {0}")]
    Storage(String),
}

/// Invalid page configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{0}` must not be empty")]
    Empty(&'static str),
    #[error("dark and light classes must differ (both `{0}`)")]
    SameThemeClass(String),
}

/// Failure to mount the page behaviors.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("theme root element not found")]
    NoThemeRoot,
    #[error("localStorage unavailable")]
    NoStorage,
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
    #[error("event listener registration failed: {0}")]
    Listener(String),
    #[error("page is already mounted")]
    AlreadyMounted,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

//! Default markup contract values.

// ── Theme ───────────────────────────────────────────────────────

/// Class applied to the theme root while dark mode is on.
pub const DARK_CLASS: &str = "dark-mode";

/// Class applied to the theme root while light mode is on.
pub const LIGHT_CLASS: &str = "light-mode";

pub const DARK_STATUS: &str = "Dark Mode is ON";
pub const LIGHT_STATUS: &str = "Dark Mode is OFF";

/// Id of the element showing the current theme status text.
pub const STATUS_ELEMENT_ID: &str = "DarkModetext";

/// `localStorage` key for the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Stored values for each theme.
pub const STORED_DARK: &str = "dark";
pub const STORED_LIGHT: &str = "light";

/// Media query reporting an OS-level dark appearance.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Navigation ──────────────────────────────────────────────────

pub const LINK_SELECTOR: &str = ".navbar a";
pub const SECTION_SELECTOR: &str = ".content-section";

/// `data-*` key on links naming their section (without suffix).
pub const LINK_DATA_KEY: &str = "section";

/// Appended to a link's section name to form the section's DOM id.
pub const SECTION_SUFFIX: &str = "Section";

pub const DEFAULT_SECTION: &str = "homeSection";

/// Class that triggers the fade-in transition on a displayed section.
pub const VISIBLE_CLASS: &str = "show";

/// Class marking the navigation link of the current section.
pub const ACTIVE_CLASS: &str = "active";

/// Fallback reveal delay when configured to use a timer.
pub const REVEAL_DELAY_MS: u32 = 10;

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "sitenav-config";

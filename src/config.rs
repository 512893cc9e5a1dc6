//! Page configuration.
//!
//! DESIGN
//! ======
//! The markup contract (class names, ids, selectors, storage key) is data, not
//! code, so the same build can drive pages with different markup. Every field
//! has a default matching the stock page, and a host only needs to supply the
//! fields it overrides:
//!
//! ```json
//! { "nav": { "default_section": "aboutSection" }, "reveal": { "kind": "delay", "ms": 10 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Full configuration for one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub reveal: RevealTiming,
    /// Mount automatically on page-ready when the module starts.
    pub auto_mount: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            nav: NavConfig::default(),
            reveal: RevealTiming::default(),
            auto_mount: true,
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON or an invalid field.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name the page logic relies on is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("theme.dark_class", &self.theme.dark_class),
            ("theme.light_class", &self.theme.light_class),
            ("theme.storage_key", &self.theme.storage_key),
            ("nav.link_selector", &self.nav.link_selector),
            ("nav.section_selector", &self.nav.section_selector),
            ("nav.link_data_key", &self.nav.link_data_key),
            ("nav.section_suffix", &self.nav.section_suffix),
            ("nav.default_section", &self.nav.default_section),
            ("nav.visible_class", &self.nav.visible_class),
            ("nav.active_class", &self.nav.active_class),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Empty(*field));
        }
        if self.theme.dark_class == self.theme.light_class {
            return Err(ConfigError::SameThemeClass(self.theme.dark_class.clone()));
        }
        Ok(())
    }
}

/// Which element receives the theme classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeTarget {
    /// `<body>`.
    #[default]
    Body,
    /// `<html>`.
    DocumentElement,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub target: ThemeTarget,
    pub dark_class: String,
    pub light_class: String,
    pub dark_status: String,
    pub light_status: String,
    pub status_element_id: String,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            target: ThemeTarget::Body,
            dark_class: consts::DARK_CLASS.to_owned(),
            light_class: consts::LIGHT_CLASS.to_owned(),
            dark_status: consts::DARK_STATUS.to_owned(),
            light_status: consts::LIGHT_STATUS.to_owned(),
            status_element_id: consts::STATUS_ELEMENT_ID.to_owned(),
            storage_key: consts::STORAGE_KEY.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub link_selector: String,
    pub section_selector: String,
    pub link_data_key: String,
    pub section_suffix: String,
    pub default_section: String,
    pub visible_class: String,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            link_selector: consts::LINK_SELECTOR.to_owned(),
            section_selector: consts::SECTION_SELECTOR.to_owned(),
            link_data_key: consts::LINK_DATA_KEY.to_owned(),
            section_suffix: consts::SECTION_SUFFIX.to_owned(),
            default_section: consts::DEFAULT_SECTION.to_owned(),
            visible_class: consts::VISIBLE_CLASS.to_owned(),
            active_class: consts::ACTIVE_CLASS.to_owned(),
        }
    }
}

/// How the visible class is deferred after a section is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealTiming {
    /// Wait two animation frames so the `display` change is painted first.
    #[default]
    AnimationFrame,
    /// Wait a fixed number of milliseconds.
    Delay {
        #[serde(default = "default_delay_ms")]
        ms: u32,
    },
}

fn default_delay_ms() -> u32 {
    consts::REVEAL_DELAY_MS
}

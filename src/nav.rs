//! Single-page section navigation.
//!
//! DESIGN
//! ======
//! Sections are shown in two phases. [`Navigator::show_section`] hides every
//! section, sets the target to `display: block` and returns a [`Reveal`]
//! token; the host runs [`Navigator::reveal`] once the new layout has been
//! committed, which adds the class that starts the fade-in. Without the gap
//! the browser would coalesce both changes and skip the transition.
//!
//! Each navigation bumps a generation counter. A token from an earlier
//! navigation is stale and revealing it is a no-op, so rapid clicks can never
//! leave a hidden section marked visible.

use crate::config::NavConfig;
use crate::dom::{Display, PageElement};

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Deferred instruction to mark a displayed section visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    section: usize,
    generation: u64,
}

/// Section id for a link's section name: `"about"` becomes `"aboutSection"`.
#[must_use]
pub fn section_id_for(name: &str, suffix: &str) -> String {
    format!("{name}{suffix}")
}

/// Section name for a section id, with the suffix removed when present.
#[must_use]
pub fn section_name_of<'a>(section_id: &'a str, suffix: &str) -> &'a str {
    section_id.strip_suffix(suffix).unwrap_or(section_id)
}

/// Keeps one content section on screen and the menu in sync with it.
pub struct Navigator<E> {
    sections: Vec<E>,
    links: Vec<E>,
    config: NavConfig,
    current: Option<usize>,
    generation: u64,
}

impl<E: PageElement> Navigator<E> {
    /// Build a navigator over the sections and links captured at page-ready.
    #[must_use]
    pub fn new(sections: Vec<E>, links: Vec<E>, config: NavConfig) -> Self {
        Self { sections, links, config, current: None, generation: 0 }
    }

    /// Hide every section, display `section_id`, and mark its link active.
    ///
    /// Returns the token for the deferred reveal step, or `None` when no
    /// section has that id. An unknown id leaves every section hidden and
    /// no link active.
    pub fn show_section(&mut self, section_id: &str) -> Option<Reveal> {
        self.generation = self.generation.wrapping_add(1);
        let visible = &self.config.visible_class;

        for section in &self.sections {
            if let Err(e) = section.remove_class(visible) {
                log::warn!("nav: {e}");
            }
            if let Err(e) = section.set_display(Display::Hidden) {
                log::warn!("nav: {e}");
            }
        }

        self.current = self.sections.iter().position(|s| s.dom_id() == section_id);
        let reveal = match self.current {
            Some(index) => {
                if let Err(e) = self.sections[index].set_display(Display::Block) {
                    log::warn!("nav: {e}");
                }
                Some(Reveal { section: index, generation: self.generation })
            }
            None => {
                log::debug!("nav: no section `{section_id}`");
                None
            }
        };

        let name = section_name_of(section_id, &self.config.section_suffix);
        self.sync_links(name);
        reveal
    }

    /// Add the visible class for a token still belonging to the latest
    /// navigation. Returns whether anything was applied.
    pub fn reveal(&self, token: Reveal) -> bool {
        if self.is_stale(token) {
            log::debug!("nav: dropped stale reveal (generation {})", token.generation);
            return false;
        }
        let Some(section) = self.sections.get(token.section) else {
            return false;
        };
        match section.add_class(&self.config.visible_class) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("nav: {e}");
                false
            }
        }
    }

    #[must_use]
    pub fn is_stale(&self, token: Reveal) -> bool {
        token.generation != self.generation
    }

    /// Navigate to the section named by the link at `index`.
    ///
    /// A link without a section name is ignored.
    pub fn activate_link(&mut self, index: usize) -> Option<Reveal> {
        let Some(name) = self.link_target(index) else {
            log::warn!("nav: link {index} has no `{}` data", self.config.link_data_key);
            return None;
        };
        let section_id = section_id_for(&name, &self.config.section_suffix);
        self.show_section(&section_id)
    }

    /// The section name a link points at.
    #[must_use]
    pub fn link_target(&self, index: usize) -> Option<String> {
        self.links.get(index)?.data(&self.config.link_data_key)
    }

    /// DOM id of the section currently displayed.
    #[must_use]
    pub fn current_section(&self) -> Option<String> {
        self.current.and_then(|i| self.sections.get(i)).map(PageElement::dom_id)
    }

    /// Navigate to the configured default section.
    pub fn show_default(&mut self) -> Option<Reveal> {
        let section_id = self.config.default_section.clone();
        self.show_section(&section_id)
    }

    #[must_use]
    pub fn links(&self) -> &[E] {
        &self.links
    }

    fn sync_links(&self, name: &str) {
        let active = &self.config.active_class;
        for link in &self.links {
            let result = if link.data(&self.config.link_data_key).as_deref() == Some(name) {
                link.add_class(active)
            } else {
                link.remove_class(active)
            };
            if let Err(e) = result {
                log::warn!("nav: {e}");
            }
        }
    }
}

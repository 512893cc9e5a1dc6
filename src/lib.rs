//! Theme switching and single-page section navigation for a static site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns two
//! small behaviors of the page: the dark/light theme (applied as a class on the
//! page root and remembered in `localStorage`) and the section navigator that
//! keeps exactly one content block on screen and highlights the matching menu
//! link. The markup itself is provided by the host page.
//!
//! All decision logic lives in browser-independent modules that talk to the
//! page through the traits in [`dom`], so it can be tested natively. The
//! [`web`] module (feature `web`) binds those traits to `web-sys` and exports
//! the JavaScript API.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme type, initial-theme resolution, [`theme::ThemeController`] |
//! | [`nav`] | [`nav::Navigator`] and deferred reveal tokens |
//! | [`page`] | Session context combining both, startup sequence |
//! | [`config`] | Serde-backed description of the markup contract |
//! | [`dom`] | Host traits for elements, storage and the OS color scheme |
//! | [`error`] | Error types |
//! | [`consts`] | Default class names, ids and strings |
//! | [`web`] | `web-sys` bindings and `wasm-bindgen` exports |

pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod nav;
pub mod page;
pub mod theme;
#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
mod testing;

pub use config::PageConfig;
pub use error::{ConfigError, DomError, PageError};
pub use nav::{Navigator, Reveal};
pub use page::{MountSlot, Page, Startup};
pub use theme::{Theme, ThemeController};

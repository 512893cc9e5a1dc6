//! Browser bindings and the JavaScript API.
//!
//! Implements the [`crate::dom`] traits for `web-sys` handles, captures the
//! page's sections and links once, and wires click listeners to the
//! navigator. The mounted [`Page`] is shared between listeners through an
//! `Rc`; listeners are leaked for the page lifetime. At most one page is
//! mounted per document.
//!
//! `darkMode`, `lightMode` and `toggleTheme` are also installed on `window`
//! at startup, so stock markup such as `<button onclick="darkMode()">` works
//! without an import.
//!
//! ```javascript
//! import init, { mount, darkMode } from './pkg/sitenav.js';
//! await init();                 // auto-mounts unless `auto_mount` is false
//! const nav = mount();          // manual mount when `auto_mount` is false
//! nav.showSection('aboutSection');
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Storage, Window};

use crate::config::{PageConfig, RevealTiming, ThemeConfig, ThemeTarget};
use crate::consts::{CONFIG_ELEMENT_ID, PREFERS_DARK_QUERY};
use crate::dom::{ColorScheme, Display, DomResult, PageElement, PreferenceStore};
use crate::error::{DomError, PageError};
use crate::nav::{Navigator, Reveal};
use crate::page::{MountSlot, Page};
use crate::theme::ThemeController;

type WebPage = Page<HtmlElement, Storage, MediaScheme>;

thread_local! {
    static MOUNTED: MountSlot<Rc<Mounted>> = const { MountSlot::new() };
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<PageError> for JsValue {
    fn from(e: PageError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

// ── Host trait implementations ──────────────────────────────────

impl PageElement for HtmlElement {
    fn add_class(&self, class: &str) -> DomResult {
        self.class_list().add_1(class).map_err(|e| DomError::ClassList(js_error(&e)))
    }

    fn remove_class(&self, class: &str) -> DomResult {
        self.class_list().remove_1(class).map_err(|e| DomError::ClassList(js_error(&e)))
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_display(&self, display: Display) -> DomResult {
        self.style()
            .set_property("display", display.as_css())
            .map_err(|e| DomError::Style(js_error(&e)))
    }

    fn set_text(&self, text: &str) {
        self.set_inner_text(text);
    }

    fn dom_id(&self) -> String {
        self.id()
    }

    fn data(&self, key: &str) -> Option<String> {
        self.dataset().get(key)
    }
}

impl PreferenceStore for Storage {
    fn load(&self, key: &str) -> DomResult<Option<String>> {
        self.get_item(key).map_err(|e| DomError::Storage(js_error(&e)))
    }

    fn save(&self, key: &str, value: &str) -> DomResult {
        self.set_item(key, value).map_err(|e| DomError::Storage(js_error(&e)))
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
pub struct MediaScheme(Window);

impl ColorScheme for MediaScheme {
    fn prefers_dark(&self) -> bool {
        matches!(self.0.match_media(PREFERS_DARK_QUERY), Ok(Some(mq)) if mq.matches())
    }
}

// ── DOM lookup ──────────────────────────────────────────────────

fn browser() -> Result<(Window, Document), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    Ok((window, document))
}

fn as_html(element: Element) -> Option<HtmlElement> {
    match element.dyn_into::<HtmlElement>() {
        Ok(html) => Some(html),
        Err(_) => None,
    }
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, PageError> {
    let list = document.query_selector_all(selector).map_err(|e| PageError::Selector {
        selector: selector.to_owned(),
        reason: js_error(&e),
    })?;
    let elements = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| match node.dyn_into::<HtmlElement>() {
            Ok(html) => Some(html),
            Err(_) => None,
        })
        .collect::<Vec<_>>();
    log::debug!("web: `{selector}` matched {} elements", elements.len());
    Ok(elements)
}

/// Config from the inline `<script type="application/json" id="sitenav-config">`,
/// or the defaults when absent.
fn inline_config(document: &Document) -> Result<PageConfig, PageError> {
    let Some(json) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content())
    else {
        return Ok(PageConfig::default());
    };
    Ok(PageConfig::from_json(&json)?)
}

fn theme_controller(
    window: &Window,
    document: &Document,
    config: ThemeConfig,
) -> Result<ThemeController<HtmlElement, Storage>, PageError> {
    let root = match config.target {
        ThemeTarget::Body => document.body(),
        ThemeTarget::DocumentElement => document.document_element().and_then(as_html),
    }
    .ok_or(PageError::NoThemeRoot)?;
    let status = document.get_element_by_id(&config.status_element_id).and_then(as_html);
    let store = match window.local_storage() {
        Ok(Some(storage)) => storage,
        _ => return Err(PageError::NoStorage),
    };
    Ok(ThemeController::new(root, status, store, config))
}

// ── Mounting ────────────────────────────────────────────────────

struct Mounted {
    page: RefCell<WebPage>,
    timing: RevealTiming,
    /// Replacing the timer cancels a reveal still waiting on it.
    pending_timer: RefCell<Option<Timeout>>,
}

fn request_frame(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(callback);
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        log::warn!("web: requestAnimationFrame failed: {}", js_error(&e));
    }
}

fn schedule_reveal(mounted: &Rc<Mounted>, token: Reveal) {
    let target = Rc::clone(mounted);
    match mounted.timing {
        // The first frame commits `display: block`; the class goes on in the next.
        RevealTiming::AnimationFrame => request_frame(move || {
            request_frame(move || {
                target.page.borrow().reveal(token);
            });
        }),
        RevealTiming::Delay { ms } => {
            let timer = Timeout::new(ms, move || {
                target.page.borrow().reveal(token);
            });
            *mounted.pending_timer.borrow_mut() = Some(timer);
        }
    }
}

fn navigate(mounted: &Rc<Mounted>, section_id: &str) {
    let reveal = mounted.page.borrow_mut().show_section(section_id);
    if let Some(token) = reveal {
        schedule_reveal(mounted, token);
    }
}

fn wire_links(mounted: &Rc<Mounted>) -> Result<(), PageError> {
    let links = mounted.page.borrow().nav.links().to_vec();
    for (index, link) in links.iter().enumerate() {
        let target = Rc::clone(mounted);
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();
            let reveal = target.page.borrow_mut().nav.activate_link(index);
            if let Some(token) = reveal {
                schedule_reveal(&target, token);
            }
        });
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| PageError::Listener(js_error(&e)))?;
        // Listeners live as long as the page.
        on_click.forget();
    }
    Ok(())
}

fn mount_with(config: PageConfig) -> Result<SiteNav, PageError> {
    if MOUNTED.with(MountSlot::is_occupied) {
        return Err(PageError::AlreadyMounted);
    }
    let (window, document) = browser()?;
    let theme = theme_controller(&window, &document, config.theme.clone())?;
    let sections = query_all(&document, &config.nav.section_selector)?;
    let links = query_all(&document, &config.nav.link_selector)?;
    let nav = Navigator::new(sections, links, config.nav.clone());
    let page = Page::new(theme, nav, MediaScheme(window));

    let mounted = Rc::new(Mounted {
        page: RefCell::new(page),
        timing: config.reveal,
        pending_timer: RefCell::new(None),
    });
    MOUNTED.with(|slot| slot.occupy(Rc::clone(&mounted)))?;
    wire_links(&mounted)?;

    let startup = mounted.page.borrow_mut().start();
    if let Some(token) = startup.reveal {
        schedule_reveal(&mounted, token);
    }
    Ok(SiteNav { mounted })
}

// ── JavaScript API ──────────────────────────────────────────────

/// Module entry point: logging, panic hook, and auto-mount on page-ready.
///
/// # Errors
///
/// Fails when there is no document or the inline config is invalid.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("web: logger already installed");
    }

    let (window, document) = browser()?;
    install_global(&window, "darkMode", || dark_mode().map(|()| JsValue::UNDEFINED));
    install_global(&window, "lightMode", || light_mode().map(|()| JsValue::UNDEFINED));
    install_global(&window, "toggleTheme", || toggle_theme().map(JsValue::from));

    let config = inline_config(&document)?;
    if !config.auto_mount {
        return Ok(());
    }

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = mount_with(config) {
                log::error!("web: mount failed: {e}");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .map_err(|e| PageError::Listener(js_error(&e)))?;
    } else {
        mount_with(config)?;
    }
    Ok(())
}

/// Expose `action` as `window[name]` for the page lifetime.
fn install_global(window: &Window, name: &'static str, action: fn() -> Result<JsValue, JsValue>) {
    let global = Closure::<dyn Fn() -> JsValue>::new(move || match action() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("web: {name}() failed: {}", js_error(&e));
            JsValue::UNDEFINED
        }
    });
    match js_sys::Reflect::set(window.as_ref(), &JsValue::from_str(name), global.as_ref()) {
        Ok(true) => log::debug!("web: installed window.{name}"),
        Ok(false) => log::warn!("web: window.{name} is read-only"),
        Err(e) => log::warn!("web: window.{name} not installed: {}", js_error(&e)),
    }
    global.forget();
}

/// Mount manually. Without an argument the inline config (or the defaults)
/// is used.
///
/// # Errors
///
/// Fails on invalid config, missing theme root / storage, or when a page is
/// already mounted (including by auto-mount).
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<SiteNav, JsValue> {
    let config = match config_json {
        Some(json) => PageConfig::from_json(&json).map_err(PageError::from)?,
        None => inline_config(&browser()?.1)?,
    };
    Ok(mount_with(config)?)
}

/// Run `action` against the mounted page's theme controller, or against one
/// built from the inline config when nothing is mounted yet.
fn with_theme<R>(action: impl FnOnce(&ThemeController<HtmlElement, Storage>) -> R) -> Result<R, PageError> {
    if let Some(mounted) = MOUNTED.with(MountSlot::get) {
        return Ok(action(&mounted.page.borrow().theme));
    }
    let (window, document) = browser()?;
    let config = inline_config(&document)?;
    Ok(action(&theme_controller(&window, &document, config.theme)?))
}

/// Switch to dark mode. Also installed as `window.darkMode`.
///
/// # Errors
///
/// Fails when the theme root or storage is unavailable.
#[wasm_bindgen(js_name = darkMode)]
pub fn dark_mode() -> Result<(), JsValue> {
    with_theme(ThemeController::apply_dark)?;
    Ok(())
}

/// Switch to light mode. Also installed as `window.lightMode`.
///
/// # Errors
///
/// Fails when the theme root or storage is unavailable.
#[wasm_bindgen(js_name = lightMode)]
pub fn light_mode() -> Result<(), JsValue> {
    with_theme(ThemeController::apply_light)?;
    Ok(())
}

/// Flip the theme and return the new stored value. Also installed as
/// `window.toggleTheme`.
///
/// # Errors
///
/// Fails when the theme root or storage is unavailable.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsValue> {
    Ok(with_theme(ThemeController::toggle)?.stored_value().to_owned())
}

/// Handle to a mounted page.
#[wasm_bindgen]
pub struct SiteNav {
    mounted: Rc<Mounted>,
}

#[wasm_bindgen]
impl SiteNav {
    #[wasm_bindgen(js_name = showSection)]
    pub fn show_section(&self, section_id: &str) {
        navigate(&self.mounted, section_id);
    }

    #[wasm_bindgen(js_name = darkMode)]
    pub fn dark_mode(&self) {
        self.mounted.page.borrow().theme.apply_dark();
    }

    #[wasm_bindgen(js_name = lightMode)]
    pub fn light_mode(&self) {
        self.mounted.page.borrow().theme.apply_light();
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> String {
        self.mounted.page.borrow().theme.toggle().stored_value().to_owned()
    }

    /// `"dark"`, `"light"`, or `undefined` before any theme was applied.
    pub fn theme(&self) -> Option<String> {
        self.mounted.page.borrow().theme.current().map(|t| t.stored_value().to_owned())
    }

    #[wasm_bindgen(js_name = currentSection)]
    pub fn current_section(&self) -> Option<String> {
        self.mounted.page.borrow().nav.current_section()
    }
}

//! In-memory doubles for the host traits.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::dom::{Display, DomResult, PageElement, PreferenceStore};
use crate::error::DomError;

#[derive(Debug, Default)]
struct ElementState {
    id: String,
    classes: BTreeSet<String>,
    display: Option<Display>,
    text: Option<String>,
    data: HashMap<String, String>,
    class_ops: Vec<String>,
    reject_classes: bool,
}

/// Element double. Clones share state, like DOM handles.
#[derive(Clone, Debug, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn new(id: &str) -> Self {
        let el = Self::default();
        el.0.borrow_mut().id = id.to_owned();
        el
    }

    /// A section container with the given DOM id.
    pub fn section(id: &str) -> Self {
        Self::new(id)
    }

    /// A navigation link carrying `data-section="<name>"`.
    pub fn link(name: &str) -> Self {
        let el = Self::default();
        el.0.borrow_mut().data.insert("section".to_owned(), name.to_owned());
        el
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.iter().cloned().collect()
    }

    pub fn display(&self) -> Option<Display> {
        self.0.borrow().display
    }

    pub fn text(&self) -> Option<String> {
        self.0.borrow().text.clone()
    }

    /// Accepted class list mutations in order, as `"add x"` / `"remove x"`.
    pub fn class_ops(&self) -> Vec<String> {
        self.0.borrow().class_ops.clone()
    }

    pub fn clear_class_ops(&self) {
        self.0.borrow_mut().class_ops.clear();
    }

    /// Make every class list mutation fail.
    pub fn reject_class_updates(&self) {
        self.0.borrow_mut().reject_classes = true;
    }
}

impl PageElement for FakeElement {
    fn add_class(&self, class: &str) -> DomResult {
        let mut state = self.0.borrow_mut();
        if state.reject_classes {
            return Err(DomError::ClassList(format!("rejected add {class}")));
        }
        state.classes.insert(class.to_owned());
        state.class_ops.push(format!("add {class}"));
        Ok(())
    }

    fn remove_class(&self, class: &str) -> DomResult {
        let mut state = self.0.borrow_mut();
        if state.reject_classes {
            return Err(DomError::ClassList(format!("rejected remove {class}")));
        }
        state.classes.remove(class);
        state.class_ops.push(format!("remove {class}"));
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn set_display(&self, display: Display) -> DomResult {
        self.0.borrow_mut().display = Some(display);
        Ok(())
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = Some(text.to_owned());
    }

    fn dom_id(&self) -> String {
        self.0.borrow().id.clone()
    }

    fn data(&self, key: &str) -> Option<String> {
        self.0.borrow().data.get(key).cloned()
    }
}

#[derive(Debug, Default)]
struct StoreState {
    values: HashMap<String, String>,
    failing: bool,
    writes: usize,
}

/// `localStorage` double. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Rc<RefCell<StoreState>>);

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.0.borrow_mut().values.insert(key.to_owned(), value.to_owned());
        store
    }

    /// A store whose every access fails.
    pub fn failing() -> Self {
        let store = Self::default();
        store.0.borrow_mut().failing = true;
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().values.get(key).cloned()
    }

    pub fn writes(&self) -> usize {
        self.0.borrow().writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> DomResult<Option<String>> {
        let state = self.0.borrow();
        if state.failing {
            return Err(DomError::Storage("denied".to_owned()));
        }
        Ok(state.values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> DomResult {
        let mut state = self.0.borrow_mut();
        if state.failing {
            return Err(DomError::Storage("quota exceeded".to_owned()));
        }
        state.writes += 1;
        state.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

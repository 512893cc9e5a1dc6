use super::*;
use crate::testing::{FakeElement, MemoryStore};

fn controller(store: MemoryStore) -> (ThemeController<FakeElement, MemoryStore>, FakeElement, FakeElement) {
    let root = FakeElement::new("body");
    let status = FakeElement::new("DarkModetext");
    let theme = ThemeController::new(root.clone(), Some(status.clone()), store, ThemeConfig::default());
    (theme, root, status)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn stored_values() {
    assert_eq!(Theme::Dark.stored_value(), "dark");
    assert_eq!(Theme::Light.stored_value(), "light");
}

#[test]
fn from_stored_only_dark_means_dark() {
    assert_eq!(Theme::from_stored("dark"), Theme::Dark);
    assert_eq!(Theme::from_stored("light"), Theme::Light);
    assert_eq!(Theme::from_stored("DARK"), Theme::Light);
    assert_eq!(Theme::from_stored("sepia"), Theme::Light);
}

#[test]
fn opposite_flips() {
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}

// =============================================================
// resolve_initial
// =============================================================

#[test]
fn stored_dark_wins_over_os() {
    assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    assert_eq!(resolve_initial(Some("dark"), true), Theme::Dark);
}

#[test]
fn stored_light_wins_over_os() {
    assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
}

#[test]
fn stored_unknown_value_is_light() {
    assert_eq!(resolve_initial(Some("blue"), true), Theme::Light);
}

#[test]
fn no_stored_value_follows_os() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn empty_stored_value_counts_as_unset() {
    assert_eq!(resolve_initial(Some(""), true), Theme::Dark);
    assert_eq!(resolve_initial(Some(""), false), Theme::Light);
}

// =============================================================
// ThemeController::apply
// =============================================================

#[test]
fn apply_dark_sets_class_text_and_storage() {
    let store = MemoryStore::default();
    let (theme, root, status) = controller(store.clone());
    theme.apply_dark();
    assert!(root.has_class("dark-mode"));
    assert!(!root.has_class("light-mode"));
    assert_eq!(status.text().as_deref(), Some("Dark Mode is ON"));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn apply_light_sets_class_text_and_storage() {
    let store = MemoryStore::default();
    let (theme, root, status) = controller(store.clone());
    theme.apply_light();
    assert!(root.has_class("light-mode"));
    assert!(!root.has_class("dark-mode"));
    assert_eq!(status.text().as_deref(), Some("Dark Mode is OFF"));
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn switching_never_leaves_both_classes() {
    let (theme, root, _) = controller(MemoryStore::default());
    for step in 0..6 {
        if step % 3 == 0 {
            theme.apply_light();
        } else {
            theme.apply_dark();
        }
        let both = root.has_class("dark-mode") && root.has_class("light-mode");
        assert!(!both, "both theme classes present after step {step}");
    }
}

#[test]
fn apply_dark_removes_light_before_adding_dark() {
    let (theme, root, _) = controller(MemoryStore::default());
    theme.apply_light();
    root.clear_class_ops();
    theme.apply_dark();
    assert_eq!(root.class_ops(), vec!["remove light-mode".to_owned(), "add dark-mode".to_owned()]);
}

#[test]
fn apply_light_removes_dark_before_adding_light() {
    let (theme, root, _) = controller(MemoryStore::default());
    theme.apply_dark();
    root.clear_class_ops();
    theme.apply_light();
    assert_eq!(root.class_ops(), vec!["remove dark-mode".to_owned(), "add light-mode".to_owned()]);
}

#[test]
fn repeated_apply_is_idempotent() {
    let store = MemoryStore::default();
    let (theme, root, status) = controller(store.clone());
    theme.apply_dark();
    let classes = root.classes();
    theme.apply_dark();
    assert_eq!(root.classes(), classes);
    assert_eq!(status.text().as_deref(), Some("Dark Mode is ON"));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn apply_preserves_unrelated_root_classes() {
    let (theme, root, _) = controller(MemoryStore::default());
    root.add_class("layout-wide").unwrap();
    theme.apply_dark();
    theme.apply_light();
    assert_eq!(root.classes(), vec!["layout-wide".to_owned(), "light-mode".to_owned()]);
}

#[test]
fn missing_status_element_still_applies_and_persists() {
    let root = FakeElement::new("body");
    let store = MemoryStore::default();
    let theme = ThemeController::new(root.clone(), None, store.clone(), ThemeConfig::default());
    theme.apply_dark();
    assert!(root.has_class("dark-mode"));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn rejected_class_update_still_persists() {
    let store = MemoryStore::default();
    let (theme, root, status) = controller(store.clone());
    root.reject_class_updates();
    theme.apply_dark();
    assert_eq!(status.text().as_deref(), Some("Dark Mode is ON"));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn failing_store_still_applies_class() {
    let (theme, root, _) = controller(MemoryStore::failing());
    theme.apply_light();
    assert!(root.has_class("light-mode"));
}

#[test]
fn custom_classes_and_key() {
    let root = FakeElement::new("html");
    let store = MemoryStore::default();
    let config = ThemeConfig {
        dark_class: "theme-dark".to_owned(),
        light_class: "theme-light".to_owned(),
        storage_key: "site.theme".to_owned(),
        ..ThemeConfig::default()
    };
    let theme = ThemeController::new(root.clone(), None, store.clone(), config);
    theme.apply_dark();
    assert!(root.has_class("theme-dark"));
    assert_eq!(store.get("site.theme").as_deref(), Some("dark"));
    assert_eq!(store.get("theme"), None);
}

// =============================================================
// toggle / current
// =============================================================

#[test]
fn current_reads_root_classes() {
    let (theme, _, _) = controller(MemoryStore::default());
    assert_eq!(theme.current(), None);
    theme.apply_dark();
    assert_eq!(theme.current(), Some(Theme::Dark));
    theme.apply_light();
    assert_eq!(theme.current(), Some(Theme::Light));
}

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStore::default();
    let (theme, _, _) = controller(store.clone());
    theme.apply_light();
    assert_eq!(theme.toggle(), Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(theme.toggle(), Theme::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn toggle_from_unthemed_root_goes_dark() {
    let (theme, root, _) = controller(MemoryStore::default());
    assert_eq!(theme.toggle(), Theme::Dark);
    assert!(root.has_class("dark-mode"));
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_stored_dark_ignores_os() {
    let (theme, root, _) = controller(MemoryStore::with("theme", "dark"));
    assert_eq!(theme.initialize(&false), Theme::Dark);
    assert!(root.has_class("dark-mode"));
}

#[test]
fn initialize_with_stored_light_ignores_os_dark() {
    let (theme, root, _) = controller(MemoryStore::with("theme", "light"));
    assert_eq!(theme.initialize(&true), Theme::Light);
    assert!(root.has_class("light-mode"));
}

#[test]
fn initialize_without_stored_value_uses_os_dark() {
    let store = MemoryStore::default();
    let (theme, root, _) = controller(store.clone());
    assert_eq!(theme.initialize(&true), Theme::Dark);
    assert!(root.has_class("dark-mode"));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn initialize_defaults_to_light() {
    let store = MemoryStore::default();
    let (theme, root, status) = controller(store.clone());
    assert_eq!(theme.initialize(&false), Theme::Light);
    assert!(root.has_class("light-mode"));
    assert_eq!(status.text().as_deref(), Some("Dark Mode is OFF"));
    assert_eq!(store.writes(), 1);
}

#[test]
fn initialize_with_unreadable_store_falls_back_to_os() {
    let (theme, root, _) = controller(MemoryStore::failing());
    assert_eq!(theme.initialize(&true), Theme::Dark);
    assert!(root.has_class("dark-mode"));
}

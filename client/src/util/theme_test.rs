use super::*;

#[test]
fn restore_applies_persisted_theme_before_interaction() {
    let store = MemoryStore::with(THEME_STORAGE_KEY, "dark");
    let surface = MemorySurface::default();
    let controller = ThemeController::new(&store, &surface);

    assert_eq!(controller.restore(), Some(Theme::Dark));
    assert_eq!(surface.current().as_deref(), Some("dark"));
}

#[test]
fn restore_without_preference_leaves_page_default() {
    let store = MemoryStore::default();
    let surface = MemorySurface::default();
    let controller = ThemeController::new(&store, &surface);

    assert_eq!(controller.restore(), None);
    assert_eq!(surface.current(), None);
}

#[test]
fn restore_ignores_unrecognized_value() {
    let store = MemoryStore::with(THEME_STORAGE_KEY, "solarized");
    let surface = MemorySurface::default();
    let controller = ThemeController::new(&store, &surface);

    assert_eq!(controller.restore(), None);
    assert_eq!(surface.current(), None);
}

#[test]
fn toggle_from_default_goes_dark_and_persists() {
    let store = MemoryStore::default();
    let surface = MemorySurface::default();
    let controller = ThemeController::new(&store, &surface);

    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(surface.current().as_deref(), Some("dark"));
}

#[test]
fn toggling_twice_returns_to_original_persisted_value() {
    let store = MemoryStore::with(THEME_STORAGE_KEY, "light");
    let surface = MemorySurface::default();
    let controller = ThemeController::new(&store, &surface);
    controller.restore();

    controller.toggle();
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    controller.toggle();
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(surface.current().as_deref(), Some("light"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_backends_are_inert_without_hydrate() {
    let controller = browser();
    assert_eq!(controller.restore(), None);
    assert_eq!(controller.toggle(), Theme::Dark);
}

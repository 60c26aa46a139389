//! Light/dark theme restore and toggle.
//!
//! Reads the persisted preference from `localStorage` under `theme` and
//! reflects it as the `data-theme` attribute on `<body>`. Toggle flips the
//! attribute and writes the new value back.
//!
//! DESIGN
//! ======
//! Storage and the page attribute sit behind `PreferenceStore` and
//! `ThemeSurface` so the controller runs natively in tests. Browser-backed
//! implementations no-op outside the `hydrate` feature to keep SSR output
//! deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

use roster::{THEME_STORAGE_KEY, Theme};

/// String key/value persistence (browser `localStorage` in production).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Element that carries the `data-theme` attribute.
pub trait ThemeSurface {
    fn current(&self) -> Option<String>;
    fn apply(&self, theme: Theme);
}

/// Owns the theme preference and the page attribute it drives.
pub struct ThemeController<S, T> {
    store: S,
    surface: T,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeController<S, T> {
    pub fn new(store: S, surface: T) -> Self {
        Self { store, surface }
    }

    /// Apply the persisted theme, if any, and return it.
    ///
    /// Absent or unrecognized values leave the page default untouched.
    pub fn restore(&self) -> Option<Theme> {
        let theme = self
            .store
            .get(THEME_STORAGE_KEY)
            .as_deref()
            .and_then(Theme::parse)?;
        self.surface.apply(theme);
        Some(theme)
    }

    /// Flip the page theme, persist the new value, and return it.
    pub fn toggle(&self) -> Theme {
        let next = Theme::next_from_attribute(self.surface.current().as_deref());
        self.surface.apply(next);
        self.store.set(THEME_STORAGE_KEY, next.as_str());
        next
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for &P {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

#[derive(Debug, Default)]
pub struct MemorySurface {
    attribute: RefCell<Option<String>>,
}

impl ThemeSurface for MemorySurface {
    fn current(&self) -> Option<String> {
        self.attribute.borrow().clone()
    }

    fn apply(&self, theme: Theme) {
        *self.attribute.borrow_mut() = Some(theme.as_str().to_owned());
    }
}

impl<S: ThemeSurface + ?Sized> ThemeSurface for &S {
    fn current(&self) -> Option<String> {
        (**self).current()
    }

    fn apply(&self, theme: Theme) {
        (**self).apply(theme);
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// The document `<body>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyAttribute;

impl ThemeSurface for BodyAttribute {
    fn current(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())?;
            body.get_attribute(roster::THEME_ATTRIBUTE)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn apply(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.set_attribute(roster::THEME_ATTRIBUTE, theme.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// Controller bound to the real page.
pub fn browser() -> ThemeController<LocalStorage, BodyAttribute> {
    ThemeController::new(LocalStorage, BodyAttribute)
}

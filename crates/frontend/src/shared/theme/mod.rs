//! Theme management module for the application.
//!
//! Light/dark theme kept in context; the preference is persisted in
//! localStorage under the `theme` key and applied to the whole document.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::icons::icon;
use crate::system::auth::storage::{BrowserStorage, KeyValueStorage};

pub const THEME_STORAGE_KEY: &str = "theme";

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for CSS class and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to the default theme.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Load theme from storage.
pub fn load_theme(storage: &impl KeyValueStorage) -> Theme {
    storage
        .get(THEME_STORAGE_KEY)
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

/// Save theme to storage.
pub fn save_theme(storage: &impl KeyValueStorage, theme: Theme) {
    storage.set(THEME_STORAGE_KEY, theme.as_str());
}

/// Apply theme: class on `<html>` and `data-theme` on `<body>`.
fn apply_theme(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_1(theme.toggled().as_str());
        let _ = classes.add_1(theme.as_str());
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme(&BrowserStorage, theme);
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get() == Theme::Dark
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme(&BrowserStorage);
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Sun/moon button switching between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="icon-btn theme-toggle"
            on:click=move |_| ctx.toggle()
            title=move || if ctx.is_dark() { "Mode terang" } else { "Mode gelap" }
            aria-label="Toggle theme"
        >
            {move || if ctx.is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryStorage;

    #[test]
    fn test_theme_defaults_to_light() {
        let storage = MemoryStorage::default();
        assert_eq!(load_theme(&storage), Theme::Light);

        storage.set(THEME_STORAGE_KEY, "forest");
        assert_eq!(load_theme(&storage), Theme::Light);
    }

    #[test]
    fn test_theme_persists() {
        let storage = MemoryStorage::default();
        save_theme(&storage, Theme::Dark);
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(load_theme(&storage), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}

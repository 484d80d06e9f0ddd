//! Theme management for the application.
//!
//! Light and dark mode, persisted in localStorage and applied as a class on
//! the document body.

pub mod theme_select;

use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme name used for the body class and localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Swap the `theme-*` class on the document body.
fn apply_theme_class(theme: Theme) {
    let body = match window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(b) => b,
        None => return,
    };
    for candidate in Theme::all() {
        let _ = body.class_list().remove_1(&format!("theme-{}", candidate.as_str()));
    }
    let _ = body
        .class_list()
        .add_1(&format!("theme-{}", theme.as_str()));
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn new() -> Self {
        let theme = load_theme_from_storage();
        apply_theme_class(theme);
        Self {
            theme: RwSignal::new(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        save_theme_to_storage(theme);
        apply_theme_class(theme);
        self.theme.set(theme);
    }
}

pub fn provide_theme() {
    provide_context(ThemeContext::new());
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided")
}

//! Translation layer for the application.
//!
//! German is the default and fallback language, English the alternative.
//! The chosen language is persisted in localStorage and applied app-wide
//! through a context signal.

mod translations;

pub mod language_select;

use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    /// Language code used for localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::De => "Deutsch",
            Language::En => "English",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "en" => Language::En,
            _ => Language::De,
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::De, Language::En]
    }
}

const LANG_STORAGE_KEY: &str = "lang";

fn load_language_from_storage() -> Language {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANG_STORAGE_KEY).ok().flatten())
        .map(|s| Language::from_str(&s))
        .unwrap_or_default()
}

fn save_language_to_storage(language: Language) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANG_STORAGE_KEY, language.as_str());
    }
}

/// Translation context. Cheap to copy; views call `t()` inside reactive
/// closures so labels update when the language changes.
#[derive(Clone, Copy)]
pub struct I18n {
    language: RwSignal<Language>,
}

impl I18n {
    pub fn new() -> Self {
        Self {
            language: RwSignal::new(load_language_from_storage()),
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        save_language_to_storage(language);
        self.language.set(language);
    }

    /// Translate `key` for the current language. Unknown keys fall back to
    /// the key itself so a missing entry stays visible instead of blank.
    pub fn t(&self, key: &str) -> String {
        match translations::lookup(key) {
            Some((de, en)) => match self.language.get() {
                Language::De => de.to_string(),
                Language::En => en.to_string(),
            },
            None => key.to_string(),
        }
    }
}

pub fn provide_i18n() {
    provide_context(I18n::new());
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n context not provided")
}

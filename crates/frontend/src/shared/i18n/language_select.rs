use super::{use_i18n, Language};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Compact language switcher for the top header.
#[component]
pub fn LanguageSelect() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="segmented" title="Sprache / Language">
            {icon("globe")}
            {Language::all()
                .into_iter()
                .map(|language| {
                    view! {
                        <button
                            class="segmented__option"
                            class:segmented__option--active=move || i18n.language() == language
                            on:click=move |_| i18n.set_language(language)
                        >
                            {language.display_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

use crate::shared::i18n::language_select::LanguageSelect;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::theme::theme_select::ThemeSelect;
use leptos::prelude::*;

/// Top bar: application title on the left, language and theme switchers on
/// the right.
#[component]
pub fn TopHeader() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                {icon("building")}
                <span class="top-header__title">{move || i18n.t("app.title")}</span>
            </div>
            <div class="top-header__actions">
                <LanguageSelect />
                <ThemeSelect />
            </div>
        </header>
    }
}

use super::{use_theme, Theme};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Light/dark toggle for the top header.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <div class="segmented" title="Theme">
            {Theme::all()
                .into_iter()
                .map(|theme| {
                    let icon_name = match theme {
                        Theme::Light => "sun",
                        Theme::Dark => "moon",
                    };
                    view! {
                        <button
                            class="segmented__option"
                            class:segmented__option--active=move || ctx.theme() == theme
                            on:click=move |_| ctx.set_theme(theme)
                        >
                            {icon(icon_name)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

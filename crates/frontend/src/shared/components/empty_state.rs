use crate::shared::icons::icon;
use leptos::prelude::*;

/// Full-width placeholder card shown when a list has nothing to display.
#[component]
pub fn EmptyState(
    icon_name: &'static str,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="card empty-state">
            <span class="empty-state__icon">{icon(icon_name)}</span>
            <h3 class="empty-state__title">{move || title.get()}</h3>
            <p class="empty-state__message">{move || message.get()}</p>
        </div>
    }
}

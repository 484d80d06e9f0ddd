use crate::shared::icons::icon;
use leptos::prelude::*;

/// Card shell used by the building and room grids: icon, title, status badge,
/// arbitrary content sections and optional edit/delete actions.
#[component]
pub fn EntityCard(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] status_label: Signal<String>,
    /// Badge color modifier: `success`, `warning`, `danger` or `neutral`.
    status_color: &'static str,
    icon_name: &'static str,
    #[prop(optional)] on_edit: Option<Callback<()>>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card entity-card">
            <div class="entity-card__header">
                <span class="entity-card__icon">{icon(icon_name)}</span>
                <h3 class="entity-card__title">{move || title.get()}</h3>
                <span class=format!("badge badge--{status_color}")>
                    {move || status_label.get()}
                </span>
            </div>
            <div class="entity-card__body">{children()}</div>
            <div class="entity-card__actions">
                {on_edit.map(|cb| view! {
                    <button
                        class="button button--ghost"
                        on:click=move |_| cb.run(())
                    >
                        {icon("pencil")}
                    </button>
                })}
                {on_delete.map(|cb| view! {
                    <button
                        class="button button--ghost button--danger"
                        on:click=move |_| cb.run(())
                    >
                        {icon("trash")}
                    </button>
                })}
            </div>
        </div>
    }
}

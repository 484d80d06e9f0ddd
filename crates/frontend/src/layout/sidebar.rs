use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Left navigation between the three pages.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let i18n = use_i18n();

    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {Page::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li>
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || {
                                        ctx.active_page.get() == page
                                    }
                                    on:click=move |_| ctx.active_page.set(page)
                                >
                                    {icon(page.icon_name())}
                                    <span>{move || i18n.t(page.label_key())}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

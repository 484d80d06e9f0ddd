use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::i18n;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::theme;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    i18n::provide_i18n();
    theme::provide_theme();

    // Centralized modal management; dialogs are pushed onto this stack.
    provide_context(ModalStackService::new());

    view! {
        <AppRoutes />
        <ModalHost />
    }
}

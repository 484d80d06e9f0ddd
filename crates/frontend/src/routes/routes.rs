use crate::domain::bookings::ui::list::BookingsPage;
use crate::domain::buildings::ui::list::BuildingsPage;
use crate::domain::rooms::ui::list::RoomsPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <Shell>
            {move || match ctx.active_page.get() {
                Page::Buildings => view! { <BuildingsPage /> }.into_any(),
                Page::Rooms => view! { <RoomsPage /> }.into_any(),
                Page::Bookings => view! { <BookingsPage /> }.into_any(),
            }}
        </Shell>
    }
}

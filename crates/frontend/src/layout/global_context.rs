use leptos::prelude::*;

/// Top-level pages of the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Buildings,
    Rooms,
    Bookings,
}

impl Page {
    pub fn label_key(&self) -> &'static str {
        match self {
            Page::Buildings => "nav.buildings",
            Page::Rooms => "nav.rooms",
            Page::Bookings => "nav.bookings",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Buildings => "building",
            Page::Rooms => "door",
            Page::Bookings => "calendar",
        }
    }

    pub fn all() -> [Page; 3] {
        [Page::Buildings, Page::Rooms, Page::Bookings]
    }
}

/// Application-wide UI state, provided once at the root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::default()),
        }
    }
}

pub mod state;

use self::state::{build_rows, building_options, filter_rows, room_options, BookingFilters};
use crate::domain::bookings::api;
use crate::domain::bookings::ui::card::BookingCard;
use crate::domain::buildings::api as buildings_api;
use crate::domain::rooms::api as rooms_api;
use crate::shared::components::datetime_input::DateTimeInput;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::date_utils::parse_datetime_local;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::booking::{Booking, BookingStatus};
use contracts::domain::building::Building;
use contracts::domain::room::Room;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn BookingsPage() -> impl IntoView {
    let i18n = use_i18n();

    // None while the initial fetch is in flight.
    let (bookings, set_bookings) = signal::<Option<Vec<Booking>>>(None);
    let (rooms, set_rooms) = signal::<Option<Vec<Room>>>(None);
    let (buildings, set_buildings) = signal::<Option<Vec<Building>>>(None);
    let (load_failed, set_load_failed) = signal(false);

    let filters = RwSignal::new(BookingFilters::default());
    // Raw input values of the datetime pickers.
    let from_raw = RwSignal::new(String::new());
    let to_raw = RwSignal::new(String::new());

    spawn_local(async move {
        match api::fetch_bookings().await {
            Ok(list) => set_bookings.set(Some(list)),
            Err(e) => {
                log::error!("fetching bookings failed: {}", e);
                set_load_failed.set(true);
            }
        }
    });
    spawn_local(async move {
        match rooms_api::fetch_rooms().await {
            Ok(list) => set_rooms.set(Some(list)),
            Err(e) => {
                log::error!("fetching rooms failed: {}", e);
                set_load_failed.set(true);
            }
        }
    });
    spawn_local(async move {
        match buildings_api::fetch_buildings().await {
            Ok(list) => set_buildings.set(Some(list)),
            Err(e) => {
                log::error!("fetching buildings failed: {}", e);
                set_load_failed.set(true);
            }
        }
    });

    let is_loading = move || {
        !load_failed.get()
            && (bookings.get().is_none() || rooms.get().is_none() || buildings.get().is_none())
    };

    let rows = Memo::new(move |_| {
        build_rows(
            &bookings.get().unwrap_or_default(),
            &rooms.get().unwrap_or_default(),
            &buildings.get().unwrap_or_default(),
        )
    });

    let filtered = move || filter_rows(&rows.get(), &filters.get(), Utc::now());

    let clear_date_filters = move |_| {
        from_raw.set(String::new());
        to_raw.set(String::new());
        filters.update(|f| {
            f.from = None;
            f.to = None;
        });
    };

    view! {
        <div class="content">
            <div class="card filter-panel">
                <h2>{move || i18n.t("pages.bookings.title")}</h2>

                <div class="filter-panel__top">
                    <div class="search-input">
                        {icon("search")}
                        <input
                            type="search"
                            prop:value=move || filters.get().search_term
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filters.update(|f| f.search_term = value);
                            }
                            prop:placeholder=move || i18n.t("pages.bookings.search.placeholder")
                        />
                    </div>

                    <select
                        class="filter-select"
                        title=move || i18n.t("pages.bookings.filters.status")
                        on:change=move |ev| {
                            let status = match event_target_value(&ev).as_str() {
                                "scheduled" => Some(BookingStatus::Scheduled),
                                "active" => Some(BookingStatus::Active),
                                _ => None,
                            };
                            filters.update(|f| f.status = status);
                        }
                    >
                        <option value="all">
                            {move || i18n.t("pages.bookings.filters.statusAll")}
                        </option>
                        <option value="scheduled">
                            {move || i18n.t("pages.bookings.filters.status.scheduled")}
                        </option>
                        <option value="active">
                            {move || i18n.t("pages.bookings.filters.status.active")}
                        </option>
                    </select>

                    <select
                        class="filter-select"
                        title=move || i18n.t("pages.bookings.filters.building")
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let building = (value != "all").then_some(value);
                            filters.update(|f| f.building = building);
                        }
                    >
                        <option value="all">
                            {move || i18n.t("pages.bookings.filters.buildingAll")}
                        </option>
                        {move || {
                            building_options(&buildings.get().unwrap_or_default())
                                .into_iter()
                                .map(|name| view! {
                                    <option value=name.clone()>{name.clone()}</option>
                                })
                                .collect_view()
                        }}
                    </select>

                    <select
                        class="filter-select"
                        title=move || i18n.t("pages.bookings.filters.room")
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let room = (value != "all").then_some(value);
                            filters.update(|f| f.room = room);
                        }
                    >
                        <option value="all">
                            {move || i18n.t("pages.bookings.filters.roomAll")}
                        </option>
                        {move || {
                            room_options(
                                &rooms.get().unwrap_or_default(),
                                &buildings.get().unwrap_or_default(),
                                filters.get().building.as_deref(),
                            )
                            .into_iter()
                            .map(|label| view! {
                                <option value=label.clone()>{label.clone()}</option>
                            })
                            .collect_view()
                        }}
                    </select>
                </div>

                <div class="filter-panel__dates">
                    <span class="filter-panel__caption">
                        {move || i18n.t("pages.bookings.filters.dateRange")}
                    </span>
                    <DateTimeInput
                        label=Signal::derive(move || i18n.t("pages.bookings.filters.fromDate"))
                        value=Signal::derive(move || from_raw.get())
                        on_change=move |value: String| {
                            let parsed = parse_datetime_local(&value);
                            from_raw.set(value);
                            filters.update(|f| f.from = parsed);
                        }
                    />
                    <DateTimeInput
                        label=Signal::derive(move || i18n.t("pages.bookings.filters.toDate"))
                        value=Signal::derive(move || to_raw.get())
                        on_change=move |value: String| {
                            let parsed = parse_datetime_local(&value);
                            to_raw.set(value);
                            filters.update(|f| f.to = parsed);
                        }
                    />
                    {move || {
                        let f = filters.get();
                        (f.from.is_some() || f.to.is_some()).then(|| view! {
                            <button
                                class="button button--ghost button--small"
                                on:click=clear_date_filters
                            >
                                {icon("x")}
                            </button>
                        })
                    }}
                </div>
            </div>

            {move || is_loading().then(|| view! {
                <div class="loading-indicator">
                    <div class="spinner"></div>
                </div>
            })}

            {move || load_failed.get().then(|| view! {
                <div class="alert alert--danger">
                    {icon("warning")}
                    <div>
                        <p>{i18n.t("common.error.loading")}</p>
                        <p>{i18n.t("common.error.tryAgain")}</p>
                    </div>
                </div>
            })}

            {move || {
                if is_loading() || load_failed.get() {
                    return None;
                }
                let rows = filtered();
                if rows.is_empty() {
                    let message_key = if filters.get().any_active() {
                        "pages.bookings.empty.withFilters"
                    } else {
                        "pages.bookings.empty.noBookings"
                    };
                    return Some(view! {
                        <EmptyState
                            icon_name="calendar"
                            title=Signal::derive(move || i18n.t("pages.bookings.empty.title"))
                            message=Signal::derive(move || i18n.t(message_key))
                        />
                    }
                    .into_any());
                }
                Some(view! {
                    <div class="booking-list">
                        {rows
                            .into_iter()
                            .map(|row| view! { <BookingCard row=row /> })
                            .collect_view()}
                    </div>
                }
                .into_any())
            }}
        </div>
    }
}

pub mod state;

use self::state::{inactive_filters, room_matches, toggle_filter, RoomFilter};
use crate::domain::buildings::api as buildings_api;
use crate::domain::rooms::api;
use crate::domain::rooms::ui::card::RoomCard;
use crate::domain::rooms::ui::delete::RoomDeleteDialog;
use crate::domain::rooms::ui::details::RoomDetails;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::i18n::{use_i18n, I18n};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::building::Building;
use contracts::domain::room::{format_type, Room};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const CREATE_DIALOG_STYLE: &str = "max-width: min(640px, 92vw); width: min(640px, 92vw); max-height: 90vh; overflow: auto;";
const DELETE_DIALOG_STYLE: &str = "max-width: min(560px, 92vw); width: min(560px, 92vw);";

fn filter_label(i18n: I18n, filter: &RoomFilter) -> String {
    match filter {
        RoomFilter::Equipment(kind) => format!(
            "{}: {}",
            i18n.t("pages.rooms.actions.filter.equipment"),
            format_type(kind)
        ),
        RoomFilter::Capacity(bucket) => format!(
            "{}: {}",
            i18n.t("pages.rooms.actions.filter.seats"),
            i18n.t(bucket.label_key())
        ),
    }
}

#[component]
pub fn RoomsPage() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let i18n = use_i18n();

    let (rooms, set_rooms) = signal::<Vec<Room>>(Vec::new());
    let (buildings, set_buildings) = signal::<Vec<Building>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let search_term = RwSignal::new(String::new());
    let active_filters = RwSignal::new(Vec::<RoomFilter>::new());

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_rooms().await {
                Ok(list) => {
                    set_rooms.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("fetching rooms failed: {}", e);
                    set_error.set(Some("common.error.loading".to_string()));
                }
            }
        });
        spawn_local(async move {
            match buildings_api::fetch_buildings().await {
                Ok(list) => set_buildings.set(list),
                Err(e) => log::error!("fetching buildings failed: {}", e),
            }
        });
    };

    let filtered_rooms = move || {
        let term = search_term.get();
        let active = active_filters.get();
        rooms
            .get()
            .into_iter()
            .filter(|room| room_matches(room, &term, &active))
            .collect::<Vec<_>>()
    };

    let selectable_filters = move || inactive_filters(&rooms.get(), &active_filters.get());

    let open_create_modal = move || {
        modal_stack.push_with_style(Some(CREATE_DIALOG_STYLE.to_string()), move |handle| {
            view! {
                <RoomDetails
                    on_saved=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            handle.close();
                            fetch();
                        }
                    })
                    on_cancel=Callback::new({
                        let handle = handle.clone();
                        move |_| handle.close()
                    })
                />
            }
            .into_any()
        });
    };

    let open_delete_modal = move |room: Room| {
        modal_stack.push_with_style(Some(DELETE_DIALOG_STYLE.to_string()), move |handle| {
            let room = room.clone();
            view! {
                <RoomDeleteDialog
                    room=room
                    on_deleted=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            handle.close();
                            fetch();
                        }
                    })
                    on_cancel=Callback::new({
                        let handle = handle.clone();
                        move |_| handle.close()
                    })
                />
            }
            .into_any()
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="card filter-panel">
                <h2>{move || i18n.t("pages.rooms.search.title")}</h2>
                <div class="filter-panel__top">
                    <div class="search-input">
                        {icon("search")}
                        <input
                            type="search"
                            prop:value=move || search_term.get()
                            on:input=move |ev| search_term.set(event_target_value(&ev))
                            prop:placeholder=move || i18n.t("pages.rooms.search.placeholder")
                        />
                    </div>
                    <button
                        class="button button--primary"
                        on:click=move |_| open_create_modal()
                    >
                        {icon("plus")}
                        {move || i18n.t("pages.rooms.actions.create")}
                    </button>
                </div>

                {move || {
                    let active = active_filters.get();
                    if active.is_empty() {
                        return None;
                    }
                    Some(view! {
                        <p class="filter-panel__caption">
                            {i18n.t("pages.rooms.actions.filter.selected")}
                        </p>
                        <div class="chip-row">
                            {active
                                .into_iter()
                                .map(|filter| {
                                    let label = filter_label(i18n, &filter);
                                    let key = filter.key();
                                    view! {
                                        <button
                                            class="chip chip--active"
                                            data-testid=key
                                            on:click=move |_| {
                                                active_filters.update(|list| {
                                                    toggle_filter(list, filter.clone())
                                                })
                                            }
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                            <button
                                class="chip"
                                data-testid="delete-all-filters"
                                on:click=move |_| active_filters.set(Vec::new())
                            >
                                {i18n.t("pages.rooms.actions.filter.clearAll")}
                            </button>
                        </div>
                    })
                }}

                <p class="filter-panel__caption">
                    {move || i18n.t("pages.rooms.actions.filter.open")}
                </p>
                <div class="chip-row">
                    {move || {
                        selectable_filters()
                            .into_iter()
                            .map(|filter| {
                                let label = filter_label(i18n, &filter);
                                let key = format!("inactive-{}", filter.key());
                                view! {
                                    <button
                                        class="chip"
                                        data-testid=key
                                        on:click=move |_| {
                                            active_filters.update(|list| {
                                                toggle_filter(list, filter.clone())
                                            })
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            {move || error.get().map(|key| view! {
                <div class="alert alert--danger">
                    {icon("warning")}
                    <span>{i18n.t(&key)}</span>
                </div>
            })}

            <div class="card-grid">
                {move || {
                    let buildings = buildings.get();
                    filtered_rooms()
                        .into_iter()
                        .map(|room| {
                            let building_name = buildings
                                .iter()
                                .find(|b| b.id == room.building_id)
                                .map(|b| b.name.clone());
                            let for_delete = room.clone();
                            view! {
                                <RoomCard
                                    room=room
                                    building_name=building_name
                                    on_delete=Callback::new(move |_| {
                                        open_delete_modal(for_delete.clone())
                                    })
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                if !filtered_rooms().is_empty() || error.get().is_some() {
                    return None;
                }
                let filtered_out =
                    !search_term.get().is_empty() || !active_filters.get().is_empty();
                let message_key = if filtered_out {
                    "pages.rooms.empty.searchNoResults"
                } else {
                    "pages.rooms.empty.noRooms"
                };
                Some(view! {
                    <EmptyState
                        icon_name="door"
                        title=Signal::derive(move || i18n.t("pages.rooms.empty.title"))
                        message=Signal::derive(move || i18n.t(message_key))
                    />
                })
            }}
        </div>
    }
}

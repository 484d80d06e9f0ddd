use crate::domain::buildings::api;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::building::Building;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Confirmation dialog for deleting a building.
///
/// Queries the rooms of the building first; the confirm action stays
/// disabled while any exist, with an explanatory warning instead of a
/// doomed delete call.
#[component]
pub fn BuildingDeleteDialog(
    building: Building,
    on_deleted: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    // None while the room check is in flight.
    let (room_count, set_room_count) = signal::<Option<usize>>(None);
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let building_id = building.id;
    spawn_local(async move {
        match api::fetch_rooms_for_building(building_id).await {
            Ok(rooms) => set_room_count.set(Some(rooms.len())),
            Err(e) => {
                log::error!("room check for building failed: {}", e);
                set_error.set(Some("common.error.loading".to_string()));
                set_room_count.set(Some(0));
            }
        }
    });

    let is_checking = move || room_count.get().is_none();
    let has_rooms = move || room_count.get().unwrap_or(0) > 0;

    let handle_delete = move |_| {
        if is_checking() || pending.get() {
            return;
        }
        if has_rooms() {
            set_error.set(Some("pages.buildings.delete.error.hasRooms".to_string()));
            return;
        }
        set_error.set(None);
        set_pending.set(true);
        spawn_local(async move {
            match api::delete_building(building_id).await {
                Ok(()) => {
                    set_pending.set(false);
                    on_deleted.run(());
                }
                Err(e) => {
                    log::error!("deleting building failed: {}", e);
                    set_pending.set(false);
                    set_error.set(Some("pages.buildings.delete.error.generic".to_string()));
                }
            }
        });
    };

    let confirmation = {
        let name = building.name.clone();
        move || {
            i18n.t("pages.buildings.delete.confirmation")
                .replace("{name}", &name)
        }
    };

    view! {
        <div class="details-container dialog--danger">
            <div class="details-header">
                <h3>
                    <span class="dialog-icon dialog-icon--danger">{icon("warning")}</span>
                    {move || i18n.t("pages.buildings.delete.title")}
                </h3>
            </div>

            <p>{confirmation}</p>

            <Show when=has_rooms>
                <div class="alert alert--warning" data-testid="building-has-rooms-warning">
                    {icon("warning")}
                    <div>
                        <strong>{move || i18n.t("pages.buildings.delete.hasRooms.title")}</strong>
                        <p>{move || i18n.t("pages.buildings.delete.warning.hasRooms")}</p>
                    </div>
                </div>
            </Show>

            {move || error.get().map(|key| view! {
                <div class="alert alert--danger">
                    {icon("warning")}
                    <span>{i18n.t(&key)}</span>
                </div>
            })}

            <div class="details-actions">
                <button
                    class="button button--secondary"
                    data-testid="delete-building-cancel-button"
                    on:click=move |_| on_cancel.run(())
                    disabled=move || pending.get()
                >
                    {move || i18n.t("common.action.cancel")}
                </button>
                <button
                    class="button button--danger"
                    data-testid="delete-building-confirm-button"
                    on:click=handle_delete
                    disabled=move || is_checking() || pending.get() || has_rooms()
                >
                    {icon("trash")}
                    {move || {
                        if is_checking() || pending.get() {
                            i18n.t("pages.buildings.delete.deleting")
                        } else {
                            i18n.t("common.action.delete")
                        }
                    }}
                </button>
            </div>
        </div>
    }
}

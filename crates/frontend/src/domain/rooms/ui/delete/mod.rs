use crate::domain::rooms::api;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::room::Room;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Confirmation dialog for deleting a room.
///
/// Asks the server whether the room is deletable first; while bookings still
/// reference it, deletion requires the force acknowledgement, which cascades
/// to those bookings on the server.
#[component]
pub fn RoomDeleteDialog(
    room: Room,
    on_deleted: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    // None while the deletable check is in flight.
    let (deletable, set_deletable) = signal::<Option<bool>>(None);
    let force = RwSignal::new(false);
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let room_id = room.id;
    spawn_local(async move {
        match api::is_room_deletable(room_id).await {
            Ok(result) => set_deletable.set(Some(result.deletable)),
            Err(e) => {
                log::error!("deletable check for room failed: {}", e);
                // Treat an unanswered check as "has bookings" so the plain
                // delete path stays closed.
                set_deletable.set(Some(false));
                set_error.set(Some("common.error.loading".to_string()));
            }
        }
    });

    let is_checking = move || deletable.get().is_none();
    let has_bookings = move || deletable.get() == Some(false);

    let handle_delete = move |_| {
        if is_checking() || pending.get() || (has_bookings() && !force.get()) {
            return;
        }
        set_error.set(None);
        set_pending.set(true);
        let force_flag = force.get();
        spawn_local(async move {
            match api::delete_room(room_id, force_flag).await {
                Ok(()) => {
                    set_pending.set(false);
                    on_deleted.run(());
                }
                Err(e) => {
                    log::error!("deleting room failed: {}", e);
                    set_pending.set(false);
                    set_error.set(Some("pages.rooms.dialogs.delete.error.generic".to_string()));
                }
            }
        });
    };

    let confirmation = {
        let name = room.name.clone();
        move || {
            i18n.t("pages.rooms.dialogs.delete.confirmation")
                .replace("{roomName}", &name)
        }
    };

    view! {
        <div class="details-container dialog--danger">
            <div class="details-header">
                <h3>
                    <span class="dialog-icon dialog-icon--danger">{icon("warning")}</span>
                    {move || i18n.t("pages.rooms.dialogs.delete.title")}
                </h3>
            </div>

            <p>{confirmation}</p>

            <div class="alert alert--danger">
                {icon("warning")}
                <div>
                    <strong>{move || i18n.t("pages.rooms.dialogs.delete.warning.title")}</strong>
                    <p>{move || i18n.t("pages.rooms.dialogs.delete.warning.permanent")}</p>
                    <p>
                        {move || {
                            if force.get() {
                                i18n.t("pages.rooms.dialogs.delete.warning.deleteBookings")
                            } else {
                                i18n.t("pages.rooms.dialogs.delete.warning.checkBookings")
                            }
                        }}
                    </p>
                </div>
            </div>

            {move || has_bookings().then(|| view! {
                <div class="alert alert--warning" data-testid="room-has-bookings-warning">
                    {icon("warning")}
                    <span>
                        <strong>{i18n.t("pages.rooms.dialogs.delete.hasBookings.title")}</strong>
                        {i18n.t("pages.rooms.dialogs.delete.hasBookings.description")}
                    </span>
                </div>
            })}

            {move || error.get().map(|key| view! {
                <div class="alert alert--danger">
                    {icon("warning")}
                    <span>{i18n.t(&key)}</span>
                </div>
            })}

            <label class="force-delete">
                <input
                    type="checkbox"
                    data-testid="force-delete-checkbox"
                    prop:checked=move || force.get()
                    on:change=move |ev| force.set(event_target_checked(&ev))
                />
                <span>{move || i18n.t("pages.rooms.dialogs.delete.forceDelete")}</span>
            </label>

            <div class="details-actions">
                <button
                    class="button button--secondary"
                    data-testid="delete-room-cancel-button"
                    on:click=move |_| on_cancel.run(())
                    disabled=move || pending.get()
                >
                    {move || i18n.t("common.action.cancel")}
                </button>
                <button
                    class="button button--danger"
                    data-testid="delete-room-confirm-button"
                    on:click=handle_delete
                    disabled=move || {
                        is_checking() || pending.get() || (has_bookings() && !force.get())
                    }
                >
                    {icon("trash")}
                    {move || {
                        if is_checking() || pending.get() {
                            i18n.t("pages.rooms.dialogs.delete.deleting")
                        } else {
                            i18n.t("pages.rooms.dialogs.delete.confirm")
                        }
                    }}
                </button>
            </div>
        </div>
    }
}

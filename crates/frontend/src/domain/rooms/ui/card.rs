use crate::shared::components::entity_card::EntityCard;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::room::{format_type, Room, SEATS_TYPE};
use leptos::prelude::*;

/// Equipment chip labels for a room: boolean-true characteristics show their
/// type, valued ones show `Type: value`, boolean-false ones are hidden.
/// `SEATS` is rendered as its own row, not as a chip.
fn characteristic_labels(room: &Room) -> Vec<String> {
    room.characteristics
        .iter()
        .filter(|c| c.kind != SEATS_TYPE)
        .filter_map(|c| match c.value.as_bool() {
            Some(true) => Some(format_type(&c.kind)),
            Some(false) => None,
            None => Some(format!("{}: {}", format_type(&c.kind), c.value)),
        })
        .collect()
}

#[component]
pub fn RoomCard(
    room: Room,
    building_name: Option<String>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    let seats = room.seats();
    let chips = characteristic_labels(&room);
    let title = format!("{} ({})", room.name, room.chem_symbol);

    view! {
        <EntityCard
            title=title
            status_label=Signal::derive(move || i18n.t("pages.rooms.labels.available"))
            status_color="success"
            icon_name="door"
            on_delete=on_delete
        >
            {building_name.map(|name| view! {
                <div class="entity-card__row">
                    {icon("map-pin")}
                    <span>{name}</span>
                </div>
            })}
            {seats.map(|n| view! {
                <div class="entity-card__row">
                    {icon("user")}
                    <span>
                        {move || format!("{:.0} {}", n, i18n.t("pages.rooms.labels.capacity"))}
                    </span>
                </div>
            })}
            <div class="entity-card__row entity-card__row--top">
                <span class="entity-card__caption">
                    {move || format!("{}:", i18n.t("pages.rooms.labels.equipment"))}
                </span>
            </div>
            {if chips.is_empty() {
                view! {
                    <p class="entity-card__muted">
                        {move || i18n.t("pages.rooms.labels.noEquipment")}
                    </p>
                }
                .into_any()
            } else {
                view! {
                    <div class="chip-row">
                        {chips
                            .into_iter()
                            .map(|label| view! { <span class="chip chip--static">{label}</span> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </EntityCard>
    }
}

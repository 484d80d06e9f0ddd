use crate::shared::components::entity_card::EntityCard;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::building::{Building, BuildingState};
use leptos::prelude::*;

#[component]
pub fn BuildingCard(
    building: Building,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    let status_key = match building.state {
        BuildingState::Open => "pages.buildings.labels.open",
        BuildingState::Closed => "pages.buildings.labels.closed",
    };
    let status_color = match building.state {
        BuildingState::Open => "success",
        BuildingState::Closed => "neutral",
    };

    let address = building.address.clone();
    let description = building.description.clone();

    view! {
        <EntityCard
            title=building.name.clone()
            status_label=Signal::derive(move || i18n.t(status_key))
            status_color=status_color
            icon_name="building"
            on_edit=on_edit
            on_delete=on_delete
        >
            <div class="entity-card__row">
                {icon("map-pin")}
                <span>{address}</span>
            </div>
            {description.map(|text| view! {
                <p class="entity-card__description">{text}</p>
            })}
        </EntityCard>
    }
}

use super::draft::DraftValueKind;
use super::view_model::RoomDetailsViewModel;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::room::format_type;
use leptos::prelude::*;

#[component]
pub fn RoomDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let vm = RoomDetailsViewModel::new();
    vm.load_reference_data();

    view! {
        <div class="details-container room-details">
            <div class="details-header">
                <h3>
                    {icon("door")}
                    {move || i18n.t("pages.rooms.create.title")}
                </h3>
                <p class="details-header__hint">
                    {move || i18n.t("pages.rooms.create.description")}
                </p>
            </div>

            {
                let vm = vm.clone();
                move || vm.error.get().map(|key| view! {
                    <div class="alert alert--danger">
                        {icon("warning")}
                        <span>{i18n.t(&key)}</span>
                    </div>
                })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="room-number">{move || i18n.t("pages.rooms.field.number")}</label>
                    <input
                        type="text"
                        id="room-number"
                        prop:value={
                            let vm = vm.clone();
                            move || vm.name.get()
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.name.set(event_target_value(&ev))
                        }
                        prop:placeholder=move || i18n.t("pages.rooms.field.placeholder.roomNumber")
                    />
                </div>

                <div class="form-group">
                    <label for="room-chem-symbol">
                        {move || i18n.t("pages.rooms.field.chemSymbol")}
                    </label>
                    <input
                        type="text"
                        id="room-chem-symbol"
                        prop:value={
                            let vm = vm.clone();
                            move || vm.chem_symbol.get()
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.chem_symbol.set(event_target_value(&ev))
                        }
                        prop:placeholder=move || i18n.t("pages.rooms.field.placeholder.chemSymbol")
                    />
                </div>

                <div class="form-group">
                    <label for="room-building">{move || i18n.t("pages.rooms.field.building")}</label>
                    <select
                        id="room-building"
                        prop:value={
                            let vm = vm.clone();
                            move || vm.building_id.get()
                        }
                        on:change={
                            let vm = vm.clone();
                            move |ev| vm.building_id.set(event_target_value(&ev))
                        }
                    >
                        <option value="" disabled selected>
                            {move || i18n.t("pages.rooms.field.building.placeholder")}
                        </option>
                        {
                            let vm = vm.clone();
                            move || {
                                vm.buildings
                                    .get()
                                    .into_iter()
                                    .map(|building| {
                                        view! {
                                            <option value=building.id.to_string()>
                                                {building.name}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label for="room-seats">{move || i18n.t("pages.rooms.field.capacity")}</label>
                    <input
                        type="number"
                        id="room-seats"
                        min="1"
                        class:input--error={
                            let vm = vm.clone();
                            move || vm.seats_invalid()
                        }
                        prop:value={
                            let vm = vm.clone();
                            move || vm.seats.get()
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.seats.set(event_target_value(&ev))
                        }
                        prop:placeholder=move || i18n.t("pages.rooms.field.capacity.placeholder")
                    />
                </div>

                <div class="form-group">
                    <label>{move || i18n.t("pages.rooms.field.composedOf")}</label>
                    <p class="form-group__hint">
                        {move || i18n.t("pages.rooms.field.composedOf.description")}
                    </p>
                    <div class="check-list" data-testid="composed-of-rooms-select">
                        {
                            let vm = vm.clone();
                            move || {
                                let rooms = vm.composable_rooms.get();
                                if rooms.is_empty() {
                                    view! {
                                        <p class="form-group__hint">
                                            {i18n.t("pages.rooms.field.composedOf.noAvailableRooms")}
                                        </p>
                                    }
                                    .into_any()
                                } else {
                                    rooms
                                        .into_iter()
                                        .map(|room| {
                                            let id = room.id.to_string();
                                            let id_for_checked = id.clone();
                                            let id_for_toggle = id;
                                            let vm_checked = vm.clone();
                                            let vm_toggle = vm.clone();
                                            view! {
                                                <label class="check-list__item">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || {
                                                            vm_checked
                                                                .composed_of
                                                                .get()
                                                                .contains(&id_for_checked)
                                                        }
                                                        on:change=move |ev| {
                                                            vm_toggle.toggle_composed_of(
                                                                id_for_toggle.clone(),
                                                                event_target_checked(&ev),
                                                            )
                                                        }
                                                    />
                                                    <span>
                                                        {format!("{} ({})", room.name, room.chem_symbol)}
                                                    </span>
                                                </label>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                        }
                    </div>
                    {
                        let vm = vm.clone();
                        move || vm.composed_of_invalid().then(|| view! {
                            <p class="form-group__error">
                                {i18n.t("pages.rooms.field.composedOf.error.atLeastTwo")}
                            </p>
                        })
                    }
                </div>

                <div class="form-group">
                    <label>{move || i18n.t("pages.rooms.field.equipment")}</label>

                    {
                        let vm = vm.clone();
                        move || {
                            let characteristics = vm.characteristics.get();
                            if characteristics.is_empty() {
                                return None;
                            }
                            let vm = vm.clone();
                            Some(view! {
                                <p class="form-group__hint">
                                    {i18n.t("pages.rooms.field.equipment.selected")}
                                </p>
                                <div class="chip-row">
                                    {characteristics
                                        .into_iter()
                                        .map(|characteristic| {
                                            let label = if characteristic.value.is_bool() {
                                                format_type(&characteristic.kind)
                                            } else {
                                                format!(
                                                    "{}: {}",
                                                    format_type(&characteristic.kind),
                                                    characteristic.value
                                                )
                                            };
                                            let vm = vm.clone();
                                            let kind = characteristic.kind;
                                            let testid =
                                                format!("remove-equipment-{}-button", kind);
                                            view! {
                                                <button
                                                    class="chip chip--active"
                                                    data-testid=testid
                                                    on:click=move |_| {
                                                        vm.remove_characteristic(&kind)
                                                    }
                                                >
                                                    {label}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            })
                        }
                    }

                    <p class="form-group__hint">
                        {move || i18n.t("pages.rooms.field.equipment.standard")}
                    </p>
                    <div class="chip-row">
                        {
                            let vm = vm.clone();
                            move || {
                                vm.available_standard_equipment()
                                    .into_iter()
                                    .map(|kind| {
                                        let vm = vm.clone();
                                        view! {
                                            <button
                                                class="chip"
                                                data-testid=format!("add-equipment-{}-button", kind)
                                                on:click=move |_| vm.add_standard_equipment(kind)
                                            >
                                                {format_type(kind)}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                        <button
                            class="chip chip--primary"
                            data-testid="add-custom-equipment-button"
                            on:click={
                                let vm = vm.clone();
                                move |_| vm.open_custom_form()
                            }
                        >
                            {icon("plus")}
                            {move || i18n.t("pages.rooms.field.equipment.custom")}
                        </button>
                    </div>

                    {
                        let vm = vm.clone();
                        move || {
                            if !vm.draft.get().visible {
                                return None;
                            }
                            let vm = vm.clone();
                            Some(custom_characteristic_form(vm))
                        }
                    }
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--secondary"
                    data-testid="create-room-cancel-button"
                    on:click=move |_| on_cancel.run(())
                >
                    {move || i18n.t("common.action.cancel")}
                </button>
                <button
                    class="button button--primary"
                    data-testid="create-room-submit-button"
                    on:click={
                        let vm = vm.clone();
                        move |_| vm.submit(on_saved)
                    }
                    disabled={
                        let vm = vm.clone();
                        move || !vm.is_form_valid() || vm.pending.get()
                    }
                >
                    {icon("save")}
                    {move || i18n.t("common.action.create")}
                </button>
            </div>
        </div>
    }
}

/// The inline draft editor for one custom characteristic.
fn custom_characteristic_form(vm: RoomDetailsViewModel) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="custom-characteristic">
            <p class="form-group__hint">
                {move || i18n.t("pages.rooms.field.equipment.custom.add")}
            </p>
            <div class="custom-characteristic__row">
                <input
                    type="text"
                    class:input--error={
                        let vm = vm.clone();
                        move || vm.draft.get().type_collides_with_reserved()
                    }
                    prop:value={
                        let vm = vm.clone();
                        move || vm.draft.get().type_name
                    }
                    on:input={
                        let vm = vm.clone();
                        move |ev| {
                            let value = event_target_value(&ev);
                            vm.draft.update(|d| d.type_name = value);
                        }
                    }
                    prop:placeholder=move || i18n.t("pages.rooms.field.placeholder.customType")
                />
                <select
                    prop:value={
                        let vm = vm.clone();
                        move || vm.draft.get().value_kind.as_str().to_string()
                    }
                    on:change={
                        let vm = vm.clone();
                        move |ev| {
                            let kind = DraftValueKind::from_str(&event_target_value(&ev));
                            vm.draft.update(|d| d.value_kind = kind);
                        }
                    }
                >
                    {DraftValueKind::all()
                        .into_iter()
                        .map(|kind| view! {
                            <option value=kind.as_str()>
                                {move || i18n.t(kind.label_key())}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            {
                let vm = vm.clone();
                move || vm.draft.get().type_collides_with_reserved().then(|| view! {
                    <p class="form-group__error">
                        {i18n.t("pages.rooms.field.equipment.custom.error.reserved")}
                    </p>
                })
            }
            <div class="custom-characteristic__row">
                {
                    let vm = vm.clone();
                    move || {
                        let vm = vm.clone();
                        if vm.draft.get().value_kind == DraftValueKind::Boolean {
                            let vm_value = vm.clone();
                            view! {
                                <select
                                    prop:value={
                                        let vm = vm.clone();
                                        move || vm.draft.get().raw_value
                                    }
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm_value.draft.update(|d| d.raw_value = value);
                                    }
                                >
                                    <option value="" disabled selected>
                                        {i18n.t("pages.rooms.field.placeholder.value")}
                                    </option>
                                    <option value="true">{i18n.t("common.value.true")}</option>
                                    <option value="false">{i18n.t("common.value.false")}</option>
                                </select>
                            }
                            .into_any()
                        } else {
                            let input_type = if vm.draft.get().value_kind == DraftValueKind::Number
                            {
                                "number"
                            } else {
                                "text"
                            };
                            let vm_value = vm.clone();
                            view! {
                                <input
                                    type=input_type
                                    prop:value={
                                        let vm = vm.clone();
                                        move || vm.draft.get().raw_value
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm_value.draft.update(|d| d.raw_value = value);
                                    }
                                    prop:placeholder=i18n.t("pages.rooms.field.placeholder.value")
                                />
                            }
                            .into_any()
                        }
                    }
                }
                <button
                    class="button button--primary button--small"
                    on:click={
                        let vm = vm.clone();
                        move |_| vm.commit_custom()
                    }
                    disabled={
                        let vm = vm.clone();
                        move || !vm.draft.get().is_valid()
                    }
                >
                    {move || i18n.t("common.action.add")}
                </button>
                <button
                    class="button button--secondary button--small"
                    on:click={
                        let vm = vm.clone();
                        move |_| vm.cancel_custom_form()
                    }
                >
                    {move || i18n.t("common.action.cancel")}
                </button>
            </div>
        </div>
    }
}

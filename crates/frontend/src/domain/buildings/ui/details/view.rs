use super::view_model::BuildingDetailsViewModel;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::building::Building;
use leptos::prelude::*;

#[component]
pub fn BuildingDetails(
    building: Option<Building>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let vm = BuildingDetailsViewModel::new(building.as_ref());

    let title_key = if vm.is_edit_mode() {
        "pages.buildings.edit.title"
    } else {
        "pages.buildings.create.title"
    };

    let vm_valid = vm.clone();
    let vm_submit = vm.clone();
    let vm_error = vm.clone();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {icon("building")}
                    {move || i18n.t(title_key)}
                </h3>
                <p class="details-header__hint">
                    {move || i18n.t("pages.buildings.create.description")}
                </p>
            </div>

            {move || vm_error.error.get().map(|key| view! {
                <div class="alert alert--danger">
                    {icon("warning")}
                    <span>{i18n.t(&key)}</span>
                </div>
            })}

            <div class="details-form">
                <div class="form-group">
                    <label for="building-name">{move || i18n.t("pages.buildings.field.name")}</label>
                    <input
                        type="text"
                        id="building-name"
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        prop:placeholder=move || i18n.t("pages.buildings.field.name.placeholder")
                    />
                </div>

                <div class="form-group">
                    <label for="building-address">{move || i18n.t("pages.buildings.field.address")}</label>
                    <input
                        type="text"
                        id="building-address"
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.get().address
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| {
                                vm.form.update(|f| f.address = event_target_value(&ev));
                            }
                        }
                        prop:placeholder=move || i18n.t("pages.buildings.field.address.placeholder")
                    />
                </div>

                <div class="form-group">
                    <label for="building-description">{move || i18n.t("pages.buildings.field.description")}</label>
                    <textarea
                        id="building-description"
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.get().description
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| {
                                vm.form.update(|f| f.description = event_target_value(&ev));
                            }
                        }
                        prop:placeholder=move || i18n.t("pages.buildings.field.description.placeholder")
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--secondary"
                    data-testid="create-building-cancel-button"
                    on:click=move |_| on_cancel.run(())
                >
                    {move || i18n.t("common.action.cancel")}
                </button>
                <button
                    class="button button--primary"
                    data-testid="create-building-submit-button"
                    on:click={
                        let vm = vm_submit.clone();
                        move |_| vm.save(on_saved)
                    }
                    disabled={
                        let vm = vm_valid.clone();
                        move || !vm.is_form_valid() || vm.pending.get()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm.clone();
                        move || {
                            if vm.is_edit_mode() {
                                i18n.t("common.action.save")
                            } else {
                                i18n.t("common.action.create")
                            }
                        }
                    }
                </button>
            </div>
        </div>
    }
}

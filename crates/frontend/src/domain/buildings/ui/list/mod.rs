use crate::domain::buildings::api;
use crate::domain::buildings::ui::card::BuildingCard;
use crate::domain::buildings::ui::delete::BuildingDeleteDialog;
use crate::domain::buildings::ui::details::BuildingDetails;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::building::Building;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DIALOG_STYLE: &str = "max-width: min(600px, 92vw); width: min(600px, 92vw);";

#[component]
pub fn BuildingsPage() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let i18n = use_i18n();

    let (buildings, set_buildings) = signal::<Vec<Building>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_buildings().await {
                Ok(list) => {
                    set_buildings.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("fetching buildings failed: {}", e);
                    set_error.set(Some("common.error.loading".to_string()));
                }
            }
        });
    };

    let open_details_modal = move |building: Option<Building>| {
        modal_stack.push_with_style(Some(DIALOG_STYLE.to_string()), move |handle| {
            let building = building.clone();
            view! {
                <BuildingDetails
                    building=building
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

    let open_delete_modal = move |building: Building| {
        modal_stack.push_with_style(Some(DIALOG_STYLE.to_string()), move |handle| {
            let building = building.clone();
            view! {
                <BuildingDeleteDialog
                    building=building
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
            <div class="page-header">
                <h2>{move || i18n.t("pages.buildings.title")}</h2>
                <button
                    class="button button--primary"
                    on:click=move |_| open_details_modal(None)
                >
                    {icon("plus")}
                    {move || i18n.t("pages.buildings.actions.create")}
                </button>
            </div>

            {move || error.get().map(|key| view! {
                <div class="alert alert--danger">
                    {icon("warning")}
                    <span>{i18n.t(&key)}</span>
                </div>
            })}

            <div class="card-grid">
                {move || {
                    buildings
                        .get()
                        .into_iter()
                        .map(|building| {
                            let for_edit = building.clone();
                            let for_delete = building.clone();
                            view! {
                                <BuildingCard
                                    building=building
                                    on_edit=Callback::new(move |_| {
                                        open_details_modal(Some(for_edit.clone()))
                                    })
                                    on_delete=Callback::new(move |_| {
                                        open_delete_modal(for_delete.clone())
                                    })
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || buildings.get().is_empty() && error.get().is_none()>
                <EmptyState
                    icon_name="building"
                    title=Signal::derive(move || i18n.t("pages.buildings.empty.title"))
                    message=Signal::derive(move || i18n.t("pages.buildings.empty.noBuildings"))
                />
            </Show>
        </div>
    }
}

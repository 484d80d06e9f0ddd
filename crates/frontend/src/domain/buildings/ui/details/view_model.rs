use crate::domain::buildings::api;
use contracts::domain::building::{Building, BuildingCreateRequest};
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuildingForm {
    pub id: Option<Uuid>,
    pub name: String,
    pub address: String,
    pub description: String,
}

impl BuildingForm {
    fn from_building(building: &Building) -> Self {
        Self {
            id: Some(building.id),
            name: building.name.clone(),
            address: building.address.clone(),
            description: building.description.clone().unwrap_or_default(),
        }
    }

    fn to_request(&self) -> BuildingCreateRequest {
        BuildingCreateRequest {
            name: self.name.clone(),
            address: self.address.clone(),
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
        }
    }
}

/// ViewModel for the building create/edit form.
///
/// `error` holds a translation key, resolved by the view so the message
/// follows language switches.
#[derive(Clone)]
pub struct BuildingDetailsViewModel {
    pub form: RwSignal<BuildingForm>,
    pub error: RwSignal<Option<String>>,
    pub pending: RwSignal<bool>,
}

impl BuildingDetailsViewModel {
    pub fn new(building: Option<&Building>) -> Self {
        let form = building
            .map(BuildingForm::from_building)
            .unwrap_or_default();
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            pending: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.get().to_request().validate().is_ok()
    }

    /// One create or update call; the list refetches through `on_saved`.
    pub fn save(&self, on_saved: Callback<()>) {
        if !self.is_form_valid() || self.pending.get() {
            return;
        }

        let this = self.clone();
        let form = self.form.get();
        this.error.set(None);
        this.pending.set(true);
        leptos::task::spawn_local(async move {
            let request = form.to_request();
            let result = match form.id {
                Some(id) => api::update_building(id, &request).await,
                None => api::create_building(&request).await,
            };
            this.pending.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("saving building failed: {}", e);
                    let key = if form.id.is_some() {
                        "pages.buildings.edit.error.generic"
                    } else {
                        "pages.buildings.create.error.generic"
                    };
                    this.error.set(Some(key.to_string()));
                }
            }
        });
    }
}

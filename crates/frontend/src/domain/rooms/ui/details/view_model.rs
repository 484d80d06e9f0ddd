use super::draft::CharacteristicDraft;
use crate::domain::buildings::api as buildings_api;
use crate::domain::rooms::api;
use contracts::domain::building::Building;
use contracts::domain::room::{
    remove_characteristic, upsert_characteristic, Characteristic, Room, RoomCreateRequest,
    SEATS_TYPE, STANDARD_EQUIPMENT,
};
use leptos::prelude::*;
use uuid::Uuid;

/// ViewModel for the room create form.
///
/// Seats are kept as raw text and parsed on read, mirroring the numeric
/// input; characteristics collect the equipment picked via the quick-add
/// chips and the custom draft.
#[derive(Clone)]
pub struct RoomDetailsViewModel {
    pub name: RwSignal<String>,
    pub chem_symbol: RwSignal<String>,
    pub building_id: RwSignal<String>,
    pub seats: RwSignal<String>,
    pub characteristics: RwSignal<Vec<Characteristic>>,
    pub composed_of: RwSignal<Vec<String>>,
    pub draft: RwSignal<CharacteristicDraft>,

    pub buildings: RwSignal<Vec<Building>>,
    pub composable_rooms: RwSignal<Vec<Room>>,

    pub error: RwSignal<Option<String>>,
    pub pending: RwSignal<bool>,
}

impl RoomDetailsViewModel {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            chem_symbol: RwSignal::new(String::new()),
            building_id: RwSignal::new(String::new()),
            seats: RwSignal::new(String::new()),
            characteristics: RwSignal::new(Vec::new()),
            composed_of: RwSignal::new(Vec::new()),
            draft: RwSignal::new(CharacteristicDraft::default()),
            buildings: RwSignal::new(Vec::new()),
            composable_rooms: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            pending: RwSignal::new(false),
        }
    }

    /// Buildings for the select and composable rooms for the multi-pick.
    pub fn load_reference_data(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            match buildings_api::fetch_buildings().await {
                Ok(list) => this.buildings.set(list),
                Err(e) => {
                    log::error!("fetching buildings failed: {}", e);
                    this.error.set(Some("common.error.loading".to_string()));
                }
            }
        });

        let this = self.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_composable_rooms().await {
                Ok(list) => this.composable_rooms.set(list),
                Err(e) => {
                    log::error!("fetching composable rooms failed: {}", e);
                    this.error.set(Some("common.error.loading".to_string()));
                }
            }
        });
    }

    pub fn seats_value(&self) -> Option<f64> {
        self.seats.get().trim().parse::<f64>().ok()
    }

    pub fn seats_invalid(&self) -> bool {
        !self.seats.get().is_empty() && self.seats_value().map_or(true, |n| n <= 0.0)
    }

    pub fn composed_of_invalid(&self) -> bool {
        self.composed_of.get().len() == 1
    }

    pub fn is_form_valid(&self) -> bool {
        !self.name.get().trim().is_empty()
            && !self.chem_symbol.get().trim().is_empty()
            && !self.building_id.get().is_empty()
            && self.seats_value().map_or(false, |n| n > 0.0)
            && !self.composed_of_invalid()
    }

    /// Standard equipment chips still available for quick-add.
    pub fn available_standard_equipment(&self) -> Vec<&'static str> {
        let present = self.characteristics.get();
        STANDARD_EQUIPMENT
            .iter()
            .copied()
            .filter(|kind| !present.iter().any(|c| c.kind == *kind))
            .collect()
    }

    pub fn add_standard_equipment(&self, kind: &'static str) {
        self.characteristics
            .update(|list| upsert_characteristic(list, Characteristic::bool(kind, true)));
    }

    pub fn remove_characteristic(&self, kind: &str) {
        let kind = kind.to_string();
        self.characteristics
            .update(|list| remove_characteristic(list, &kind));
    }

    pub fn open_custom_form(&self) {
        self.draft.update(|d| d.open());
    }

    pub fn cancel_custom_form(&self) {
        self.draft.update(|d| d.cancel());
    }

    /// Commit the custom draft into the characteristic list. A draft that
    /// fails validation stays open; the add control is disabled anyway.
    pub fn commit_custom(&self) {
        let mut committed = None;
        self.draft.update(|d| committed = d.commit());
        if let Some(characteristic) = committed {
            self.characteristics
                .update(|list| upsert_characteristic(list, characteristic));
        }
    }

    fn build_request(&self) -> Result<RoomCreateRequest, String> {
        let building_id = Uuid::parse_str(&self.building_id.get())
            .map_err(|e| format!("invalid building id: {}", e))?;
        let composed_of = self
            .composed_of
            .get()
            .iter()
            .map(|id| Uuid::parse_str(id).map_err(|e| format!("invalid room id: {}", e)))
            .collect::<Result<Vec<_>, _>>()?;
        let seats = self
            .seats_value()
            .ok_or_else(|| "seat capacity is not a number".to_string())?;

        // SEATS first, then the picked equipment.
        let mut characteristics = vec![Characteristic::number(SEATS_TYPE, seats)];
        characteristics.extend(self.characteristics.get());

        let request = RoomCreateRequest {
            name: self.name.get(),
            chem_symbol: self.chem_symbol.get(),
            building_id,
            characteristics,
            composed_of,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn submit(&self, on_saved: Callback<()>) {
        if !self.is_form_valid() || self.pending.get() {
            return;
        }

        let request = match self.build_request() {
            Ok(request) => request,
            Err(e) => {
                log::error!("building room request failed: {}", e);
                self.error
                    .set(Some("pages.rooms.create.error.generic".to_string()));
                return;
            }
        };

        let this = self.clone();
        this.error.set(None);
        this.pending.set(true);
        leptos::task::spawn_local(async move {
            let result = api::create_room(&request).await;
            this.pending.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("creating room failed: {}", e);
                    this.error
                        .set(Some("pages.rooms.create.error.generic".to_string()));
                }
            }
        });
    }

    pub fn toggle_composed_of(&self, id: String, checked: bool) {
        self.composed_of.update(|list| {
            if checked {
                if !list.contains(&id) {
                    list.push(id);
                }
            } else {
                list.retain(|existing| *existing != id);
            }
        });
    }
}

//! Static translation table, `(german, english)` per key.

pub(crate) fn lookup(key: &str) -> Option<(&'static str, &'static str)> {
    let entry = match key {
        "app.title" => ("Raumverwaltung", "Room Administration"),

        "nav.buildings" => ("Gebäude", "Buildings"),
        "nav.rooms" => ("Räume", "Rooms"),
        "nav.bookings" => ("Buchungen", "Bookings"),

        "common.action.add" => ("Hinzufügen", "Add"),
        "common.action.cancel" => ("Abbrechen", "Cancel"),
        "common.action.create" => ("Erstellen", "Create"),
        "common.action.delete" => ("Löschen", "Delete"),
        "common.action.edit" => ("Bearbeiten", "Edit"),
        "common.action.save" => ("Speichern", "Save"),
        "common.value.type.boolean" => ("Wahrheitswert", "Boolean"),
        "common.value.type.number" => ("Zahl", "Number"),
        "common.value.type.string" => ("Text", "Text"),
        "common.value.true" => ("Ja", "Yes"),
        "common.value.false" => ("Nein", "No"),
        "common.error.loading" => ("Fehler beim Laden der Daten.", "Failed to load data."),
        "common.error.tryAgain" => (
            "Bitte versuchen Sie es später erneut.",
            "Please try again later.",
        ),

        "pages.buildings.title" => ("Gebäude", "Buildings"),
        "pages.buildings.actions.create" => ("Gebäude anlegen", "Create building"),
        "pages.buildings.labels.open" => ("Geöffnet", "Open"),
        "pages.buildings.labels.closed" => ("Geschlossen", "Closed"),
        "pages.buildings.empty.title" => ("Keine Gebäude gefunden", "No buildings found"),
        "pages.buildings.empty.noBuildings" => (
            "Es wurden noch keine Gebäude angelegt.",
            "No buildings have been created yet.",
        ),
        "pages.buildings.create.title" => ("Neues Gebäude", "New building"),
        "pages.buildings.create.description" => (
            "Legen Sie ein neues Gebäude mit Name und Adresse an.",
            "Create a new building with a name and address.",
        ),
        "pages.buildings.create.error.generic" => (
            "Das Gebäude konnte nicht angelegt werden.",
            "The building could not be created.",
        ),
        "pages.buildings.edit.title" => ("Gebäude bearbeiten", "Edit building"),
        "pages.buildings.edit.error.generic" => (
            "Das Gebäude konnte nicht gespeichert werden.",
            "The building could not be saved.",
        ),
        "pages.buildings.field.name" => ("Name", "Name"),
        "pages.buildings.field.name.placeholder" => ("z. B. B852", "e.g. B852"),
        "pages.buildings.field.address" => ("Adresse", "Address"),
        "pages.buildings.field.address.placeholder" => (
            "Straße und Hausnummer",
            "Street and number",
        ),
        "pages.buildings.field.description" => ("Beschreibung", "Description"),
        "pages.buildings.field.description.placeholder" => (
            "Optionale Beschreibung",
            "Optional description",
        ),
        "pages.buildings.delete.title" => ("Gebäude löschen", "Delete building"),
        "pages.buildings.delete.confirmation" => (
            "Möchten Sie das Gebäude \"{name}\" wirklich löschen?",
            "Do you really want to delete building \"{name}\"?",
        ),
        "pages.buildings.delete.hasRooms.title" => (
            "Gebäude enthält Räume",
            "Building contains rooms",
        ),
        "pages.buildings.delete.warning.hasRooms" => (
            "Ein Gebäude mit Räumen kann nicht gelöscht werden. Löschen Sie zuerst die Räume.",
            "A building with rooms cannot be deleted. Delete its rooms first.",
        ),
        "pages.buildings.delete.error.generic" => (
            "Das Gebäude konnte nicht gelöscht werden.",
            "The building could not be deleted.",
        ),
        "pages.buildings.delete.error.hasRooms" => (
            "Dieses Gebäude enthält noch Räume und kann nicht gelöscht werden.",
            "This building still contains rooms and cannot be deleted.",
        ),
        "pages.buildings.delete.deleting" => ("Wird gelöscht…", "Deleting…"),

        "pages.rooms.search.title" => ("Räume durchsuchen", "Search rooms"),
        "pages.rooms.search.placeholder" => ("Raumnummer suchen…", "Search by room number…"),
        "pages.rooms.actions.create" => ("Raum anlegen", "Create room"),
        "pages.rooms.actions.filter.selected" => ("Aktive Filter", "Active filters"),
        "pages.rooms.actions.filter.open" => ("Verfügbare Filter", "Available filters"),
        "pages.rooms.actions.filter.clearAll" => ("Alle Filter entfernen", "Clear all filters"),
        "pages.rooms.actions.filter.seats" => ("Sitzplätze", "Seats"),
        "pages.rooms.actions.filter.seats-small" => ("bis 25", "up to 25"),
        "pages.rooms.actions.filter.seats-medium" => ("26 bis 35", "26 to 35"),
        "pages.rooms.actions.filter.seats-large" => ("über 35", "more than 35"),
        "pages.rooms.actions.filter.equipment" => ("Ausstattung", "Equipment"),
        "pages.rooms.empty.title" => ("Keine Räume gefunden", "No rooms found"),
        "pages.rooms.empty.noRooms" => (
            "Es wurden noch keine Räume angelegt.",
            "No rooms have been created yet.",
        ),
        "pages.rooms.empty.searchNoResults" => (
            "Keine Räume entsprechen der aktuellen Suche oder den Filtern.",
            "No rooms match the current search or filters.",
        ),
        "pages.rooms.labels.equipment" => ("Ausstattung", "Equipment"),
        "pages.rooms.labels.noEquipment" => (
            "Keine Ausstattung hinterlegt",
            "No equipment recorded",
        ),
        "pages.rooms.labels.capacity" => ("Sitzplätze", "seats"),
        "pages.rooms.labels.available" => ("Verfügbar", "Available"),
        "pages.rooms.create.title" => ("Neuer Raum", "New room"),
        "pages.rooms.create.description" => (
            "Legen Sie einen neuen Raum mit Ausstattung an.",
            "Create a new room with its equipment.",
        ),
        "pages.rooms.create.error.generic" => (
            "Der Raum konnte nicht angelegt werden.",
            "The room could not be created.",
        ),
        "pages.rooms.field.number" => ("Raumnummer", "Room number"),
        "pages.rooms.field.placeholder.roomNumber" => ("z. B. 101", "e.g. 101"),
        "pages.rooms.field.chemSymbol" => ("Chemisches Symbol", "Chemistry symbol"),
        "pages.rooms.field.placeholder.chemSymbol" => ("z. B. He", "e.g. He"),
        "pages.rooms.field.building" => ("Gebäude", "Building"),
        "pages.rooms.field.building.placeholder" => ("Gebäude auswählen", "Select a building"),
        "pages.rooms.field.capacity" => ("Sitzplätze", "Seats"),
        "pages.rooms.field.capacity.placeholder" => (
            "Anzahl der Sitzplätze",
            "Number of seats",
        ),
        "pages.rooms.field.composedOf" => ("Zusammengesetzt aus", "Composed of"),
        "pages.rooms.field.composedOf.description" => (
            "Optional: Teilräume, aus denen dieser Raum besteht.",
            "Optional: partial rooms this room is combined from.",
        ),
        "pages.rooms.field.composedOf.noAvailableRooms" => (
            "Keine kombinierbaren Räume verfügbar",
            "No composable rooms available",
        ),
        "pages.rooms.field.composedOf.error.atLeastTwo" => (
            "Bitte wählen Sie mindestens zwei Räume aus.",
            "Please select at least two rooms.",
        ),
        "pages.rooms.field.equipment" => ("Ausstattung", "Equipment"),
        "pages.rooms.field.equipment.selected" => (
            "Ausgewählte Ausstattung",
            "Selected equipment",
        ),
        "pages.rooms.field.equipment.standard" => (
            "Standardausstattung",
            "Standard equipment",
        ),
        "pages.rooms.field.equipment.custom" => ("Eigene Ausstattung", "Custom equipment"),
        "pages.rooms.field.equipment.custom.add" => (
            "Eigene Ausstattung hinzufügen",
            "Add custom equipment",
        ),
        "pages.rooms.field.equipment.custom.error.reserved" => (
            "Dieser Typ ist reserviert.",
            "This type is reserved.",
        ),
        "pages.rooms.field.placeholder.customType" => (
            "Typ, z. B. SPEAKER",
            "Type, e.g. SPEAKER",
        ),
        "pages.rooms.field.placeholder.value" => ("Wert", "Value"),
        "pages.rooms.dialogs.delete.title" => ("Raum löschen", "Delete room"),
        "pages.rooms.dialogs.delete.confirmation" => (
            "Möchten Sie den Raum \"{roomName}\" wirklich löschen?",
            "Do you really want to delete room \"{roomName}\"?",
        ),
        "pages.rooms.dialogs.delete.warning.title" => ("Achtung", "Warning"),
        "pages.rooms.dialogs.delete.warning.permanent" => (
            "Das Löschen kann nicht rückgängig gemacht werden.",
            "Deleting cannot be undone.",
        ),
        "pages.rooms.dialogs.delete.warning.checkBookings" => (
            "Bestehende Buchungen verhindern das Löschen.",
            "Existing bookings prevent deletion.",
        ),
        "pages.rooms.dialogs.delete.warning.deleteBookings" => (
            "Alle Buchungen dieses Raums werden ebenfalls gelöscht.",
            "All bookings of this room will be deleted as well.",
        ),
        "pages.rooms.dialogs.delete.hasBookings.title" => (
            "Raum hat Buchungen. ",
            "Room has bookings. ",
        ),
        "pages.rooms.dialogs.delete.hasBookings.description" => (
            "Das Löschen ist nur mit erzwungenem Löschen möglich.",
            "Deletion is only possible with force delete.",
        ),
        "pages.rooms.dialogs.delete.forceDelete" => (
            "Löschen erzwingen (Buchungen werden gelöscht)",
            "Force delete (bookings will be removed)",
        ),
        "pages.rooms.dialogs.delete.deleting" => ("Wird gelöscht…", "Deleting…"),
        "pages.rooms.dialogs.delete.confirm" => ("Endgültig löschen", "Delete permanently"),
        "pages.rooms.dialogs.delete.error.generic" => (
            "Der Raum konnte nicht gelöscht werden.",
            "The room could not be deleted.",
        ),

        "pages.bookings.title" => ("Buchungen", "Bookings"),
        "pages.bookings.search.placeholder" => (
            "Raum oder Gebäude suchen…",
            "Search room or building…",
        ),
        "pages.bookings.filters.status" => ("Status filtern", "Filter by status"),
        "pages.bookings.filters.statusAll" => ("Alle Status", "All statuses"),
        "pages.bookings.filters.status.scheduled" => ("Geplant", "Scheduled"),
        "pages.bookings.filters.status.active" => ("Laufend", "Active"),
        "pages.bookings.filters.status.completed" => ("Beendet", "Completed"),
        "pages.bookings.filters.building" => ("Gebäude filtern", "Filter by building"),
        "pages.bookings.filters.buildingAll" => ("Alle Gebäude", "All buildings"),
        "pages.bookings.filters.room" => ("Raum filtern", "Filter by room"),
        "pages.bookings.filters.roomAll" => ("Alle Räume", "All rooms"),
        "pages.bookings.filters.dateRange" => ("Zeitraum", "Time range"),
        "pages.bookings.filters.fromDate" => ("Von", "From"),
        "pages.bookings.filters.toDate" => ("Bis", "To"),
        "pages.bookings.empty.title" => ("Keine Buchungen gefunden", "No bookings found"),
        "pages.bookings.empty.noBookings" => (
            "Es liegen keine Buchungen vor.",
            "There are no bookings.",
        ),
        "pages.bookings.empty.withFilters" => (
            "Keine Buchungen entsprechen den aktuellen Filtern.",
            "No bookings match the current filters.",
        ),
        "pages.bookings.labels.lecturers" => ("Dozenten", "Lecturers"),
        "pages.bookings.labels.studentGroups" => ("Studiengruppen", "Student groups"),

        _ => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve_in_both_languages() {
        let (de, en) = lookup("common.action.cancel").unwrap();
        assert_eq!(de, "Abbrechen");
        assert_eq!(en, "Cancel");
    }

    #[test]
    fn unknown_keys_resolve_to_none() {
        assert!(lookup("pages.rooms.does.not.exist").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn status_labels_exist_for_every_booking_status() {
        for status in ["scheduled", "active", "completed"] {
            let key = format!("pages.bookings.filters.status.{}", status);
            assert!(lookup(&key).is_some(), "missing translation for {}", key);
        }
    }
}

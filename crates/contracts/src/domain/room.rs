use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Characteristic type holding the seat capacity. Always numeric, required on
/// every room.
pub const SEATS_TYPE: &str = "SEATS";

/// Equipment types offered by the quick-add chips. Always boolean-valued when
/// added through that path.
pub const STANDARD_EQUIPMENT: [&str; 4] = ["PC", "WHITEBOARD", "BEAMER", "TELEVISION"];

static RESERVED_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set: HashSet<&'static str> = STANDARD_EQUIPMENT.iter().copied().collect();
    set.insert(SEATS_TYPE);
    set
});

/// Whether `candidate` collides (case-insensitively) with `SEATS` or one of
/// the standard equipment types. Custom characteristics must not use these.
pub fn is_reserved_type(candidate: &str) -> bool {
    RESERVED_TYPES.contains(candidate.to_uppercase().as_str())
}

/// Human form of a characteristic type: `WHITEBOARD` -> `Whiteboard`.
pub fn format_type(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Characteristic values arrive as plain JSON booleans, numbers or strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacteristicValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CharacteristicValue {
    pub fn is_bool(&self) -> bool {
        matches!(self, CharacteristicValue::Bool(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CharacteristicValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CharacteristicValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for CharacteristicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacteristicValue::Bool(b) => write!(f, "{}", b),
            CharacteristicValue::Number(n) if n.fract() == 0.0 => write!(f, "{:.0}", n),
            CharacteristicValue::Number(n) => write!(f, "{}", n),
            CharacteristicValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A typed attribute attached to a room, e.g. an equipment flag or the seat
/// count. At most one characteristic per type within a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: CharacteristicValue,
}

impl Characteristic {
    pub fn bool(kind: impl Into<String>, value: bool) -> Self {
        Self {
            kind: kind.into(),
            value: CharacteristicValue::Bool(value),
        }
    }

    pub fn number(kind: impl Into<String>, value: f64) -> Self {
        Self {
            kind: kind.into(),
            value: CharacteristicValue::Number(value),
        }
    }

    pub fn text(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: CharacteristicValue::Text(value.into()),
        }
    }

    pub fn matches_type(&self, other: &str) -> bool {
        self.kind.eq_ignore_ascii_case(other)
    }
}

/// Adds `incoming` to `list`, replacing the entry with the same type if one
/// already exists. The newest value wins.
pub fn upsert_characteristic(list: &mut Vec<Characteristic>, incoming: Characteristic) {
    match list.iter_mut().find(|c| c.kind == incoming.kind) {
        Some(existing) => *existing = incoming,
        None => list.push(incoming),
    }
}

pub fn remove_characteristic(list: &mut Vec<Characteristic>, kind: &str) {
    list.retain(|c| c.kind != kind);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub chem_symbol: String,
    pub building_id: Uuid,
    #[serde(default)]
    pub characteristics: Vec<Characteristic>,
    /// Partial rooms this room is combined from. Either empty or at least two
    /// entries; a room composed of exactly one other room is invalid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub composed_of: Vec<Uuid>,
}

impl Room {
    /// Seat capacity from the `SEATS` characteristic, if present and numeric.
    pub fn seats(&self) -> Option<f64> {
        self.characteristics
            .iter()
            .find(|c| c.kind == SEATS_TYPE)
            .and_then(|c| c.value.as_number())
    }

    /// Case-insensitive characteristic lookup by type.
    pub fn find_characteristic(&self, kind: &str) -> Option<&Characteristic> {
        self.characteristics.iter().find(|c| c.matches_type(kind))
    }
}

/// Body of `POST /rooms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreateRequest {
    pub name: String,
    pub chem_symbol: String,
    pub building_id: Uuid,
    pub characteristics: Vec<Characteristic>,
    pub composed_of: Vec<Uuid>,
}

impl RoomCreateRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.chem_symbol.trim().is_empty() {
            return Err("chemistry symbol must not be empty".into());
        }
        let seats = self
            .characteristics
            .iter()
            .find(|c| c.kind == SEATS_TYPE)
            .and_then(|c| c.value.as_number());
        match seats {
            Some(n) if n > 0.0 => {}
            _ => return Err("seat capacity must be greater than zero".into()),
        }
        if self.composed_of.len() == 1 {
            return Err("a composed room needs at least two partial rooms".into());
        }
        Ok(())
    }
}

/// Response envelope of `GET /rooms`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomsResponse {
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// Response of `GET /rooms/{id}/deletable`. `deletable` is false while
/// bookings still reference the room.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomDeletable {
    #[serde(default)]
    pub deletable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_with(characteristics: Vec<Characteristic>) -> Room {
        Room {
            id: Uuid::new_v4(),
            name: "101".to_string(),
            chem_symbol: "H".to_string(),
            building_id: Uuid::new_v4(),
            characteristics,
            composed_of: Vec::new(),
        }
    }

    fn create_request(seats: f64, composed_of: Vec<Uuid>) -> RoomCreateRequest {
        RoomCreateRequest {
            name: "101".to_string(),
            chem_symbol: "H".to_string(),
            building_id: Uuid::new_v4(),
            characteristics: vec![Characteristic::number(SEATS_TYPE, seats)],
            composed_of,
        }
    }

    #[test]
    fn value_round_trips_untagged() {
        let parsed: Vec<CharacteristicValue> =
            serde_json::from_str("[true, 25, \"black\"]").unwrap();
        assert_eq!(
            parsed,
            vec![
                CharacteristicValue::Bool(true),
                CharacteristicValue::Number(25.0),
                CharacteristicValue::Text("black".to_string()),
            ]
        );
        assert_eq!(serde_json::to_string(&parsed[1]).unwrap(), "25.0");
    }

    #[test]
    fn characteristic_uses_wire_name_type() {
        let json = serde_json::to_string(&Characteristic::bool("PC", true)).unwrap();
        assert_eq!(json, "{\"type\":\"PC\",\"value\":true}");
    }

    #[test]
    fn reserved_types_are_case_insensitive() {
        assert!(is_reserved_type("WHITEBOARD"));
        assert!(is_reserved_type("whiteboard"));
        assert!(is_reserved_type("Seats"));
        assert!(!is_reserved_type("SPEAKER"));
        assert!(!is_reserved_type(""));
    }

    #[test]
    fn upsert_replaces_existing_type_in_place() {
        let mut list = vec![
            Characteristic::bool("PC", true),
            Characteristic::text("SPEAKER", "mono"),
        ];
        upsert_characteristic(&mut list, Characteristic::text("SPEAKER", "stereo"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], Characteristic::text("SPEAKER", "stereo"));

        upsert_characteristic(&mut list, Characteristic::number(SEATS_TYPE, 30.0));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_drops_only_the_named_type() {
        let mut list = vec![
            Characteristic::bool("PC", true),
            Characteristic::bool("BEAMER", true),
        ];
        remove_characteristic(&mut list, "PC");
        assert_eq!(list, vec![Characteristic::bool("BEAMER", true)]);
    }

    #[test]
    fn seats_requires_the_exact_type_and_a_number() {
        let room = room_with(vec![Characteristic::number(SEATS_TYPE, 25.0)]);
        assert_eq!(room.seats(), Some(25.0));

        let text_seats = room_with(vec![Characteristic::text(SEATS_TYPE, "many")]);
        assert_eq!(text_seats.seats(), None);

        assert_eq!(room_with(Vec::new()).seats(), None);
    }

    #[test]
    fn find_characteristic_is_case_insensitive() {
        let room = room_with(vec![Characteristic::bool("WHITEBOARD", true)]);
        assert!(room.find_characteristic("whiteboard").is_some());
        assert!(room.find_characteristic("beamer").is_none());
    }

    #[test]
    fn create_request_rejects_invalid_seats() {
        assert!(create_request(20.0, Vec::new()).validate().is_ok());
        assert!(create_request(0.0, Vec::new()).validate().is_err());
        assert!(create_request(-5.0, Vec::new()).validate().is_err());

        let mut without_seats = create_request(20.0, Vec::new());
        without_seats.characteristics.clear();
        assert!(without_seats.validate().is_err());
    }

    #[test]
    fn create_request_rejects_a_single_partial_room() {
        assert!(create_request(20.0, vec![Uuid::new_v4()]).validate().is_err());
        assert!(create_request(20.0, vec![Uuid::new_v4(), Uuid::new_v4()])
            .validate()
            .is_ok());
    }

    #[test]
    fn format_type_capitalizes_one_word() {
        assert_eq!(format_type("WHITEBOARD"), "Whiteboard");
        assert_eq!(format_type("pc"), "Pc");
        assert_eq!(format_type(""), "");
    }
}

//! Filtering state of the rooms page: which facet filters exist, which are
//! active, and which rooms pass.

use contracts::domain::room::Room;

pub const CAPACITY_SMALL_MAX: f64 = 25.0;
pub const CAPACITY_MEDIUM_MAX: f64 = 35.0;

/// The three fixed seat-capacity buckets. They exist regardless of the data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityBucket {
    Small,
    Medium,
    Large,
}

impl CapacityBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityBucket::Small => "small",
            CapacityBucket::Medium => "medium",
            CapacityBucket::Large => "large",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            CapacityBucket::Small => "pages.rooms.actions.filter.seats-small",
            CapacityBucket::Medium => "pages.rooms.actions.filter.seats-medium",
            CapacityBucket::Large => "pages.rooms.actions.filter.seats-large",
        }
    }

    pub fn all() -> [CapacityBucket; 3] {
        [
            CapacityBucket::Small,
            CapacityBucket::Medium,
            CapacityBucket::Large,
        ]
    }

    /// Upper bounds are inclusive: 25 is small, 35 is medium.
    pub fn contains(&self, capacity: f64) -> bool {
        match self {
            CapacityBucket::Small => capacity <= CAPACITY_SMALL_MAX,
            CapacityBucket::Medium => {
                capacity > CAPACITY_SMALL_MAX && capacity <= CAPACITY_MEDIUM_MAX
            }
            CapacityBucket::Large => capacity > CAPACITY_MEDIUM_MAX,
        }
    }
}

/// A selectable facet value. Equipment filters are discovered from the room
/// data, capacity filters are fixed.
#[derive(Clone, Debug, PartialEq)]
pub enum RoomFilter {
    /// Lowercased characteristic type of a boolean characteristic.
    Equipment(String),
    Capacity(CapacityBucket),
}

impl RoomFilter {
    /// Stable `type-value` key, used as DOM test id for the filter chips.
    pub fn key(&self) -> String {
        match self {
            RoomFilter::Equipment(kind) => format!("{kind}-{kind}"),
            RoomFilter::Capacity(bucket) => format!("seats-{}", bucket.as_str()),
        }
    }
}

/// One filter per distinct boolean characteristic type across all rooms,
/// case-folded, in discovery order.
pub fn equipment_filters(rooms: &[Room]) -> Vec<RoomFilter> {
    let mut seen: Vec<String> = Vec::new();
    for room in rooms {
        for characteristic in &room.characteristics {
            if characteristic.value.is_bool() {
                let kind = characteristic.kind.to_lowercase();
                if !seen.contains(&kind) {
                    seen.push(kind);
                }
            }
        }
    }
    seen.into_iter().map(RoomFilter::Equipment).collect()
}

pub fn capacity_filters() -> Vec<RoomFilter> {
    CapacityBucket::all()
        .into_iter()
        .map(RoomFilter::Capacity)
        .collect()
}

/// Selectable filters: equipment first, then the capacity buckets, minus the
/// active set.
pub fn inactive_filters(rooms: &[Room], active: &[RoomFilter]) -> Vec<RoomFilter> {
    equipment_filters(rooms)
        .into_iter()
        .chain(capacity_filters())
        .filter(|filter| !active.contains(filter))
        .collect()
}

/// Pure membership flip.
pub fn toggle_filter(active: &mut Vec<RoomFilter>, filter: RoomFilter) {
    if let Some(pos) = active.iter().position(|f| *f == filter) {
        active.remove(pos);
    } else {
        active.push(filter);
    }
}

/// AND of the search term and every active filter. Filters never OR, even
/// within the same facet: selecting two capacity buckets matches nothing.
pub fn room_matches(room: &Room, search_term: &str, active: &[RoomFilter]) -> bool {
    if !room
        .name
        .to_lowercase()
        .contains(&search_term.to_lowercase())
    {
        return false;
    }

    active.iter().all(|filter| match filter {
        RoomFilter::Capacity(bucket) => {
            // A room without a numeric SEATS characteristic fails every bucket.
            let capacity = room.seats().unwrap_or(-1.0);
            bucket.contains(capacity)
        }
        RoomFilter::Equipment(kind) => match room.find_characteristic(kind) {
            // A present boolean must be true; any other present value counts.
            Some(characteristic) => characteristic.value.as_bool().unwrap_or(true),
            None => false,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::room::{Characteristic, SEATS_TYPE};
    use uuid::Uuid;

    fn room(name: &str, characteristics: Vec<Characteristic>) -> Room {
        Room {
            id: Uuid::new_v4(),
            name: name.to_string(),
            chem_symbol: "H".to_string(),
            building_id: Uuid::new_v4(),
            characteristics,
            composed_of: Vec::new(),
        }
    }

    fn seats(n: f64) -> Characteristic {
        Characteristic::number(SEATS_TYPE, n)
    }

    fn sample_rooms() -> Vec<Room> {
        vec![
            room(
                "101",
                vec![seats(20.0), Characteristic::bool("WHITEBOARD", true)],
            ),
            room("202", vec![seats(30.0)]),
            room("303", vec![seats(40.0)]),
        ]
    }

    fn matched_names(rooms: &[Room], search: &str, active: &[RoomFilter]) -> Vec<String> {
        rooms
            .iter()
            .filter(|r| room_matches(r, search, active))
            .map(|r| r.name.clone())
            .collect()
    }

    #[test]
    fn capacity_filters_exist_regardless_of_data() {
        let filters = inactive_filters(&[], &[]);
        assert_eq!(filters, capacity_filters());
        assert_eq!(filters.len(), 3);
    }

    #[test]
    fn equipment_filters_come_from_boolean_characteristics_only() {
        let rooms = vec![
            room(
                "101",
                vec![
                    seats(20.0),
                    Characteristic::bool("WHITEBOARD", true),
                    Characteristic::text("COLOR", "blue"),
                ],
            ),
            // Duplicate type in another casing folds into one filter, a
            // boolean false still announces the equipment type.
            room(
                "202",
                vec![
                    Characteristic::bool("Whiteboard", false),
                    Characteristic::bool("PC", true),
                ],
            ),
        ];
        assert_eq!(
            equipment_filters(&rooms),
            vec![
                RoomFilter::Equipment("whiteboard".to_string()),
                RoomFilter::Equipment("pc".to_string()),
            ]
        );
    }

    #[test]
    fn inactive_filters_orders_equipment_before_capacity_and_removes_active() {
        let rooms = sample_rooms();
        let active = vec![
            RoomFilter::Equipment("whiteboard".to_string()),
            RoomFilter::Capacity(CapacityBucket::Medium),
        ];
        assert_eq!(
            inactive_filters(&rooms, &active),
            vec![
                RoomFilter::Capacity(CapacityBucket::Small),
                RoomFilter::Capacity(CapacityBucket::Large),
            ]
        );
    }

    #[test]
    fn toggle_is_a_membership_flip() {
        let mut active = Vec::new();
        let filter = RoomFilter::Capacity(CapacityBucket::Small);
        toggle_filter(&mut active, filter.clone());
        assert_eq!(active.len(), 1);
        toggle_filter(&mut active, filter);
        assert!(active.is_empty());
    }

    #[test]
    fn capacity_bucket_boundaries_are_inclusive_above() {
        assert!(CapacityBucket::Small.contains(25.0));
        assert!(!CapacityBucket::Medium.contains(25.0));
        assert!(CapacityBucket::Medium.contains(26.0));
        assert!(!CapacityBucket::Small.contains(26.0));
        assert!(CapacityBucket::Medium.contains(35.0));
        assert!(CapacityBucket::Large.contains(36.0));
        assert!(!CapacityBucket::Medium.contains(36.0));
    }

    #[test]
    fn missing_seats_fails_every_bucket() {
        let bare = room("101", vec![Characteristic::bool("PC", true)]);
        for bucket in CapacityBucket::all() {
            assert!(!room_matches(
                &bare,
                "",
                &[RoomFilter::Capacity(bucket)]
            ));
        }
    }

    #[test]
    fn equipment_filter_requires_true_or_a_defined_value() {
        let with_false = room("101", vec![Characteristic::bool("PC", false)]);
        let with_true = room("202", vec![Characteristic::bool("PC", true)]);
        let with_text = room("303", vec![Characteristic::text("pc", "two towers")]);
        let filter = [RoomFilter::Equipment("pc".to_string())];

        assert!(!room_matches(&with_false, "", &filter));
        assert!(room_matches(&with_true, "", &filter));
        assert!(room_matches(&with_text, "", &filter));
    }

    #[test]
    fn search_is_a_case_insensitive_substring_match() {
        let rooms = vec![room("Lab A", Vec::new()), room("Lab B", Vec::new())];
        assert_eq!(matched_names(&rooms, "lab", &[]), vec!["Lab A", "Lab B"]);
        assert_eq!(matched_names(&rooms, "b", &[]), vec!["Lab A", "Lab B"]);
        assert_eq!(matched_names(&rooms, "A", &[]), vec!["Lab A"]);
        assert!(matched_names(&rooms, "zzz", &[]).is_empty());
    }

    #[test]
    fn spec_scenario_search_and_filters() {
        let rooms = sample_rooms();

        assert_eq!(matched_names(&rooms, "2", &[]), vec!["202"]);

        let small = vec![RoomFilter::Capacity(CapacityBucket::Small)];
        assert_eq!(matched_names(&rooms, "", &small), vec!["101"]);

        let small_and_whiteboard = vec![
            RoomFilter::Capacity(CapacityBucket::Small),
            RoomFilter::Equipment("whiteboard".to_string()),
        ];
        assert_eq!(matched_names(&rooms, "", &small_and_whiteboard), vec!["101"]);

        assert_eq!(matched_names(&rooms, "", &[]), vec!["101", "202", "303"]);
    }

    #[test]
    fn two_capacity_buckets_together_match_nothing() {
        let rooms = sample_rooms();
        let both = vec![
            RoomFilter::Capacity(CapacityBucket::Small),
            RoomFilter::Capacity(CapacityBucket::Medium),
        ];
        assert!(matched_names(&rooms, "", &both).is_empty());
    }

    #[test]
    fn adding_a_filter_never_grows_the_matched_set() {
        let rooms = sample_rooms();
        let filters = [
            RoomFilter::Equipment("whiteboard".to_string()),
            RoomFilter::Capacity(CapacityBucket::Small),
            RoomFilter::Capacity(CapacityBucket::Large),
        ];

        for first in &filters {
            let base = matched_names(&rooms, "", std::slice::from_ref(first));
            for second in &filters {
                let narrowed =
                    matched_names(&rooms, "", &[first.clone(), second.clone()]);
                assert!(
                    narrowed.iter().all(|name| base.contains(name)),
                    "{:?} + {:?} grew the matched set",
                    first,
                    second
                );
            }
        }
    }
}

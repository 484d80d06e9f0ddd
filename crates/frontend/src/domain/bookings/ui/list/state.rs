//! Joining and filtering of the read-only bookings list.

use chrono::{DateTime, Utc};
use contracts::domain::booking::{Booking, BookingStatus};
use contracts::domain::building::Building;
use contracts::domain::room::Room;

/// A booking joined with its room and building names for display and
/// filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingRow {
    pub booking: Booking,
    pub room_name: String,
    pub building_name: String,
}

impl BookingRow {
    /// `Building-Room` label used by the room filter dropdown.
    pub fn room_label(&self) -> String {
        format!("{}-{}", self.building_name, self.room_name)
    }
}

/// Join bookings with rooms and buildings. Nothing is produced until every
/// source list has content; an unknown reference degrades to `-`.
pub fn build_rows(bookings: &[Booking], rooms: &[Room], buildings: &[Building]) -> Vec<BookingRow> {
    if bookings.is_empty() || rooms.is_empty() || buildings.is_empty() {
        return Vec::new();
    }

    bookings
        .iter()
        .map(|booking| {
            let room = rooms.iter().find(|r| r.id == booking.room_id);
            let building =
                room.and_then(|r| buildings.iter().find(|b| b.id == r.building_id));
            BookingRow {
                booking: booking.clone(),
                room_name: room.map(|r| r.name.clone()).unwrap_or_else(|| "-".to_string()),
                building_name: building
                    .map(|b| b.name.clone())
                    .unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect()
}

/// Current filter selections of the bookings page. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingFilters {
    pub search_term: String,
    pub status: Option<BookingStatus>,
    pub building: Option<String>,
    pub room: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl BookingFilters {
    pub fn any_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.status.is_some()
            || self.building.is_some()
            || self.room.is_some()
            || self.from.is_some()
            || self.to.is_some()
    }
}

/// AND of every selected facet; the result is sorted by start time.
///
/// Date semantics: with both bounds set the booking interval must overlap
/// the filter interval; a single bound constrains the booking start only.
pub fn filter_rows(
    rows: &[BookingRow],
    filters: &BookingFilters,
    now: DateTime<Utc>,
) -> Vec<BookingRow> {
    let needle = filters.search_term.to_lowercase();

    let mut result: Vec<BookingRow> = rows
        .iter()
        .filter(|row| {
            let matches_search = row.room_name.to_lowercase().contains(&needle)
                || row.building_name.to_lowercase().contains(&needle);

            let matches_status = filters
                .status
                .map_or(true, |status| row.booking.status_at(now) == status);

            let matches_building = filters
                .building
                .as_deref()
                .map_or(true, |building| row.building_name == building);

            let matches_room = filters
                .room
                .as_deref()
                .map_or(true, |room| row.room_label() == room);

            let matches_date = match (filters.from, filters.to) {
                (Some(from), Some(to)) => {
                    row.booking.start_time < to && row.booking.end_time > from
                }
                (Some(from), None) => row.booking.start_time >= from,
                (None, Some(to)) => row.booking.start_time <= to,
                (None, None) => true,
            };

            matches_search && matches_status && matches_building && matches_room && matches_date
        })
        .cloned()
        .collect();

    result.sort_by_key(|row| row.booking.start_time);
    result
}

/// Building names for the dropdown, sorted alphabetically.
pub fn building_options(buildings: &[Building]) -> Vec<String> {
    let mut names: Vec<String> = buildings.iter().map(|b| b.name.clone()).collect();
    names.sort();
    names
}

/// `Building-Room` labels for the dropdown, narrowed by the selected
/// building, sorted alphabetically.
pub fn room_options(
    rooms: &[Room],
    buildings: &[Building],
    building_filter: Option<&str>,
) -> Vec<String> {
    let mut labels: Vec<String> = rooms
        .iter()
        .filter_map(|room| {
            let building = buildings.iter().find(|b| b.id == room.building_id);
            let building_name = building.map(|b| b.name.as_str()).unwrap_or("-");
            if let Some(filter) = building_filter {
                if building_name != filter {
                    return None;
                }
            }
            Some(format!("{}-{}", building_name, room.name))
        })
        .collect();
    labels.sort();
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::building::BuildingState;
    use uuid::Uuid;

    fn building(name: &str) -> Building {
        Building {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: "Campusallee 1".to_string(),
            description: None,
            state: BuildingState::Open,
        }
    }

    fn room(name: &str, building_id: Uuid) -> Room {
        Room {
            id: Uuid::new_v4(),
            name: name.to_string(),
            chem_symbol: "H".to_string(),
            building_id,
            characteristics: Vec::new(),
            composed_of: Vec::new(),
        }
    }

    fn booking(room_id: Uuid, start_hour: u32, end_hour: u32) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            room_id,
            start_time: Utc.with_ymd_and_hms(2025, 5, 12, start_hour, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 5, 12, end_hour, 0, 0).unwrap(),
            lecturer_ids: vec![Uuid::new_v4()],
            student_group_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
        }
    }

    fn fixture() -> (Vec<Booking>, Vec<Room>, Vec<Building>) {
        let b852 = building("B852");
        let b853 = building("B853");
        let r101 = room("101", b852.id);
        let r202 = room("202", b853.id);
        let bookings = vec![booking(r202.id, 14, 16), booking(r101.id, 10, 12)];
        (bookings, vec![r101, r202], vec![b852, b853])
    }

    #[test]
    fn rows_require_all_three_sources() {
        let (bookings, rooms, buildings) = fixture();
        assert!(build_rows(&bookings, &rooms, &[]).is_empty());
        assert!(build_rows(&bookings, &[], &buildings).is_empty());
        assert!(build_rows(&[], &rooms, &buildings).is_empty());
        assert_eq!(build_rows(&bookings, &rooms, &buildings).len(), 2);
    }

    #[test]
    fn unknown_references_degrade_to_dashes() {
        let (mut bookings, rooms, buildings) = fixture();
        bookings.push(booking(Uuid::new_v4(), 8, 9));
        let rows = build_rows(&bookings, &rooms, &buildings);
        assert_eq!(rows[2].room_name, "-");
        assert_eq!(rows[2].building_name, "-");
    }

    #[test]
    fn result_is_sorted_by_start_time() {
        let (bookings, rooms, buildings) = fixture();
        let rows = build_rows(&bookings, &rooms, &buildings);
        let now = Utc.with_ymd_and_hms(2025, 5, 12, 9, 0, 0).unwrap();
        let filtered = filter_rows(&rows, &BookingFilters::default(), now);
        assert_eq!(filtered[0].room_name, "101");
        assert_eq!(filtered[1].room_name, "202");
    }

    #[test]
    fn search_covers_room_and_building_names() {
        let (bookings, rooms, buildings) = fixture();
        let rows = build_rows(&bookings, &rooms, &buildings);
        let now = Utc.with_ymd_and_hms(2025, 5, 12, 9, 0, 0).unwrap();

        let by_room = BookingFilters {
            search_term: "101".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_rows(&rows, &by_room, now).len(), 1);

        let by_building = BookingFilters {
            search_term: "b853".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_rows(&rows, &by_building, now).len(), 1);
        assert_eq!(filter_rows(&rows, &by_building, now)[0].room_name, "202");
    }

    #[test]
    fn status_filter_derives_from_now() {
        let (bookings, rooms, buildings) = fixture();
        let rows = build_rows(&bookings, &rooms, &buildings);
        // 11:00 - the 10-12 booking runs, the 14-16 one is still scheduled.
        let now = Utc.with_ymd_and_hms(2025, 5, 12, 11, 0, 0).unwrap();

        let active = BookingFilters {
            status: Some(BookingStatus::Active),
            ..Default::default()
        };
        let result = filter_rows(&rows, &active, now);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].room_name, "101");

        let scheduled = BookingFilters {
            status: Some(BookingStatus::Scheduled),
            ..Default::default()
        };
        let result = filter_rows(&rows, &scheduled, now);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].room_name, "202");
    }

    #[test]
    fn room_filter_uses_the_building_room_label() {
        let (bookings, rooms, buildings) = fixture();
        let rows = build_rows(&bookings, &rooms, &buildings);
        let now = Utc.with_ymd_and_hms(2025, 5, 12, 9, 0, 0).unwrap();

        let filters = BookingFilters {
            room: Some("B852-101".to_string()),
            ..Default::default()
        };
        let result = filter_rows(&rows, &filters, now);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].building_name, "B852");
    }

    #[test]
    fn date_bounds_follow_the_overlap_semantics() {
        let (bookings, rooms, buildings) = fixture();
        let rows = build_rows(&bookings, &rooms, &buildings);
        let now = Utc.with_ymd_and_hms(2025, 5, 12, 9, 0, 0).unwrap();
        let at = |h| Utc.with_ymd_and_hms(2025, 5, 12, h, 0, 0).unwrap();

        // Window 11-15 overlaps both bookings (10-12 and 14-16).
        let window = BookingFilters {
            from: Some(at(11)),
            to: Some(at(15)),
            ..Default::default()
        };
        assert_eq!(filter_rows(&rows, &window, now).len(), 2);

        // Window 12-13 touches neither interval interior.
        let gap = BookingFilters {
            from: Some(at(12)),
            to: Some(at(13)),
            ..Default::default()
        };
        assert!(filter_rows(&rows, &gap, now).is_empty());

        // A lone lower bound constrains the booking start.
        let from_only = BookingFilters {
            from: Some(at(11)),
            ..Default::default()
        };
        assert_eq!(filter_rows(&rows, &from_only, now).len(), 1);
        assert_eq!(filter_rows(&rows, &from_only, now)[0].room_name, "202");

        // A lone upper bound too.
        let to_only = BookingFilters {
            to: Some(at(11)),
            ..Default::default()
        };
        assert_eq!(filter_rows(&rows, &to_only, now).len(), 1);
        assert_eq!(filter_rows(&rows, &to_only, now)[0].room_name, "101");
    }

    #[test]
    fn dropdown_options_are_sorted_and_narrowed() {
        let (_, rooms, buildings) = fixture();
        assert_eq!(building_options(&buildings), vec!["B852", "B853"]);
        assert_eq!(
            room_options(&rooms, &buildings, None),
            vec!["B852-101", "B853-202"]
        );
        assert_eq!(
            room_options(&rooms, &buildings, Some("B853")),
            vec!["B853-202"]
        );
        assert!(room_options(&rooms, &buildings, Some("B999")).is_empty());
    }
}

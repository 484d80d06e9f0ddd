use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub room_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub lecturer_ids: Vec<Uuid>,
    #[serde(default)]
    pub student_group_ids: Vec<Uuid>,
}

/// Derived from the clock, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Active,
    Scheduled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::Scheduled => "scheduled",
            BookingStatus::Completed => "completed",
        }
    }
}

impl Booking {
    /// Status relative to `now`. Both boundaries count as active.
    pub fn status_at(&self, now: DateTime<Utc>) -> BookingStatus {
        if now < self.start_time {
            BookingStatus::Scheduled
        } else if now > self.end_time {
            BookingStatus::Completed
        } else {
            BookingStatus::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn booking() -> Booking {
        Booking {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            start_time: Utc.with_ymd_and_hms(2025, 5, 12, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 5, 12, 12, 0, 0).unwrap(),
            lecturer_ids: Vec::new(),
            student_group_ids: Vec::new(),
        }
    }

    #[test]
    fn status_inside_the_interval_is_active() {
        let at = Utc.with_ymd_and_hms(2025, 5, 12, 11, 0, 0).unwrap();
        assert_eq!(booking().status_at(at), BookingStatus::Active);
    }

    #[test]
    fn status_on_both_boundaries_is_active() {
        let b = booking();
        assert_eq!(b.status_at(b.start_time), BookingStatus::Active);
        assert_eq!(b.status_at(b.end_time), BookingStatus::Active);
    }

    #[test]
    fn status_before_start_is_scheduled() {
        let at = Utc.with_ymd_and_hms(2025, 5, 12, 9, 59, 59).unwrap();
        assert_eq!(booking().status_at(at), BookingStatus::Scheduled);
    }

    #[test]
    fn status_after_end_is_completed() {
        let at = Utc.with_ymd_and_hms(2025, 5, 12, 12, 0, 1).unwrap();
        assert_eq!(booking().status_at(at), BookingStatus::Completed);
    }

    #[test]
    fn booking_parses_iso_timestamps() {
        let json = format!(
            "{{\"id\":\"{}\",\"roomId\":\"{}\",\"startTime\":\"2025-05-12T10:00:00Z\",\"endTime\":\"2025-05-12T12:00:00Z\",\"lecturerIds\":[],\"studentGroupIds\":[]}}",
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let parsed: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.start_time,
            Utc.with_ymd_and_hms(2025, 5, 12, 10, 0, 0).unwrap()
        );
    }
}

//! Entity shapes exchanged with the room administration REST API, plus the
//! pure rules that belong to those shapes. No I/O here.

pub mod booking;
pub mod building;
pub mod room;

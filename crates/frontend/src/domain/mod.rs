pub mod bookings;
pub mod buildings;
pub mod rooms;

mod view;
mod view_model;

pub mod draft;

pub use view::RoomDetails;

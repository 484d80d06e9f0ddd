use crate::shared::api_utils::api_url;
use contracts::domain::room::{Room, RoomCreateRequest, RoomDeletable, RoomsResponse};
use gloo_net::http::Request;
use uuid::Uuid;

async fn fetch_room_list(path: &str) -> Result<Vec<Room>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch rooms: {}", response.status()));
    }

    response
        .json::<RoomsResponse>()
        .await
        .map(|r| r.rooms)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch all rooms.
pub async fn fetch_rooms() -> Result<Vec<Room>, String> {
    fetch_room_list("/rooms").await
}

/// Rooms eligible to be combined into a composite room.
pub async fn fetch_composable_rooms() -> Result<Vec<Room>, String> {
    fetch_room_list("/rooms?composable=true").await
}

/// Create a new room.
pub async fn create_room(request: &RoomCreateRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/rooms"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create room: {}", response.status()));
    }

    Ok(())
}

/// Whether the room can be deleted, i.e. no bookings reference it.
pub async fn is_room_deletable(id: Uuid) -> Result<RoomDeletable, String> {
    let response = Request::get(&api_url(&format!("/rooms/{}/deletable", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to check room: {}", response.status()));
    }

    response
        .json::<RoomDeletable>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a room. With `force`, the server also removes bookings that still
/// reference it.
pub async fn delete_room(id: Uuid, force: bool) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/rooms/{}?force={}", id, force)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete room: {}", response.status()));
    }

    Ok(())
}

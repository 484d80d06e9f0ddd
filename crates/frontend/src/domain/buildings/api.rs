use crate::shared::api_utils::api_url;
use contracts::domain::building::{Building, BuildingCreateRequest, BuildingsResponse};
use contracts::domain::room::Room;
use gloo_net::http::Request;
use uuid::Uuid;

/// Fetch all buildings.
pub async fn fetch_buildings() -> Result<Vec<Building>, String> {
    let response = Request::get(&api_url("/buildings"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch buildings: {}", response.status()));
    }

    response
        .json::<BuildingsResponse>()
        .await
        .map(|r| r.buildings)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new building.
pub async fn create_building(request: &BuildingCreateRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/buildings"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create building: {}", response.status()));
    }

    Ok(())
}

/// Update an existing building.
pub async fn update_building(id: Uuid, request: &BuildingCreateRequest) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/buildings/{}", id)))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update building: {}", response.status()));
    }

    Ok(())
}

/// Delete a building. The server rejects the call while rooms exist in it.
pub async fn delete_building(id: Uuid) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/buildings/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete building: {}", response.status()));
    }

    Ok(())
}

/// Rooms located in one building; used to gate deletion client-side.
pub async fn fetch_rooms_for_building(id: Uuid) -> Result<Vec<Room>, String> {
    let response = Request::get(&api_url(&format!("/buildings/{}/rooms", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch rooms: {}", response.status()));
    }

    response
        .json::<Vec<Room>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

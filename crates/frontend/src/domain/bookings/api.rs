use crate::shared::api_utils::api_url;
use contracts::domain::booking::Booking;
use gloo_net::http::Request;

/// Fetch all bookings. The booking list is read-only in this client.
pub async fn fetch_bookings() -> Result<Vec<Booking>, String> {
    let response = Request::get(&api_url("/bookings"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch bookings: {}", response.status()));
    }

    response
        .json::<Vec<Booking>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

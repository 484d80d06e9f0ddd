use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a building.
///
/// A building that still contains rooms must not be closed or deleted; the
/// server enforces that rule and the client only surfaces the rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingState {
    #[default]
    Open,
    Closed,
}

impl BuildingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingState::Open => "open",
            BuildingState::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub state: BuildingState,
}

/// Body of `POST /buildings` and `PUT /buildings/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingCreateRequest {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BuildingCreateRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.address.trim().is_empty() {
            return Err("address must not be empty".into());
        }
        Ok(())
    }
}

/// Response envelope of `GET /buildings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingsResponse {
    #[serde(default)]
    pub buildings: Vec<Building>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, address: &str) -> BuildingCreateRequest {
        BuildingCreateRequest {
            name: name.to_string(),
            address: address.to_string(),
            description: None,
        }
    }

    #[test]
    fn validate_requires_name_and_address() {
        assert!(request("B852", "Industriepark 1").validate().is_ok());
        assert!(request("", "Industriepark 1").validate().is_err());
        assert!(request("B852", "   ").validate().is_err());
    }

    #[test]
    fn state_round_trips_as_lowercase() {
        let json = serde_json::to_string(&BuildingState::Closed).unwrap();
        assert_eq!(json, "\"closed\"");
        let state: BuildingState = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(state, BuildingState::Open);
    }

    #[test]
    fn missing_state_defaults_to_open() {
        let json = format!(
            "{{\"id\":\"{}\",\"name\":\"B852\",\"address\":\"Industriepark 1\"}}",
            Uuid::new_v4()
        );
        let building: Building = serde_json::from_str(&json).unwrap();
        assert_eq!(building.state, BuildingState::Open);
        assert_eq!(building.description, None);
    }
}

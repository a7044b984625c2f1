//! Wire types for the random-user API.
//!
//! Only the fields the app reads are deserialized; serde ignores the rest
//! of the payload. `serde(default)` keeps older or trimmed payloads (and
//! test fixtures) parsing.

use serde::{Deserialize, Serialize};

/// Top-level payload of `GET /api/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<UserRecord>,
}

/// A single generated user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub login: UserLogin,
    pub name: UserName,
    pub location: UserLocation,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub picture: UserPicture,
}

impl UserRecord {
    /// Stable identity for delete operations.
    pub fn uuid(&self) -> &str {
        &self.login.uuid
    }

    pub fn first_name(&self) -> &str {
        &self.name.first
    }

    pub fn last_name(&self) -> &str {
        &self.name.last
    }

    pub fn country(&self) -> &str {
        &self.location.country
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLogin {
    pub uuid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLocation {
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPicture {
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub large: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_real_payload_shape() {
        let raw = r#"{
            "results": [{
                "name": {"title": "Ms", "first": "Jane", "last": "Doe"},
                "location": {"street": {"number": 1, "name": "Main St"}, "country": "Norway"},
                "email": "jane.doe@example.com",
                "login": {"uuid": "11-22", "username": "janedoe"},
                "picture": {"large": "l.jpg", "medium": "m.jpg", "thumbnail": "t.jpg"}
            }],
            "info": {"seed": "ricks", "results": 1, "page": 1}
        }"#;

        let parsed: RandomUserResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.results.len(), 1);

        let user = &parsed.results[0];
        assert_eq!(user.uuid(), "11-22");
        assert_eq!(user.first_name(), "Jane");
        assert_eq!(user.last_name(), "Doe");
        assert_eq!(user.country(), "Norway");
        assert_eq!(user.picture.thumbnail, "t.jpg");
    }

    #[test]
    fn missing_optional_fields_default() {
        let raw = r#"{
            "results": [{
                "name": {"first": "Jane", "last": "Doe"},
                "location": {"country": "Norway"},
                "login": {"uuid": "11-22"}
            }]
        }"#;

        let parsed: RandomUserResponse = serde_json::from_str(raw).unwrap();
        let user = &parsed.results[0];
        assert!(user.email.is_empty());
        assert!(user.picture.thumbnail.is_empty());
    }
}

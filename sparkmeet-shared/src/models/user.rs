use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Gender of an account, as the matchmaking backend understands it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Man,
    Woman,
}

impl Gender {
    /// Return the canonical string the backend stores.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Man => "man",
            Self::Woman => "woman",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "man" => Ok(Self::Man),
            "woman" => Ok(Self::Woman),
            _ => Err("unknown gender"),
        }
    }
}

/// A full user profile as returned by `/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user.
    #[serde(rename = "_id")]
    pub id: String,

    /// The user's login name.
    pub username: String,

    /// Whether the user has administrator rights.
    #[serde(default)]
    pub is_admin: bool,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub surname: String,

    /// Contact email address.
    pub email: String,

    /// Contact phone number.
    pub phone: String,

    /// Home town shown on the profile.
    pub location: String,

    /// The user's gender, used for seating at speed-dating rounds.
    pub gender: Gender,

    /// Age in years.
    pub age: u8,

    /// Ids of the interests picked on the profile, at most five.
    #[serde(default)]
    pub interests: Vec<String>,

    /// Ids of the events the user is registered for.
    #[serde(default)]
    pub registered_events: Vec<String>,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub username: String,
    pub password: String,
    pub repeat_password: String,
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub gender: Gender,
    pub age: u8,
    pub interests: Vec<String>,
}

/// Partial profile update for `PUT /users`; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_round_trip() {
        for (text, gender) in [("man", Gender::Man), ("woman", Gender::Woman)] {
            assert_eq!(gender.as_str(), text);
            assert_eq!(gender.to_string(), text);
            assert_eq!(Gender::from_str(text).unwrap(), gender);
        }
        assert!(Gender::from_str("other").is_err());
    }

    #[test]
    fn user_parses_mongo_style_document() {
        let json = r#"{
            "_id": "65f0c1",
            "username": "alice",
            "isAdmin": false,
            "firstName": "Alice",
            "surname": "Ng",
            "email": "alice@example.com",
            "phone": "0701234567",
            "location": "Sundsvall",
            "gender": "woman",
            "age": 29,
            "interests": ["i1", "i2"],
            "registeredEvents": []
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "65f0c1");
        assert_eq!(user.gender, Gender::Woman);
        assert_eq!(user.interests.len(), 2);
    }

    #[test]
    fn user_update_omits_unset_fields() {
        let update = UserUpdate {
            location: Some("Stockholm".to_string()),
            ..UserUpdate::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"location":"Stockholm"}"#);
    }
}

use serde::{Deserialize, Serialize};

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The username of the account signing in.
    pub username: String,

    /// The plain-text password to validate.
    pub password: String,
}

/// The user portion of a successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    /// Unique identifier of the authenticated user.
    pub user_id: String,

    /// The account's username.
    pub username: String,

    /// Whether the account has administrator rights.
    pub is_admin: bool,
}

/// Response body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// The authenticated user.
    pub user: LoginUser,
}

/// Response body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationResponse {
    /// The newly created account.
    pub user: LoginUser,
}

/// The identity blob persisted in browser session storage.
///
/// Replaced wholesale on login and removed on logout; its presence is the
/// single source of truth for "signed in".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique identifier of the signed-in user.
    pub id: String,

    /// The signed-in user's username.
    pub username: String,

    /// Whether the signed-in user is an administrator.
    pub is_admin: bool,
}

impl Identity {
    /// Build the persisted identity from a login response payload.
    #[must_use]
    pub fn from_login(user: LoginUser) -> Self {
        Self {
            id: user.user_id,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips_through_storage_shape() {
        let identity = Identity {
            id: "u1".to_string(),
            username: "alice".to_string(),
            is_admin: false,
        };

        let raw = serde_json::to_string(&identity).unwrap();
        assert!(raw.contains("\"isAdmin\":false"), "storage blob keeps the camelCase flag: {raw}");

        let parsed: Identity = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, identity);
    }

    #[test]
    fn login_response_uses_backend_field_names() {
        let json = r#"{"user":{"userId":"u1","username":"alice","isAdmin":true}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.user.user_id, "u1");
        assert_eq!(response.user.username, "alice");
        assert!(response.user.is_admin);
    }

    #[test]
    fn identity_from_login_keeps_all_fields() {
        let user = LoginUser {
            user_id: "u2".to_string(),
            username: "bob".to_string(),
            is_admin: true,
        };

        let identity = Identity::from_login(user);
        assert_eq!(identity.id, "u2");
        assert_eq!(identity.username, "bob");
        assert!(identity.is_admin);
    }
}

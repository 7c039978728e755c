//! Tests for the API client.
//!
//! Validates URL shaping and error surfacing; the request/response cycle
//! itself is covered by the typed models in the `shared` crate.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, SparkMeetClient};
    use reqwest::StatusCode;

    #[test]
    fn client_creation() {
        let _client = SparkMeetClient::new("http://localhost:3000/api/v1");
    }

    /// The picture URL helper is a plain join on the base URL; a trailing
    /// slash on the base must not double up.
    #[test]
    fn picture_urls_join_cleanly() {
        let client = SparkMeetClient::new("/api/v1/");
        assert_eq!(client.user_picture_url("u1"), "/api/v1/users/u1/pictures");
    }

    /// Server errors display as the backend's own message, which pages
    /// show to the user verbatim.
    #[test]
    fn server_error_displays_backend_message() {
        let err = ApiError::Server {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}

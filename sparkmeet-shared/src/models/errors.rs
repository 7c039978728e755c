use serde::{Deserialize, Serialize};

/// The error body the backend attaches to every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable reason, surfaced verbatim to the user.
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error payload with the given message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_error_body() {
        let body: ErrorResponse = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.error, "Invalid credentials");
        assert_eq!(body.to_string(), "Invalid credentials");
    }

    #[test]
    fn builds_from_any_string_like() {
        let body = ErrorResponse::new("Server Error");
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"Server Error"}"#);
    }
}

//! REST client for the SparkMeet backend.
//!
//! One shared `reqwest` client per UI thread; every endpoint returns a
//! typed model from the `shared` crate. Non-2xx responses are decoded
//! into [`ApiError::Server`] carrying the backend's own `{error}` message
//! so pages can surface it verbatim.

use once_cell::unsync::OnceCell;
use reqwest::{Client, Response, StatusCode};
use shared::models::{
    ErrorResponse, Event, Interest, LoginRequest, LoginResponse, RegistrationResponse,
    SharedContact, User, UserRegistration, UserUpdate,
};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "/api/v1";

thread_local! {
    static SHARED_CLIENT: OnceCell<SparkMeetClient> = OnceCell::new();
}

/// Why a request failed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status; `message` is the
    /// `{error}` payload or the status reason when the body was missing.
    #[error("{message}")]
    Server {
        /// HTTP status of the response.
        status: StatusCode,
        /// Backend-provided reason.
        message: String,
    },

    /// The request never produced a usable response.
    #[error("unable to reach server")]
    Transport(#[from] reqwest::Error),
}

/// Lightweight API client for SparkMeet web interactions.
#[derive(Clone, Debug)]
pub struct SparkMeetClient {
    base_url: String,
    client: Client,
}

impl SparkMeetClient {
    /// Create a new API client with the provided base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The per-thread shared client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(DEFAULT_BASE_URL)).clone())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Authenticate with username/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.api_url("auth/login");
        let response = self.client.post(url).json(payload).send().await?;
        decode(response).await
    }

    /// Terminate the current session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.api_url("auth/logout");
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        ok_body(response).await?;
        Ok(())
    }

    /// Create a new account.
    pub async fn register_user(
        &self,
        payload: &UserRegistration,
    ) -> Result<RegistrationResponse, ApiError> {
        let url = self.api_url("auth/register");
        let response = self.client.post(url).json(payload).send().await?;
        decode(response).await
    }

    /// Fetch a single user profile.
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let url = self.api_url(&format!("users/{id}"));
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    /// Update the signed-in user's profile.
    pub async fn update_user(&self, payload: &UserUpdate) -> Result<User, ApiError> {
        let url = self.api_url("users");
        let response = self.client.put(url).json(payload).send().await?;
        decode(response).await
    }

    /// List the shared contacts (matches) of a user.
    pub async fn get_user_matches(&self, id: &str) -> Result<Vec<SharedContact>, ApiError> {
        let url = self.api_url(&format!("users/{id}/matches"));
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    /// Remove a match and the contact details shared through it.
    pub async fn remove_match(&self, match_id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("users/matches/{match_id}"));
        let response = self.client.delete(url).send().await?;
        ok_body(response).await?;
        Ok(())
    }

    /// List every speed-dating event.
    pub async fn get_all_events(&self) -> Result<Vec<Event>, ApiError> {
        let url = self.api_url("events");
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    /// Register the signed-in user for an event. Returns the updated event.
    pub async fn register_for_event(&self, event_id: &str) -> Result<Event, ApiError> {
        let url = self.api_url(&format!("events/{event_id}/register"));
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        decode(response).await
    }

    /// Unregister the signed-in user from an event. Returns the updated event.
    pub async fn unregister_from_event(&self, event_id: &str) -> Result<Event, ApiError> {
        let url = self.api_url(&format!("events/{event_id}/register"));
        let response = self.client.delete(url).send().await?;
        decode(response).await
    }

    /// List the interest catalog.
    pub async fn get_all_interests(&self) -> Result<Vec<Interest>, ApiError> {
        let url = self.api_url("interests");
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    /// URL of a user's profile picture.
    #[must_use]
    pub fn user_picture_url(&self, id: &str) -> String {
        self.api_url(&format!("users/{id}/pictures"))
    }
}

/// Map a non-2xx response to [`ApiError::Server`], preferring the
/// backend's `{error}` body over the bare status line.
async fn ok_body(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Server Error")
            .to_string(),
    };
    Err(ApiError::Server { status, message })
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ok_body(response).await?;
    Ok(response.json().await?)
}

//! Client-side authentication state.
//!
//! The session store owns the persisted identity blob and the live
//! "signed in" flag. The two are never allowed to drift: every mutation
//! writes storage and flips the subject in the same call. The flag is
//! seeded from storage at construction, so a hard refresh keeps the
//! session alive while an out-of-band storage wipe is picked up lazily
//! on the next read.

use crate::api::{ApiError, SparkMeetClient};
use crate::services::notify::Notifier;
use crate::services::observable::Subject;
use crate::services::storage::{BrowserSessionStorage, StoragePort};
use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use shared::models::{Identity, LoginRequest, LoginResponse};
use std::rc::Rc;
use thiserror::Error;

const USER_KEY: &str = "user";

thread_local! {
    static SHARED_SESSION: OnceCell<SessionStore> = OnceCell::new();
}

/// Why an authentication operation failed.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the request; the message is the server's own
    /// wording and is safe to show to the user.
    #[error("{0}")]
    Rejected(String),

    /// The backend could not be reached or sent a malformed response.
    #[error("could not reach the server: {0}")]
    Connection(String),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Server { message, .. } => Self::Rejected(message),
            ApiError::Transport(err) => Self::Connection(err.to_string()),
        }
    }
}

/// The slice of the REST API the session store depends on.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for SparkMeetClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        SparkMeetClient::login(self, request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        SparkMeetClient::logout(self).await
    }
}

/// Holds the authenticated identity and exposes it to the rest of the UI.
#[derive(Clone)]
pub struct SessionStore {
    api: Rc<dyn AuthApi>,
    storage: Rc<dyn StoragePort>,
    notifier: Notifier,
    logged_in: Subject<bool>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("logged_in", &self.logged_in)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a store over the given ports, seeding the signed-in flag
    /// from whatever identity is already persisted.
    pub fn new(api: Rc<dyn AuthApi>, storage: Rc<dyn StoragePort>, notifier: Notifier) -> Self {
        let logged_in = Subject::new(read_identity(storage.as_ref()).is_some());
        Self {
            api,
            storage,
            notifier,
            logged_in,
        }
    }

    /// The application-wide store, wired to the real API client and the
    /// browser's session storage.
    pub fn shared() -> Self {
        SHARED_SESSION.with(|cell| {
            cell.get_or_init(|| {
                Self::new(
                    Rc::new(SparkMeetClient::shared()),
                    Rc::new(BrowserSessionStorage),
                    Notifier::shared(),
                )
            })
            .clone()
        })
    }

    /// Live view of the signed-in flag. New subscribers immediately
    /// receive the current value.
    #[must_use]
    pub fn is_logged_in(&self) -> Subject<bool> {
        self.logged_in.clone()
    }

    /// Id of the signed-in user, or empty when signed out.
    #[must_use]
    pub fn current_user_id(&self) -> String {
        self.identity().map(|user| user.id).unwrap_or_default()
    }

    /// Username of the signed-in user, or empty when signed out.
    #[must_use]
    pub fn current_username(&self) -> String {
        self.identity().map(|user| user.username).unwrap_or_default()
    }

    /// Whether the signed-in user is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity().is_some_and(|user| user.is_admin)
    }

    /// Signs the user in. On success the identity is persisted, the
    /// signed-in flag flips and a welcome message is published. On failure
    /// nothing changes locally and the error is returned for the caller
    /// to surface.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&request).await?;
        let identity = Identity::from_login(response.user);

        match serde_json::to_string(&identity) {
            Ok(blob) => self.storage.set(USER_KEY, &blob),
            Err(err) => log::error!("could not persist identity: {err}"),
        }
        self.logged_in.set(true);

        self.notifier.show_success(
            format!(
                "Welcome {}! You have successfully logged in.",
                identity.username
            ),
            5,
        );
        Ok(())
    }

    /// Signs the user out: best-effort on the server, guaranteed locally.
    /// The persisted identity is cleared and the flag flips even when the
    /// remote call fails; that failure is reported as a notification and
    /// through the returned error, but never blocks local sign-out.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let remote = self.api.logout().await;
        match &remote {
            Ok(()) => self
                .notifier
                .show_success("You have been logged out successfully.", 3),
            Err(err) => {
                log::warn!("remote logout failed: {err}");
                self.notifier
                    .show_error("Logout failed on server, but local session cleared.", 5);
            }
        }

        self.storage.remove(USER_KEY);
        self.logged_in.set(false);
        remote.map_err(AuthError::from)
    }

    fn identity(&self) -> Option<Identity> {
        read_identity(self.storage.as_ref())
    }
}

/// Parse the persisted identity. Malformed blobs mean "signed out",
/// never an error.
fn read_identity(storage: &dyn StoragePort) -> Option<Identity> {
    let raw = storage.get(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(identity) => Some(identity),
        Err(err) => {
            log::warn!("stored identity is unreadable, treating as signed out: {err}");
            None
        }
    }
}

//! Tests for the session store.
//!
//! Exercise the login/logout state machine against an in-memory storage
//! port and a scripted auth API, without touching the browser or the
//! network.

#[cfg(test)]
mod tests {
    use crate::api::ApiError;
    use crate::services::notify::Notifier;
    use crate::services::session::{AuthApi, AuthError, SessionStore};
    use crate::services::storage::{MemoryStorage, StoragePort};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use reqwest::StatusCode;
    use shared::models::{Identity, LoginRequest, LoginResponse, LoginUser};
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::models::NotificationKind;

    struct FakeAuthApi {
        login_result: RefCell<Option<Result<LoginResponse, ApiError>>>,
        logout_result: RefCell<Option<Result<(), ApiError>>>,
    }

    impl FakeAuthApi {
        fn new() -> Self {
            Self {
                login_result: RefCell::new(None),
                logout_result: RefCell::new(None),
            }
        }

        fn with_login(self, result: Result<LoginResponse, ApiError>) -> Self {
            *self.login_result.borrow_mut() = Some(result);
            self
        }

        fn with_logout(self, result: Result<(), ApiError>) -> Self {
            *self.logout_result.borrow_mut() = Some(result);
            self
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeAuthApi {
        async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
            self.login_result
                .borrow_mut()
                .take()
                .expect("unexpected login call")
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.logout_result
                .borrow_mut()
                .take()
                .expect("unexpected logout call")
        }
    }

    fn alice() -> LoginResponse {
        LoginResponse {
            user: LoginUser {
                user_id: "u1".to_string(),
                username: "alice".to_string(),
                is_admin: false,
            },
        }
    }

    fn rejected(message: &str) -> ApiError {
        ApiError::Server {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    fn build(api: FakeAuthApi) -> (SessionStore, Rc<MemoryStorage>, Notifier) {
        let storage = Rc::new(MemoryStorage::default());
        let notifier = Notifier::new();
        let store = SessionStore::new(Rc::new(api), storage.clone(), notifier.clone());
        (store, storage, notifier)
    }

    /// A successful login persists the identity, flips the live flag and
    /// publishes a welcome message.
    #[test]
    fn successful_login_signs_the_user_in() {
        let (store, storage, notifier) = build(FakeAuthApi::new().with_login(Ok(alice())));

        assert!(!store.is_logged_in().get());
        block_on(store.login("alice", "pw")).unwrap();

        assert!(store.is_logged_in().get());
        assert_eq!(store.current_user_id(), "u1");
        assert_eq!(store.current_username(), "alice");
        assert!(!store.is_admin());

        let blob = storage.get("user").expect("identity persisted");
        let identity: Identity = serde_json::from_str(&blob).unwrap();
        assert_eq!(identity.id, "u1");

        let note = notifier.current().get().expect("welcome message");
        assert_eq!(note.kind, NotificationKind::Success);
        assert!(note.text.contains("Welcome alice"));
    }

    /// A rejected login surfaces the backend's message and changes nothing
    /// locally.
    #[test]
    fn rejected_login_leaves_state_untouched() {
        let (store, storage, notifier) =
            build(FakeAuthApi::new().with_login(Err(rejected("Invalid credentials"))));

        let err = block_on(store.login("alice", "wrong")).unwrap_err();
        assert!(matches!(err, AuthError::Rejected(_)));
        assert_eq!(err.to_string(), "Invalid credentials");

        assert!(!store.is_logged_in().get());
        assert!(storage.get("user").is_none());
        // Surfacing a login failure is the caller's job, not the store's.
        assert!(notifier.current().get().is_none());
    }

    /// Logout clears local state even when the server call fails, and
    /// reports the failure without blocking the sign-out.
    #[test]
    fn logout_is_guaranteed_locally_when_remote_fails() {
        let (store, storage, notifier) = build(
            FakeAuthApi::new()
                .with_login(Ok(alice()))
                .with_logout(Err(rejected("session expired"))),
        );
        block_on(store.login("alice", "pw")).unwrap();

        let result = block_on(store.logout());
        assert!(result.is_err());

        assert!(!store.is_logged_in().get());
        assert_eq!(store.current_user_id(), "");
        assert!(storage.get("user").is_none());

        let note = notifier.current().get().expect("logout failure reported");
        assert_eq!(note.kind, NotificationKind::Error);
        assert!(note.text.contains("local session cleared"));
    }

    #[test]
    fn logout_success_clears_and_confirms() {
        let (store, storage, notifier) = build(
            FakeAuthApi::new()
                .with_login(Ok(alice()))
                .with_logout(Ok(())),
        );
        block_on(store.login("alice", "pw")).unwrap();

        block_on(store.logout()).unwrap();

        assert!(!store.is_logged_in().get());
        assert!(storage.get("user").is_none());
        let note = notifier.current().get().expect("goodbye message");
        assert_eq!(note.kind, NotificationKind::Success);
    }

    /// A corrupted storage blob means "signed out", never a crash.
    #[test]
    fn unparsable_blob_reads_as_signed_out() {
        let storage = Rc::new(MemoryStorage::default());
        storage.set("user", "{definitely not json");
        let store = SessionStore::new(
            Rc::new(FakeAuthApi::new()),
            storage.clone(),
            Notifier::new(),
        );

        assert!(!store.is_logged_in().get());
        assert_eq!(store.current_user_id(), "");
        assert_eq!(store.current_username(), "");
        assert!(!store.is_admin());
    }

    /// The live flag is seeded from a valid persisted identity, so a page
    /// reload keeps the session.
    #[test]
    fn persisted_identity_seeds_logged_in_state() {
        let storage = Rc::new(MemoryStorage::default());
        storage.set("user", r#"{"id":"u1","username":"alice","isAdmin":true}"#);
        let store = SessionStore::new(
            Rc::new(FakeAuthApi::new()),
            storage.clone(),
            Notifier::new(),
        );

        assert!(store.is_logged_in().get());
        assert_eq!(store.current_username(), "alice");
        assert!(store.is_admin());
    }

    /// An out-of-band storage wipe is picked up by the next read; the
    /// pushed flag only changes on the next login/logout.
    #[test]
    fn out_of_band_storage_clear_is_detected_lazily() {
        let (store, storage, _notifier) = build(FakeAuthApi::new().with_login(Ok(alice())));
        block_on(store.login("alice", "pw")).unwrap();

        storage.remove("user");

        assert_eq!(store.current_user_id(), "");
        assert!(store.is_logged_in().get(), "flag updates on the next login/logout, not on reads");
    }

    /// Subscribers see the flip as it happens.
    #[test]
    fn login_pushes_to_subscribers() {
        let (store, _storage, _notifier) = build(FakeAuthApi::new().with_login(Ok(alice())));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _subscription = store
            .is_logged_in()
            .subscribe(move |value| sink.borrow_mut().push(*value));

        block_on(store.login("alice", "pw")).unwrap();

        assert_eq!(*seen.borrow(), vec![false, true]);
    }
}

mod error;
mod events;
mod home;
mod login;
mod matches;
mod profile;
mod profile_edit;
mod signup;

#[cfg(test)]
mod profile_edit_test;

pub use error::NotFoundPage;
pub use events::EventsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use matches::MatchesPage;
pub use profile::ProfilePage;
pub use profile_edit::ProfileEditPage;
pub use signup::SignupPage;

//! Wire models for the SparkMeet REST API.

pub mod auth;
pub mod contact;
pub mod errors;
pub mod event;
pub mod interest;
pub mod user;

pub use auth::{Identity, LoginRequest, LoginResponse, LoginUser, RegistrationResponse};
pub use contact::SharedContact;
pub use errors::ErrorResponse;
pub use event::Event;
pub use interest::Interest;
pub use user::{Gender, User, UserRegistration, UserUpdate};

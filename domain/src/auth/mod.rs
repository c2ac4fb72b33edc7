//! Authentication domain.
//!
//! - [`credentials::Credentials`] — username/password pair exchanged for a token
//! - [`token::AccessToken`] — opaque bearer credential issued by the service
//! - [`user::UserInfo`] — profile of the authenticated user

pub mod credentials;
pub mod token;
pub mod user;

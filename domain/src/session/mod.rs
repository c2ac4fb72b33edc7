//! Session domain.
//!
//! - [`entities::Session`] — the token held for one interactive session
//! - [`entities::SessionState`] — unauthenticated / authenticated

pub mod entities;

//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. Workflows depend
//! only on these traits, not on the HTTP client or the session file.

mod gallery_api;
mod session_store;

pub use gallery_api::GalleryApi;
pub use session_store::{SessionStore, ACCESS_TOKEN_KEY};

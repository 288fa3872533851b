//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest HTTP client for GalleryApi
//! - JSON file (and in-memory) storage for SessionStore

pub mod http;
pub mod session;

#[cfg(test)]
pub mod http_mock;

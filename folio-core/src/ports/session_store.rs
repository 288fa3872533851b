//! Session storage port

use crate::domain::result::Result;

/// Key the access token is stored under
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Where the access token lives between page loads
pub trait SessionStore: Send + Sync {
    /// The stored token, if any
    fn token(&self) -> Result<Option<String>>;

    /// Store a token, replacing any previous one
    fn set_token(&self, token: &str) -> Result<()>;

    /// Forget the token
    fn clear(&self) -> Result<()>;
}

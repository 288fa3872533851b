//! Gallery REST API port

use crate::domain::result::Result;
use crate::domain::{Category, Credentials, LoginResponse, ValidatedUpload, Work};

/// Gallery backend operations
///
/// Implementations talk to the works/categories/users endpoints. The
/// workflows in `services` use this trait without knowing whether they run
/// against the HTTP client or a test double.
pub trait GalleryApi: Send + Sync {
    /// `GET works`
    fn get_works(&self) -> Result<Vec<Work>>;

    /// `GET categories`
    fn get_categories(&self) -> Result<Vec<Category>>;

    /// `POST users/login`
    fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// `POST works` as multipart form data, bearer-authenticated
    ///
    /// Returns the work the server created.
    fn create_work(&self, token: &str, upload: &ValidatedUpload) -> Result<Work>;

    /// `DELETE works/{id}`, bearer-authenticated
    ///
    /// Returns the raw HTTP status; callers branch on it. A request that
    /// never got an answer is an `Error::Network`.
    fn delete_work(&self, token: &str, id: u32) -> Result<u16>;
}

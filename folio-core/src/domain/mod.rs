//! Core domain entities
//!
//! Pure data structures and the rules that apply to them - no I/O.

pub mod auth;
pub mod modal;
pub mod result;
pub mod store;
pub mod upload;
mod work;

pub use auth::{AuthAction, AuthState, Credentials, LoginControl, LoginOutcome, LoginResponse};
pub use modal::{ModalEvent, ModalState};
pub use store::{WorkStore, ALL_CATEGORIES};
pub use upload::{
    ImageFile, UploadErrors, UploadField, UploadForm, UploadRequest, UploadRule, ValidatedUpload,
};
pub use work::{Category, Work};

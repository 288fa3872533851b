//! Service layer - workflow orchestration
//!
//! Services coordinate domain rules and port calls. Each service covers one
//! user workflow.

mod auth;
mod delete;
mod gallery;
pub mod logging;
mod modal;
mod upload;

pub use auth::AuthService;
pub use delete::{DeleteOutcome, DeleteService};
pub use gallery::GalleryService;
pub use logging::{LogEntry, LogEvent, LoggingService};
pub use modal::ModalController;
pub use upload::{UploadOutcome, UploadService};

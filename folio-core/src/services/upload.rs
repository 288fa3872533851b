//! Upload service - validated multipart creation of works

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use crate::domain::result::Error;
use crate::domain::{UploadErrors, UploadForm, UploadRequest, Work, WorkStore};
use crate::ports::GalleryApi;

/// Result of submitting the add-picture form
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum UploadOutcome {
    /// The server created the work and it is now in the store
    Created { work: Work },
    /// Client-side validation failed; nothing was sent
    Rejected { errors: UploadErrors },
}

pub struct UploadService {
    api: Arc<dyn GalleryApi>,
}

impl UploadService {
    pub fn new(api: Arc<dyn GalleryApi>) -> Self {
        Self { api }
    }

    /// Validate, send, and merge the created work into the store
    ///
    /// Previous inline errors are cleared first. A missing token fails
    /// before anything is validated or sent.
    pub fn submit(
        &self,
        token: Option<&str>,
        form: &mut UploadForm,
        request: UploadRequest,
        store: &mut WorkStore,
    ) -> Result<UploadOutcome> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Unauthorized("a session token is required to upload".to_string()))?;

        let upload = match form.submit(request, store.categories()) {
            Ok(upload) => upload,
            Err(errors) => return Ok(UploadOutcome::Rejected { errors }),
        };

        let created = self.api.create_work(token, &upload)?;
        let id = created.id;
        store.insert_work(created);

        let work = store
            .work(id)
            .cloned()
            .ok_or_else(|| Error::Other(format!("Work {} missing after insert", id)))?;

        form.reset();
        Ok(UploadOutcome::Created { work })
    }
}

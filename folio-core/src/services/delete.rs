//! Delete service - confirmed removal of works

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use crate::domain::result::Error;
use crate::domain::{Work, WorkStore};
use crate::messages::Messages;
use crate::ports::GalleryApi;

/// What happened to a delete request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum DeleteOutcome {
    /// 204: removed on the server and from the store
    Deleted { work: Work },
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    /// 401
    Unauthorized,
    /// 500
    ServerError,
    /// The request never completed
    Aborted,
    /// Any other status
    Unexpected { status: u16 },
}

impl DeleteOutcome {
    fn from_status(status: u16, work: Work) -> Self {
        match status {
            204 => DeleteOutcome::Deleted { work },
            401 => DeleteOutcome::Unauthorized,
            500 => DeleteOutcome::ServerError,
            status => DeleteOutcome::Unexpected { status },
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            DeleteOutcome::Deleted { .. } => "delete.success",
            DeleteOutcome::Cancelled => "delete.cancelled",
            DeleteOutcome::Unauthorized => "delete.401",
            DeleteOutcome::ServerError => "delete.500",
            DeleteOutcome::Aborted => "delete.abort",
            DeleteOutcome::Unexpected { .. } => "delete.unexpected",
        }
    }

    /// Text shown to the user
    pub fn alert(&self, messages: &Messages) -> String {
        match self {
            DeleteOutcome::Unexpected { status } => {
                messages.format(self.message_key(), &[("status", &status.to_string())])
            }
            _ => messages.message(self.message_key()).to_string(),
        }
    }
}

pub struct DeleteService {
    api: Arc<dyn GalleryApi>,
}

impl DeleteService {
    pub fn new(api: Arc<dyn GalleryApi>) -> Self {
        Self { api }
    }

    /// Ask for confirmation, send the DELETE and apply a 204 to the store
    ///
    /// Unknown ids and missing tokens are errors raised before the prompt.
    /// Only a 204 touches the store.
    pub fn delete<F>(
        &self,
        token: Option<&str>,
        store: &mut WorkStore,
        id: u32,
        confirm: F,
    ) -> Result<DeleteOutcome>
    where
        F: FnOnce(&Work) -> bool,
    {
        let work = store
            .work(id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("work {}", id)))?;

        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Unauthorized("a session token is required to delete".to_string()))?;

        if !confirm(&work) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let status = match self.api.delete_work(token, id) {
            Ok(status) => status,
            Err(Error::Network(_)) => return Ok(DeleteOutcome::Aborted),
            Err(e) => return Err(e.into()),
        };

        let outcome = DeleteOutcome::from_status(status, work);
        if outcome.is_deleted() {
            store.remove_work(id);
        }
        Ok(outcome)
    }
}

//! Modal controller - edit modal state, thumbnails and upload form

use maud::Markup;

use crate::domain::result::{Error, Result};
use crate::domain::{ModalEvent, ModalState, UploadForm, WorkStore};
use crate::messages::Messages;
use crate::views::modal::{render_modal, ModalContent, Thumbnail};

/// The edit modal, available to authenticated users only
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
    thumbnails: Vec<Thumbnail>,
    form: UploadForm,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a user event
    ///
    /// Invalid events are rejected and leave the state as it was. Opening
    /// rebuilds the thumbnails from the store, so opening twice never
    /// duplicates them.
    pub fn handle(&mut self, event: ModalEvent, store: &WorkStore) -> Result<ModalState> {
        let next = self.state.next(event).ok_or_else(|| {
            Error::validation(format!("cannot {} while the modal is {}", event, self.state))
        })?;

        match event {
            ModalEvent::Open => self.refresh(store),
            ModalEvent::Close | ModalEvent::OverlayClick => self.form.reset(),
            ModalEvent::AddPicture | ModalEvent::Back => {}
        }

        self.state = next;
        Ok(next)
    }

    /// Rebuild the thumbnail list from the store
    pub fn refresh(&mut self, store: &WorkStore) {
        self.thumbnails = store.works().iter().map(Thumbnail::from).collect();
    }

    /// Drop one thumbnail. Returns false if it was not listed.
    pub fn remove_thumbnail(&mut self, work_id: u32) -> bool {
        match self.thumbnails.iter().position(|t| t.work_id == work_id) {
            Some(index) => {
                self.thumbnails.remove(index);
                true
            }
            None => false,
        }
    }

    /// After a successful upload: fresh form, and an open modal goes back
    /// to its gallery view. A closed modal stays closed.
    pub fn upload_completed(&mut self, store: &WorkStore) {
        self.refresh(store);
        self.form.reset();
        if self.state.is_open() {
            self.state = ModalState::GalleryView;
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    pub fn form(&self) -> &UploadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UploadForm {
        &mut self.form
    }

    pub fn to_html(&self, store: &WorkStore, messages: &Messages) -> Markup {
        render_modal(&ModalContent {
            state: self.state,
            thumbnails: &self.thumbnails,
            categories: store.categories(),
            form: &self.form,
            messages,
        })
    }
}

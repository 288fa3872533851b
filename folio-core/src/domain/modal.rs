//! Modal dialog states

use std::fmt;

use serde::Serialize;

/// Which layout of the edit modal is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalState {
    #[default]
    Closed,
    /// Thumbnails with delete controls and the "add photo" button
    GalleryView,
    /// The upload form
    AddPictureView,
}

/// User interaction with the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    AddPicture,
    Back,
    Close,
    OverlayClick,
}

impl ModalState {
    /// State after an event, or None when the event makes no sense here
    ///
    /// Opening an open modal lands on the gallery view again; the content
    /// is rebuilt, never appended to.
    pub fn next(self, event: ModalEvent) -> Option<ModalState> {
        use ModalEvent::*;
        use ModalState::*;

        match (self, event) {
            (_, Close) | (_, OverlayClick) => Some(Closed),
            (_, Open) => Some(GalleryView),
            (GalleryView, AddPicture) => Some(AddPictureView),
            (AddPictureView, Back) => Some(GalleryView),
            _ => None,
        }
    }

    pub fn is_open(self) -> bool {
        self != ModalState::Closed
    }
}

impl fmt::Display for ModalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModalState::Closed => "closed",
            ModalState::GalleryView => "gallery view",
            ModalState::AddPictureView => "add picture view",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ModalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModalEvent::Open => "open",
            ModalEvent::AddPicture => "add picture",
            ModalEvent::Back => "go back",
            ModalEvent::Close => "close",
            ModalEvent::OverlayClick => "click overlay",
        };
        f.write_str(name)
    }
}

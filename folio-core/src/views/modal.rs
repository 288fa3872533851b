//! Edit modal markup
//!
//! The markup is a pure function of the modal state, its thumbnails and the
//! upload form, so re-rendering never duplicates content.

use maud::{html, Markup};
use serde::Serialize;

use crate::domain::upload::ALLOWED_MIME_TYPES;
use crate::domain::{Category, ModalState, UploadField, UploadForm, Work};
use crate::messages::Messages;

/// A work as listed in the modal gallery view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub work_id: u32,
    pub image_url: String,
    pub title: String,
}

impl From<&Work> for Thumbnail {
    fn from(work: &Work) -> Self {
        Self {
            work_id: work.id,
            image_url: work.image_url.clone(),
            title: work.title.clone(),
        }
    }
}

/// Everything the modal needs to draw itself
pub struct ModalContent<'a> {
    pub state: ModalState,
    pub thumbnails: &'a [Thumbnail],
    pub categories: &'a [Category],
    pub form: &'a UploadForm,
    pub messages: &'a Messages,
}

pub fn render_modal(content: &ModalContent<'_>) -> Markup {
    html! {
        @match content.state {
            ModalState::Closed => {}
            ModalState::GalleryView => {
                div.overlay {}
                div.modal-container role="dialog" aria-modal="true" {
                    (gallery_layout(content.thumbnails, content.messages))
                }
            }
            ModalState::AddPictureView => {
                div.overlay {}
                div.modal-container role="dialog" aria-modal="true" {
                    (add_picture_layout(content.categories, content.form, content.messages))
                }
            }
        }
    }
}

fn gallery_layout(thumbnails: &[Thumbnail], messages: &Messages) -> Markup {
    html! {
        div.first-modal-layout {
            button.close-modal type="button" aria-label=(messages.message("modal.close")) { "×" }
            h2 { (messages.message("modal.galleryTitle")) }
            div.modal-works {
                @for thumbnail in thumbnails {
                    figure.modal-work data-id=(thumbnail.work_id) {
                        img src=(thumbnail.image_url) alt=(thumbnail.title);
                        button.delete-work type="button" data-id=(thumbnail.work_id)
                            aria-label=(messages.message("modal.delete")) { "🗑" }
                        figcaption { (messages.message("modal.edit")) }
                    }
                }
            }
            hr;
            button #"addPicture" type="button" { (messages.message("modal.addPicture")) }
            a #"delete-gallery" href="#" { (messages.message("modal.deleteGallery")) }
        }
    }
}

fn add_picture_layout(categories: &[Category], form: &UploadForm, messages: &Messages) -> Markup {
    let error_for = |field: UploadField| {
        form.errors()
            .for_field(field)
            .map(|rule| messages.message(rule.message_key()).to_string())
    };
    let selected = form.selected_category();

    html! {
        div.second-modal-layout {
            button.back-modal type="button" aria-label=(messages.message("modal.back")) { "←" }
            button.close-modal type="button" aria-label=(messages.message("modal.close")) { "×" }
            h2 { (messages.message("modal.addPictureTitle")) }
            form #"add-work-form" method="post" enctype="multipart/form-data" {
                div.upload-zone {
                    label for="image" { (messages.message("modal.addImage")) }
                    input #"image" type="file" name="image" accept=(ALLOWED_MIME_TYPES.join(", "));
                    p { (messages.message("modal.fileHint")) }
                    @if let Some(error) = error_for(UploadField::File) {
                        p.error-message data-field="file" { (error) }
                    }
                }
                label for="title" { (messages.message("modal.titleLabel")) }
                input #"title" type="text" name="title";
                @if let Some(error) = error_for(UploadField::Title) {
                    p.error-message data-field="title" { (error) }
                }
                label for="category" { (messages.message("modal.categoryLabel")) }
                select #"category" name="category" {
                    option value="" selected[selected.is_none()] {}
                    @for category in categories {
                        option value=(category.id) selected[selected == Some(category.id)] {
                            (category.name)
                        }
                    }
                }
                @if let Some(error) = error_for(UploadField::Category) {
                    p.error-message data-field="category" { (error) }
                }
                hr;
                button #"submit" type="submit" { (messages.message("modal.submit")) }
            }
        }
    }
}

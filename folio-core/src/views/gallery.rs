//! Main gallery: one figure per work

use maud::{html, Markup};
use serde::Serialize;

use crate::domain::Work;

/// One rendered work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    pub work_id: u32,
    pub image_url: String,
    pub title: String,
}

impl From<&Work> for Figure {
    fn from(work: &Work) -> Self {
        Self {
            work_id: work.id,
            image_url: work.image_url.clone(),
            title: work.title.clone(),
        }
    }
}

/// The gallery container and the figures it currently shows
#[derive(Debug, Clone, Default)]
pub struct GalleryView {
    figures: Vec<Figure>,
}

impl GalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the container, then add one figure per work
    pub fn render<'a>(&mut self, works: impl IntoIterator<Item = &'a Work>) {
        self.figures.clear();
        self.figures.extend(works.into_iter().map(Figure::from));
    }

    /// Remove the figure for a work. Returns false if it was not shown.
    pub fn remove(&mut self, work_id: u32) -> bool {
        match self.figures.iter().position(|f| f.work_id == work_id) {
            Some(index) => {
                self.figures.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn contains(&self, work_id: u32) -> bool {
        self.figures.iter().any(|f| f.work_id == work_id)
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn to_html(&self) -> Markup {
        html! {
            div.gallery {
                @for figure in &self.figures {
                    figure id={"figure-" (figure.work_id)} data-id=(figure.work_id) {
                        img src=(figure.image_url) alt=(figure.title);
                        figcaption { (figure.title) }
                    }
                }
            }
        }
    }
}

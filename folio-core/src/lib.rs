//! Folio Core - portfolio gallery client logic
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: works, categories, the store and the upload/modal/auth rules
//! - **ports**: trait definitions for the gallery API and session storage
//! - **adapters**: reqwest client, session files
//! - **services**: load, upload, delete and auth workflows, event log
//! - **views**: maud rendering of the gallery, filter bar, modal and page

pub mod adapters;
pub mod config;
pub mod domain;
mod log_migrations;
pub mod messages;
pub mod ports;
pub mod services;
pub mod views;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use maud::Markup;

use adapters::http::ApiClient;
use adapters::session::FileSessionStore;
use config::Config;
use domain::store::is_all_categories;
use messages::{Language, Messages};
use ports::{GalleryApi, SessionStore};
use services::*;
use views::{FilterBar, GalleryView};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{
    AuthAction, AuthState, Category, ImageFile, LoginControl, LoginOutcome, ModalEvent,
    ModalState, UploadRequest, Work, WorkStore, ALL_CATEGORIES,
};
pub use services::{DeleteOutcome, UploadOutcome};

/// Main context for Folio operations
///
/// Holds what a loaded gallery page holds: the token read at load time,
/// the work store and the views built from it.
pub struct FolioContext {
    pub config: Config,
    pub messages: Messages,
    api: Arc<dyn GalleryApi>,
    session: Arc<dyn SessionStore>,
    token: Option<String>,
    store: WorkStore,
    active_category: String,
    gallery: GalleryView,
    filter_bar: Option<FilterBar>,
    modal: Option<ModalController>,
    login_control: LoginControl,
    upload_service: UploadService,
    delete_service: DeleteService,
    auth_service: AuthService,
}

impl FolioContext {
    /// Load the gallery with the settings and session of a folio directory
    pub fn open(folio_dir: &Path) -> Result<Self> {
        let config = Config::load(folio_dir)?;
        let messages = Messages::load(Language::detect(config.language.as_deref()));
        let api = Arc::new(ApiClient::new_with_base_url(&config.api_base_url, config.timeout())?);
        let session = Arc::new(FileSessionStore::new(folio_dir));
        Self::load(config, messages, api, session)
    }

    /// Load the gallery: token, works then categories, then the views
    ///
    /// Anonymous visitors get the filter bar; authenticated users get
    /// edit mode and the modal instead.
    pub fn load(
        config: Config,
        messages: Messages,
        api: Arc<dyn GalleryApi>,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self> {
        let token = session.token()?;
        let store = GalleryService::new(Arc::clone(&api)).load()?;

        let mut gallery = GalleryView::new();
        gallery.render(store.works());

        let login_control = LoginControl::new(token.as_deref());
        let (filter_bar, modal) = match login_control.state() {
            AuthState::Anonymous => (
                Some(FilterBar::new(store.categories(), messages.message("gallery.all"))),
                None,
            ),
            AuthState::Authenticated => (None, Some(ModalController::new())),
        };

        Ok(Self {
            upload_service: UploadService::new(Arc::clone(&api)),
            delete_service: DeleteService::new(Arc::clone(&api)),
            auth_service: AuthService::new(Arc::clone(&api), Arc::clone(&session)),
            config,
            messages,
            api,
            session,
            token,
            store,
            active_category: ALL_CATEGORIES.to_string(),
            gallery,
            filter_bar,
            modal,
            login_control,
        })
    }

    /// Rebuild everything from the API and the current session token
    pub fn reload(self) -> Result<Self> {
        Self::load(self.config, self.messages, self.api, self.session)
    }

    pub fn is_authenticated(&self) -> bool {
        self.login_control.state() == AuthState::Authenticated
    }

    /// Token as read at load time
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn store(&self) -> &WorkStore {
        &self.store
    }

    pub fn gallery(&self) -> &GalleryView {
        &self.gallery
    }

    pub fn filter_bar(&self) -> Option<&FilterBar> {
        self.filter_bar.as_ref()
    }

    pub fn modal(&self) -> Option<&ModalController> {
        self.modal.as_ref()
    }

    pub fn login_control(&self) -> &LoginControl {
        &self.login_control
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// Show only the works of a category (by name), or all of them
    ///
    /// Returns how many works are now displayed, or `None` for a name that
    /// is neither a known category nor the "all" sentinel. An unknown name
    /// leaves the selection, the filter bar and the gallery as they were.
    pub fn select_category(&mut self, category: &str) -> Option<usize> {
        let known = is_all_categories(category)
            || self.store.categories().iter().any(|c| c.name == category);
        if !known {
            return None;
        }

        self.active_category = category.to_string();
        if let Some(filter_bar) = self.filter_bar.as_mut() {
            filter_bar.set_active(category);
        }
        self.render_gallery();
        Some(self.gallery.len())
    }

    fn render_gallery(&mut self) {
        self.gallery
            .render(self.store.filter_works_by_category(&self.active_category));
    }

    /// Forward an event to the modal
    pub fn modal_event(&mut self, event: ModalEvent) -> Result<ModalState> {
        let modal = self
            .modal
            .as_mut()
            .ok_or_else(|| Error::Unauthorized("the edit modal requires a session".to_string()))?;
        Ok(modal.handle(event, &self.store)?)
    }

    /// Submit the add-picture form
    ///
    /// On success the gallery and the modal are re-rendered with the new
    /// work, the form is reset and the modal is back on its gallery view.
    pub fn upload(&mut self, request: UploadRequest) -> Result<UploadOutcome> {
        let modal = self
            .modal
            .as_mut()
            .ok_or_else(|| Error::Unauthorized("a session token is required to upload".to_string()))?;

        let outcome = self.upload_service.submit(
            self.token.as_deref(),
            modal.form_mut(),
            request,
            &mut self.store,
        )?;

        if let UploadOutcome::Created { .. } = outcome {
            modal.upload_completed(&self.store);
            self.render_gallery();
        }
        Ok(outcome)
    }

    /// Delete a work after confirmation
    ///
    /// A 204 removes the work from the store, the gallery and the modal.
    pub fn delete_work<F>(&mut self, id: u32, confirm: F) -> Result<DeleteOutcome>
    where
        F: FnOnce(&Work) -> bool,
    {
        let outcome = self
            .delete_service
            .delete(self.token.as_deref(), &mut self.store, id, confirm)?;

        if outcome.is_deleted() {
            self.gallery.remove(id);
            if let Some(modal) = self.modal.as_mut() {
                modal.remove_thumbnail(id);
            }
        }
        Ok(outcome)
    }

    /// Submit the login form. Reload afterwards to pick up the new token.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        self.auth_service.login(email, password)
    }

    /// Click the login/logout control
    ///
    /// `confirm` is only asked when logging out with `confirmLogout` set.
    pub fn click_login_control<F>(&self, confirm: F) -> Result<AuthAction>
    where
        F: FnOnce() -> bool,
    {
        self.auth_service
            .click(&self.login_control, self.config.confirm_logout, confirm)
    }

    /// The whole page as HTML
    pub fn to_html(&self) -> Markup {
        views::render_page(self)
    }
}

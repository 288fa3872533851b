//! Gallery service - loads works and categories from the API

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::WorkStore;
use crate::ports::GalleryApi;

/// Gallery service for the initial load
pub struct GalleryService {
    api: Arc<dyn GalleryApi>,
}

impl GalleryService {
    pub fn new(api: Arc<dyn GalleryApi>) -> Self {
        Self { api }
    }

    /// Fetch works, then categories, into a de-duplicated store
    pub fn load(&self) -> Result<WorkStore> {
        let works = self.api.get_works().context("Failed to load works")?;
        let categories = self
            .api
            .get_categories()
            .context("Failed to load categories")?;
        Ok(WorkStore::new(works, categories))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapters::http::ApiClient;
    use crate::adapters::http_mock::{MockConfig, MockGalleryServer, MockRoute};
    use crate::domain::result::Error;

    fn service_for(server: &MockGalleryServer) -> GalleryService {
        let client = ApiClient::new_with_base_url(&server.base_url(), Duration::from_secs(5)).unwrap();
        GalleryService::new(Arc::new(client))
    }

    #[test]
    fn test_load_fetches_works_then_categories() {
        let server = MockGalleryServer::start(MockConfig::default()).unwrap();
        let store = service_for(&server).load().unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.categories().len(), 3);

        let paths: Vec<String> = server.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/api/works", "/api/categories"]);
    }

    #[test]
    fn test_load_drops_duplicate_works() {
        let body = r#"[
            {"id": 1, "title": "A", "imageUrl": "a.png", "categoryId": 1},
            {"id": 1, "title": "A again", "imageUrl": "a.png", "categoryId": 1}
        ]"#;
        let server = MockGalleryServer::start(MockConfig {
            routes: vec![MockRoute::new("GET", "/works", 200, body)],
            ..Default::default()
        })
        .unwrap();

        let store = service_for(&server).load().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.works()[0].category_name(), Some("Objets"));
    }

    #[test]
    fn test_load_error_keeps_api_status() {
        let server = MockGalleryServer::start(MockConfig {
            routes: vec![MockRoute::new("GET", "/categories", 500, r#"{"message": "boom"}"#)],
            ..Default::default()
        })
        .unwrap();

        let err = service_for(&server).load().unwrap_err();
        let api_error = err.downcast_ref::<Error>().unwrap();
        assert_eq!(api_error.status(), Some(500));
    }
}

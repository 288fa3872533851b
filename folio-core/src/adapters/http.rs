//! Gallery API HTTP client
//!
//! Wraps every call to the backend behind `api_fetch`, which joins the
//! endpoint to the base URL and normalizes the answer:
//! - non-2xx: `Error::Api` with the server's `message`, or the status text
//! - 204: `None`
//! - other 2xx: the JSON body
//!
//! There is no retry.

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::{Category, Credentials, LoginResponse, ValidatedUpload, Work};
use crate::ports::GalleryApi;

/// Default gallery API URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:5678/api/";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Request body for `api_fetch`
#[derive(Debug, Default)]
pub enum Body {
    #[default]
    Empty,
    Json(JsonValue),
    Multipart(Form),
}

/// Options for `api_fetch`: method, body and optional bearer token
#[derive(Debug)]
pub struct FetchOptions {
    pub method: Method,
    pub body: Body,
    pub bearer: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: Body::Empty,
            bearer: None,
        }
    }
}

impl FetchOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post_json(body: JsonValue) -> Self {
        Self {
            method: Method::POST,
            body: Body::Json(body),
            bearer: None,
        }
    }

    pub fn post_multipart(form: Form) -> Self {
        Self {
            method: Method::POST,
            body: Body::Multipart(form),
            bearer: None,
        }
    }

    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    /// Attach `Authorization: Bearer <token>`
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// Gallery API client
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client for the default local API
    pub fn new() -> Result<Self> {
        Self::new_with_base_url(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client for a custom base URL
    ///
    /// The base is treated as a directory: `http://host/api` and
    /// `http://host/api/` both resolve `works` to `http://host/api/works`.
    pub fn new_with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(Error::Config("API base URL cannot be empty".to_string()));
        }

        let normalized = format!("{}/", trimmed.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::Config(format!("Invalid API base URL '{}': {}", trimmed, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for an endpoint such as `works` or `works/3`
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| Error::Config(format!("Invalid endpoint '{}': {}", endpoint, e)))
    }

    /// Issue a request and normalize the response
    pub fn api_fetch(&self, endpoint: &str, options: FetchOptions) -> Result<Option<JsonValue>> {
        let response = self.send(endpoint, options)?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.error_from_response(response));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let value = response
            .json::<JsonValue>()
            .map_err(|e| Error::Other(format!("Failed to parse response from '{}': {}", endpoint, e)))?;
        Ok(Some(value))
    }

    /// `api_fetch` and decode the JSON body into `T`
    fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str, options: FetchOptions) -> Result<T> {
        let value = self.api_fetch(endpoint, options)?.ok_or_else(|| {
            Error::Other(format!("Empty response from '{}'", endpoint))
        })?;
        Ok(serde_json::from_value(value)?)
    }

    fn send(&self, endpoint: &str, options: FetchOptions) -> Result<Response> {
        let url = self.endpoint_url(endpoint)?;
        let mut request: RequestBuilder = self.client.request(options.method, url);

        if let Some(token) = &options.bearer {
            request = request.bearer_auth(token);
        }

        request = match options.body {
            Body::Empty => request,
            Body::Json(value) => request.json(&value),
            Body::Multipart(form) => request.multipart(form),
        };

        request.send().map_err(|e| self.map_request_error(e))
    }

    /// Build the error for a non-2xx response
    fn error_from_response(&self, response: Response) -> Error {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown Status");

        let message = response
            .text()
            .ok()
            .and_then(|body| serde_json::from_str::<JsonValue>(&body).ok())
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status_text.to_string());

        Error::api(status.as_u16(), message)
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::network(format!(
                "Connection timed out after {} seconds",
                self.timeout.as_secs()
            ))
        } else if error.is_connect() {
            Error::network(format!("Unable to connect to the gallery API at {}", self.base_url))
        } else {
            Error::network(format!("Request failed: {}", error))
        }
    }
}

impl GalleryApi for ApiClient {
    fn get_works(&self) -> Result<Vec<Work>> {
        self.fetch_json("works", FetchOptions::get())
    }

    fn get_categories(&self) -> Result<Vec<Category>> {
        self.fetch_json("categories", FetchOptions::get())
    }

    fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let body = serde_json::to_value(credentials)?;
        let response = self.send("users/login", FetchOptions::post_json(body))?;
        if !response.status().is_success() {
            return Err(self.error_from_response(response));
        }

        // An empty or non-JSON 2xx body carries no token
        let text = response.text().unwrap_or_default();
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }

    fn create_work(&self, token: &str, upload: &ValidatedUpload) -> Result<Work> {
        let image = Part::bytes(upload.file.bytes.clone())
            .file_name(upload.file.file_name.clone())
            .mime_str(&upload.file.mime_type)
            .map_err(|e| Error::validation(format!("Invalid image type: {}", e)))?;

        let form = Form::new()
            .part("image", image)
            .text("title", upload.title.clone())
            .text("category", upload.category_id.to_string());

        self.fetch_json("works", FetchOptions::post_multipart(form).with_bearer(token))
    }

    fn delete_work(&self, token: &str, id: u32) -> Result<u16> {
        let endpoint = format!("works/{}", id);
        let response = self.send(&endpoint, FetchOptions::delete().with_bearer(token))?;
        Ok(response.status().as_u16())
    }
}

// =============================================================================
// Tests
// =============================================================================

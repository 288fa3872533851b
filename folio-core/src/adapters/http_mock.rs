//! Mock gallery API server for testing
//!
//! Serves the same routes as the real backend on a random local port:
//! - GET /works, GET /categories
//! - POST /users/login with `{email, password}`
//! - POST /works (multipart, bearer token required)
//! - DELETE /works/{id} (bearer token required)
//!
//! Every request is recorded so tests can check headers, bodies, and
//! whether a request was issued at all.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::json;

/// Credentials the mock accepts
pub const MOCK_EMAIL: &str = "sophie.bluel@test.tld";
pub const MOCK_PASSWORD: &str = "S0phie";
pub const MOCK_TOKEN: &str = "mock-token";

/// A canned answer for one method + path, checked before the normal routes
#[derive(Debug, Clone)]
pub struct MockRoute {
    pub method: &'static str,
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl MockRoute {
    pub fn new(method: &'static str, path: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            status,
            body: body.into(),
        }
    }
}

/// Configuration for the mock server
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub routes: Vec<MockRoute>,
    /// Status returned for DELETE /works/{id} once authenticated
    pub delete_status: u16,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            delete_status: 204,
        }
    }
}

/// A request as the server saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Lowercased header names
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Mock gallery server for testing
pub struct MockGalleryServer {
    port: u16,
    running: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

impl MockGalleryServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let next_id = Arc::new(AtomicU32::new(100));

        // Non-blocking accept so stop() can end the loop
        listener.set_nonblocking(true)?;

        let running_clone = running.clone();
        let requests_clone = requests.clone();
        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let cfg = config.clone();
                        let log = requests_clone.clone();
                        let ids = next_id.clone();
                        thread::spawn(move || handle_connection(stream, &cfg, &log, &ids));
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            requests,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Base URL to hand to `ApiClient`
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/api/", self.port)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockGalleryServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(
    mut stream: TcpStream,
    config: &MockConfig,
    log: &Mutex<Vec<RecordedRequest>>,
    next_id: &AtomicU32,
) {
    let _ = stream.set_nonblocking(false);
    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => {
            send_response(&mut stream, 400, "Bad Request", r#"{"message": "Invalid request"}"#);
            return;
        }
    };

    if let Ok(mut requests) = log.lock() {
        requests.push(request.clone());
    }

    let path = request
        .path
        .strip_prefix("/api")
        .unwrap_or(&request.path)
        .split('?')
        .next()
        .unwrap_or("")
        .to_string();

    if let Some(route) = config
        .routes
        .iter()
        .find(|r| r.method == request.method && r.path == path)
    {
        send_response(&mut stream, route.status, reason(route.status), &route.body);
        return;
    }

    let authorized = request
        .header("authorization")
        .map(|v| v == format!("Bearer {}", MOCK_TOKEN))
        .unwrap_or(false);

    match (request.method.as_str(), path.as_str()) {
        ("GET", "/works") => {
            send_response(&mut stream, 200, "OK", &sample_works().to_string());
        }
        ("GET", "/categories") => {
            send_response(&mut stream, 200, "OK", &sample_categories().to_string());
        }
        ("POST", "/users/login") => {
            let body: serde_json::Value =
                serde_json::from_slice(&request.body).unwrap_or(serde_json::Value::Null);
            let email = body.get("email").and_then(|v| v.as_str()).unwrap_or("");
            let password = body.get("password").and_then(|v| v.as_str()).unwrap_or("");

            if email != MOCK_EMAIL {
                send_response(&mut stream, 404, "Not Found", r#"{"message": "user not found"}"#);
            } else if password != MOCK_PASSWORD {
                send_response(&mut stream, 401, "Unauthorized", "{}");
            } else {
                let body = json!({"userId": 1, "token": MOCK_TOKEN});
                send_response(&mut stream, 200, "OK", &body.to_string());
            }
        }
        ("POST", "/works") => {
            if !authorized {
                send_response(&mut stream, 401, "Unauthorized", r#"{"message": "Unauthorized"}"#);
                return;
            }
            let text = request.body_text();
            let title = multipart_field(&text, "title").unwrap_or_default();
            let category = multipart_field(&text, "category").unwrap_or_default();
            let file_name = multipart_filename(&text, "image").unwrap_or_else(|| "image".to_string());

            let id = next_id.fetch_add(1, Ordering::SeqCst);
            let body = json!({
                "id": id,
                "title": title,
                "imageUrl": format!("http://localhost:5678/images/{}", file_name),
                "categoryId": category,
                "userId": 1
            });
            send_response(&mut stream, 201, "Created", &body.to_string());
        }
        ("DELETE", p) if p.starts_with("/works/") => {
            if !authorized {
                send_response(&mut stream, 401, "Unauthorized", "");
                return;
            }
            let status = config.delete_status;
            send_response(&mut stream, status, reason(status), "");
        }
        _ => {
            send_response(&mut stream, 404, "Not Found", r#"{"message": "Endpoint not found"}"#);
        }
    }
}

/// Read the request line, headers and a Content-Length or chunked body
fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut data = Vec::new();
    let mut buffer = [0u8; 8192];

    let header_end = loop {
        if let Some(pos) = find(&data, b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut buffer).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buffer[..n]);
    };

    let head = String::from_utf8_lossy(&data[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            Some((name.trim().to_lowercase(), value.trim().to_string()))
        })
        .collect();

    let header_value = |name: &str| {
        headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    };

    let mut body = data[header_end + 4..].to_vec();

    if let Some(length) = header_value("content-length").and_then(|v| v.parse::<usize>().ok()) {
        while body.len() < length {
            let n = stream.read(&mut buffer).ok()?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&buffer[..n]);
        }
        body.truncate(length);
    } else if header_value("transfer-encoding")
        .map(|v| v.eq_ignore_ascii_case("chunked"))
        .unwrap_or(false)
    {
        while !body.ends_with(b"0\r\n\r\n") {
            let n = stream.read(&mut buffer).ok()?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&buffer[..n]);
        }
        body = decode_chunked(&body);
    }

    Some(RecordedRequest {
        method,
        path,
        headers,
        body,
    })
}

fn decode_chunked(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut rest = data;
    while let Some(line_end) = find(rest, b"\r\n") {
        let size_line = String::from_utf8_lossy(&rest[..line_end]);
        let size = usize::from_str_radix(size_line.trim(), 16).unwrap_or(0);
        if size == 0 {
            break;
        }
        let start = line_end + 2;
        let end = (start + size).min(rest.len());
        out.extend_from_slice(&rest[start..end]);
        rest = &rest[(end + 2).min(rest.len())..];
    }
    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Value of a text field in a multipart body
pub fn multipart_field(body: &str, name: &str) -> Option<String> {
    let marker = format!("name=\"{}\"", name);
    let start = body.find(&marker)?;
    let after = &body[start..];
    let value_start = after.find("\r\n\r\n")? + 4;
    let value = &after[value_start..];
    let value_end = value.find("\r\n")?;
    Some(value[..value_end].to_string())
}

/// File name of a file field in a multipart body
pub fn multipart_filename(body: &str, name: &str) -> Option<String> {
    let marker = format!("name=\"{}\"; filename=\"", name);
    let start = body.find(&marker)? + marker.len();
    let rest = &body[start..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        418 => "I'm a teapot",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = if status == 204 || status == 304 {
        format!(
            "HTTP/1.1 {} {}\r\nConnection: close\r\n\r\n",
            status, status_text
        )
    } else {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            status_text,
            body.len(),
            body
        )
    };
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn sample_categories() -> serde_json::Value {
    json!([
        {"id": 1, "name": "Objets"},
        {"id": 2, "name": "Appartements"},
        {"id": 3, "name": "Hotels & restaurants"}
    ])
}

fn sample_works() -> serde_json::Value {
    json!([
        {
            "id": 1, "title": "Abajour Tahina",
            "imageUrl": "http://localhost:5678/images/abajour-tahina1651286843956.png",
            "categoryId": 1, "userId": 1,
            "category": {"id": 1, "name": "Objets"}
        },
        {
            "id": 2, "title": "Appartement Paris V",
            "imageUrl": "http://localhost:5678/images/appartement-paris-v1651287270508.png",
            "categoryId": 2, "userId": 1,
            "category": {"id": 2, "name": "Appartements"}
        },
        {
            "id": 3, "title": "Restaurant Sushisen - Londres",
            "imageUrl": "http://localhost:5678/images/restaurant-sushisen-londres1651287319271.png",
            "categoryId": 3, "userId": 1,
            "category": {"id": 3, "name": "Hotels & restaurants"}
        },
        {
            "id": 4, "title": "Villa \u{201c}La Balisiere\u{201d} - Port Louis",
            "imageUrl": "http://localhost:5678/images/la-balisiere1651287350102.png",
            "categoryId": 2, "userId": 1,
            "category": {"id": 2, "name": "Appartements"}
        }
    ])
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapters::http::{ApiClient, FetchOptions};
    use crate::domain::result::Error;
    use crate::domain::{Credentials, ImageFile, UploadRequest};
    use crate::ports::GalleryApi;

    fn client_for(server: &MockGalleryServer) -> ApiClient {
        ApiClient::new_with_base_url(&server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_mock_server_starts() {
        let server = MockGalleryServer::start(MockConfig::default()).unwrap();
        assert!(server.port() > 0);
    }

    #[test]
    fn test_api_fetch_returns_json_for_2xx() {
        let server = MockGalleryServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let value = client.api_fetch("categories", FetchOptions::get()).unwrap().unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(3));
    }

    #[test]
    fn test_api_fetch_returns_none_for_204() {
        let server = MockGalleryServer::start(MockConfig {
            routes: vec![MockRoute::new("GET", "/empty", 204, "")],
            ..Default::default()
        })
        .unwrap();
        let client = client_for(&server);

        let value = client.api_fetch("empty", FetchOptions::get()).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_api_fetch_error_uses_server_message() {
        let server = MockGalleryServer::start(MockConfig {
            routes: vec![MockRoute::new("GET", "/works", 500, r#"{"message": "Database unavailable"}"#)],
            ..Default::default()
        })
        .unwrap();
        let client = client_for(&server);

        let err = client.api_fetch("works", FetchOptions::get()).unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Database unavailable");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_api_fetch_error_falls_back_to_status_text() {
        let server = MockGalleryServer::start(MockConfig {
            routes: vec![
                MockRoute::new("GET", "/teapot", 418, "{}"),
                MockRoute::new("GET", "/broken", 500, "<html>oops</html>"),
            ],
            ..Default::default()
        })
        .unwrap();
        let client = client_for(&server);

        let err = client.api_fetch("teapot", FetchOptions::get()).unwrap_err();
        assert!(matches!(err, Error::Api { status: 418, ref message } if message == "I'm a teapot"));

        let err = client.api_fetch("broken", FetchOptions::get()).unwrap_err();
        assert!(
            matches!(err, Error::Api { status: 500, ref message } if message == "Internal Server Error")
        );
    }

    #[test]
    fn test_get_works_and_categories() {
        let server = MockGalleryServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let works = client.get_works().unwrap();
        assert_eq!(works.len(), 4);
        assert_eq!(works[0].category_name(), Some("Objets"));

        let categories = client.get_categories().unwrap();
        assert_eq!(categories[2].name, "Hotels & restaurants");
    }

    #[test]
    fn test_login() {
        let server = MockGalleryServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let response = client
            .login(&Credentials::new(MOCK_EMAIL, MOCK_PASSWORD))
            .unwrap();
        assert_eq!(response.token.as_deref(), Some(MOCK_TOKEN));

        let err = client
            .login(&Credentials::new(MOCK_EMAIL, "wrong"))
            .unwrap_err();
        assert_eq!(err.status(), Some(401));

        let err = client
            .login(&Credentials::new("nobody@test.tld", "x"))
            .unwrap_err();
        assert!(matches!(err, Error::Api { status: 404, ref message } if message == "user not found"));

        let request = &server.requests()[0];
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_create_work_sends_multipart_with_bearer() {
        let server = MockGalleryServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let upload = UploadRequest {
            title: "Villa".to_string(),
            category_id: Some(2),
            file: Some(ImageFile::new("villa.png", vec![1, 2, 3, 4])),
        }
        .validate(&client.get_categories().unwrap())
        .unwrap();

        let work = client.create_work(MOCK_TOKEN, &upload).unwrap();
        assert_eq!(work.title, "Villa");
        assert_eq!(work.category_id(), Some(2));
        assert!(work.image_url.ends_with("villa.png"));

        let requests = server.requests();
        let post = requests.iter().find(|r| r.method == "POST").unwrap();
        assert_eq!(post.header("authorization"), Some("Bearer mock-token"));
        assert!(post
            .header("content-type")
            .unwrap_or("")
            .starts_with("multipart/form-data"));
        let body = post.body_text();
        assert_eq!(multipart_field(&body, "title").as_deref(), Some("Villa"));
        assert_eq!(multipart_field(&body, "category").as_deref(), Some("2"));
        assert!(body.contains("Content-Type: image/png"));
    }

    #[test]
    fn test_create_work_unauthorized() {
        let server = MockGalleryServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let upload = UploadRequest {
            title: "Villa".to_string(),
            category_id: Some(1),
            file: Some(ImageFile::new("villa.jpg", vec![0; 8])),
        }
        .validate(&[crate::domain::Category::new(1, "Objets")])
        .unwrap();

        let err = client.create_work("stale-token", &upload).unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_delete_work_returns_status() {
        let server = MockGalleryServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        assert_eq!(client.delete_work(MOCK_TOKEN, 1).unwrap(), 204);
        assert_eq!(client.delete_work("bad", 1).unwrap(), 401);

        let requests = server.requests();
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, "/api/works/1");
    }

    #[test]
    fn test_delete_work_server_error_status() {
        let server = MockGalleryServer::start(MockConfig {
            delete_status: 500,
            ..Default::default()
        })
        .unwrap();
        let client = client_for(&server);

        assert_eq!(client.delete_work(MOCK_TOKEN, 2).unwrap(), 500);
    }

    #[test]
    fn test_connection_refused_is_network_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ApiClient::new_with_base_url(
            &format!("http://127.0.0.1:{}/api/", port),
            Duration::from_secs(2),
        )
        .unwrap();

        assert!(matches!(client.get_works(), Err(Error::Network(_))));
        assert!(matches!(client.delete_work(MOCK_TOKEN, 1), Err(Error::Network(_))));
    }
}

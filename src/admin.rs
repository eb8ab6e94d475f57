// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Admin export client
//! Triggers the chat export on the local admin service listening on `PORT`.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::ApiError;

pub const EXPORT_PATH: &str = "/v1/admin/octa/chat";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AdminClient {
    http: Client,
    url: String,
    admin_key: String,
}

impl AdminClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let url = format!("http://localhost:{}{}", config.server.port, EXPORT_PATH);
        Self::with_url(config, &url)
    }

    pub fn with_url(config: &Config, url: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::ClientBuildFailed(e.to_string()))?;

        Ok(Self {
            http,
            url: url.to_string(),
            admin_key: config.admin.key.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues the export `PUT` and returns the response body as-is. A
    /// non-success status is logged, not treated as an error.
    pub async fn export(&self) -> Result<String, ApiError> {
        debug!("PUT {}", self.url);
        let res = self
            .http
            .put(&self.url)
            .header("accept", "application/json")
            .header("X-Admin-Key", &self.admin_key)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("reading response body: {}", e)))?;

        if !status.is_success() {
            warn!("Admin export returned status {}", status.as_u16());
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::VALID_ENV;
    use std::thread;
    use tiny_http::{Method, Response, Server, StatusCode};

    fn config() -> Config {
        Config::parse(VALID_ENV).unwrap()
    }

    #[test]
    fn test_default_url_uses_configured_port() {
        let client = AdminClient::new(&config()).unwrap();
        assert_eq!(client.url(), "http://localhost:8080/v1/admin/octa/chat");
    }

    #[tokio::test]
    async fn test_export_sends_put_with_admin_key() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let url = format!("http://{}{}", server.server_addr(), EXPORT_PATH);

        let handle = thread::spawn(move || {
            let request = server.recv().unwrap();
            let method = request.method().clone();
            let path = request.url().to_string();
            let key = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("X-Admin-Key"))
                .map(|h| h.value.to_string());
            request
                .respond(Response::from_string(r#"{"exported":3}"#))
                .unwrap();
            (method, path, key)
        });

        let body = AdminClient::with_url(&config(), &url)
            .unwrap()
            .export()
            .await
            .unwrap();
        assert_eq!(body, r#"{"exported":3}"#);

        let (method, path, key) = handle.join().unwrap();
        assert_eq!(method, Method::Put);
        assert_eq!(path, EXPORT_PATH);
        assert_eq!(key.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn test_export_returns_body_on_error_status() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let url = format!("http://{}{}", server.server_addr(), EXPORT_PATH);

        let handle = thread::spawn(move || {
            let request = server.recv().unwrap();
            request
                .respond(Response::from_string("forbidden").with_status_code(StatusCode(403)))
                .unwrap();
        });

        let body = AdminClient::with_url(&config(), &url)
            .unwrap()
            .export()
            .await
            .unwrap();
        assert_eq!(body, "forbidden");
        handle.join().unwrap();
    }
}

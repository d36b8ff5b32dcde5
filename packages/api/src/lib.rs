//! # API crate: HTTP access to the comment server
//!
//! Implements [`comments::CommentBackend`] over HTTP with `reqwest`, which
//! uses the browser's `fetch` on WASM and hyper on native targets.
//!
//! ## Endpoints
//!
//! | Method | Call | Response handling |
//! |--------|------|-------------------|
//! | `GET` | `/data?comments=<n>` | JSON array of comment records |
//! | `POST` | `/delete-data` | status must be 2xx, body ignored |
//! | `GET` | `/login` | JSON `{status, url}` |
//! | `GET` | `/image-upload-url` | plain text, kept verbatim |
//!
//! Paths come from [`comments::EndpointsConfig`]. Every non-2xx status becomes
//! [`PanelError::Status`]; a body that does not decode becomes
//! [`PanelError::Decode`]; anything else that goes wrong on the way becomes
//! [`PanelError::Request`].

use comments::{
    Comment, CommentBackend, EndpointsConfig, LoginStatus, MaxComments, PanelError, UploadUrl,
};
use reqwest::{RequestBuilder, Response};

/// Origin used on native targets when none is configured.
pub const DEFAULT_NATIVE_ORIGIN: &str = "http://localhost:8080";

/// Absolute endpoint URLs, resolved once from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base_url: String,
    config: EndpointsConfig,
}

impl Endpoints {
    pub fn new(config: EndpointsConfig) -> Self {
        let base_url = resolve_base_url(&config.base_url);
        Self { base_url, config }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn comments_url(&self, max: MaxComments) -> String {
        format!("{}?comments={}", self.join(&self.config.comments), max)
    }

    pub fn delete_url(&self) -> String {
        self.join(&self.config.delete)
    }

    pub fn login_url(&self) -> String {
        self.join(&self.config.login)
    }

    pub fn upload_url(&self) -> String {
        self.join(&self.config.upload_url)
    }

    fn join(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// An empty configured base means "same origin as the page".
pub fn resolve_base_url(configured: &str) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }

    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window().map(|w| w.location().origin()) {
            Some(Ok(origin)) => origin,
            _ => {
                tracing::warn!("Could not read window origin, using relative URLs");
                String::new()
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_NATIVE_ORIGIN.to_string()
    }
}

/// [`CommentBackend`] that talks to the comment server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(config: EndpointsConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: EndpointsConfig) -> Self {
        Self {
            client,
            endpoints: Endpoints::new(config),
        }
    }

    /// Send the request and reject any non-2xx status.
    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Response, PanelError> {
        tracing::debug!("Requesting {}", endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| PanelError::request(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PanelError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

fn body_error(endpoint: &str, e: reqwest::Error) -> PanelError {
    if e.is_decode() {
        PanelError::decode(endpoint, e)
    } else {
        PanelError::request(endpoint, e)
    }
}

impl CommentBackend for HttpBackend {
    async fn fetch_comments(&self, max: MaxComments) -> Result<Vec<Comment>, PanelError> {
        let url = self.endpoints.comments_url(max);
        let response = self.send(&url, self.client.get(&url)).await?;
        response
            .json::<Vec<Comment>>()
            .await
            .map_err(|e| body_error(&url, e))
    }

    async fn delete_comments(&self) -> Result<(), PanelError> {
        let url = self.endpoints.delete_url();
        self.send(&url, self.client.post(&url)).await?;
        Ok(())
    }

    async fn login_status(&self) -> Result<LoginStatus, PanelError> {
        let url = self.endpoints.login_url();
        let response = self.send(&url, self.client.get(&url)).await?;
        response
            .json::<LoginStatus>()
            .await
            .map_err(|e| body_error(&url, e))
    }

    /// The body is kept as-is. It is decoded as text, so bytes that are not
    /// valid UTF-8 are replaced with U+FFFD.
    async fn upload_url(&self) -> Result<UploadUrl, PanelError> {
        let url = self.endpoints.upload_url();
        let response = self.send(&url, self.client.get(&url)).await?;
        let text = response.text().await.map_err(|e| body_error(&url, e))?;
        Ok(UploadUrl::new(text))
    }
}

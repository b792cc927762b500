//! Credential-bearing HTTP wrapper. Every request carries the session cookie:
//! natively through a per-client cookie jar, in the browser through
//! `credentials: include`. The wrapper hands back the raw response; a non-2xx
//! status is not an error here, only request-building and network failures are.
//! Request bodies may contain passwords, so they are never logged.

use crate::{config::AppConfig, errors::AppError};
use reqwest::{
    Client, Method, Response,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Per-request overrides: method, extra headers and an optional body.
#[derive(Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header; later values replace earlier ones with the same name.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Encodes `body` as JSON and sets `Content-Type: application/json`.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        self.body = Some(payload);
        Ok(self.header(CONTENT_TYPE.as_str(), "application/json"))
    }
}

/// Thin client bound to one API base address. Clones share the cookie jar.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for the configured base address.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let builder = Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = native_builder(builder, config).cookie_store(true);

        Self::finish(builder, config)
    }

    /// Builds a client whose cookie jar starts with an existing session
    /// cookie (`name=value`), so a session created elsewhere can be inspected
    /// or ended.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_session_cookie(config: &AppConfig, cookie: &str) -> Result<Self, AppError> {
        use reqwest::cookie::Jar;
        use std::sync::Arc;

        let base = Url::parse(config.api_base_url.trim()).map_err(|err| {
            AppError::Config(format!("A session cookie needs an absolute API URL: {err}"))
        })?;
        let jar = Jar::default();
        jar.add_cookie_str(cookie.trim(), &base);

        let builder = native_builder(Client::builder(), config).cookie_provider(Arc::new(jar));
        Self::finish(builder, config)
    }

    fn finish(builder: reqwest::ClientBuilder, config: &AppConfig) -> Result<Self, AppError> {
        let client = builder
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: resolve_base_url(&config.api_base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request with credentials included and returns the raw response.
    pub async fn fetch(&self, path: &str, options: RequestOptions) -> Result<Response, AppError> {
        let url = build_url_with_base(&self.base_url, path);
        let headers = build_headers(&options.headers)?;

        debug!(method = %options.method, url = %url, "sending request");

        let mut builder = self.client.request(options.method, &url).headers(headers);

        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        builder.send().await.map_err(map_request_error)
    }

    /// `GET` with credentials.
    pub async fn get(&self, path: &str) -> Result<Response, AppError> {
        self.fetch(path, RequestOptions::new(Method::GET)).await
    }

    /// `POST` a JSON body with credentials.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, AppError> {
        self.fetch(path, RequestOptions::new(Method::POST).json(body)?)
            .await
    }

    /// `POST` without a body, used to clear a session.
    pub async fn post_empty(&self, path: &str) -> Result<Response, AppError> {
        self.fetch(path, RequestOptions::new(Method::POST)).await
    }
}

/// Builds a URL from an explicit base URL and the provided path. Absolute
/// `http(s)` URLs are returned untouched.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let path = path.trim();
    if is_absolute_http(path) {
        return path.to_string();
    }

    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn native_builder(builder: reqwest::ClientBuilder, config: &AppConfig) -> reqwest::ClientBuilder {
    builder
        .user_agent(crate::APP_USER_AGENT)
        .timeout(std::time::Duration::from_millis(config.timeout_ms))
}

/// The browser fetch API accepts relative URLs but reqwest does not, so an
/// empty base falls back to the page origin there.
#[cfg(target_arch = "wasm32")]
fn resolve_base_url(base_url: &str) -> String {
    let base = base_url.trim();
    if !base.is_empty() {
        return base.to_string();
    }
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_base_url(base_url: &str) -> String {
    base_url.trim().to_string()
}

fn is_absolute_http(path: &str) -> bool {
    Url::parse(path).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

fn build_headers(pairs: &[(String, String)]) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| AppError::Serialization(format!("Invalid header name: {err}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|err| AppError::Serialization(format!("Invalid header value: {err}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

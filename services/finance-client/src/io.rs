//! HTTP client abstraction for testability

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue, COOKIE, SET_COOKIE};
use reqwest::Method;

use crate::cookie::{CookieStore, SessionCookies};

/// Method, headers and body for a single request.
///
/// The request helper forwards these unchanged; it never inspects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response from a request
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub set_cookies: Vec<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a request and read the full response body
    async fn send(&self, url: &str, options: &RequestOptions) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    cookies: Option<Arc<SessionCookies>>,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the jar's cookies with every request and store the cookies the
    /// server sets
    pub fn with_cookies(cookies: Arc<SessionCookies>) -> Self {
        Self {
            client: reqwest::Client::new(),
            cookies: Some(cookies),
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, url: &str, options: &RequestOptions) -> crate::Result<HttpResponse> {
        let method = &options.method;
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), url);
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| crate::ClientError::Http(format!("Invalid header {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                crate::ClientError::Http(format!("Invalid value for header {}: {}", name.as_str(), e))
            })?;
            request = request.header(name, value);
        }
        if let Some(cookies) = &self.cookies {
            let cookie_string = cookies.cookie_string();
            if !cookie_string.is_empty() {
                request = request.header(COOKIE, cookie_string);
            }
        }
        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|e| crate::ClientError::Http(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status().as_u16();
        let set_cookies: Vec<String> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();
        if let Some(cookies) = &self.cookies {
            for header in &set_cookies {
                cookies.store_set_cookie(header);
            }
        }

        let body = response
            .text()
            .await
            .map_err(|e| crate::ClientError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(HttpResponse {
            status,
            set_cookies,
            body,
        })
    }
}

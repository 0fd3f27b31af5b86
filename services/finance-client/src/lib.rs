//! Finance client - REST client for the personal finance manager
//!
//! Maps front-end action names to API endpoints, issues JSON requests against
//! them and provides the small cookie and text helpers the web UI relies on.

pub mod client;
pub mod config;
pub mod cookie;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod form;
pub mod io;
pub mod models;
pub mod text;

pub use client::ApiClient;
pub use config::{load_config, Config};
pub use cookie::{get_cookie, CookieStore, SessionCookies, StaticCookies};
pub use endpoint::{get_url, Action};
pub use error::{ClientError, Result};
pub use fetch::{get_json, try_get_json};
pub use form::FormData;
pub use io::{HttpClient, HttpResponse, ReqwestHttpClient, RequestOptions};
pub use text::{limit_word_length, DEFAULT_WORD_LIMIT};

use std::sync::Arc;

/// Build a client that talks to the configured server over reqwest and keeps
/// session cookies in memory
pub fn connect(config: &Config) -> ApiClient {
    let cookies = Arc::new(SessionCookies::new());
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::with_cookies(Arc::clone(&cookies)));
    ApiClient::new(config, http, cookies)
}

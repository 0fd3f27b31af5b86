//! BDD test world for the finance client

use cucumber::World;
use finance_client::{ClientError, HttpClient, HttpResponse, RequestOptions, StaticCookies};
use serde_json::Value;

/// HTTP client that answers every request with the same canned outcome
#[derive(Debug, Clone)]
pub struct FixedResponseClient {
    pub response: Result<HttpResponse, String>,
}

#[async_trait::async_trait]
impl HttpClient for FixedResponseClient {
    async fn send(
        &self,
        _url: &str,
        _options: &RequestOptions,
    ) -> finance_client::Result<HttpResponse> {
        match &self.response {
            Ok(r) => Ok(r.clone()),
            Err(msg) => Err(ClientError::Http(msg.clone())),
        }
    }
}

#[derive(Debug, Default, World)]
pub struct FinanceWorld {
    // Endpoint resolution
    pub resolved_url: Option<Option<String>>,

    // Cookie lookup
    pub cookies: Option<StaticCookies>,
    pub cookie_value: Option<String>,

    // Request helper
    pub http: Option<FixedResponseClient>,
    pub json_result: Option<Option<Value>>,

    // Word limiter
    pub limited_text: Option<String>,
}

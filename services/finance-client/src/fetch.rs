//! JSON request helper

use serde_json::Value;

use crate::io::{HttpClient, RequestOptions};

/// Request `url` and decode the response body as JSON.
///
/// Network and decode failures are logged and swallowed, so `None` means
/// either "nothing usable came back" or "the request failed"; callers cannot
/// tell the two apart. Use [`try_get_json`] when the difference matters.
///
/// The status code is not checked: an error response with a JSON body decodes
/// like any other.
pub async fn get_json(
    http: &dyn HttpClient,
    url: &str,
    options: &RequestOptions,
) -> Option<Value> {
    match try_get_json(http, url, options).await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("{} {}: {}", options.method, url, e);
            None
        }
    }
}

/// Like [`get_json`], but network failures surface as
/// [`ClientError::Http`](crate::ClientError::Http) and undecodable bodies as
/// [`ClientError::Json`](crate::ClientError::Json).
pub async fn try_get_json(
    http: &dyn HttpClient,
    url: &str,
    options: &RequestOptions,
) -> crate::Result<Value> {
    let response = http.send(url, options).await?;
    if !response.is_success() {
        tracing::debug!("{} {} returned status {}", options.method, url, response.status);
    }
    let value = serde_json::from_str(&response.body)?;
    Ok(value)
}

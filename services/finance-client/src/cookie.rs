//! Cookie lookup over an injected cookie store

use std::collections::BTreeMap;
use std::sync::Mutex;

use regex::Regex;

/// Source of a `document.cookie` style string (`name=value; other=value`)
pub trait CookieStore: Send + Sync {
    fn cookie_string(&self) -> String;
}

/// Value of the cookie named `key`, or an empty string when it is not set
pub fn get_cookie(store: &dyn CookieStore, key: &str) -> String {
    let pattern = format!(r"(?:^|;)\s*{}=([^;]+)", regex::escape(key));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("Cannot build cookie pattern for '{}': {}", key, e);
            return String::new();
        }
    };

    re.captures(&store.cookie_string())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// A fixed cookie string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCookies(pub String);

impl StaticCookies {
    pub fn new(cookies: impl Into<String>) -> Self {
        Self(cookies.into())
    }
}

impl CookieStore for StaticCookies {
    fn cookie_string(&self) -> String {
        self.0.clone()
    }
}

/// In-memory cookie jar fed from `Set-Cookie` response headers.
///
/// Attributes other than `Max-Age=0` are ignored; cookies are not scoped by
/// domain or path.
#[derive(Debug, Default)]
pub struct SessionCookies {
    cookies: Mutex<BTreeMap<String, String>>,
}

impl SessionCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single `Set-Cookie` header value.
    ///
    /// An empty value or `Max-Age=0` removes the cookie.
    pub fn store_set_cookie(&self, header: &str) {
        let mut parts = header.split(';');
        let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            tracing::debug!("Ignoring malformed Set-Cookie header: {}", header);
            return;
        };
        let name = name.trim();
        let value = value.trim().trim_matches('"');
        if name.is_empty() {
            return;
        }

        let expired = parts.any(|attr| {
            attr.split_once('=').is_some_and(|(k, v)| {
                k.trim().eq_ignore_ascii_case("max-age") && v.trim() == "0"
            })
        });

        let mut cookies = self.cookies.lock().unwrap_or_else(|e| e.into_inner());
        if expired || value.is_empty() {
            tracing::debug!("Removing cookie {}", name);
            cookies.remove(name);
        } else {
            tracing::debug!("Storing cookie {}", name);
            cookies.insert(name.to_string(), value.to_string());
        }
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        let mut cookies = self.cookies.lock().unwrap_or_else(|e| e.into_inner());
        cookies.insert(name.into(), value.into());
    }

    pub fn clear(&self) {
        let mut cookies = self.cookies.lock().unwrap_or_else(|e| e.into_inner());
        cookies.clear();
    }
}

impl CookieStore for SessionCookies {
    fn cookie_string(&self) -> String {
        let cookies = self.cookies.lock().unwrap_or_else(|e| e.into_inner());
        cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

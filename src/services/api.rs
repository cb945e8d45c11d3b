//! HTTP plumbing shared by every API module.
//!
//! Owns base-URL normalization, the persisted access token, and the
//! JSON request helpers. The helpers attach `authorization: Bearer ...`
//! whenever a token is stored and turn non-2xx responses into
//! [`AppError::Server`] carrying the backend's own detail message.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{BACKEND_URL, JWT_STORAGE_KEY};
use crate::types::{AppError, AppResult};

// =============================================================================
// Base URL handling
// =============================================================================

fn has_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Normalize a configured base URL: guarantee a scheme and drop trailing
/// slashes (a trailing slash makes the backend answer with a 307).
///
/// Bare `localhost`/`127.0.0.1` get `http://`; any other bare host is
/// assumed to be a deployment and gets `https://`.
pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if has_scheme(trimmed) {
        trimmed.to_string()
    } else if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        format!("http://{trimmed}")
    } else {
        format!("https://{trimmed}")
    };
    with_scheme.trim_end_matches('/').to_string()
}

/// Join a normalized base and an endpoint with exactly one slash, then
/// collapse accidental duplicate slashes (the `//` after the scheme
/// survives) and drop a trailing slash. Query string and fragment pass
/// through untouched.
pub fn join_url(base: &str, endpoint: &str) -> String {
    let url = if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    };

    let (path, suffix) = match url.find(['?', '#']) {
        Some(idx) => url.split_at(idx),
        None => (url.as_str(), ""),
    };

    let mut collapsed = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && collapsed.ends_with('/') && !collapsed.ends_with(":/") {
            continue;
        }
        collapsed.push(c);
    }

    if collapsed.ends_with('/') && !collapsed.ends_with("//") && collapsed.len() > 1 {
        collapsed.pop();
    }

    format!("{collapsed}{suffix}")
}

/// The API origin every request goes to.
pub fn api_base() -> String {
    normalize_base(BACKEND_URL)
}

/// Absolute URL for an API endpoint path like `/api/products`.
pub fn create_url(endpoint: &str) -> String {
    join_url(&api_base(), endpoint)
}

// =============================================================================
// Access token storage
// =============================================================================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The persisted access token, if the user logged in before.
pub fn stored_jwt() -> Option<String> {
    local_storage()?.get_item(JWT_STORAGE_KEY).ok().flatten()
}

pub fn has_stored_jwt() -> bool {
    stored_jwt().is_some()
}

pub fn set_stored_jwt(token: &str) {
    match local_storage() {
        Some(storage) if storage.set_item(JWT_STORAGE_KEY, token).is_ok() => {}
        _ => log::warn!("⚠️  Could not persist access token"),
    }
}

pub fn clear_stored_jwt() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(JWT_STORAGE_KEY);
    }
}

// =============================================================================
// JSON request helpers
// =============================================================================

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match stored_jwt() {
        Some(token) => builder.header("authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Pull the human-readable message out of an error response.
///
/// The backend answers errors as `{"detail": ...}`; older deployments
/// used `{"message": ...}`. Anything else is reported verbatim.
async fn server_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|value| {
            let field = value.get("detail").or_else(|| value.get("message"))?;
            match field {
                Value::String(text) => Some(text.clone()),
                other => Some(other.to_string()),
            }
        })
        .unwrap_or(body);
    AppError::Server(status, detail)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    if !response.ok() {
        return Err(server_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(format!("Failed to parse response: {e}")))
}

pub async fn get_json<T: DeserializeOwned>(endpoint: &str) -> AppResult<T> {
    let response = authorize(Request::get(&create_url(endpoint)))
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {e}")))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    endpoint: &str,
    body: &B,
) -> AppResult<T> {
    let request = authorize(Request::post(&create_url(endpoint)))
        .json(body)
        .map_err(|e| AppError::Network(format!("Failed to build request: {e}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {e}")))?;
    read_json(response).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    endpoint: &str,
    body: &B,
) -> AppResult<T> {
    let request = authorize(Request::patch(&create_url(endpoint)))
        .json(body)
        .map_err(|e| AppError::Network(format!("Failed to build request: {e}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {e}")))?;
    read_json(response).await
}

pub async fn delete_json<T: DeserializeOwned>(endpoint: &str) -> AppResult<T> {
    let response = authorize(Request::delete(&create_url(endpoint)))
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {e}")))?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_localhost_gets_http() {
        assert_eq!(normalize_base("localhost:8000"), "http://localhost:8000");
        assert_eq!(normalize_base("127.0.0.1:8000"), "http://127.0.0.1:8000");
    }

    #[test]
    fn bare_hostnames_get_https() {
        assert_eq!(normalize_base("api.shopmart.dev"), "https://api.shopmart.dev");
    }

    #[test]
    fn explicit_schemes_survive() {
        assert_eq!(
            normalize_base("HTTP://localhost:8000"),
            "HTTP://localhost:8000"
        );
        assert_eq!(
            normalize_base("https://api.shopmart.dev"),
            "https://api.shopmart.dev"
        );
    }

    #[test]
    fn trailing_slashes_and_whitespace_are_stripped() {
        assert_eq!(
            normalize_base("  http://localhost:8000///  "),
            "http://localhost:8000"
        );
    }

    #[test]
    fn joins_with_exactly_one_slash() {
        let base = "http://localhost:8000";
        assert_eq!(join_url(base, "/api/me"), "http://localhost:8000/api/me");
        assert_eq!(join_url(base, "api/me"), "http://localhost:8000/api/me");
    }

    #[test]
    fn collapses_duplicate_slashes_but_keeps_the_scheme() {
        assert_eq!(
            join_url("http://localhost:8000", "//api//products"),
            "http://localhost:8000/api/products"
        );
    }

    #[test]
    fn drops_a_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:8000", "/api/orders/"),
            "http://localhost:8000/api/orders"
        );
    }

    #[test]
    fn keeps_query_and_fragment_intact() {
        assert_eq!(
            join_url("http://localhost:8000", "/api/products?where%5Btitle%5D%5Bcontains%5D=tv"),
            "http://localhost:8000/api/products?where%5Btitle%5D%5Bcontains%5D=tv"
        );
        assert_eq!(
            join_url("http://localhost:8000", "/docs#auth"),
            "http://localhost:8000/docs#auth"
        );
    }
}

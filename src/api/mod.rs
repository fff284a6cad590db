//! Backend API Bindings
//!
//! HTTP bindings to the backend, organized by domain. This module owns the
//! fetch core: requests carry the session cookie (`credentials: include`),
//! and bodies that read as HTML error pages are rejected before any JSON
//! parse is attempted, whatever the status code.

mod auth;
mod authors;
mod categories;
mod contact;
mod creator;
mod items;
mod nfts;
mod settings;
mod share;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestCredentials, RequestInit, Response};

// Re-export all public items
pub use auth::*;
pub use authors::*;
pub use categories::*;
pub use contact::*;
pub use creator::*;
pub use items::*;
pub use nfts::*;
pub use settings::*;
pub use share::*;

/// API error taxonomy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// Transport-level failure (request rejected, no usable response)
    Network(String),
    /// Non-2xx status with a readable body; message is server-provided when present
    Api { status: u16, message: String },
    /// Body was an HTML error page, on any status
    UpstreamHtml { status: u16 },
    /// 2xx body that did not parse as the expected JSON shape
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Api { status: 401, .. })
    }

    /// User-facing message for toasts
    pub fn message(&self) -> String {
        match self {
            ApiError::Network(msg) => format!("Network error: {}", msg),
            ApiError::Api { message, .. } => message.clone(),
            ApiError::UpstreamHtml { status } => {
                format!("The server returned an error page (HTTP {})", status)
            }
            ApiError::Decode(msg) => format!("Unexpected server response: {}", msg),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network failure: {}", msg),
            ApiError::Api { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::UpstreamHtml { status } => write!(f, "upstream error page (HTTP {})", status),
            ApiError::Decode(msg) => write!(f, "decode failure: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

/// Characters escaped when a user-supplied value becomes a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'&')
    .add(b'+');

pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// True if a body reads as an HTML document rather than JSON
fn looks_like_html(body: &str) -> bool {
    let head: String = body
        .trim_start()
        .chars()
        .take("<!doctype html".len())
        .collect::<String>()
        .to_ascii_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

/// Pull a `{"message": ...}` out of an error body, falling back to the raw text
fn server_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct MessageBody {
        message: String,
    }
    if let Ok(parsed) = serde_json::from_str::<MessageBody>(body) {
        return parsed.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed (HTTP {})", status)
    } else {
        trimmed.to_string()
    }
}

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

async fn response_text(resp: &Response) -> ApiResult<String> {
    let promise = resp.text().map_err(|e| ApiError::Network(js_error_text(&e)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Network(js_error_text(&e)))?;
    Ok(text.as_string().unwrap_or_default())
}

/// Issue a request and normalize non-success responses into the error taxonomy.
/// On success the raw `Response` is returned for the caller to read.
async fn request(method: &str, path: &str, json_body: Option<String>) -> ApiResult<Response> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_credentials(RequestCredentials::Include);

    let headers = Headers::new().map_err(|e| ApiError::Network(js_error_text(&e)))?;
    if let Some(json) = &json_body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(js_error_text(&e)))?;
        init.set_body(&JsValue::from_str(json));
    }
    init.set_headers(headers.as_ref());

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_str_and_init(path, &init))
        .await
        .map_err(|e| ApiError::Network(js_error_text(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch yielded a non-Response value".to_string()))?;

    web_sys::console::log_1(&format!("[API] {} {} -> {}", method, path, resp.status()).into());

    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = response_text(&resp).await?;
    if looks_like_html(&text) {
        Err(ApiError::UpstreamHtml { status })
    } else {
        Err(ApiError::Api { status, message: server_message(status, &text) })
    }
}

/// Read a response body as `T`, sniffing for HTML first: a 200 carrying an
/// error page must never reach the JSON parser.
async fn read_json<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    let status = resp.status();
    let text = response_text(&resp).await?;
    if looks_like_html(&text) {
        return Err(ApiError::UpstreamHtml { status });
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let resp = request("GET", path, None).await?;
    read_json(resp).await
}

pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> ApiResult<T> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = request("POST", path, Some(json)).await?;
    read_json(resp).await
}

/// POST where the caller only cares that the write landed
pub(crate) async fn post_unit<B: Serialize>(path: &str, body: &B) -> ApiResult<()> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    request("POST", path, Some(json)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_doctype_is_detected() {
        assert!(looks_like_html("<!DOCTYPE html><html><body>502</body></html>"));
        assert!(looks_like_html("<!doctype html>"));
        assert!(looks_like_html("  \n\t<html lang=\"en\">"));
        assert!(looks_like_html("<HTML>"));
    }

    #[test]
    fn test_json_bodies_are_not_html() {
        assert!(!looks_like_html("{\"message\":\"ok\"}"));
        assert!(!looks_like_html("[1,2,3]"));
        assert!(!looks_like_html(""));
        // An XML-ish but non-html tag must not trip the sniffer
        assert!(!looks_like_html("<data/>"));
    }

    #[test]
    fn test_server_message_prefers_json_message() {
        assert_eq!(server_message(401, r#"{"message":"Login failed"}"#), "Login failed");
        assert_eq!(server_message(500, "boom"), "boom");
        assert_eq!(server_message(503, "  "), "Request failed (HTTP 503)");
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Api { status: 401, message: "no session".to_string() };
        assert!(err.is_unauthorized());
        let err = ApiError::Api { status: 403, message: "forbidden".to_string() };
        assert!(!err.is_unauthorized());
        assert!(!ApiError::UpstreamHtml { status: 401 }.is_unauthorized());
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("mixed media"), "mixed%20media");
        assert_eq!(encode_segment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(encode_segment("plain-slug"), "plain-slug");
    }
}

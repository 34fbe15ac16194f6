//! Request descriptions and the `curl` invocation that carries them.
//!
//! The plugin cannot open sockets itself, so every call is executed by the
//! host as a `curl` command. The response body is followed by a newline and
//! the HTTP status code (`-w "\n%{http_code}"`), which
//! [`HttpOutcome::from_curl`](super::HttpOutcome::from_curl) splits apart again.

use crate::domain::{NameId, Result};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Correlates a host command result with the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HTTP methods used against the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// Body of `POST /names`.
#[derive(Debug, Serialize)]
struct CreateBody<'a> {
    name: &'a str,
}

/// A single call to the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub id: RequestId,
    pub method: HttpMethod,
    /// Path relative to the API base, starting with `/`.
    pub path: String,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    /// `GET /names`
    #[must_use]
    pub fn list(id: RequestId) -> Self {
        Self {
            id,
            method: HttpMethod::Get,
            path: "/names".to_string(),
            body: None,
        }
    }

    /// `POST /names` with `{"name": ...}`.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the body cannot be serialized.
    pub fn create(id: RequestId, name: &str) -> Result<Self> {
        Ok(Self {
            id,
            method: HttpMethod::Post,
            path: "/names".to_string(),
            body: Some(serde_json::to_string(&CreateBody { name })?),
        })
    }

    /// `DELETE /names/{id}`
    #[must_use]
    pub fn delete(id: RequestId, target: NameId) -> Self {
        Self {
            id,
            method: HttpMethod::Delete,
            path: format!("/names/{target}"),
            body: None,
        }
    }

    /// Full URL of this request under `api_base`.
    #[must_use]
    pub fn url(&self, api_base: &str) -> String {
        format!("{}{}", api_base.trim_end_matches('/'), self.path)
    }
}

/// Builds the `curl` argv for a request.
///
/// `-sS` keeps progress output away while still reporting transport errors on
/// stderr; without `-f`, HTTP error statuses still exit with code 0 so their
/// bodies can be read.
#[must_use]
pub fn curl_command(api_base: &str, request: &ApiRequest, timeout: Duration) -> Vec<String> {
    let mut args = vec![
        "curl".to_string(),
        "-sS".to_string(),
        "--max-time".to_string(),
        timeout.as_secs().max(1).to_string(),
        "-X".to_string(),
        request.method.as_str().to_string(),
        "-H".to_string(),
        "Accept: application/json".to_string(),
    ];

    if let Some(body) = &request.body {
        args.extend([
            "-H".to_string(),
            "Content-Type: application/json".to_string(),
            "--data".to_string(),
            body.clone(),
        ]);
    }

    args.extend([
        "-w".to_string(),
        "\\n%{http_code}".to_string(),
        request.url(api_base),
    ]);
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_is_json_escaped() {
        let request = ApiRequest::create(RequestId(3), "Ann \"The\" Best").unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"Ann \"The\" Best"}"#));
    }

    #[test]
    fn delete_addresses_record_by_id() {
        let request = ApiRequest::delete(RequestId(1), NameId(42));
        assert_eq!(request.url("http://localhost:8000/api/"), "http://localhost:8000/api/names/42");
    }

    #[test]
    fn curl_command_for_get_has_no_body() {
        let args = curl_command(
            "http://localhost:8000/api",
            &ApiRequest::list(RequestId(0)),
            Duration::from_secs(10),
        );
        assert_eq!(args[0], "curl");
        assert!(!args.iter().any(|a| a == "--data"));
        assert_eq!(args.last().map(String::as_str), Some("http://localhost:8000/api/names"));
        let timeout_at = args.iter().position(|a| a == "--max-time").unwrap();
        assert_eq!(args[timeout_at + 1], "10");
    }

    #[test]
    fn curl_command_for_post_sends_json() {
        let request = ApiRequest::create(RequestId(0), "Alice").unwrap();
        let args = curl_command("http://h/api", &request, Duration::from_millis(200));

        let data_at = args.iter().position(|a| a == "--data").unwrap();
        assert_eq!(args[data_at + 1], r#"{"name":"Alice"}"#);
        assert!(args.iter().any(|a| a == "Content-Type: application/json"));
        let timeout_at = args.iter().position(|a| a == "--max-time").unwrap();
        assert_eq!(args[timeout_at + 1], "1");
    }
}

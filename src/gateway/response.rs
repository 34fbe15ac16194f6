//! Interpretation of completed host commands as HTTP outcomes.

use super::error::{ErrorKind, GatewayError};
use crate::domain::escape_control;
use serde::Deserialize;

/// curl exit code for an operation that hit `--max-time`.
const CURL_EXIT_TIMEOUT: i32 = 28;

/// What the transport reported for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpOutcome {
    /// The server answered.
    Response { status: u16, body: String },
    /// The exchange did not complete.
    Unreachable { detail: String },
    /// The transport gave up waiting.
    TimedOut,
}

impl HttpOutcome {
    /// Decodes the result of a `curl` command built by
    /// [`curl_command`](super::curl_command).
    ///
    /// ```
    /// use names_panel::gateway::HttpOutcome;
    ///
    /// let outcome = HttpOutcome::from_curl(Some(0), b"{\"names\":[]}\n200", b"");
    /// assert_eq!(outcome, HttpOutcome::Response { status: 200, body: "{\"names\":[]}".into() });
    ///
    /// let outcome = HttpOutcome::from_curl(Some(7), b"\n000", b"curl: (7) Failed to connect");
    /// assert!(matches!(outcome, HttpOutcome::Unreachable { .. }));
    /// ```
    #[must_use]
    pub fn from_curl(exit_code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> Self {
        match exit_code {
            Some(0) => {
                let output = String::from_utf8_lossy(stdout);
                let parsed = output
                    .rsplit_once('\n')
                    .and_then(|(body, code)| code.trim().parse::<u16>().ok().map(|s| (body, s)));

                match parsed {
                    Some((body, status)) if status != 0 => Self::Response {
                        status,
                        body: body.to_string(),
                    },
                    _ => Self::Unreachable {
                        detail: "missing status line in curl output".to_string(),
                    },
                }
            }
            Some(CURL_EXIT_TIMEOUT) => Self::TimedOut,
            _ => Self::Unreachable {
                detail: String::from_utf8_lossy(stderr).trim().to_string(),
            },
        }
    }
}

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// JSON error body sent with non-success statuses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<ErrorKind>,
}

/// Normalizes a transport outcome into a response or a [`GatewayError`].
///
/// # Errors
///
/// - [`GatewayError::Unreachable`] / [`GatewayError::TimedOut`] for transport failures
/// - [`GatewayError::Rejected`] for non-2xx statuses, with the server's `error`
///   text or `Request failed with status <code>`
pub fn interpret(outcome: HttpOutcome) -> Result<ApiResponse, GatewayError> {
    match outcome {
        HttpOutcome::Response { status, body } if (200..300).contains(&status) => {
            Ok(ApiResponse { status, body })
        }
        HttpOutcome::Response { status, body } => {
            let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
            let message = parsed
                .error
                .filter(|m| !m.trim().is_empty())
                .map_or_else(
                    || format!("Request failed with status {status}"),
                    |m| escape_control(&m),
                );
            tracing::debug!(status, message = %message, "request rejected by server");
            Err(GatewayError::Rejected {
                message,
                code: parsed.code,
            })
        }
        HttpOutcome::Unreachable { detail } => {
            tracing::warn!(detail = %detail, "server unreachable");
            Err(GatewayError::Unreachable)
        }
        HttpOutcome::TimedOut => {
            tracing::warn!("request timed out at transport");
            Err(GatewayError::TimedOut)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpOutcome {
        HttpOutcome::Response {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn splits_body_from_trailing_status() {
        let outcome = HttpOutcome::from_curl(Some(0), b"line one\nline two\n201", b"");
        assert_eq!(outcome, response(201, "line one\nline two"));

        let outcome = HttpOutcome::from_curl(Some(0), b"\n204", b"");
        assert_eq!(outcome, response(204, ""));
    }

    #[test]
    fn maps_curl_exit_codes() {
        assert_eq!(HttpOutcome::from_curl(Some(28), b"", b""), HttpOutcome::TimedOut);
        assert_eq!(
            HttpOutcome::from_curl(Some(6), b"", b"curl: (6) Could not resolve host\n"),
            HttpOutcome::Unreachable {
                detail: "curl: (6) Could not resolve host".to_string()
            }
        );
        assert!(matches!(
            HttpOutcome::from_curl(None, b"", b""),
            HttpOutcome::Unreachable { .. }
        ));
        assert!(matches!(
            HttpOutcome::from_curl(Some(0), b"garbage", b""),
            HttpOutcome::Unreachable { .. }
        ));
    }

    #[test]
    fn success_statuses_pass_through() {
        let ok = interpret(response(200, "{}")).unwrap();
        assert_eq!(ok.body, "{}");
        assert!(interpret(response(201, "")).is_ok());
    }

    #[test]
    fn rejection_uses_server_error_text() {
        let err = interpret(response(400, r#"{"error": "Name already exists"}"#)).unwrap_err();
        assert_eq!(
            err,
            GatewayError::Rejected {
                message: "Name already exists".to_string(),
                code: None,
            }
        );
    }

    #[test]
    fn rejection_text_cannot_carry_terminal_sequences() {
        let body = r#"{"error": "Name \u001b[2Jalready exists"}"#;
        let err = interpret(response(409, body)).unwrap_err();
        assert_eq!(err.to_string(), "Name \\u{1b}[2Jalready exists");
        assert!(!err.to_string().contains('\u{1b}'));
        assert_eq!(ErrorKind::classify(&err), ErrorKind::AlreadyExists);
    }

    #[test]
    fn rejection_keeps_structured_code() {
        let err = interpret(response(404, r#"{"error": "gone", "code": "not_found"}"#)).unwrap_err();
        assert_eq!(ErrorKind::classify(&err), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "gone");
    }

    #[test]
    fn rejection_without_json_falls_back_to_status() {
        let err = interpret(response(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 502");

        let err = interpret(response(500, r#"{"error": ""}"#)).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn transport_failures_become_fixed_errors() {
        let err = interpret(HttpOutcome::Unreachable {
            detail: "refused".to_string(),
        })
        .unwrap_err();
        assert_eq!(err, GatewayError::Unreachable);
        assert_eq!(interpret(HttpOutcome::TimedOut).unwrap_err(), GatewayError::TimedOut);
    }
}

//! Request gateway: the only path to the remote names API.
//!
//! Requests are described by [`ApiRequest`], executed by the host through
//! [`curl_command`], and their results normalized by [`HttpOutcome::from_curl`]
//! and [`interpret`] into either an [`ApiResponse`] or a [`GatewayError`].
//! Every call is a single attempt; there are no retries at this layer.
//!
//! ```text
//! ApiRequest → curl argv → (host) → exit code + stdout → HttpOutcome → Result<ApiResponse, GatewayError>
//! ```

pub mod error;
pub mod request;
pub mod response;

pub use error::{ErrorKind, GatewayError};
pub use request::{curl_command, ApiRequest, HttpMethod, RequestId};
pub use response::{interpret, ApiResponse, HttpOutcome};

//! HTTP-to-domain error translation.

use crate::error::ApiError;
use crate::transport::TransportResponse;

/// Translate a non-success response into an [`ApiError`].
///
/// The body is decoded as the service's structured error payload on a
/// best-effort basis: a body that is not that shape leaves the decoded
/// fields at their zero values, and the raw text is preserved verbatim
/// either way. Translation itself never fails.
pub fn translate_error(response: &TransportResponse, url: &str) -> ApiError {
    let body = String::from_utf8_lossy(&response.body).into_owned();
    let decoded = serde_json::from_slice(&response.body).unwrap_or_default();

    ApiError {
        status: response.status,
        headers: response.headers.clone(),
        body,
        decoded,
        url: url.to_string(),
    }
}

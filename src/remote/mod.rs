pub mod api_error;
pub mod http;
pub mod stats;

use crate::error::{Error, Result};

use api_error::ApiErrorReport;

/// Consume a response and return its body if the status is below 300.
///
/// Any other status is turned into [`Error::Api`] carrying whatever detail
/// the body decodes to. A body that cannot be read counts as a transport
/// failure.
///
/// # Errors
///
/// Returns [`Error::Api`] for status >= 300 and [`Error::Fetch`] if the body
/// cannot be read.
pub(crate) fn require_success(url: &str, resp: reqwest::blocking::Response) -> Result<Vec<u8>> {
    let status = resp.status();
    let body = resp.bytes().map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;
    tracing::debug!(%status, bytes = body.len(), "response from {url}");

    if status.as_u16() < 300 {
        return Ok(body.to_vec());
    }
    let report = ApiErrorReport::from_body(&body);
    tracing::debug!(?report, "decoded error body");
    Err(Error::Api {
        status: status.as_u16(),
        report,
    })
}

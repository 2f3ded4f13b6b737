use std::fmt;

use crate::remote::api_error::ApiErrorReport;

/// Every way a single goatline invocation can fail. None of these are
/// retried; the binary prints the message and exits non-zero.
///
/// `Display` covers this layer only. The underlying cause is reachable
/// through [`std::error::Error::source`].
#[derive(Debug)]
pub enum Error {
    /// A required setting is missing or empty.
    Config { key: &'static str },
    /// The request never produced a response (DNS, connect, timeout, body read).
    Fetch { url: String, source: reqwest::Error },
    /// The server answered with a status >= 300.
    Api { status: u16, report: ApiErrorReport },
    /// A successful response whose body is not the expected JSON shape.
    Decode {
        endpoint: &'static str,
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) const fn missing(key: &'static str) -> Self {
        Self::Config { key }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { key } => {
                write!(f, "{key} not found in environment or .env file")
            }
            Self::Fetch { url, .. } => write!(f, "could not reach {url}"),
            Self::Api { status, report } => match report {
                ApiErrorReport::Undecodable => write!(f, "api error (HTTP {status})"),
                detail => write!(f, "api error (HTTP {status}): {detail}"),
            },
            Self::Decode { endpoint, .. } => {
                write!(f, "{endpoint}: invalid response from server")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Config { .. } | Self::Api { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION};

use crate::config::Config;
use crate::error::{Error, Result};

/// Authenticated client for one site. Every request carries the bearer
/// token and asks for JSON; there is no retry and no timeout beyond the
/// transport defaults.
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

// Manual Debug impl to redact the bearer token
impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Build a client for the site described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the HTTP client cannot be constructed
    /// (e.g., invalid TLS config).
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("goatline/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| Error::Fetch {
                url: config.base_url.clone(),
                source,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Absolute URL for an API path such as `/api/v0/stats/hits`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send one authenticated request and return the raw body of a
    /// successful (< 300) response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] on transport failure and [`Error::Api`] when
    /// the server answers with status >= 300.
    pub fn fetch(&self, url: &str, method: Method) -> Result<Vec<u8>> {
        tracing::debug!(%method, "request {url}");
        let resp = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .map_err(|source| Error::Fetch {
                url: url.to_string(),
                source,
            })?;
        super::require_success(url, resp)
    }

    /// `GET` an API path relative to the site base URL.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub fn get(&self, path: &str) -> Result<Vec<u8>> {
        self.fetch(&self.url(path), Method::GET)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = Client::new(&Config::new("https://a.goatcounter.com", "t")).unwrap();
        assert_eq!(
            client.url("/api/v0/stats/hits"),
            "https://a.goatcounter.com/api/v0/stats/hits"
        );
    }

    #[test]
    fn debug_redacts_token() {
        let client = Client::new(&Config::new("https://a.goatcounter.com", "s3cret")).unwrap();
        let debug_str = format!("{client:?}");
        assert!(!debug_str.contains("s3cret"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}

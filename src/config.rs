use crate::error::{Error, Result};

pub const SITE_PREFIX_VAR: &str = "SITE_PREFIX";
pub const TOKEN_VAR: &str = "TOKEN";
/// Full base URL of a self-hosted instance; takes precedence over `SITE_PREFIX`.
pub const SITE_URL_VAR: &str = "SITE_URL";

const HOSTED_DOMAIN: &str = "goatcounter.com";

/// Connection settings for one site. Built once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub token: String,
}

// Custom Debug masks the token so the struct is safe to log.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Seed the process environment from `./.env` (if any) and resolve the config.
    ///
    /// Variables already set in the environment win over the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first required key that is missing.
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("loaded {}", path.display()),
            Err(e) if e.not_found() => tracing::debug!("no .env file, using process environment"),
            Err(e) => tracing::warn!("ignoring unreadable .env file: {e}"),
        }
        Self::from_env()
    }

    /// Resolve the config from the process environment only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first required key that is missing.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the config from an arbitrary key-value source.
    /// Empty values count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first required key that is missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = match get(SITE_URL_VAR) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let prefix = get(SITE_PREFIX_VAR).ok_or_else(|| Error::missing(SITE_PREFIX_VAR))?;
                format!("https://{prefix}.{HOSTED_DOMAIN}")
            }
        };
        let token = get(TOKEN_VAR).ok_or_else(|| Error::missing(TOKEN_VAR))?;

        let cfg = Self { base_url, token };
        tracing::debug!(?cfg, "resolved config");
        Ok(cfg)
    }
}

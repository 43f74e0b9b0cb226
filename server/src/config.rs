//! Host configuration parsed from environment variables.
//!
//! Recognised variables:
//! - `PORT`: listen port, default 3000
//! - `AUTH_SIGN_IN_URL`, `AUTH_SIGN_UP_URL`: hosted auth pages
//! - `AUTH_USERINFO_URL`: provider endpoint that resolves a session token
//! - `AUTH_SESSION_COOKIE`: provider session cookie name, default `__session`
//! - `PROTECTED_PATHS`: comma-separated path prefixes that need a session
//! - `COOKIE_SECURE`: force the `Secure` flag on cookies the host writes
//!
//! The content service base URL is not read here. The browser calls that
//! service directly, so `CONTENT_API_URL` is baked into the client bundle at
//! build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_COOKIE: &str = "__session";
pub const DEFAULT_PROTECTED_PATHS: [&str; 4] = ["/dashboard", "/profile", "/settings", "/add-blog"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("{var} must be an http(s) URL, got {value}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Hosted pages and identity endpoint of the external auth provider.
///
/// Each piece is optional; routes that need a missing piece answer 503.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthProviderConfig {
    pub sign_in_url: Option<String>,
    pub sign_up_url: Option<String>,
    pub userinfo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub auth: AuthProviderConfig,
    pub session_cookie: String,
    pub protected_paths: Vec<String>,
    pub cookie_secure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            auth: AuthProviderConfig::default(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_owned(),
            protected_paths: DEFAULT_PROTECTED_PATHS.iter().map(|p| (*p).to_owned()).collect(),
            cookie_secure: false,
        }
    }
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` is not a port number or a URL
    /// variable is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let auth = AuthProviderConfig {
            sign_in_url: get("AUTH_SIGN_IN_URL").map(|v| http_url("AUTH_SIGN_IN_URL", v)).transpose()?,
            sign_up_url: get("AUTH_SIGN_UP_URL").map(|v| http_url("AUTH_SIGN_UP_URL", v)).transpose()?,
            userinfo_url: get("AUTH_USERINFO_URL").map(|v| http_url("AUTH_USERINFO_URL", v)).transpose()?,
        };
        let session_cookie = get("AUTH_SESSION_COOKIE").unwrap_or(defaults.session_cookie);
        let protected_paths = get("PROTECTED_PATHS").map_or(defaults.protected_paths, |raw| parse_path_list(&raw));
        let cookie_secure = get("COOKIE_SECURE")
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or_else(|| auth.sign_in_url.as_deref().is_some_and(|url| url.starts_with("https://")));

        Ok(Self { port, auth, session_cookie, protected_paths, cookie_secure })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Split a comma-separated prefix list, normalising each entry to start with
/// `/` and carry no trailing slash.
pub(crate) fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("/{}", p.trim_matches('/')))
        .collect()
}

fn http_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value)
    } else {
        Err(ConfigError::InvalidUrl { var, value })
    }
}

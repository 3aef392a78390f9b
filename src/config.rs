// Configuration values handed from the command line down to the API client.
// Nothing here is global: `main` builds these once and passes them along.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_BACKEND: &str = "staging-nginz-https.zinfra.io";
pub const DEFAULT_COOKIE_NAME: &str = "zuid";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Name, version and description of the running program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl AppInfo {
    /// Identity taken from the package metadata at compile time.
    #[must_use]
    pub const fn from_cargo() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        }
    }

    /// Value used as the `User-Agent` header.
    #[must_use]
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

/// Email and password of the account. Never changes after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Everything an `ApiClient` needs to talk to one backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend host, with or without scheme.
    pub backend: String,
    pub credentials: Credentials,
    pub timeout: Duration,
    /// Name of the cookie the backend uses for the session.
    pub cookie_name: String,
}

impl ClientConfig {
    pub fn new(backend: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            backend: backend.into(),
            credentials,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_cookie_name(mut self, cookie_name: impl Into<String>) -> Self {
        self.cookie_name = cookie_name.into();
        self
    }
}

/// Strips a leading `http://` or `https://` (in any case) and any trailing
/// slashes so the host can be reused under the `https` scheme.
pub fn normalize_backend(backend: &str) -> &str {
    let trimmed = backend.trim();
    let without_scheme = ["https://", "http://"]
        .iter()
        .find_map(|scheme| strip_prefix_ignore_case(trimmed, scheme))
        .unwrap_or(trimmed);
    without_scheme.trim_end_matches('/')
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}

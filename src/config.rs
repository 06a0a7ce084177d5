use std::{env, time::Duration};

/// Default root of the roster service API.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
/// Default request timeout against the roster service.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const API_URL_VAR: &str = "ROSTER_API_URL";
const USER_VAR: &str = "ROSTER_USER";
const PASSWORD_VAR: &str = "ROSTER_PASSWORD";

/// Basic authentication pair sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    pub fn username(&self) -> &str { &self.username }
    pub fn password(&self) -> &str { &self.password }
}

/// Connection settings for the roster service client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    credentials: Option<Credentials>,
    timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), credentials: None, timeout: DEFAULT_TIMEOUT }
    }

    /// Reads `ROSTER_API_URL`, `ROSTER_USER` and `ROSTER_PASSWORD`.
    ///
    /// Credentials are only set when the user name is present; a missing password
    /// is sent as the empty string.
    pub fn from_env() -> Self {
        let base_url_var = env::var(API_URL_VAR);
        let base_url = base_url_var.as_ref().map_or(DEFAULT_API_URL, |v| v.as_str());
        let credentials = env::var(USER_VAR)
            .ok()
            .map(|user| Credentials::new(user, env::var(PASSWORD_VAR).unwrap_or_default()));
        Self { base_url: base_url.to_string(), credentials, timeout: DEFAULT_TIMEOUT }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the login with the given user and password.
    ///
    /// A new user without a password gets the empty password; the configured
    /// password is only kept for the same user. A password alone updates the
    /// configured user and is ignored when there is none.
    #[must_use]
    pub fn with_login(mut self, user: Option<&str>, password: Option<&str>) -> Self {
        let current = self.credentials.take();
        self.credentials = match (user, current) {
            (Some(user), Some(c)) if c.username() == user => {
                Some(Credentials::new(user, password.unwrap_or(c.password())))
            }
            (Some(user), _) => Some(Credentials::new(user, password.unwrap_or_default())),
            (None, Some(c)) => Some(match password {
                Some(password) => Credentials::new(c.username(), password),
                None => c,
            }),
            (None, None) => None,
        };
        self
    }

    pub fn base_url(&self) -> &str { &self.base_url }
    pub fn credentials(&self) -> Option<&Credentials> { self.credentials.as_ref() }
    pub fn timeout(&self) -> Duration { self.timeout }

    /// The user name the session runs as, if any.
    pub fn username(&self) -> Option<&str> { self.credentials.as_ref().map(Credentials::username) }
}

impl Default for ClientConfig {
    fn default() -> Self { Self::new(DEFAULT_API_URL) }
}

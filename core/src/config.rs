//! Connection settings for the bundled HTTP transport.

use std::time::Duration;

use crate::error::{ActivitiError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/activiti-rest/service";

pub const ENV_URL: &str = "ACTIVITI_URL";
pub const ENV_USER: &str = "ACTIVITI_USER";
pub const ENV_PASSWORD: &str = "ACTIVITI_PASSWORD";
pub const ENV_TIMEOUT_SECS: &str = "ACTIVITI_TIMEOUT_SECS";

/// Basic-auth credentials sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Where and how the transport reaches the REST root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// REST root; request paths are resolved relative to it.
    pub base_url: String,
    pub credentials: Option<Credentials>,
    /// Overall deadline per exchange. `None` leaves the agent default.
    pub timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TransportConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
            timeout: None,
        }
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `ACTIVITI_URL`, `ACTIVITI_USER`, `ACTIVITI_PASSWORD` and
    /// `ACTIVITI_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(ENV_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url);

        match (lookup(ENV_USER), lookup(ENV_PASSWORD)) {
            (Some(user), password) => {
                config = config.with_credentials(&user, &password.unwrap_or_default());
            }
            (None, Some(_)) => {
                return Err(ActivitiError::Config(format!(
                    "{ENV_PASSWORD} is set but {ENV_USER} is not"
                )));
            }
            (None, None) => {}
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ActivitiError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got {raw:?}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

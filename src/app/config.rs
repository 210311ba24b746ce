use std::time::Duration;

use thiserror::Error;

/// Default simulated authentication delay in milliseconds.
const DEFAULT_AUTH_DELAY_MS: u64 = 1000;

/// Runtime configuration for the client.
///
/// There is no configuration file; everything is defaulted and a couple
/// of knobs can be overridden from the environment:
///
/// - `MEDCONNECT_AUTH_DELAY_MS` - simulated login/registration latency
/// - `MEDCONNECT_START_PATH` - initial path resolved through the guard
#[derive(Debug, Clone)]
pub struct Config {
    auth_delay: Duration,
    start_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
            start_path: None,
        }
    }
}

impl Config {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read configuration from the environment. An unparsable delay is
    /// a hard error; startup aborts rather than silently falling back.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Ok(raw) = std::env::var("MEDCONNECT_AUTH_DELAY_MS") {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidAuthDelay(raw))?;
            builder = builder.auth_delay(Duration::from_millis(millis));
        }
        if let Ok(path) = std::env::var("MEDCONNECT_START_PATH") {
            builder = builder.start_path(path);
        }
        Ok(builder.build())
    }

    /// Simulated latency applied before a submission commits.
    pub fn auth_delay(&self) -> Duration {
        self.auth_delay
    }

    /// Path the client navigates to on startup, resolved through the
    /// guard like any other navigation.
    pub fn start_path(&self) -> Option<&str> {
        self.start_path.as_deref()
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    auth_delay: Option<Duration>,
    start_path: Option<String>,
}

impl ConfigBuilder {
    pub fn auth_delay(mut self, delay: Duration) -> Self {
        self.auth_delay = Some(delay);
        self
    }

    pub fn start_path(mut self, path: impl Into<String>) -> Self {
        self.start_path = Some(path.into());
        self
    }

    pub fn build(self) -> Config {
        Config {
            auth_delay: self
                .auth_delay
                .unwrap_or(Duration::from_millis(DEFAULT_AUTH_DELAY_MS)),
            start_path: self.start_path,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid MEDCONNECT_AUTH_DELAY_MS value: {0:?}")]
    InvalidAuthDelay(String),
}

use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where DNS-over-HTTPS JSON queries are sent, and how long to wait.
///
/// Built once and shared read-only by every request that uses it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Resolver host name, without scheme or path.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_path")]
    pub path: String,

    /// Timeout in milliseconds for the default transport built from this
    /// configuration. Injected transports keep their own.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            path: default_path(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ResolverConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Rounds down to whole milliseconds, never below 1ms.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis())
            .unwrap_or(u64::MAX)
            .max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::Validation(
                "Resolver host cannot be empty".to_string(),
            ));
        }

        if self
            .host
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '@') || c.is_whitespace())
        {
            return Err(ConfigError::Validation(format!(
                "Resolver host '{}' must be a bare host name without scheme or path",
                self.host
            )));
        }

        // `host:port`; a bracketed IPv6 literal alone has no port.
        if let Some((_, port)) = self.host.rsplit_once(':') {
            if !self.host.ends_with(']') && !matches!(port.parse::<u16>(), Ok(p) if p != 0) {
                return Err(ConfigError::Validation(format!(
                    "Resolver host '{}' has an invalid port",
                    self.host
                )));
            }
        }

        if !self.path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "Resolver path '{}' must start with '/'",
                self.path
            )));
        }

        if self.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_host() -> String {
    "cloudflare-dns.com".to_string()
}

fn default_path() -> String {
    "/dns-query".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

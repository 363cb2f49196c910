//! Daemon configuration.
//!
//! Read from `mistdebug.toml` when that file exists, then overridden by
//! `MIST_DEBUG_*` environment variables and `RUST_LOG`.
//!
//! ```toml
//! [console]
//! host = "127.0.0.1"
//! port = 3000
//! log = "mistdebugd=debug"
//!
//! [backend]
//! base_url = "http://localhost:8081"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use mistdebug_adapter_backend_reqwest::BackendConfig;

const CONFIG_FILE: &str = "mistdebug.toml";

const DEFAULT_LOG_FILTER: &str =
    "mistdebugd=info,mistdebug_app=info,mistdebug_adapter_backend_reqwest=info,tower_http=debug";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub console: ConsoleConfig,
    pub backend: BackendConfig,
}

/// Where the console listens and how loudly it logs.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub host: String,
    pub port: u16,
    /// `EnvFilter` directive.
    pub log: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Read `mistdebug.toml`, apply the process environment and validate.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, or when the resulting
    /// settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::read(Path::new(CONFIG_FILE))?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// A missing file yields the defaults.
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides looked up through `var`, usually the process
    /// environment.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("MIST_DEBUG_HOST") {
            self.console.host = val;
        }
        if let Some(port) = var("MIST_DEBUG_PORT").and_then(|val| val.parse().ok()) {
            self.console.port = port;
        }
        if let Some((host, port)) = var("MIST_DEBUG_BIND")
            .as_deref()
            .and_then(|val| val.rsplit_once(':'))
        {
            self.console.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.console.port = port;
            }
        }
        if let Some(val) = var("MIST_DEBUG_API_URL") {
            self.backend.base_url = val;
        }
        // RUST_LOG is looked up last so it wins.
        for key in ["MIST_DEBUG_LOG", "RUST_LOG"] {
            if let Some(val) = var(key) {
                self.console.log = val;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.console.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        let url = &self.backend.base_url;
        let host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"));
        if host.is_none_or(str::is_empty) {
            return Err(ConfigError::Validation(format!(
                "backend url must be an absolute http(s) URL, got {url:?}"
            )));
        }
        Ok(())
    }

    /// `host:port` for the console listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.console.host, self.console.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Validation(String),
}

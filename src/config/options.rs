// src/config/options.rs
//
// API credentials and endpoint settings.
// Resolution per field: environment → TOML file → built-in default.
// The key has no default and is never compiled in.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::{debug, info};

use super::consts::*;
use crate::error::ConfigError;

#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_host: String,
    api_key: String,
    pub timeout: Duration,
}

// Keep the key out of logs and panics.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_host", &self.api_host)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    /// Defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: s!(DEFAULT_BASE_URL),
            api_host: s!(DEFAULT_API_HOST),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Load from process env plus the TOML file at `path`
    /// (or `cric_dash.toml` in the working directory when `path` is None).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => FileConfig::read(p)?,
            None => FileConfig::read_if_present(Path::new(CONFIG_FILE))?.unwrap_or_default(),
        };
        Self::resolve(file, |name| std::env::var(name).ok())
    }

    /// Pure resolution over an env lookup, so tests never touch the process env.
    pub fn resolve<F>(file: FileConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |var: &str, from_file: Option<String>| -> Option<(String, &'static str)> {
            if let Some(v) = env(var).filter(|v| is_set(v)) {
                return Some((v.trim().to_string(), "environment"));
            }
            from_file.filter(|v| is_set(v)).map(|v| (v.trim().to_string(), "file"))
        };

        let (api_key, key_source) = pick(ENV_API_KEY, file.api_key).ok_or(ConfigError::MissingKey)?;
        info!("Config: API key loaded from {key_source}");

        let api_host = pick(ENV_API_HOST, file.api_host)
            .map(|(v, _)| v)
            .unwrap_or_else(|| s!(DEFAULT_API_HOST));

        let base_url = pick(ENV_BASE_URL, file.base_url)
            .map(|(v, _)| v)
            .unwrap_or_else(|| s!(DEFAULT_BASE_URL));

        let timeout_secs = match env(ENV_TIMEOUT_SECS).filter(|v| is_set(v)) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            None => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(s!("0")));
        }

        let cfg = Self::new(api_key)
            .with_base_url(&base_url)
            .with_timeout(Duration::from_secs(timeout_secs));
        debug!("Config: {:?}", cfg);
        Ok(cfg)
    }
}

fn is_set(v: &str) -> bool {
    !v.trim().is_empty()
}

/// On-disk shape of `cric_dash.toml`. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub api_host: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: PathBuf::from(path),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Missing file is fine; unreadable or invalid file is not.
    pub fn read_if_present(path: &Path) -> Result<Option<Self>, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Config: no {} in working directory", path.display());
                Ok(None)
            }
            Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
        }
    }
}

use std::env;
use std::time::Duration;

use reqwest::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const API_URL_VAR: &str = "SYLLABUS_API_URL";
const TIMEOUT_VAR: &str = "SYLLABUS_API_TIMEOUT_SECS";

/// Where a configuration value came from (shown by the `config` command).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Default,
    Env,
    Flag,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Default => write!(f, "default"),
            Source::Env => write!(f, "from environment"),
            Source::Flag => write!(f, "from --api-url"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub api_url_source: Source,
    pub timeout: Duration,
    pub timeout_source: Source,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Invalid SYLLABUS_API_TIMEOUT_SECS '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Values that take precedence over the environment (CLI flags).
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_url: Option<String>,
}

/// Load configuration from overrides, then environment, then defaults.
pub fn load(overrides: &Overrides) -> Result<Config, ConfigError> {
    let env_url = env::var(API_URL_VAR).ok().filter(|s| !s.trim().is_empty());
    let env_timeout = env::var(TIMEOUT_VAR).ok().filter(|s| !s.trim().is_empty());
    resolve(overrides, env_url, env_timeout)
}

fn resolve(
    overrides: &Overrides,
    env_url: Option<String>,
    env_timeout: Option<String>,
) -> Result<Config, ConfigError> {
    let (raw_url, api_url_source) = match (&overrides.api_url, env_url) {
        (Some(flag), _) => (flag.clone(), Source::Flag),
        (None, Some(var)) => (var, Source::Env),
        (None, None) => (DEFAULT_API_URL.to_string(), Source::Default),
    };
    let api_url = parse_api_url(&raw_url)?;

    let (timeout, timeout_source) = match env_timeout {
        Some(raw) => (parse_timeout(&raw)?, Source::Env),
        None => (Duration::from_secs(DEFAULT_TIMEOUT_SECS), Source::Default),
    };

    Ok(Config {
        api_url,
        api_url_source,
        timeout,
        timeout_source,
    })
}

/// Parse the service base URL. A trailing slash is added so endpoint paths join below it.
pub fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

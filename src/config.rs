use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use snafu::ResultExt;
use url::Url;

use crate::error::{ApplicationError, ConfigLoadSnafu};

/// Process configuration, read from the environment (and `.env`).
#[serde_as]
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(rename = "host_address", default = "default_host")]
    pub host: SocketAddr,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(rename = "api_endpoint", default = "default_endpoint")]
    pub endpoint: Url,
    /// seconds
    #[serde(default = "default_timeout")]
    #[serde_as(as = "DurationSeconds<String>")]
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Config, ApplicationError> {
        envy::from_env::<Config>().context(ConfigLoadSnafu)
    }

    pub fn api(&self) -> ApiConfig {
        ApiConfig {
            endpoint: self.endpoint.clone(),
            request_timeout: self.request_timeout,
        }
    }
}

/// Settings for the upstream videos endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub endpoint: Url,
    pub request_timeout: Duration,
}

fn default_host() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_endpoint() -> Url {
    Url::parse("http://localhost:5000/api/videos").expect("default endpoint is a valid url")
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

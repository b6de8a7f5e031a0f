//! # Runtime Configuration
//!
//! Service endpoints, cache location and tuning knobs, read from the
//! environment with production defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `CU_GATEWAY_URL` | `https://arweave.net` |
//! | `CU_SEQUENCER_URL` | `https://gw.warp.cc` |
//! | `CU_UPLOADER_URL` | `https://up.arweave.net` |
//! | `CU_DB_PATH` | `ao-cache.sqlite` |
//! | `CU_USE_LOCAL_NETWORK` | `false` |
//! | `CU_HTTP_TIMEOUT_SECS` | `30` |
//! | `CU_SEQUENCER_PAGE_LIMIT` | `5000` |
//! | `CU_HYDRATION_CONCURRENCY` | `1` |
//! | `CU_PROCESS_ID` | unset |
//!
//! With `CU_USE_LOCAL_NETWORK=true` every service URL defaults to its local
//! counterpart; explicit URL variables still take precedence.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use cu_02_gateway::GatewayConfig;
use cu_03_sequencer::SequencerConfig;
use cu_04_hydrator::HydratorConfig;
use cu_05_process_cache::CacheConfig;
use shared_http::TransportConfig;
use thiserror::Error;

pub const DEFAULT_GATEWAY_URL: &str = "https://arweave.net";
pub const DEFAULT_SEQUENCER_URL: &str = "https://gw.warp.cc";
pub const DEFAULT_UPLOADER_URL: &str = "https://up.arweave.net";

pub const LOCAL_GATEWAY_URL: &str = "http://localhost:1984";
pub const LOCAL_SEQUENCER_URL: &str = "http://localhost:5666";
pub const LOCAL_UPLOADER_URL: &str = "http://localhost:1985";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must not be empty")]
    EmptyUrl { name: &'static str },

    #[error("{name} must be greater than zero")]
    ZeroLimit { name: &'static str },

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Complete data-layer configuration.
#[derive(Debug, Clone)]
pub struct CuConfig {
    /// Transaction gateway (GraphQL + raw data).
    pub gateway_url: String,
    /// Interaction sequencer.
    pub sequencer_url: String,
    /// Bundle upload service. Only carried for the engine.
    pub uploader_url: String,
    /// Cache database file.
    pub db_path: PathBuf,
    pub use_local_network: bool,
    /// Per-request HTTP timeout.
    pub http_timeout: Duration,
    /// Interactions requested per sequencer page.
    pub sequencer_page_limit: u32,
    /// Envelopes hydrated concurrently.
    pub hydration_concurrency: usize,
    /// Process loaded by the binary at startup, if any.
    pub process_id: Option<String>,
}

impl Default for CuConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            sequencer_url: DEFAULT_SEQUENCER_URL.to_string(),
            uploader_url: DEFAULT_UPLOADER_URL.to_string(),
            db_path: CacheConfig::default().db_path,
            use_local_network: false,
            http_timeout: TransportConfig::default().timeout,
            sequencer_page_limit: SequencerConfig::default().page_limit,
            hydration_concurrency: HydratorConfig::default().max_concurrent_loads,
            process_id: None,
        }
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
        value,
    })
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value,
            reason: "expected a boolean".to_string(),
        }),
    }
}

impl CuConfig {
    /// Build configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let use_local_network = lookup("CU_USE_LOCAL_NETWORK")
            .map(|v| parse_flag("CU_USE_LOCAL_NETWORK", v))
            .transpose()?
            .unwrap_or(false);

        let mut config = if use_local_network {
            Self::local()
        } else {
            Self::default()
        };

        if let Some(url) = lookup("CU_GATEWAY_URL") {
            config.gateway_url = url;
        }
        if let Some(url) = lookup("CU_SEQUENCER_URL") {
            config.sequencer_url = url;
        }
        if let Some(url) = lookup("CU_UPLOADER_URL") {
            config.uploader_url = url;
        }
        if let Some(path) = lookup("CU_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(secs) = lookup("CU_HTTP_TIMEOUT_SECS") {
            config.http_timeout = Duration::from_secs(parse("CU_HTTP_TIMEOUT_SECS", secs)?);
        }
        if let Some(limit) = lookup("CU_SEQUENCER_PAGE_LIMIT") {
            config.sequencer_page_limit = parse("CU_SEQUENCER_PAGE_LIMIT", limit)?;
        }
        if let Some(concurrency) = lookup("CU_HYDRATION_CONCURRENCY") {
            config.hydration_concurrency = parse("CU_HYDRATION_CONCURRENCY", concurrency)?;
        }
        config.process_id = lookup("CU_PROCESS_ID").filter(|id| !id.trim().is_empty());

        Ok(config)
    }

    /// Defaults pointing at a local development network.
    pub fn local() -> Self {
        Self {
            gateway_url: LOCAL_GATEWAY_URL.to_string(),
            sequencer_url: LOCAL_SEQUENCER_URL.to_string(),
            uploader_url: LOCAL_UPLOADER_URL.to_string(),
            use_local_network: true,
            ..Self::default()
        }
    }

    /// Reject empty endpoints and zero limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("CU_GATEWAY_URL", &self.gateway_url),
            ("CU_SEQUENCER_URL", &self.sequencer_url),
            ("CU_UPLOADER_URL", &self.uploader_url),
        ] {
            if url.trim().is_empty() {
                return Err(ConfigError::EmptyUrl { name });
            }
        }
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyUrl { name: "CU_DB_PATH" });
        }
        if self.http_timeout.is_zero() {
            return Err(ConfigError::ZeroLimit {
                name: "CU_HTTP_TIMEOUT_SECS",
            });
        }
        if self.sequencer_page_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "CU_SEQUENCER_PAGE_LIMIT",
            });
        }
        if self.hydration_concurrency == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "CU_HYDRATION_CONCURRENCY",
            });
        }
        Ok(())
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.http_timeout,
            ..TransportConfig::default()
        }
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::with_url(self.gateway_url.trim_end_matches('/'))
    }

    pub fn sequencer_config(&self) -> SequencerConfig {
        SequencerConfig {
            page_limit: self.sequencer_page_limit,
            ..SequencerConfig::with_url(self.sequencer_url.trim_end_matches('/'))
        }
    }

    pub fn hydrator_config(&self) -> HydratorConfig {
        HydratorConfig {
            max_concurrent_loads: self.hydration_concurrency,
            ..HydratorConfig::default()
        }
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::at(self.db_path.clone())
    }
}

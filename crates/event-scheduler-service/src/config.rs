//! Configuration for event-scheduler-service

use event_scheduler_core::SchedulerConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::error::{ServiceError, ServiceResult};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Scheduler configuration
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Path of the events endpoint
    #[serde(default = "default_events_path")]
    pub events_path: String,

    /// Attach permissive CORS headers to every response
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            events_path: default_events_path(),
            enable_cors: true,
            max_body_size: default_max_body_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8010))
}

fn default_events_path() -> String {
    "/events".to_string()
}

fn default_max_body_size() -> usize {
    64 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServiceConfig {
    /// Environment variable prefix, e.g. `EVENT_SCHEDULER__SERVER__LISTEN_ADDR`
    pub const ENV_PREFIX: &'static str = "EVENT_SCHEDULER";

    /// Load configuration: defaults, then the optional file, then environment.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&ServiceConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(Self::ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Reject settings the router or scheduler cannot be built from.
    pub fn validate(&self) -> ServiceResult<()> {
        let path = &self.server.events_path;
        if !path.starts_with('/') || path.contains([':', '*', '{', '}']) {
            return Err(ServiceError::Config(format!(
                "events_path must be a literal path starting with '/': {}",
                path
            )));
        }

        if self.server.max_body_size == 0 {
            return Err(ServiceError::Config(
                "max_body_size must be greater than zero".to_string(),
            ));
        }

        self.scheduler.validate()?;
        Ok(())
    }
}

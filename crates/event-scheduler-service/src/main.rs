//! Event scheduler daemon
//!
//! Serves the events endpoint over HTTP:
//! - `POST` admits a non-overlapping event
//! - `GET` lists admitted events in start order

use clap::Parser;
use event_scheduler_core::AdmissionPolicy;
use event_scheduler_service::{Server, ServiceConfig, ServiceError, ServiceResult};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Event scheduler CLI
#[derive(Parser)]
#[command(name = "event-schedulerd")]
#[command(about = "Single-day event scheduler rejecting overlapping events", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "EVENT_SCHEDULER_CONFIG")]
    config: Option<String>,

    /// Listen address, e.g. 127.0.0.1:8010
    #[arg(short, long, env = "EVENT_SCHEDULER_LISTEN_ADDR")]
    listen: Option<SocketAddr>,

    /// Degenerate interval policy: strict or lenient
    #[arg(short, long, env = "EVENT_SCHEDULER_POLICY")]
    policy: Option<AdmissionPolicy>,

    /// Log level
    #[arg(long, env = "EVENT_SCHEDULER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "EVENT_SCHEDULER_LOG_JSON")]
    json: bool,
}

impl Cli {
    /// Layer command-line overrides on top of the loaded configuration.
    fn apply(&self, config: &mut ServiceConfig) {
        if let Some(listen) = self.listen {
            config.server.listen_addr = listen;
        }
        if let Some(policy) = self.policy {
            config.scheduler.policy = policy;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config.logging.json |= self.json;
    }
}

#[tokio::main]
async fn main() -> ServiceResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = ServiceConfig::load(cli.config.as_deref())
        .map_err(|e| ServiceError::Config(e.to_string()))?;

    // Override with CLI args
    cli.apply(&mut config);

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let server = Server::new(config)?;
    server.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_loaded_config() {
        let cli = Cli::try_parse_from([
            "event-schedulerd",
            "--listen",
            "0.0.0.0:9100",
            "--policy",
            "lenient",
            "--log-level",
            "debug",
            "--json",
        ])
        .unwrap();

        let mut config = ServiceConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.server.listen_addr, "0.0.0.0:9100".parse::<SocketAddr>().unwrap());
        assert_eq!(config.scheduler.policy, AdmissionPolicy::Lenient);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_cli_without_flags_keeps_loaded_config() {
        let cli = Cli::try_parse_from(["event-schedulerd"]).unwrap();

        let mut config = ServiceConfig::default();
        config.scheduler.policy = AdmissionPolicy::Lenient;
        config.logging.json = true;
        cli.apply(&mut config);

        assert_eq!(config.server.listen_addr.port(), 8010);
        assert_eq!(config.scheduler.policy, AdmissionPolicy::Lenient);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.json);
    }

    #[test]
    fn test_cli_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["event-schedulerd", "--policy", "loose"]).is_err());
    }
}

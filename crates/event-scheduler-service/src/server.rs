//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use axum::Router;
use event_scheduler_core::{IntervalScheduler, TracingObserver};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Event scheduler server
pub struct Server {
    config: ServiceConfig,
    scheduler: Arc<IntervalScheduler>,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: ServiceConfig) -> ServiceResult<Self> {
        config.validate()?;

        let scheduler = IntervalScheduler::with_config(config.scheduler.clone())?
            .with_observer(TracingObserver);

        Ok(Self {
            config,
            scheduler: Arc::new(scheduler),
        })
    }

    /// Handle to the scheduler shared by every request handler
    pub fn scheduler(&self) -> Arc<IntervalScheduler> {
        self.scheduler.clone()
    }

    /// Build the router bound to this server's scheduler
    pub fn router(&self) -> Router {
        create_router(AppState::new(self.scheduler.clone()), &self.config.server)
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM
    pub async fn run(self) -> ServiceResult<()> {
        let listener = TcpListener::bind(self.config.server.listen_addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> ServiceResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        let app = self.router();

        tracing::info!("Event scheduler listening on {}", addr);
        tracing::info!(
            path = %self.config.server.events_path,
            policy = self.config.scheduler.policy.as_str(),
            horizon = ?self.config.scheduler.horizon,
            "Scheduler ready"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServiceError::Server(e.to_string()))?;

        let stats = self.scheduler.stats();
        tracing::info!(
            admitted = stats.admitted,
            rejected_overlap = stats.rejected_overlap,
            rejected_invalid = stats.rejected_invalid,
            "Event scheduler shutting down"
        );

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}

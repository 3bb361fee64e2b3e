//! Event scheduler service library
//!
//! REST adapter around [`event_scheduler_core::IntervalScheduler`]:
//! - `GET`/`POST`/`OPTIONS` on a single events path
//! - Permissive CORS headers on every response
//! - Configuration loading and server lifecycle

#![deny(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::{LoggingConfig, ServerConfig, ServiceConfig};
pub use error::{ApiError, ApiResult, ServiceError, ServiceResult};
pub use server::Server;

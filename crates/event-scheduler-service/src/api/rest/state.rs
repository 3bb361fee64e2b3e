//! Application state for API handlers

use event_scheduler_core::IntervalScheduler;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The one scheduler instance every handler admits into
    pub scheduler: Arc<IntervalScheduler>,
}

impl AppState {
    /// Create new application state
    pub fn new(scheduler: Arc<IntervalScheduler>) -> Self {
        Self { scheduler }
    }
}

//! Hooks notified after each admission decision.

use crate::interval::Interval;
use crate::scheduler::{Admission, Rejection};

/// Receives every admission decision once it has been applied.
///
/// Called after the scheduler has released its lock, so an observer may read
/// the scheduler again. Implementations must not block for long: they run on
/// the caller's thread.
pub trait AdmissionObserver: Send + Sync {
    fn on_decision(&self, candidate: &Interval, admission: &Admission);
}

/// Observer that ignores every decision.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AdmissionObserver for NoopObserver {
    fn on_decision(&self, _candidate: &Interval, _admission: &Admission) {}
}

/// Emits a `tracing` event per decision.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AdmissionObserver for TracingObserver {
    fn on_decision(&self, candidate: &Interval, admission: &Admission) {
        match admission {
            Admission::Accepted => {
                tracing::debug!(start = candidate.start, end = candidate.end, "Event admitted");
            }
            Admission::Rejected(Rejection::Overlap { existing }) => {
                tracing::info!(
                    start = candidate.start,
                    end = candidate.end,
                    existing = %existing,
                    reason = "overlap",
                    "Event rejected"
                );
            }
            Admission::Rejected(rejection) => {
                tracing::info!(
                    start = candidate.start,
                    end = candidate.end,
                    reason = rejection.reason(),
                    "Event rejected"
                );
            }
        }
    }
}

impl<F> AdmissionObserver for F
where
    F: Fn(&Interval, &Admission) + Send + Sync,
{
    fn on_decision(&self, candidate: &Interval, admission: &Admission) {
        self(candidate, admission)
    }
}

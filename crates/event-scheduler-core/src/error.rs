use thiserror::Error;

use crate::interval::Interval;

/// Errors raised while building a scheduler.
///
/// Admission itself never fails: a rejected candidate is an ordinary
/// [`Admission`](crate::Admission) outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("Invalid horizon {0}: start must be before end")]
    InvalidHorizon(Interval),
}

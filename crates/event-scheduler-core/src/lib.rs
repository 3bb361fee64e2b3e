//! Event scheduler core.
//!
//! Keeps a single day's worth of half-open intervals and refuses any candidate
//! that overlaps an interval already admitted. The admitted set is always held
//! in ascending start order, so listing never needs to sort.
//!
//! The scheduler is an explicitly constructed value. Share it behind an `Arc`
//! between request handlers; the check-and-insert sequence is serialized
//! internally.

#![deny(unsafe_code)]

pub mod error;
pub mod interval;
pub mod observer;
pub mod policy;
pub mod scheduler;

pub use error::SchedulerError;
pub use interval::Interval;
pub use observer::{AdmissionObserver, NoopObserver, TracingObserver};
pub use policy::{AdmissionPolicy, SchedulerConfig};
pub use scheduler::{decide, Admission, IntervalScheduler, Rejection, SchedulerStats};

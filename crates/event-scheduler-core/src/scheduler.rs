//! The interval scheduler: admission and ordered retrieval.

use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::SchedulerError;
use crate::interval::Interval;
use crate::observer::{AdmissionObserver, NoopObserver};
use crate::policy::{AdmissionPolicy, SchedulerConfig};

/// Why a candidate was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The candidate shares at least one point with an admitted interval.
    Overlap { existing: Interval },

    /// `start >= end` under [`AdmissionPolicy::Strict`].
    Degenerate,

    /// The candidate does not lie within the configured horizon.
    OutOfHorizon { horizon: Interval },
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::Overlap { .. } => "overlap",
            Rejection::Degenerate => "degenerate",
            Rejection::OutOfHorizon { .. } => "out_of_horizon",
        }
    }

    /// Rejections caused by the candidate alone, independent of scheduler state.
    pub fn is_invalid_candidate(&self) -> bool {
        !matches!(self, Rejection::Overlap { .. })
    }
}

/// Outcome of one admission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    Rejected(Rejection),
}

impl Admission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Admission::Accepted)
    }
}

/// Decides whether `candidate` may join `admitted`.
///
/// Pure: reads nothing but its arguments. The first conflicting interval in
/// `admitted` order is reported.
pub fn decide(admitted: &[Interval], candidate: &Interval, config: &SchedulerConfig) -> Admission {
    if config.policy == AdmissionPolicy::Strict && candidate.is_degenerate() {
        return Admission::Rejected(Rejection::Degenerate);
    }

    if let Some(horizon) = config.horizon {
        if !horizon.contains(candidate) {
            return Admission::Rejected(Rejection::OutOfHorizon { horizon });
        }
    }

    match admitted.iter().find(|existing| candidate.overlaps(existing)) {
        Some(existing) => Admission::Rejected(Rejection::Overlap {
            existing: *existing,
        }),
        None => Admission::Accepted,
    }
}

/// Snapshot of the decision counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SchedulerStats {
    pub admitted: u64,
    pub rejected_overlap: u64,
    pub rejected_invalid: u64,
}

#[derive(Debug, Default)]
struct Counters {
    admitted: AtomicU64,
    rejected_overlap: AtomicU64,
    rejected_invalid: AtomicU64,
}

impl Counters {
    fn record(&self, admission: &Admission) {
        let counter = match admission {
            Admission::Accepted => &self.admitted,
            Admission::Rejected(rejection) if rejection.is_invalid_candidate() => {
                &self.rejected_invalid
            }
            Admission::Rejected(_) => &self.rejected_overlap,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> SchedulerStats {
        SchedulerStats {
            admitted: self.admitted.load(Ordering::Relaxed),
            rejected_overlap: self.rejected_overlap.load(Ordering::Relaxed),
            rejected_invalid: self.rejected_invalid.load(Ordering::Relaxed),
        }
    }
}

/// Holds the admitted intervals, pairwise non-overlapping and sorted by start.
///
/// Admission takes the write lock for the whole check-and-insert sequence, so
/// two candidates can never both pass their overlap scan against the same
/// state. Listing takes the read lock and therefore never sees a half-applied
/// admission.
pub struct IntervalScheduler {
    config: SchedulerConfig,
    admitted: RwLock<Vec<Interval>>,
    counters: Counters,
    observer: Arc<dyn AdmissionObserver>,
}

impl IntervalScheduler {
    /// Empty scheduler with the default (strict, unbounded) configuration.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            admitted: RwLock::new(Vec::new()),
            counters: Counters::default(),
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_config(config: SchedulerConfig) -> Result<Self, SchedulerError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Replace the decision observer.
    pub fn with_observer(mut self, observer: impl AdmissionObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Admit `candidate` unless it conflicts, returning the detailed outcome.
    pub fn admit(&self, candidate: Interval) -> Admission {
        let admission = {
            let mut admitted = self.admitted.write();
            let admission = decide(&admitted, &candidate, &self.config);
            if admission.is_accepted() {
                let at = admitted.partition_point(|existing| existing.start <= candidate.start);
                admitted.insert(at, candidate);
            }
            admission
        };

        self.counters.record(&admission);
        self.observer.on_decision(&candidate, &admission);
        admission
    }

    /// Admit `candidate` unless it conflicts. Returns `true` when admitted.
    pub fn try_add(&self, candidate: Interval) -> bool {
        self.admit(candidate).is_accepted()
    }

    /// All admitted intervals in ascending start order.
    pub fn list(&self) -> Vec<Interval> {
        self.admitted.read().clone()
    }

    pub fn len(&self) -> usize {
        self.admitted.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.admitted.read().is_empty()
    }

    pub fn stats(&self) -> SchedulerStats {
        self.counters.snapshot()
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntervalScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalScheduler")
            .field("config", &self.config)
            .field("admitted", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}

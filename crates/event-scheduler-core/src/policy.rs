//! Admission policy and scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::interval::Interval;

/// How candidates that cover no time are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionPolicy {
    /// Reject zero-length and inverted candidates (`start >= end`) before the
    /// overlap scan.
    #[default]
    Strict,

    /// Apply the overlap rule only. A degenerate candidate is admitted
    /// whenever the rule does not flag it.
    Lenient,
}

impl AdmissionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdmissionPolicy::Strict => "strict",
            AdmissionPolicy::Lenient => "lenient",
        }
    }
}

impl std::str::FromStr for AdmissionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(AdmissionPolicy::Strict),
            "lenient" => Ok(AdmissionPolicy::Lenient),
            other => Err(format!(
                "unknown admission policy '{}'; expected strict or lenient",
                other
            )),
        }
    }
}

/// Scheduler construction parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Degenerate interval handling
    #[serde(default)]
    pub policy: AdmissionPolicy,

    /// Optional outer bound every admitted interval must lie within
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon: Option<Interval>,
}

impl SchedulerConfig {
    /// Strict policy bounded to the hours of one day: start at 0 or later,
    /// end at 23 at the latest.
    pub fn single_day_hours() -> Self {
        Self {
            policy: AdmissionPolicy::Strict,
            horizon: Some(Interval::new(0, 23)),
        }
    }

    pub fn validate(&self) -> Result<(), SchedulerError> {
        match self.horizon {
            Some(horizon) if horizon.is_degenerate() => {
                Err(SchedulerError::InvalidHorizon(horizon))
            }
            _ => Ok(()),
        }
    }
}

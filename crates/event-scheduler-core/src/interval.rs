//! Half-open time intervals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open range `[start, end)` of integer time coordinates.
///
/// The unit is whatever the caller uses consistently (hours, minutes,
/// epoch seconds). Construction performs no validation; whether a
/// zero-length or inverted interval may be admitted is decided by the
/// scheduler's [`AdmissionPolicy`](crate::AdmissionPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// Touching endpoints do not overlap: `[10, 20)` and `[20, 30)` are disjoint.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// `start >= end`: the interval covers no point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Interval::new(10, 20);
        let b = Interval::new(15, 25);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let a = Interval::new(10, 20);
        assert!(!a.overlaps(&Interval::new(20, 30)));
        assert!(!a.overlaps(&Interval::new(5, 10)));
    }

    #[test]
    fn test_identical_and_nested_overlap() {
        let a = Interval::new(10, 20);
        assert!(a.overlaps(&a));
        assert!(a.overlaps(&Interval::new(12, 14)));
        assert!(Interval::new(12, 14).overlaps(&a));
        assert!(a.overlaps(&Interval::new(0, 100)));
    }

    #[test]
    fn test_degenerate() {
        assert!(Interval::new(5, 5).is_degenerate());
        assert!(Interval::new(9, 3).is_degenerate());
        assert!(!Interval::new(3, 9).is_degenerate());
    }

    #[test]
    fn test_contains() {
        let day = Interval::new(0, 24);
        assert!(day.contains(&Interval::new(0, 24)));
        assert!(day.contains(&Interval::new(8, 9)));
        assert!(!day.contains(&Interval::new(23, 25)));
        assert!(!day.contains(&Interval::new(-1, 2)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(5, 10).to_string(), "[5, 10)");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(Interval::new(1, 2)).unwrap();
        assert_eq!(json, serde_json::json!({ "start": 1, "end": 2 }));
    }
}

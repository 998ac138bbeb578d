//! Geometric layout analysis: content-area detection and column segmentation.

mod columns;
mod density;

pub use columns::{detect_columns, midpoint_split, ColumnConfig, ColumnOrigin, ColumnSet};
pub use density::{
    default_content_area, detect_content_area, detect_or_default, DensityConfig, DensityProfile,
};

use serde::{Deserialize, Serialize};

/// Outcome of a detection step: either a confident result or the documented
/// fallback value together with the reason detection gave up.
///
/// Callers that only need a value use [`Detection::value`]; tests and
/// diagnostics can distinguish "confidently detected" from "fell back".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Detection<T> {
    /// Detection produced a confident result
    Detected(T),
    /// Detection fell back to a default
    Degraded {
        /// The fallback value
        value: T,
        /// Why detection could not produce a confident result
        reason: FallbackReason,
    },
}

impl<T> Detection<T> {
    /// The detected or fallback value.
    pub fn value(&self) -> &T {
        match self {
            Detection::Detected(v) => v,
            Detection::Degraded { value, .. } => value,
        }
    }

    /// Consume and return the detected or fallback value.
    pub fn into_value(self) -> T {
        match self {
            Detection::Detected(v) => v,
            Detection::Degraded { value, .. } => value,
        }
    }

    /// Whether this outcome is a fallback.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Detection::Degraded { .. })
    }

    /// The fallback reason, if any.
    pub fn reason(&self) -> Option<FallbackReason> {
        match self {
            Detection::Detected(_) => None,
            Detection::Degraded { reason, .. } => Some(*reason),
        }
    }
}

/// Why a detection step could not produce a confident result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The page has no text blocks
    NoTextBlocks,
    /// Every density strip scored zero
    ZeroDensity,
    /// No strip scored above the significance threshold
    NoSignificantStrips,
    /// Page or content dimensions are degenerate
    DegenerateGeometry,
    /// Too few blocks inside the content area to scan for gaps
    TooFewBlocks,
    /// The gap scan found no qualifying column gap
    NoQualifyingGaps,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_accessors() {
        let d: Detection<u32> = Detection::Detected(7);
        assert_eq!(*d.value(), 7);
        assert!(!d.is_degraded());
        assert_eq!(d.reason(), None);

        let f: Detection<u32> = Detection::Degraded {
            value: 0,
            reason: FallbackReason::NoTextBlocks,
        };
        assert_eq!(*f.value(), 0);
        assert!(f.is_degraded());
        assert_eq!(f.reason(), Some(FallbackReason::NoTextBlocks));
        assert_eq!(f.into_value(), 0);
    }
}

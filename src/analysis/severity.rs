//! The shared three-level severity and its two display vocabularies.

use serde::Serialize;

/// Outcome of a single check, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Severity {
    Pass,
    Warn,
    Fail,
}

impl Severity {
    /// The more severe of the two.
    pub fn worst(self, other: Severity) -> Severity {
        self.max(other)
    }

    /// Presence/length vocabulary (`passed` / `warning` / `critical`).
    pub fn status(self) -> Status {
        match self {
            Severity::Pass => Status::Passed,
            Severity::Warn => Status::Warning,
            Severity::Fail => Status::Critical,
        }
    }

    /// Numeric-threshold vocabulary (`good` / `needs-improvement` / `poor`).
    pub fn rating(self) -> Rating {
        match self {
            Severity::Pass => Rating::Good,
            Severity::Warn => Rating::NeedsImprovement,
            Severity::Fail => Rating::Poor,
        }
    }
}

/// Status label used by the technical and content checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display, strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    Passed,
    Warning,
    Critical,
}

impl Status {
    pub fn severity(self) -> Severity {
        match self {
            Status::Passed => Severity::Pass,
            Status::Warning => Severity::Warn,
            Status::Critical => Severity::Fail,
        }
    }
}

/// Rating label used by the performance and on-page checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display, strum_macros::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    pub fn severity(self) -> Severity {
        match self {
            Rating::Good => Severity::Pass,
            Rating::NeedsImprovement => Severity::Warn,
            Rating::Poor => Severity::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_vocabularies_round_trip_through_severity() {
        for severity in Severity::iter() {
            assert_eq!(severity.status().severity(), severity);
            assert_eq!(severity.rating().severity(), severity);
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Status::Passed.to_string(), "passed");
        assert_eq!(Status::Critical.to_string(), "critical");
        assert_eq!(Rating::NeedsImprovement.to_string(), "needs-improvement");
        assert_eq!(
            serde_json::to_value(Rating::NeedsImprovement).unwrap(),
            serde_json::json!("needs-improvement")
        );
        assert_eq!(
            serde_json::to_value(Status::Warning).unwrap(),
            serde_json::json!("warning")
        );
    }

    #[test]
    fn test_worst() {
        assert_eq!(Severity::Pass.worst(Severity::Warn), Severity::Warn);
        assert_eq!(Severity::Fail.worst(Severity::Warn), Severity::Fail);
        assert_eq!(Severity::Pass.worst(Severity::Pass), Severity::Pass);
    }
}

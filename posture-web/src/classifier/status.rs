//! Posture status labels shared with the page

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status label strings (order matches `PostureStatus::index`)
pub const STATUS_LABELS: [&str; 4] = ["good", "okay", "bad", "checking"];

/// Posture status enum for type-safe handling
///
/// `Checking` is the pre-state shown before the first classified frame.
/// Classifiers never return it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostureStatus {
    Good,
    Okay,
    Bad,
    #[default]
    Checking,
}

impl PostureStatus {
    pub fn index(&self) -> usize {
        match self {
            PostureStatus::Good => 0,
            PostureStatus::Okay => 1,
            PostureStatus::Bad => 2,
            PostureStatus::Checking => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        STATUS_LABELS[self.index()]
    }

    /// True for the three labels a classifier can produce
    pub fn is_classified(&self) -> bool {
        !matches!(self, PostureStatus::Checking)
    }
}

impl fmt::Display for PostureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostureStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(PostureStatus::Good),
            "okay" => Ok(PostureStatus::Okay),
            "bad" => Ok(PostureStatus::Bad),
            "checking" => Ok(PostureStatus::Checking),
            other => Err(format!("unknown posture status '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_roundtrip_through_str() {
        for label in STATUS_LABELS {
            let status: PostureStatus = label.parse().unwrap();
            assert_eq!(status.as_str(), label);
        }
        assert!("slouching".parse::<PostureStatus>().is_err());
    }

    #[test]
    fn test_default_is_checking() {
        assert_eq!(PostureStatus::default(), PostureStatus::Checking);
        assert!(!PostureStatus::Checking.is_classified());
        assert!(PostureStatus::Bad.is_classified());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&PostureStatus::Okay).unwrap();
        assert_eq!(json, "\"okay\"");
    }
}

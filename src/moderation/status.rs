// Moderation status tiers.

use serde::{Deserialize, Serialize};

/// Status thresholds on the 0-100 toxicity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModerationStatus {
    #[serde(rename = "safe")]
    Safe,
    #[serde(rename = "needs review")]
    NeedsReview,
    #[serde(rename = "high-risk")]
    HighRisk,
}

impl ModerationStatus {
    /// 0-30 safe, 31-70 needs review, 71+ high-risk.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s > 70 => ModerationStatus::HighRisk,
            s if s > 30 => ModerationStatus::NeedsReview,
            _ => ModerationStatus::Safe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::Safe => "safe",
            ModerationStatus::NeedsReview => "needs review",
            ModerationStatus::HighRisk => "high-risk",
        }
    }

    /// Reviewer-facing warning. Only non-safe content carries one.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            ModerationStatus::Safe => None,
            ModerationStatus::NeedsReview => {
                Some("Content may violate community guidelines and should be reviewed")
            }
            ModerationStatus::HighRisk => {
                Some("Content is likely harmful and should be held for manual review")
            }
        }
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(ModerationStatus::from_score(0), ModerationStatus::Safe);
        assert_eq!(ModerationStatus::from_score(30), ModerationStatus::Safe);
        assert_eq!(ModerationStatus::from_score(31), ModerationStatus::NeedsReview);
        assert_eq!(ModerationStatus::from_score(70), ModerationStatus::NeedsReview);
        assert_eq!(ModerationStatus::from_score(71), ModerationStatus::HighRisk);
        assert_eq!(ModerationStatus::from_score(100), ModerationStatus::HighRisk);
    }

    #[test]
    fn serializes_to_display_form() {
        for status in [
            ModerationStatus::Safe,
            ModerationStatus::NeedsReview,
            ModerationStatus::HighRisk,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn only_safe_has_no_warning() {
        assert!(ModerationStatus::Safe.warning().is_none());
        assert!(ModerationStatus::NeedsReview.warning().is_some());
        assert!(ModerationStatus::HighRisk.warning().is_some());
    }
}

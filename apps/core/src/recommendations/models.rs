use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Three-level qualitative rating on one evaluation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitRating {
    Great,
    Good,
    Fair,
}

impl FitRating {
    /// Parses the backend's wire literal. Anything else is a data-contract
    /// violation — a wrong rating would silently misrepresent fit, so this
    /// errs instead of defaulting.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "Great" => Ok(FitRating::Great),
            "Good" => Ok(FitRating::Good),
            "Fair" => Ok(FitRating::Fair),
            other => Err(CoreError::InvalidRating(other.to_string())),
        }
    }

    pub fn score(self) -> u32 {
        match self {
            FitRating::Great => 100,
            FitRating::Good => 75,
            FitRating::Fair => 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationType {
    Reach,
    Match,
    Safety,
}

impl RecommendationType {
    /// Unrecognized literals map to `None`; the categorizer drops them.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Reach" => Some(RecommendationType::Reach),
            "Match" => Some(RecommendationType::Match),
            "Safety" => Some(RecommendationType::Safety),
            _ => None,
        }
    }
}

/// Per-axis fit ratings as they arrive on the wire. Kept as raw strings so a
/// malformed backend payload is representable and caught at scoring time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitRatings {
    pub academic: String,
    pub social_cultural: String,
    pub financial: String,
}

/// One recommended school from `GET /recommendations/{userId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub school_type: String,
    pub name: String,
    pub location: String,
    pub fit: FitRatings,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_feedback: Option<String>,
}

use serde::Serialize;
use tracing::warn;

use crate::errors::CoreError;
use crate::recommendations::models::{FitRating, FitRatings, Recommendation, RecommendationType};

/// Recommendations partitioned by type, input order preserved per bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategorizedRecommendations {
    pub reach: Vec<Recommendation>,
    #[serde(rename = "match")]
    pub match_: Vec<Recommendation>,
    pub safety: Vec<Recommendation>,
}

impl CategorizedRecommendations {
    pub fn total(&self) -> usize {
        self.reach.len() + self.match_.len() + self.safety.len()
    }
}

/// Partitions recommendations into reach/match/safety buckets.
///
/// A record with an unrecognized type is dropped from all three buckets and
/// logged — malformed backend data must not appear miscategorized.
pub fn categorize(recommendations: Vec<Recommendation>) -> CategorizedRecommendations {
    let mut buckets = CategorizedRecommendations::default();
    for rec in recommendations {
        match RecommendationType::parse(&rec.school_type) {
            Some(RecommendationType::Reach) => buckets.reach.push(rec),
            Some(RecommendationType::Match) => buckets.match_.push(rec),
            Some(RecommendationType::Safety) => buckets.safety.push(rec),
            None => {
                warn!(
                    school = %rec.name,
                    school_type = %rec.school_type,
                    "dropping recommendation with unrecognized type"
                );
            }
        }
    }
    buckets
}

/// Normalized fit score in [0, 100]: Great=100, Good=75, Fair=50 per axis,
/// mean of the three axes, rounded half-up.
pub fn fit_score(fit: &FitRatings) -> Result<u8, CoreError> {
    let total = FitRating::parse(&fit.academic)?.score()
        + FitRating::parse(&fit.social_cultural)?.score()
        + FitRating::parse(&fit.financial)?.score();
    Ok((total as f64 / 3.0).round() as u8)
}

// Recommendation categorization and fit scoring. Records arrive pre-scored
// from the backend; this module only groups them and normalizes the
// qualitative fit ratings into a 0–100 number for display.

pub mod categorize;
pub mod models;

pub use categorize::{categorize, fit_score, CategorizedRecommendations};
pub use models::{FitRating, FitRatings, Recommendation, RecommendationType};

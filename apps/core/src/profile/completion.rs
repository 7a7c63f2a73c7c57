//! Completion evaluation over the section catalog.
//!
//! Pure functions of a `ProfileRecord` snapshot. The rule is a lenient
//! majority: a section counts as complete once at least half its questions
//! (rounded up) carry non-blank answers. Callers must not assume a complete
//! section has full coverage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::models::ProfileRecord;
use crate::profile::registry::{self, ProfileSection};

/// Per-section completion verdict, one per catalog section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCompletionStatus {
    pub section_id: String,
    pub completed: bool,
    pub answered_count: usize,
    pub required_count: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

impl SectionCompletionStatus {
    /// Human-readable freshness label for display. Formatting lives here at
    /// the presentation boundary, not in the evaluation itself.
    pub fn last_updated_label(&self) -> Option<String> {
        self.last_updated
            .map(|t| t.format("%b %-d, %Y").to_string())
    }
}

fn answered_count(section: &ProfileSection, profile: &ProfileRecord) -> usize {
    section
        .questions
        .iter()
        .filter(|q| profile.has_answer(q.profile_field))
        .count()
}

// ceil(n / 2); a zero-question section requires zero answers and is
// trivially complete rather than a division hazard.
fn required_count(question_count: usize) -> usize {
    question_count.div_ceil(2)
}

/// Whether the section's majority threshold is met. Unknown section ids are
/// never reported complete.
pub fn is_section_complete(section_id: &str, profile: &ProfileRecord) -> bool {
    match registry::section(section_id) {
        Some(section) => {
            answered_count(section, profile) >= required_count(section.questions.len())
        }
        None => false,
    }
}

/// Locally derived overall percentage: the fraction of catalog sections that
/// meet their threshold, rounded to the nearest integer.
pub fn overall_completion(profile: &ProfileRecord) -> u8 {
    let total = registry::SECTIONS.len();
    if total == 0 {
        return 0;
    }
    let complete = registry::SECTIONS
        .iter()
        .filter(|s| is_section_complete(s.id, profile))
        .count();
    ((complete as f64 / total as f64) * 100.0).round() as u8
}

/// Precedence rule for the overall percentage: a backend-supplied aggregate
/// wins when present (clamped to 100), the local derivation is the fallback.
pub fn resolve_overall_completion(backend_supplied: Option<u8>, profile: &ProfileRecord) -> u8 {
    match backend_supplied {
        Some(percent) => percent.min(100),
        None => overall_completion(profile),
    }
}

/// One status per catalog section, in catalog order. `last_updated` comes
/// from the profile snapshot's own timestamp.
pub fn section_statuses(profile: &ProfileRecord) -> Vec<SectionCompletionStatus> {
    registry::SECTIONS
        .iter()
        .map(|section| {
            let answered = answered_count(section, profile);
            let required = required_count(section.questions.len());
            SectionCompletionStatus {
                section_id: section.id.to_string(),
                completed: answered >= required,
                answered_count: answered,
                required_count: required,
                last_updated: profile.updated_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::profile::registry::SECTIONS;

    fn profile_with(fields: &[(&str, &str)]) -> ProfileRecord {
        let mut profile = ProfileRecord::default();
        for (field, answer) in fields {
            profile
                .fields
                .insert(field.to_string(), answer.to_string());
        }
        profile
    }

    fn fully_answered() -> ProfileRecord {
        let mut profile = ProfileRecord::default();
        for section in SECTIONS {
            for question in section.questions {
                profile
                    .fields
                    .insert(question.profile_field.to_string(), "answered".to_string());
            }
        }
        profile
    }

    #[test]
    fn test_fully_answered_section_is_complete() {
        assert!(is_section_complete("academics", &fully_answered()));
    }

    #[test]
    fn test_unanswered_section_is_incomplete() {
        assert!(!is_section_complete("academics", &ProfileRecord::default()));
    }

    #[test]
    fn test_majority_threshold_on_five_questions() {
        // academics has 5 questions, so the threshold is ceil(5/2) = 3.
        let two = profile_with(&[("gpa", "3.8"), ("test_scores", "1400 SAT")]);
        assert!(!is_section_complete("academics", &two));

        let three = profile_with(&[
            ("gpa", "3.8"),
            ("test_scores", "1400 SAT"),
            ("course_rigor", "AP Calc, AP Bio"),
        ]);
        assert!(is_section_complete("academics", &three));
    }

    #[test]
    fn test_blank_answers_do_not_count() {
        let padded = profile_with(&[
            ("gpa", "  "),
            ("test_scores", ""),
            ("course_rigor", "AP Calc"),
        ]);
        assert!(!is_section_complete("academics", &padded));
    }

    #[test]
    fn test_unknown_section_fails_closed() {
        assert!(!is_section_complete("astrology", &fully_answered()));
    }

    #[test]
    fn test_empty_profile_is_zero_percent() {
        assert_eq!(overall_completion(&ProfileRecord::default()), 0);
    }

    #[test]
    fn test_full_profile_is_hundred_percent() {
        assert_eq!(overall_completion(&fully_answered()), 100);
    }

    #[test]
    fn test_partial_profile_rounds_section_fraction() {
        // Exactly one of five sections complete: background needs 2 of 3.
        let profile = profile_with(&[
            ("personal_story", "I build robots"),
            ("community", "Small rural school"),
        ]);
        assert_eq!(overall_completion(&profile), 20);
    }

    #[test]
    fn test_backend_supplied_percentage_wins() {
        let profile = fully_answered();
        assert_eq!(resolve_overall_completion(Some(40), &profile), 40);
        assert_eq!(resolve_overall_completion(Some(250), &profile), 100);
    }

    #[test]
    fn test_local_derivation_is_the_fallback() {
        assert_eq!(resolve_overall_completion(None, &fully_answered()), 100);
        assert_eq!(
            resolve_overall_completion(None, &ProfileRecord::default()),
            0
        );
    }

    #[test]
    fn test_statuses_cover_catalog_in_order() {
        let statuses = section_statuses(&ProfileRecord::default());
        let ids: Vec<_> = statuses.iter().map(|s| s.section_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["academics", "activities", "background", "preferences", "goals"]
        );
        assert!(statuses.iter().all(|s| !s.completed));
        assert!(statuses.iter().all(|s| s.answered_count == 0));
    }

    #[test]
    fn test_status_counts_and_threshold() {
        let profile = profile_with(&[("gpa", "3.8"), ("test_scores", "1400 SAT")]);
        let statuses = section_statuses(&profile);
        let academics = &statuses[0];
        assert_eq!(academics.answered_count, 2);
        assert_eq!(academics.required_count, 3);
        assert!(!academics.completed);
    }

    #[test]
    fn test_last_updated_label_formatting() {
        let mut profile = ProfileRecord::default();
        profile.updated_at = Some(Utc.with_ymd_and_hms(2026, 3, 5, 9, 30, 0).unwrap());
        let statuses = section_statuses(&profile);
        assert_eq!(
            statuses[0].last_updated_label().as_deref(),
            Some("Mar 5, 2026")
        );

        let none = section_statuses(&ProfileRecord::default());
        assert_eq!(none[0].last_updated_label(), None);
    }
}

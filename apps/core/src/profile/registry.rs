//! Static catalog of intake sections.
//!
//! Section ids are persisted externally as completion-tracking keys, so they
//! must stay stable across releases. Renaming a `profile_field` orphans every
//! answer already stored under it — treat both as frozen identifiers.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub placeholder: Option<&'static str>,
    /// Key under which the answer is stored in the flat profile record.
    pub profile_field: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSection {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: &'static [ProfileQuestion],
}

pub const SECTIONS: &[ProfileSection] = &[
    ProfileSection {
        id: "academics",
        title: "Academics",
        description: "Your grades, coursework, and academic strengths.",
        questions: &[
            ProfileQuestion {
                id: "gpa",
                prompt: "What is your current GPA?",
                placeholder: Some("e.g. 3.7 unweighted"),
                profile_field: "gpa",
            },
            ProfileQuestion {
                id: "test_scores",
                prompt: "What are your SAT/ACT scores, if you have taken them?",
                placeholder: Some("e.g. 1380 SAT, or 'not yet taken'"),
                profile_field: "test_scores",
            },
            ProfileQuestion {
                id: "course_rigor",
                prompt: "Which AP, IB, honors, or dual-enrollment courses have you taken?",
                placeholder: None,
                profile_field: "course_rigor",
            },
            ProfileQuestion {
                id: "favorite_subjects",
                prompt: "Which subjects do you enjoy most, and why?",
                placeholder: None,
                profile_field: "favorite_subjects",
            },
            ProfileQuestion {
                id: "academic_awards",
                prompt: "Any academic honors or awards worth mentioning?",
                placeholder: Some("Leave blank if none"),
                profile_field: "academic_awards",
            },
        ],
    },
    ProfileSection {
        id: "activities",
        title: "Activities",
        description: "How you spend your time outside the classroom.",
        questions: &[
            ProfileQuestion {
                id: "extracurriculars",
                prompt: "What clubs, sports, or activities are you involved in?",
                placeholder: None,
                profile_field: "extracurriculars",
            },
            ProfileQuestion {
                id: "leadership",
                prompt: "Have you held any leadership roles?",
                placeholder: Some("e.g. club president, team captain"),
                profile_field: "leadership",
            },
            ProfileQuestion {
                id: "volunteering",
                prompt: "Tell us about any volunteer or community work.",
                placeholder: None,
                profile_field: "volunteering",
            },
            ProfileQuestion {
                id: "work_experience",
                prompt: "Do you have a part-time job or other work experience?",
                placeholder: None,
                profile_field: "work_experience",
            },
        ],
    },
    ProfileSection {
        id: "background",
        title: "Background",
        description: "Context that shapes your story and your application.",
        questions: &[
            ProfileQuestion {
                id: "personal_story",
                prompt: "What should a counselor know about you that grades don't show?",
                placeholder: None,
                profile_field: "personal_story",
            },
            ProfileQuestion {
                id: "family_college_history",
                prompt: "Would you be the first in your family to attend college?",
                placeholder: None,
                profile_field: "family_college_history",
            },
            ProfileQuestion {
                id: "community",
                prompt: "How would you describe your school and community?",
                placeholder: None,
                profile_field: "community",
            },
        ],
    },
    ProfileSection {
        id: "preferences",
        title: "College Preferences",
        description: "What you are looking for in a school.",
        questions: &[
            ProfileQuestion {
                id: "intended_major",
                prompt: "What do you plan to study?",
                placeholder: Some("Undecided is a fine answer"),
                profile_field: "intended_major",
            },
            ProfileQuestion {
                id: "campus_setting",
                prompt: "Do you prefer an urban, suburban, or rural campus?",
                placeholder: None,
                profile_field: "campus_setting",
            },
            ProfileQuestion {
                id: "school_size",
                prompt: "Do you see yourself at a large university or a small college?",
                placeholder: None,
                profile_field: "school_size",
            },
            ProfileQuestion {
                id: "region",
                prompt: "Any regions of the country you want to stay in or avoid?",
                placeholder: None,
                profile_field: "region",
            },
        ],
    },
    ProfileSection {
        id: "goals",
        title: "Goals",
        description: "Where you want college to take you.",
        questions: &[
            ProfileQuestion {
                id: "career_goals",
                prompt: "What career paths are you considering?",
                placeholder: None,
                profile_field: "career_goals",
            },
            ProfileQuestion {
                id: "college_priorities",
                prompt: "What matters most to you in choosing a college?",
                placeholder: Some("e.g. cost, prestige, specific programs"),
                profile_field: "college_priorities",
            },
            ProfileQuestion {
                id: "dream_schools",
                prompt: "Are there schools already on your list?",
                placeholder: None,
                profile_field: "dream_schools",
            },
        ],
    },
];

/// Looks up a section by id. Missing sections are "not applicable", never an
/// error — callers fail closed on `None`.
pub fn section(id: &str) -> Option<&'static ProfileSection> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// Section ids in catalog order.
pub fn section_ids() -> Vec<&'static str> {
    SECTIONS.iter().map(|s| s.id).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_section_ids_are_unique() {
        let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn test_profile_fields_are_unique_across_catalog() {
        let fields: Vec<_> = SECTIONS
            .iter()
            .flat_map(|s| s.questions.iter().map(|q| q.profile_field))
            .collect();
        let unique: HashSet<_> = fields.iter().collect();
        assert_eq!(unique.len(), fields.len());
    }

    #[test]
    fn test_lookup_by_id() {
        let academics = section("academics").expect("academics section exists");
        assert_eq!(academics.title, "Academics");
        assert_eq!(academics.questions.len(), 5);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(section("astrology").is_none());
    }

    #[test]
    fn test_ids_in_catalog_order() {
        assert_eq!(
            section_ids(),
            vec!["academics", "activities", "background", "preferences", "goals"]
        );
    }

    #[test]
    fn test_no_section_is_empty() {
        // A zero-question section would be trivially complete; the evaluator
        // tolerates it, but the shipped catalog should never contain one.
        assert!(SECTIONS.iter().all(|s| !s.questions.is_empty()));
    }
}

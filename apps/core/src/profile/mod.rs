// Intake profile: static section catalog, completion evaluation, and the
// cached fetch path. Evaluation is pure and recomputed on every call — it is
// cheap, and caching a derived verdict would only risk staleness.

pub mod completion;
pub mod models;
pub mod registry;
pub mod service;

// Re-export the public API consumed by the UI shell.
pub use completion::{
    is_section_complete, overall_completion, resolve_overall_completion, section_statuses,
    SectionCompletionStatus,
};
pub use models::ProfileRecord;
pub use registry::{section, section_ids, ProfileQuestion, ProfileSection};
pub use service::ProfileService;

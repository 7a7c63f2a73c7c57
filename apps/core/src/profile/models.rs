use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a user's intake answers as returned by `GET /users/{id}`.
///
/// Owned by the backend; the core only reads it. Answers live in a flat
/// field → text map, and a missing field is equivalent to an empty answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: HashMap<String, String>,
}

impl ProfileRecord {
    pub fn answer(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// An answer is present iff the field exists and trims non-empty.
    pub fn has_answer(&self, field: &str) -> bool {
        self.answer(field)
            .map(|text| !text.trim().is_empty())
            .unwrap_or(false)
    }
}

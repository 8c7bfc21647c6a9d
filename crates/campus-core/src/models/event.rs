use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event from the catalog.
///
/// The engine reads `name` and `description` as similarity text, `id`
/// for the already-registered exclusion set, and `date` only for the
/// no-activity recency fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl EventRecord {
    /// The event as one similarity document: name and description,
    /// space-joined.
    #[must_use]
    pub fn document(&self) -> String {
        format!("{} {}", self.name, self.description)
    }
}

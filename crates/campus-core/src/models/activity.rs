use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::club::ClubProfile;
use super::event::EventRecord;

/// A user's activity history: joined clubs and registered events.
///
/// Collection order is whatever the caller loaded; the engine only
/// requires that it stay fixed within a single call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActivity {
    pub user_id: i64,
    pub clubs: Vec<ClubProfile>,
    pub attended_events: Vec<EventRecord>,
}

impl UserActivity {
    /// Ids of every event the user has already registered for.
    #[must_use]
    pub fn attended_ids(&self) -> FxHashSet<i64> {
        self.attended_events.iter().map(|e| e.id).collect()
    }

    /// Whether the user has any history to build a profile from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty() && self.attended_events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: i64) -> EventRecord {
        EventRecord {
            id,
            name: format!("event {id}"),
            description: "description".to_string(),
            date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn attended_ids_deduplicates() {
        let activity = UserActivity {
            user_id: 7,
            clubs: vec![],
            attended_events: vec![event(1), event(2), event(1)],
        };
        let ids = activity.attended_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&1) && ids.contains(&2));
    }

    #[test]
    fn empty_activity_detected() {
        let activity = UserActivity {
            user_id: 7,
            clubs: vec![],
            attended_events: vec![],
        };
        assert!(activity.is_empty());
    }
}

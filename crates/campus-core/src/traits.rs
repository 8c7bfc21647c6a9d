//! Trait seams consumed by the request-handling layer.

use crate::errors::RecommendResult;
use crate::models::{EventRecord, UserActivity};

/// Content-based event recommendation.
///
/// Implementations are pure functions of `(activity, catalog)` at call
/// time: no cross-call state, no I/O, safe to invoke concurrently for
/// different users.
pub trait Recommender {
    /// Rank not-yet-registered catalog events against the user's
    /// interest profile. Returns 0 to `top_n` events in descending
    /// similarity order, or the most recent events when the user has
    /// no activity at all.
    fn recommend(
        &self,
        activity: &UserActivity,
        catalog: &[EventRecord],
    ) -> RecommendResult<Vec<EventRecord>>;
}

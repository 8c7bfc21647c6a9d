//! Interest-profile builder: activity history → interest documents.
//!
//! One document per joined club (its description, verbatim) and one per
//! attended event (name + description, space-joined). Document order
//! follows the caller's collection order and stays fixed for the call,
//! so profile rows line up with offsets in the joint vector space.

use campus_core::errors::{RecommendError, RecommendResult};
use campus_core::models::{EventRecord, UserActivity};

/// The user's inferred interests as a bag of text documents.
///
/// Derived per call, never persisted.
#[derive(Debug, Clone)]
pub struct InterestProfile {
    documents: Vec<String>,
}

impl InterestProfile {
    /// Build interest documents from the user's clubs and attended events.
    ///
    /// Blank text is rejected rather than substituted: a club without a
    /// description or an event without name/description text is an
    /// upstream data-integrity bug the caller must fix.
    pub fn from_activity(activity: &UserActivity) -> RecommendResult<Self> {
        let mut documents = Vec::with_capacity(activity.clubs.len() + activity.attended_events.len());

        for club in &activity.clubs {
            if club.description.trim().is_empty() {
                return Err(RecommendError::BlankClubDescription { club_id: club.id });
            }
            documents.push(club.description.clone());
        }

        for event in &activity.attended_events {
            documents.push(validated_event_document(event)?);
        }

        Ok(Self { documents })
    }

    /// Interest documents in build order.
    #[must_use]
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Number of interest documents (the `k` that splits the joint
    /// vector space into profile and candidate blocks).
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when the user has no history to infer interests from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Validate an event's text and render it as one document.
pub fn validated_event_document(event: &EventRecord) -> RecommendResult<String> {
    if event.name.trim().is_empty() || event.description.trim().is_empty() {
        return Err(RecommendError::BlankEventText { event_id: event.id });
    }
    Ok(event.document())
}

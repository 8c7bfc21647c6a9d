//! RecommendEngine: orchestrates the full three-stage pipeline.
//!
//! Stage 1: interest profile (club + attended-event documents)
//! Stage 2: joint TF-IDF vector space (interest ++ candidates)
//! Stage 3: profile mean → cosine ranking → top-N positive matches

use campus_core::config::RecommendConfig;
use campus_core::errors::RecommendResult;
use campus_core::models::{EventRecord, UserActivity};
use campus_core::traits::Recommender;
use tracing::{debug, info};

use crate::profile::{validated_event_document, InterestProfile};
use crate::ranking;
use crate::vectorize::TfidfVectorizer;

/// The content-based recommendation engine.
///
/// Holds only configuration: every call fits its own vector space and
/// discards it, so concurrent calls for different users are independent.
#[derive(Debug, Clone)]
pub struct RecommendEngine {
    config: RecommendConfig,
}

impl RecommendEngine {
    pub fn new(config: RecommendConfig) -> Self {
        Self { config }
    }

    /// Run the full recommendation pipeline.
    pub fn recommend_events(
        &self,
        activity: &UserActivity,
        catalog: &[EventRecord],
    ) -> RecommendResult<Vec<EventRecord>> {
        // Stage 1: interest documents from clubs and attended events.
        let profile = InterestProfile::from_activity(activity)?;

        if profile.is_empty() {
            debug!(user_id = activity.user_id, "no activity, recency fallback");
            return Ok(self.recent_events(catalog));
        }

        // Candidates: catalog minus already-registered events.
        let attended = activity.attended_ids();
        let candidates: Vec<&EventRecord> = catalog
            .iter()
            .filter(|e| !attended.contains(&e.id))
            .collect();

        if candidates.is_empty() {
            debug!(user_id = activity.user_id, "no unregistered events left");
            return Ok(Vec::new());
        }

        let mut documents = profile.documents().to_vec();
        for event in &candidates {
            documents.push(validated_event_document(event)?);
        }

        // Stage 2: one shared vector space, interest block first.
        let vectorizer = TfidfVectorizer::new(self.config.max_vocabulary);
        let rows = vectorizer.fit_transform(&documents);
        let (interest_rows, candidate_rows) = rows.split_at(profile.len());

        debug!(
            interest_docs = profile.len(),
            candidates = candidates.len(),
            dimensions = rows.first().map_or(0, Vec::len),
            "vector space fitted"
        );

        // Stage 3: mean profile vector → cosine → top-N positives.
        let profile_vec = ranking::profile_vector(interest_rows);
        let ranked = ranking::rank(&profile_vec, candidate_rows, self.config.top_n);

        let recommendations: Vec<EventRecord> = ranked
            .iter()
            .map(|c| candidates[c.index].clone())
            .collect();

        info!(
            user_id = activity.user_id,
            recommended = recommendations.len(),
            "recommendation complete"
        );

        Ok(recommendations)
    }

    /// No-activity fallback: the most recent catalog events, date
    /// descending. Equal dates keep catalog order (stable sort).
    fn recent_events(&self, catalog: &[EventRecord]) -> Vec<EventRecord> {
        let mut events: Vec<&EventRecord> = catalog.iter().collect();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        events
            .into_iter()
            .take(self.config.fallback_count)
            .cloned()
            .collect()
    }
}

impl Default for RecommendEngine {
    fn default() -> Self {
        Self::new(RecommendConfig::default())
    }
}

impl Recommender for RecommendEngine {
    fn recommend(
        &self,
        activity: &UserActivity,
        catalog: &[EventRecord],
    ) -> RecommendResult<Vec<EventRecord>> {
        self.recommend_events(activity, catalog)
    }
}

//! Property tests for the recommendation pipeline.

use campus_core::models::{ClubProfile, EventRecord, UserActivity};
use campus_core::traits::Recommender;
use campus_recommend::RecommendEngine;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

const ARTS_WORDS: &[&str] = &[
    "poetry", "cinema", "sculpture", "painting", "theater", "improv", "photography",
];
const TECH_WORDS: &[&str] = &[
    "robotics", "programming", "electronics", "astronomy", "mathematics", "chemistry", "physics",
];

fn arb_text(pool: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(pool), 1..5).prop_map(|words| words.join(" "))
}

fn arb_catalog(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<EventRecord>> {
    prop::collection::vec((arb_text(pool), arb_text(pool), 1u32..28), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (name, description, day))| EventRecord {
                id: i as i64 + 1,
                name,
                description,
                date: Utc.with_ymd_and_hms(2025, 5, day, 12, 0, 0).unwrap(),
            })
            .collect()
    })
}

fn arb_clubs(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<ClubProfile>> {
    prop::collection::vec(arb_text(pool), 0..3).prop_map(|descriptions| {
        descriptions
            .into_iter()
            .enumerate()
            .map(|(i, description)| ClubProfile {
                id: 100 + i as i64,
                name: format!("club-{i}"),
                description,
            })
            .collect()
    })
}

fn activity(clubs: Vec<ClubProfile>, attended: Vec<EventRecord>) -> UserActivity {
    UserActivity {
        user_id: 1,
        clubs,
        attended_events: attended,
    }
}

proptest! {
    #[test]
    fn result_length_is_bounded(
        catalog in arb_catalog(TECH_WORDS),
        clubs in arb_clubs(TECH_WORDS),
        mask in prop::collection::vec(any::<bool>(), 0..12),
    ) {
        let attended: Vec<EventRecord> = catalog
            .iter()
            .zip(&mask)
            .filter(|(_, &m)| m)
            .map(|(e, _)| e.clone())
            .collect();
        let result = RecommendEngine::default()
            .recommend(&activity(clubs, attended), &catalog)
            .unwrap();
        prop_assert!(result.len() <= 5);
    }

    #[test]
    fn attended_events_are_never_recommended(
        catalog in arb_catalog(TECH_WORDS),
        clubs in arb_clubs(TECH_WORDS),
        mask in prop::collection::vec(any::<bool>(), 0..12),
    ) {
        let attended: Vec<EventRecord> = catalog
            .iter()
            .zip(&mask)
            .filter(|(_, &m)| m)
            .map(|(e, _)| e.clone())
            .collect();
        // Only holds for users with history; the recency fallback
        // deliberately ignores registration state.
        prop_assume!(!clubs.is_empty() || !attended.is_empty());

        let ids: Vec<i64> = attended.iter().map(|e| e.id).collect();
        let result = RecommendEngine::default()
            .recommend(&activity(clubs, attended), &catalog)
            .unwrap();
        prop_assert!(result.iter().all(|e| !ids.contains(&e.id)));
    }

    #[test]
    fn recommendation_is_deterministic(
        catalog in arb_catalog(TECH_WORDS),
        clubs in arb_clubs(TECH_WORDS),
    ) {
        let engine = RecommendEngine::default();
        let user = activity(clubs, vec![]);
        let first = engine.recommend(&user, &catalog).unwrap();
        let second = engine.recommend(&user, &catalog).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn disjoint_vocabularies_never_match(
        catalog in arb_catalog(ARTS_WORDS),
        clubs in arb_clubs(TECH_WORDS),
    ) {
        prop_assume!(!clubs.is_empty());
        let result = RecommendEngine::default()
            .recommend(&activity(clubs, vec![]), &catalog)
            .unwrap();
        prop_assert!(result.is_empty());
    }

    #[test]
    fn results_come_from_the_catalog(
        catalog in arb_catalog(TECH_WORDS),
        clubs in arb_clubs(TECH_WORDS),
    ) {
        let result = RecommendEngine::default()
            .recommend(&activity(clubs, vec![]), &catalog)
            .unwrap();
        for event in &result {
            prop_assert!(catalog.iter().any(|c| c == event));
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::constants;

/// Recommendation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Maximum vocabulary size for the fitted term space.
    pub max_vocabulary: usize,
    /// Number of recommendations returned per call.
    pub top_n: usize,
    /// Number of most-recent events returned for users with no activity.
    pub fallback_count: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_vocabulary: constants::MAX_VOCABULARY_TERMS,
            top_n: constants::TOP_N_RECOMMENDATIONS,
            fallback_count: constants::FALLBACK_RECENT_COUNT,
        }
    }
}

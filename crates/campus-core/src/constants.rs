/// Campus engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of terms kept in a fitted vocabulary.
pub const MAX_VOCABULARY_TERMS: usize = 500;

/// Number of recommendations returned per call.
pub const TOP_N_RECOMMENDATIONS: usize = 5;

/// Number of most-recent events returned when a user has no activity.
pub const FALLBACK_RECENT_COUNT: usize = 5;

/// Minimum token length kept during tokenization.
pub const MIN_TOKEN_LEN: usize = 2;

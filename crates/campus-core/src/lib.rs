//! # campus-core
//!
//! Foundation crate for the campus recommendation engine.
//! Defines the models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RecommendConfig;
pub use errors::{RecommendError, RecommendResult};
pub use models::{ClubProfile, EventRecord, UserActivity};
pub use traits::Recommender;

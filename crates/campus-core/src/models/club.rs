use serde::{Deserialize, Serialize};

/// A club the user has joined.
///
/// Only the description feeds the interest profile; the name is carried
/// for callers that display memberships alongside recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubProfile {
    pub id: i64,
    pub name: String,
    pub description: String,
}

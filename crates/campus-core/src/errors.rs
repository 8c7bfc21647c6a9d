/// Recommendation subsystem errors.
///
/// These are precondition violations, not runtime failures: the engine
/// has no I/O of its own. Empty activity, empty candidate sets, and
/// all-zero similarity are handled as policies upstream, never as errors.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("club {club_id} has blank description text")]
    BlankClubDescription { club_id: i64 },

    #[error("event {event_id} has blank name or description text")]
    BlankEventText { event_id: i64 },
}

pub type RecommendResult<T> = Result<T, RecommendError>;

//! Similarity ranker: profile vector → cosine scores → top-N positives.

pub mod similarity;

use crate::vectorize::TermVector;

use similarity::{cosine_similarity, mean_vector};

/// A candidate's position in the input order plus its similarity score.
/// The score orders and filters; it is never returned to callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    pub index: usize,
    pub score: f64,
}

/// Aggregate the interest block into a single profile vector
/// (unweighted element-wise mean).
#[must_use]
pub fn profile_vector(interest_rows: &[TermVector]) -> TermVector {
    mean_vector(interest_rows)
}

/// Rank candidate rows against the profile vector.
///
/// Scores sort descending with ties broken by candidate input order
/// (first-seen wins), then the list is cut to `top_n` and filtered to
/// strictly positive scores. The result can therefore hold fewer than
/// `top_n` entries — or none — even when candidates exist.
#[must_use]
pub fn rank(profile: &TermVector, candidate_rows: &[TermVector], top_n: usize) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidate_rows
        .iter()
        .enumerate()
        .map(|(index, row)| RankedCandidate {
            index,
            score: cosine_similarity(profile, row),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.index.cmp(&b.index))
    });
    ranked.truncate(top_n);
    ranked.retain(|c| c.score > 0.0);
    ranked
}

//! Small vector utilities: dot, norm, mean, cosine.
//!
//! The vocabulary cap keeps vectors short, so plain dense slices beat
//! pulling in a numeric stack.

use crate::vectorize::TermVector;

/// Dot product of two equal-length vectors.
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean (L2) norm.
#[must_use]
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity: `dot(a, b) / (||a|| * ||b||)`.
///
/// Defined as 0.0 when either vector has zero magnitude (no overlap
/// with the vocabulary), so vocabulary misses rank below any real match.
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot(a, b) / (norm_a * norm_b)
}

/// Element-wise arithmetic mean of equally sized rows.
///
/// Empty input yields an empty vector; callers guard against it.
#[must_use]
pub fn mean_vector(rows: &[TermVector]) -> TermVector {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    let mut mean = vec![0.0; first.len()];
    for row in rows {
        for (acc, w) in mean.iter_mut().zip(row) {
            *acc += w;
        }
    }
    let n = rows.len() as f64;
    for acc in &mut mean {
        *acc /= n;
    }
    mean
}

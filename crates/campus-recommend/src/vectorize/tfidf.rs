//! TF-IDF vectorization over a per-call corpus.

use rustc_hash::{FxHashMap, FxHashSet};

use super::stopwords::StopWords;
use super::tokenizer::tokenize;

/// One document's weights over the fitted vocabulary. Dense is fine:
/// the vocabulary is capped well below the point where sparsity pays.
pub type TermVector = Vec<f64>;

/// TF-IDF vectorizer: fits a capped vocabulary over a document corpus
/// and weights each document's terms by frequency and corpus rarity.
///
/// Weighting follows the usual smoothed form:
/// `tfidf(t, d) = count(t, d) * (ln((1 + n) / (1 + df(t))) + 1)`,
/// with each document row L2-normalized afterwards.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
    stop_words: StopWords,
}

impl TfidfVectorizer {
    /// Vectorizer with English stop words and the given vocabulary cap.
    #[must_use]
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            stop_words: StopWords::english(),
        }
    }

    /// Fit a vocabulary over `documents` and transform each document
    /// into a [`TermVector`], preserving input order.
    ///
    /// The vocabulary keeps the `max_features` terms with the highest
    /// total corpus frequency; ties break lexicographically so the fit
    /// is deterministic. Documents whose tokens all fall outside the
    /// vocabulary come back as zero vectors.
    #[must_use]
    pub fn fit_transform(&self, documents: &[String]) -> Vec<TermVector> {
        if documents.is_empty() {
            return Vec::new();
        }

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.stop_words.filter(tokenize(doc)))
            .collect();

        // Corpus-wide term frequency and document frequency.
        let mut term_freq: FxHashMap<&str, usize> = FxHashMap::default();
        let mut doc_freq: FxHashMap<&str, usize> = FxHashMap::default();
        for tokens in &tokenized {
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for token in tokens {
                *term_freq.entry(token.as_str()).or_insert(0) += 1;
                seen.insert(token.as_str());
            }
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Cap the vocabulary: highest total frequency first, then
        // lexicographic so equal counts select deterministically.
        let mut ranked: Vec<(&str, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let vocabulary: FxHashMap<&str, usize> = ranked
            .iter()
            .enumerate()
            .map(|(idx, (term, _))| (*term, idx))
            .collect();

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = ranked
            .iter()
            .map(|(term, _)| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    if let Some(&idx) = vocabulary.get(token.as_str()) {
                        row[idx] += 1.0;
                    }
                }
                for (weight, factor) in row.iter_mut().zip(&idf) {
                    *weight *= factor;
                }
                l2_normalize(&mut row);
                row
            })
            .collect()
    }
}

/// Scale a row to unit L2 length; zero rows stay zero.
fn l2_normalize(row: &mut [f64]) {
    let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in row.iter_mut() {
            *w /= norm;
        }
    }
}

//! Vector space builder: documents → TF-IDF term vectors.
//!
//! The space is fitted jointly over interest ++ candidate documents, in
//! that order, every call. Vocabulary (and thus scores) shifts as the
//! catalog changes; that is inherent to the fit-per-call design.

pub mod stopwords;
pub mod tfidf;
pub mod tokenizer;

pub use stopwords::StopWords;
pub use tfidf::{TermVector, TfidfVectorizer};

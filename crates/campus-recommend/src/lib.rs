//! # campus-recommend
//!
//! Content-based event recommendation for the campus backend.
//!
//! Three stages, strictly forward data flow:
//! 1. Interest-profile builder — club and event history → text documents
//! 2. Vector space builder — joint TF-IDF over interest + candidate docs
//! 3. Similarity ranker — profile mean vector → cosine → top-N positives
//!
//! The whole pipeline is a pure function of `(activity, catalog)`:
//! every call fits its own vocabulary and discards it afterwards.

pub mod engine;
pub mod profile;
pub mod ranking;
pub mod vectorize;

pub use engine::RecommendEngine;

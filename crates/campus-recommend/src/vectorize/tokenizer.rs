//! Word tokenization for similarity text.

use campus_core::constants::MIN_TOKEN_LEN;

/// Split text into lowercase alphanumeric word tokens.
///
/// Runs of alphanumeric characters form tokens; everything else is a
/// separator. Single-character tokens are dropped — they carry no
/// signal and inflate the vocabulary.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(String::from)
        .collect()
}

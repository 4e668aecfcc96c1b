//! Configuration for a single filter call.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::FilterError;

/// The complete input contract for [`filter_words`](crate::filter_words).
///
/// All fields are mandatory; there is no default substitution for a missing
/// field, and deserialization rejects incomplete configs. The config is
/// cheap to clone and serde-friendly so it can be stored or passed across
/// process boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterConfig {
    /// Target words, in the order results should be reported. Duplicates are
    /// evaluated independently and may both appear in the result.
    pub words_to_filter: Vec<String>,
    /// The text to check; arbitrary case, possibly multi-line.
    pub string_to_check: String,
    /// Tokens at or below this length are candidates for concatenation when
    /// hunting spaced-out words. Must be at least 1.
    pub length_threshold: usize,
    /// First alphabet used for leet decoding.
    pub leet_alphabet1: Alphabet,
    /// Second alphabet used for leet decoding.
    pub leet_alphabet2: Alphabet,
    /// Target words at or below this length use the strict exact-match
    /// policy; longer words use the permissive substring policy.
    pub short_word_length: usize,
    /// Target words forced onto the strict policy regardless of length.
    pub short_word_exceptions: HashSet<String>,
}

impl FilterConfig {
    /// Validate the configuration for a single call.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.length_threshold == 0 {
            return Err(FilterError::InvalidConfig(
                "length_threshold must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

//! Leetspeak-aware denylist word filtering.
//!
//! Given free text and a list of banned words, this crate returns the subset
//! of banned words judged present — whether they appear plainly, spaced out
//! ("i d i o t"), letter-stretched ("baaad"), or in leet substitution
//! ("dumba$$", "!d!0t").
//!
//! ## What we do
//!
//! - Two fixed leet substitution alphabets, plus caller-supplied ones
//! - Bidirectional transliteration between plain text and leet
//! - Obfuscation stripping: short-token concatenation and
//!   consecutive-duplicate collapsing
//! - A dual-branch matching policy: long words get permissive substring
//!   checks, short words require exact token equality
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock-dependent behavior, no shared scratch state. Every call
//! to [`filter_words`] rebuilds its normalized views from scratch and drops
//! them on return; the same config always yields the same result.
//!
//! ## Invariants worth knowing
//!
//! - Only the 26 ASCII letters are targeted; this is not a
//!   unicode-normalization library
//! - Alphabet tokens need not be unique — decoding an ambiguous token picks
//!   the first entry in definition order
//! - Decoding is character-wise, so multi-character tokens (digraphs) never
//!   decode back; see [`decode_leet`]
//! - Long-word substring checks admit false positives inside longer words
//!   ("cat" matches "category")

mod alphabet;
mod collapse;
mod concat;
mod config;
mod engine;
mod error;
mod metrics;
mod translit;

pub use crate::alphabet::{Alphabet, LEET_ALPHABET_1, LEET_ALPHABET_2};
pub use crate::collapse::collapse_duplicates;
pub use crate::concat::concatenate_short_tokens;
pub use crate::config::FilterConfig;
pub use crate::engine::filter_words;
pub use crate::error::FilterError;
pub use crate::metrics::{set_filter_metrics, FilterMetrics};
pub use crate::translit::{decode_leet, encode_leet};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn base_config(words: &[&str], text: &str) -> FilterConfig {
        FilterConfig {
            words_to_filter: words.iter().map(|w| w.to_string()).collect(),
            string_to_check: text.to_string(),
            length_threshold: 1,
            leet_alphabet1: LEET_ALPHABET_1.clone(),
            leet_alphabet2: LEET_ALPHABET_2.clone(),
            short_word_length: 3,
            short_word_exceptions: HashSet::new(),
        }
    }

    #[test]
    fn mixed_obfuscation_end_to_end() {
        let cfg = base_config(
            &["idiot", "moron", "ass"],
            "What a m o r o n, an !D!0T even. Total dumba$$.",
        );
        let cfg = FilterConfig {
            short_word_length: 2,
            ..cfg
        };
        assert_eq!(filter_words(&cfg).expect("valid config"), vec![
            "idiot", "moron", "ass"
        ]);
    }

    #[test]
    fn exported_normalizers_compose_with_the_engine_views() {
        assert_eq!(collapse_duplicates("noooope"), "nope");
        assert_eq!(concatenate_short_tokens(&["n", "o"], 1), "no");
        assert_eq!(
            decode_leet(&LEET_ALPHABET_1, &encode_leet(&LEET_ALPHABET_1, "bed", false), false),
            "BED"
        );
    }

    #[test]
    fn filtering_is_deterministic() {
        let cfg = base_config(&["idiot", "cat"], "the !d!0t and the cat");
        let first = filter_words(&cfg).expect("valid config");
        let second = filter_words(&cfg).expect("valid config");
        assert_eq!(first, second);
    }
}

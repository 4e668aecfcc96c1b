//! The matching engine.
//!
//! [`filter_words`] builds several normalized views of the input text, then
//! evaluates each target word against them under a length-dependent policy:
//! long words get permissive substring checks, short words (and explicit
//! exceptions) require exact token equality so they don't match inside every
//! longer word that happens to contain them.

use std::time::Instant;

use tracing::{info, warn, Level};

use crate::collapse::collapse_duplicates;
use crate::concat::concatenate_short_tokens;
use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::metrics::metrics_recorder;
use crate::translit::decode_leet;


/// Normalized views of the input text.
///
/// Rebuilt from scratch on every call and dropped on return. Every field is
/// a local of the invocation; nothing here is shared between calls.
struct Views {
    /// Lowercased whole input.
    string_lowercase: String,
    /// Lowercased tokens with everything but ASCII letters, ASCII digits,
    /// and `:` stripped.
    tokens_clean: Vec<String>,
    /// Short-token runs glued back together (spaced-out words).
    concat_short: String,
    /// Whole input with consecutive duplicates collapsed, original case.
    collapsed_whole: String,
    /// Lowercased tokens of `collapsed_whole`.
    tokens_collapsed: Vec<String>,
    /// Per-token leet decodes of the raw tokens.
    tok_leet1: Vec<String>,
    tok_leet2: Vec<String>,
    /// Per-token leet decodes of the collapsed tokens.
    tok_collapsed_leet1: Vec<String>,
    tok_collapsed_leet2: Vec<String>,
    /// Whole-string leet decodes of the raw input.
    whole_leet_raw1: String,
    whole_leet_raw2: String,
    /// Whole-string leet decodes of the collapsed input.
    whole_leet_collapsed1: String,
    whole_leet_collapsed2: String,
}

impl Views {
    fn build(cfg: &FilterConfig) -> Self {
        let a1 = &cfg.leet_alphabet1;
        let a2 = &cfg.leet_alphabet2;

        let string_lowercase = cfg.string_to_check.to_lowercase();
        let tokens_raw: Vec<&str> = string_lowercase.split_whitespace().collect();

        let tokens_clean: Vec<String> = tokens_raw.iter().map(|t| strip_signs(t)).collect();
        let concat_short = concatenate_short_tokens(&tokens_clean, cfg.length_threshold);

        let collapsed_whole = collapse_duplicates(&cfg.string_to_check);
        let collapsed_lowercase = collapsed_whole.to_lowercase();
        let tokens_collapsed: Vec<String> = collapsed_lowercase
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let tok_leet1 = decode_tokens(a1, &tokens_raw);
        let tok_leet2 = decode_tokens(a2, &tokens_raw);
        let tok_collapsed_leet1 = decode_tokens(a1, &tokens_collapsed);
        let tok_collapsed_leet2 = decode_tokens(a2, &tokens_collapsed);

        let whole_leet_raw1 = decode_leet(a1, &cfg.string_to_check, true);
        let whole_leet_raw2 = decode_leet(a2, &cfg.string_to_check, true);
        let whole_leet_collapsed1 = decode_leet(a1, &collapsed_whole, true);
        let whole_leet_collapsed2 = decode_leet(a2, &collapsed_whole, true);

        Self {
            string_lowercase,
            tokens_clean,
            concat_short,
            collapsed_whole,
            tokens_collapsed,
            tok_leet1,
            tok_leet2,
            tok_collapsed_leet1,
            tok_collapsed_leet2,
            whole_leet_raw1,
            whole_leet_raw2,
            whole_leet_collapsed1,
            whole_leet_collapsed2,
        }
    }
}

/// Strip everything but ASCII letters, ASCII digits, and `:` from a token.
///
/// The colon survives on purpose: a target word containing one can only
/// match through this view, and the matching contract depends on it.
fn strip_signs(token: &str) -> String {
    token
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == ':')
        .collect()
}

fn decode_tokens<S: AsRef<str>>(
    alphabet: &crate::alphabet::Alphabet,
    tokens: &[S],
) -> Vec<String> {
    tokens
        .iter()
        .map(|t| decode_leet(alphabet, t.as_ref(), true))
        .collect()
}

/// Return the target words judged present in the input text.
///
/// The result follows `words_to_filter` order and preserves duplicates.
/// Either the full sequence is produced or the call fails atomically; a
/// malformed config is rejected up front with an error naming the field.
pub fn filter_words(cfg: &FilterConfig) -> Result<Vec<String>, FilterError> {
    let start = Instant::now();

    if let Err(err) = cfg.validate() {
        let elapsed_micros = start.elapsed().as_micros();
        warn!(error = %err, elapsed_micros, "filter_rejected");
        return Err(err);
    }

    let span = tracing::span!(
        Level::INFO,
        "wordfilter.filter_words",
        input_len = cfg.string_to_check.len(),
        words = cfg.words_to_filter.len()
    );
    let _guard = span.enter();

    let views = Views::build(cfg);
    let found: Vec<String> = cfg
        .words_to_filter
        .iter()
        .filter(|word| word_is_present(word, cfg, &views))
        .cloned()
        .collect();

    let latency = start.elapsed();
    let elapsed_micros = latency.as_micros();
    info!(
        words_checked = cfg.words_to_filter.len(),
        words_found = found.len(),
        elapsed_micros,
        "filter_complete"
    );

    if let Some(recorder) = metrics_recorder() {
        recorder.record_filter(cfg.words_to_filter.len(), found.len(), latency);
    }

    Ok(found)
}

fn word_is_present(word: &str, cfg: &FilterConfig, views: &Views) -> bool {
    let strict = word.chars().count() <= cfg.short_word_length
        || cfg.short_word_exceptions.contains(word);
    if strict {
        short_word_present(word, views)
    } else {
        long_word_present(word, views)
    }
}

/// Permissive policy for long words: exact token hits plus substring scans
/// over every whole-string view. Substring checks knowingly admit false
/// positives when the word occurs inside a longer unrelated word ("cat" in
/// "category"); that trade-off is part of the contract.
fn long_word_present(word: &str, views: &Views) -> bool {
    views.tokens_clean.iter().any(|t| t == word)
        || views.string_lowercase.contains(word)
        || views.concat_short.contains(word)
        || views.whole_leet_raw1.contains(word)
        || views.whole_leet_raw2.contains(word)
        || views.whole_leet_collapsed1.contains(word)
        || views.whole_leet_collapsed2.contains(word)
        || views.collapsed_whole.contains(word)
        || views.tok_leet1.iter().any(|t| t == word)
        || views.tok_leet2.iter().any(|t| t == word)
}

/// Strict policy for short words and exceptions: exact token equality only.
/// A substring scan would match a two-letter word inside half the input.
fn short_word_present(word: &str, views: &Views) -> bool {
    [
        &views.tokens_clean,
        &views.tokens_collapsed,
        &views.tok_collapsed_leet1,
        &views.tok_collapsed_leet2,
        &views.tok_leet1,
        &views.tok_leet2,
    ]
    .iter()
    .any(|list| list.iter().any(|t| t == word))
}

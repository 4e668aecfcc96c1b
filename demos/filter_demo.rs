use std::collections::HashSet;

use wordfilter::{filter_words, FilterConfig, LEET_ALPHABET_1, LEET_ALPHABET_2};

fn main() {
    let cfg = FilterConfig {
        words_to_filter: vec![
            "idiot".to_string(),
            "moron".to_string(),
            "ass".to_string(),
            "hi".to_string(),
        ],
        string_to_check: "What a m o r o n, an !D!0T even. Total dumba$$.".to_string(),
        length_threshold: 1,
        leet_alphabet1: LEET_ALPHABET_1.clone(),
        leet_alphabet2: LEET_ALPHABET_2.clone(),
        short_word_length: 2,
        short_word_exceptions: HashSet::new(),
    };

    match filter_words(&cfg) {
        Ok(found) => {
            println!("input: {}", cfg.string_to_check);
            println!("found: {found:?}");
        }
        Err(err) => eprintln!("filter failed: {err}"),
    }
}

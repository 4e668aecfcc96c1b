use std::collections::HashSet;

use wordfilter::{filter_words, FilterConfig, LEET_ALPHABET_1, LEET_ALPHABET_2};

fn config_with_text(text: &str) -> FilterConfig {
    FilterConfig {
        words_to_filter: vec!["idiot".to_string()],
        string_to_check: text.to_string(),
        length_threshold: 1,
        leet_alphabet1: LEET_ALPHABET_1.clone(),
        leet_alphabet2: LEET_ALPHABET_2.clone(),
        short_word_length: 3,
        short_word_exceptions: HashSet::new(),
    }
}

#[test]
fn repeated_calls_return_identical_sequences() {
    let cfg = config_with_text("you !d!0t, you m o r o n");
    let first = filter_words(&cfg).expect("filter");
    for _ in 0..50 {
        assert_eq!(filter_words(&cfg).expect("filter"), first);
    }
}

#[test]
fn equivalent_obfuscations_converge_on_the_same_verdict() {
    // Plain, punctuated, spaced-out, leet-substituted, and letter-stretched
    // renditions of the same word all trip the filter.
    for text in ["idiot", "IDIOT!!", "i d i o t", "!d!0t", "idiiiot"] {
        let cfg = config_with_text(text);
        assert_eq!(
            filter_words(&cfg).expect("filter"),
            vec!["idiot"],
            "input {text:?} should match"
        );
    }
}

#[test]
fn clean_inputs_stay_clean_across_runs() {
    let cfg = config_with_text("a perfectly polite sentence");
    for _ in 0..10 {
        assert_eq!(filter_words(&cfg).expect("filter"), Vec::<String>::new());
    }
}

use std::collections::HashSet;

use wordfilter::{filter_words, FilterConfig, LEET_ALPHABET_1, LEET_ALPHABET_2};

fn full_config() -> FilterConfig {
    FilterConfig {
        words_to_filter: vec![
            "idiot".to_string(),
            "moron".to_string(),
            "ass".to_string(),
            "hi".to_string(),
            "cat".to_string(),
            "xyzzy".to_string(),
        ],
        string_to_check: "Dear Sir,\n\
                          you are a m o r o n and an !D!0T.\n\
                          Your caaat-loving friend says hi to the dumba$$ next door."
            .to_string(),
        length_threshold: 1,
        leet_alphabet1: LEET_ALPHABET_1.clone(),
        leet_alphabet2: LEET_ALPHABET_2.clone(),
        short_word_length: 2,
        short_word_exceptions: HashSet::new(),
    }
}

#[test]
fn every_obfuscation_layer_contributes() {
    // idiot: leet-decoded whole string; moron: concatenated short tokens;
    // ass: leet inside a longer token; hi: strict exact token; cat:
    // stretch-collapsed substring; xyzzy: absent.
    let found = filter_words(&full_config()).expect("filter");
    assert_eq!(found, vec!["idiot", "moron", "ass", "hi", "cat"]);
}

#[test]
fn config_survives_a_serde_round_trip() {
    let cfg = full_config();
    let json = serde_json::to_string(&cfg).expect("serialize");
    let back: FilterConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, cfg);
    assert_eq!(
        filter_words(&back).expect("filter"),
        filter_words(&cfg).expect("filter")
    );
}

#[test]
fn deserialization_rejects_a_missing_field() {
    let mut value = serde_json::to_value(full_config()).expect("serialize");
    value
        .as_object_mut()
        .expect("config serializes to an object")
        .remove("string_to_check");
    let res: Result<FilterConfig, _> = serde_json::from_value(value);
    assert!(res.is_err());
}

#[test]
fn deserialization_rejects_a_malformed_alphabet() {
    let mut value = serde_json::to_value(full_config()).expect("serialize");
    value["leet_alphabet1"] = serde_json::json!([["A", "@"]]);
    let res: Result<FilterConfig, _> = serde_json::from_value(value);
    let err = res.expect_err("truncated alphabet should be rejected");
    assert!(err.to_string().contains("26"), "unexpected error: {err}");
}

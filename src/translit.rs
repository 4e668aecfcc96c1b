//! Bidirectional transliteration between plain text and leet.
//!
//! Encoding replaces each letter with its alphabet token. Decoding walks the
//! input one character at a time, so only single-character tokens can ever be
//! recognized; a digraph such as alphabet 2's `PH` survives decoding intact.
//! That asymmetry is an inherent limitation of the character-wise scan, not a
//! defect — see the lossy round-trip test below.

use crate::alphabet::Alphabet;

/// Encode plain text into leet.
///
/// The input is uppercased and each letter is replaced by its alphabet
/// token. Characters without an alphabet entry pass through unchanged. When
/// `to_lowercase` is set the final result is lowercased.
pub fn encode_leet(alphabet: &Alphabet, text: &str, to_lowercase: bool) -> String {
    let upper = text.to_uppercase();
    let mut out = String::with_capacity(upper.len());
    for ch in upper.chars() {
        match alphabet.token_for(ch) {
            Some(token) => out.push_str(token),
            None => out.push(ch),
        }
    }
    if to_lowercase {
        out.to_lowercase()
    } else {
        out
    }
}

/// Decode leet-styled text back toward plain letters.
///
/// The input is uppercased and processed one character at a time. A
/// character that is itself an alphabet key is kept; otherwise the first
/// entry (in definition order) whose token equals that single character
/// supplies the letter; otherwise the character is kept unchanged. When
/// `to_lowercase` is set the final result is lowercased.
pub fn decode_leet(alphabet: &Alphabet, text: &str, to_lowercase: bool) -> String {
    let upper = text.to_uppercase();
    let mut out = String::with_capacity(upper.len());
    let mut buf = [0u8; 4];
    for ch in upper.chars() {
        if alphabet.contains_letter(ch) {
            out.push(ch);
        } else if let Some(letter) = alphabet.letter_for(ch.encode_utf8(&mut buf)) {
            out.push(letter);
        } else {
            out.push(ch);
        }
    }
    if to_lowercase {
        out.to_lowercase()
    } else {
        out
    }
}

//! Leet substitution alphabets.
//!
//! An [`Alphabet`] maps each of the 26 uppercase ASCII letters to a
//! substitution token. Tokens may be multi-character and are not required to
//! be unique across letters; [`LEET_ALPHABET_1`] maps both `G` and `T` to
//! `6`, so decoding `6` is ambiguous. Ambiguity is resolved by definition
//! order: the entry list is kept exactly as given and value lookups return
//! the first match, which makes the tie-break deterministic and testable.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// An ordered association list of 26 letter → token entries.
///
/// Construction validates the table shape; a value that deserializes is as
/// well formed as one built through [`Alphabet::new`]. The entry order is
/// preserved verbatim because it defines the decode tie-break.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<(char, String)>", into = "Vec<(char, String)>")]
pub struct Alphabet {
    entries: Vec<(char, String)>,
}

impl Alphabet {
    /// Build an alphabet from letter → token entries.
    ///
    /// Requirements: exactly 26 entries, every key an uppercase ASCII
    /// letter, every letter defined exactly once, every token non-empty.
    pub fn new<I, T>(entries: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (char, T)>,
        T: Into<String>,
    {
        let entries: Vec<(char, String)> = entries
            .into_iter()
            .map(|(letter, token)| (letter, token.into()))
            .collect();

        if entries.len() != 26 {
            return Err(FilterError::InvalidAlphabet(format!(
                "expected 26 letter entries, got {}",
                entries.len()
            )));
        }

        let mut seen = [false; 26];
        for (letter, token) in &entries {
            if !letter.is_ascii_uppercase() {
                return Err(FilterError::InvalidAlphabet(format!(
                    "key {letter:?} is not an uppercase ASCII letter"
                )));
            }
            let slot = (*letter as u8 - b'A') as usize;
            if seen[slot] {
                return Err(FilterError::InvalidAlphabet(format!(
                    "duplicate entry for letter {letter:?}"
                )));
            }
            seen[slot] = true;
            if token.is_empty() {
                return Err(FilterError::InvalidAlphabet(format!(
                    "empty token for letter {letter:?}"
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The entries in definition order.
    pub fn entries(&self) -> &[(char, String)] {
        &self.entries
    }

    /// True if `letter` is one of the alphabet's keys.
    pub fn contains_letter(&self, letter: char) -> bool {
        self.entries.iter().any(|(key, _)| *key == letter)
    }

    /// The substitution token for `letter`, if it is a key.
    pub fn token_for(&self, letter: char) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == letter)
            .map(|(_, token)| token.as_str())
    }

    /// The letter whose token equals `token`, searching in definition order.
    ///
    /// Tokens are not unique across letters; the first matching entry wins.
    pub fn letter_for(&self, token: &str) -> Option<char> {
        self.entries
            .iter()
            .find(|(_, value)| value == token)
            .map(|(key, _)| *key)
    }
}

impl TryFrom<Vec<(char, String)>> for Alphabet {
    type Error = FilterError;

    fn try_from(entries: Vec<(char, String)>) -> Result<Self, Self::Error> {
        Alphabet::new(entries)
    }
}

impl From<Alphabet> for Vec<(char, String)> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.entries
    }
}

/// Leet alphabet restricted to single-character tokens.
pub static LEET_ALPHABET_1: Lazy<Alphabet> = Lazy::new(|| {
    Alphabet::new([
        ('A', "@"),
        ('B', "8"),
        ('C', "("),
        ('D', "D"),
        ('E', "3"),
        ('F', "F"),
        ('G', "6"),
        ('H', "#"),
        ('I', "!"),
        ('J', "J"),
        ('K', "K"),
        ('L', "1"),
        ('M', "M"),
        ('N', "N"),
        ('O', "0"),
        ('P', "P"),
        ('Q', "Q"),
        ('R', "R"),
        ('S', "$"),
        ('T', "6"),
        ('U', "U"),
        ('V', "V"),
        ('W', "W"),
        ('X', "X"),
        ('Y', "Y"),
        ('Z', "2"),
    ])
    .expect("built-in leet alphabet 1 is well formed")
});

/// More aggressive leet alphabet; several tokens are digraphs or trigraphs.
pub static LEET_ALPHABET_2: Lazy<Alphabet> = Lazy::new(|| {
    Alphabet::new([
        ('A', "4"),
        ('B', "8"),
        ('C', "("),
        ('D', "<|"),
        ('E', "€"),
        ('F', "PH"),
        ('G', "9"),
        ('H', "|-|"),
        ('I', "1"),
        ('J', "J"),
        ('K', "K"),
        ('L', "|"),
        ('M', "|\\/|"),
        ('N', "|\\|"),
        ('O', "0"),
        ('P', "|2"),
        ('Q', "Q"),
        ('R', "R"),
        ('S', "5"),
        ('T', "+"),
        ('U', "|_|"),
        ('V', "/"),
        ('W', "//"),
        ('X', "><"),
        ('Y', "'/"),
        ('Z', "2"),
    ])
    .expect("built-in leet alphabet 2 is well formed")
});

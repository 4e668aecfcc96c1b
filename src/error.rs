use thiserror::Error;

/// Errors that can occur while configuring or running the filter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid filter config: {0}")]
    InvalidConfig(String),
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
}

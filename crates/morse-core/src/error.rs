//! Error types for the Morse transcoder.
//!
//! Every failure is a value: the display strings are what a UI shows
//! verbatim, while callers that need to branch match on the variant.

use crate::transcoder::Direction;
use alloc::string::String;
use thiserror::Error;

/// Transcoding error.
///
/// Encoding fails fast with no partial output. Decoding fails fast too, but
/// carries the plaintext decoded before the bad token as diagnostic context.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MorseError {
    /// Input handed over at the boundary was not text
    #[error("{} is not a string!", .0.subject())]
    NotAString(Direction),

    /// Plaintext character with no table entry
    #[error("ERROR: You can't encode the following character: {0}")]
    UnencodableCharacter(char),

    /// Code token with no table entry
    #[error(
        "ERROR: I can't decode the following character: {token} \nYour decoded message thus far is: {partial}"
    )]
    UndecodableToken {
        /// Unmatched token, without its trailing delimiter
        token: String,
        /// Normalized plaintext decoded before the token
        partial: String,
    },
}

impl MorseError {
    /// Direction of the call that failed.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match self {
            Self::NotAString(direction) => *direction,
            Self::UnencodableCharacter(_) => Direction::Encode,
            Self::UndecodableToken { .. } => Direction::Decode,
        }
    }

    /// Partial output recovered before the failure, if the error carries one.
    #[must_use]
    pub fn partial_output(&self) -> Option<&str> {
        match self {
            Self::UndecodableToken { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

/// Symbol table construction error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// Entry with an empty code word
    #[error("empty code word for {ch:?}")]
    EmptyCode {
        /// Character of the offending entry
        ch: char,
    },

    /// Code word with a symbol other than dot or dash (or too long)
    #[error("invalid code word {code:?} for {ch:?}")]
    InvalidSymbol {
        /// Character of the offending entry
        ch: char,
        /// Offending code word
        code: &'static str,
    },

    /// Character listed twice
    #[error("duplicate character {ch:?}")]
    DuplicateCharacter {
        /// Repeated character
        ch: char,
    },

    /// Code word listed twice
    #[error("duplicate code word {code:?}")]
    DuplicateCode {
        /// Repeated code word
        code: &'static str,
    },

    /// More entries than the lookup indices can hold
    #[error("table has {len} entries, capacity is {capacity}")]
    CapacityExceeded {
        /// Number of entries supplied
        len: usize,
        /// Index capacity
        capacity: usize,
    },
}

/// Unrecognized direction name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction {0:?} (expected \"encode\" or \"decode\")")]
pub struct ParseDirectionError(pub String);

//! Direction-dispatching facade.
//!
//! [`Transcoder`] owns the symbol table for callers (UI, WASM bindings) that
//! pick the direction at runtime and only ever display the result.

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{MorseError, ParseDirectionError};
use crate::table::SymbolTable;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Transcoding direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext to Morse
    #[default]
    Encode,
    /// Morse to plaintext
    Decode,
}

impl Direction {
    /// Get display name for the direction.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Encode => "Encode",
            Self::Decode => "Decode",
        }
    }

    /// What the input of this direction is called in messages.
    #[must_use]
    pub const fn subject(&self) -> &'static str {
        match self {
            Self::Encode => "Plaintext",
            Self::Decode => "Ciphertext",
        }
    }

    /// All directions, in selector order.
    #[must_use]
    pub const fn all() -> &'static [Direction] {
        &[Self::Encode, Self::Decode]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("encode") {
            Ok(Self::Encode)
        } else if s.eq_ignore_ascii_case("decode") {
            Ok(Self::Decode)
        } else {
            Err(ParseDirectionError(s.to_string()))
        }
    }
}

/// Morse transcoder holding one immutable symbol table.
#[derive(Clone, Debug, Default)]
pub struct Transcoder {
    table: SymbolTable,
}

impl Transcoder {
    /// Create a transcoder with the standard table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(SymbolTable::standard())
    }

    /// Create a transcoder with a custom table.
    #[must_use]
    pub fn with_table(table: SymbolTable) -> Self {
        Self { table }
    }

    /// Get the symbol table.
    #[must_use]
    pub const fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Encode plaintext.
    pub fn encode(&self, plaintext: &str) -> Result<String, MorseError> {
        Encoder::new(&self.table).encode(plaintext)
    }

    /// Decode a code string.
    pub fn decode(&self, codetext: &str) -> Result<String, MorseError> {
        Decoder::new(&self.table).decode(codetext)
    }

    /// Run one direction on text input.
    pub fn transcode(&self, direction: Direction, input: &str) -> Result<String, MorseError> {
        log::trace!("{} {} bytes", direction, input.len());

        let result = match direction {
            Direction::Encode => self.encode(input),
            Direction::Decode => self.decode(input),
        };
        if let Err(err) = &result {
            log::debug!("{} failed: {:?}", direction, err);
        }
        result
    }

    /// Run one direction on a boundary value; `None` means it was not text.
    pub fn transcode_value(
        &self,
        direction: Direction,
        input: Option<&str>,
    ) -> Result<String, MorseError> {
        match input {
            Some(text) => self.transcode(direction, text),
            None => {
                log::debug!("{} rejected non-text input", direction);
                Err(MorseError::NotAString(direction))
            }
        }
    }

    /// Run one direction and render the outcome as display text.
    ///
    /// Errors become their human-readable message, so the result can be
    /// shown verbatim.
    #[must_use]
    pub fn translate(&self, direction: Direction, input: Option<&str>) -> String {
        match self.transcode_value(direction, input) {
            Ok(text) => text,
            Err(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_default() {
        assert_eq!(Direction::default(), Direction::Encode);
        assert_eq!(Direction::default(), crate::config::DEFAULT_DIRECTION);
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("encode".parse::<Direction>(), Ok(Direction::Encode));
        assert_eq!(" DECODE ".parse::<Direction>(), Ok(Direction::Decode));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(ParseDirectionError("sideways".to_string()))
        );
    }

    #[test]
    fn test_direction_names() {
        let names: alloc::vec::Vec<_> = Direction::all().iter().map(Direction::name).collect();
        assert_eq!(names, ["Encode", "Decode"]);
    }

    #[test]
    fn test_transcode_dispatch() {
        let t = Transcoder::new();
        assert_eq!(t.transcode(Direction::Encode, "sos").unwrap(), "... --- ...");
        assert_eq!(t.transcode(Direction::Decode, "... --- ...").unwrap(), "SOS");
    }

    #[test]
    fn test_non_text_input() {
        let t = Transcoder::new();
        assert_eq!(
            t.transcode_value(Direction::Encode, None),
            Err(MorseError::NotAString(Direction::Encode))
        );
        assert_eq!(t.translate(Direction::Encode, None), "Plaintext is not a string!");
        assert_eq!(t.translate(Direction::Decode, None), "Ciphertext is not a string!");
    }

    #[test]
    fn test_translate_renders_errors() {
        let t = Transcoder::new();
        assert_eq!(
            t.translate(Direction::Encode, Some("^")),
            "ERROR: You can't encode the following character: ^"
        );
        assert_eq!(t.translate(Direction::Decode, Some("-- ---")), "MO");
    }
}

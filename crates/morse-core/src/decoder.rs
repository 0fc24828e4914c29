//! Morse to plaintext decoder.
//!
//! Code words are delimited by single spaces, so decoding needs its own
//! tokenizer. [`TokenScanner`] is a two-accumulator state machine: the token
//! being built and the plaintext decoded so far. A delimiter flushes the
//! token through the table; anything else extends it.

use crate::config::LETTER_DELIMITER;
use crate::error::MorseError;
use crate::normalize::normalize;
use crate::table::SymbolTable;
use alloc::string::String;
use core::mem;

/// Morse decoder bound to a symbol table.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'t> {
    table: &'t SymbolTable,
}

impl<'t> Decoder<'t> {
    /// Create a new decoder.
    #[must_use]
    pub const fn new(table: &'t SymbolTable) -> Self {
        Self { table }
    }

    /// Decode a code string into plaintext.
    ///
    /// The input is scanned as if it ended with a delimiter, so trailing
    /// garbage after the last code word is reported as an undecodable token.
    /// On failure the error carries the normalized plaintext decoded before
    /// the offending token.
    pub fn decode(&self, codetext: &str) -> Result<String, MorseError> {
        if codetext.is_empty() {
            return Ok(String::new());
        }

        let mut scanner = TokenScanner::new(self.table);
        for ch in codetext.chars() {
            scanner.push(ch)?;
        }
        if !codetext.ends_with(LETTER_DELIMITER) {
            scanner.flush()?;
        }

        Ok(scanner.finish())
    }
}

/// Tokenizer/accumulator state for one decode call.
#[derive(Debug)]
struct TokenScanner<'t> {
    table: &'t SymbolTable,
    /// Code word being built
    token: String,
    /// Plaintext decoded so far (not yet normalized)
    decoded: String,
}

impl<'t> TokenScanner<'t> {
    fn new(table: &'t SymbolTable) -> Self {
        Self {
            table,
            token: String::new(),
            decoded: String::new(),
        }
    }

    /// Feed one input character.
    fn push(&mut self, ch: char) -> Result<(), MorseError> {
        if ch == LETTER_DELIMITER {
            self.flush()
        } else {
            self.token.push(ch);
            Ok(())
        }
    }

    /// Resolve the pending token and reset it.
    fn flush(&mut self) -> Result<(), MorseError> {
        match self.table.char_for(&self.token) {
            Some(ch) => {
                self.decoded.push(ch);
                self.token.clear();
                Ok(())
            }
            None => Err(MorseError::UndecodableToken {
                token: mem::take(&mut self.token),
                partial: normalize(&self.decoded),
            }),
        }
    }

    fn finish(self) -> String {
        normalize(&self.decoded)
    }
}

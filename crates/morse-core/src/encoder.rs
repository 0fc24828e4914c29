//! Plaintext to Morse encoder.

use crate::config::LETTER_DELIMITER;
use crate::error::MorseError;
use crate::normalize::normalize;
use crate::table::SymbolTable;
use alloc::borrow::Cow;
use alloc::string::String;

/// Morse encoder bound to a symbol table.
#[derive(Clone, Copy, Debug)]
pub struct Encoder<'t> {
    table: &'t SymbolTable,
}

impl<'t> Encoder<'t> {
    /// Create a new encoder.
    #[must_use]
    pub const fn new(table: &'t SymbolTable) -> Self {
        Self { table }
    }

    /// Encode plaintext into a code string.
    ///
    /// Input is uppercased and normalized first. Code words are separated by
    /// single spaces; spaces in the plaintext become the word separator. The
    /// first unmapped character aborts the call with no partial output.
    pub fn encode(&self, plaintext: &str) -> Result<String, MorseError> {
        let upper = uppercase(plaintext);
        let text = normalize(&upper);

        // Typical code word is about 4 elements plus delimiter
        let mut out = String::with_capacity(text.len().saturating_mul(4));
        for ch in text.chars() {
            let code = self
                .table
                .code_for(ch)
                .ok_or(MorseError::UnencodableCharacter(ch))?;
            if !out.is_empty() {
                out.push(LETTER_DELIMITER);
            }
            out.push_str(code);
        }

        Ok(out)
    }
}

/// Uppercase `text`, borrowing it when it is already uppercase.
fn uppercase(text: &str) -> Cow<'_, str> {
    let already_upper = text.chars().all(|ch| {
        let mut upper = ch.to_uppercase();
        upper.next() == Some(ch) && upper.next().is_none()
    });

    if already_upper {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_uppercase())
    }
}

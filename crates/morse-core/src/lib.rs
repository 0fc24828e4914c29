//! Morse Code Encoder/Decoder
//!
//! Table-driven transcoder between plaintext and the textual dot-dash
//! Morse representation. This crate is `no_std` (with `alloc`) so the same
//! engine can back both the WASM bindings and the browser UI.
//!
//! # Modules
//!
//! - [`table`] - Symbol table: character/code word pairs with O(1) lookup both ways
//! - [`normalize`] - Whitespace canonicalization
//! - [`encoder`] - Plaintext to code string
//! - [`decoder`] - Code string to plaintext
//! - [`transcoder`] - Direction-dispatching facade for UI/boundary callers
//! - [`error`] - Typed errors with display messages
//! - [`config`] - Delimiters and other fixed constants

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod normalize;
pub mod table;
pub mod transcoder;

// Re-export commonly used types
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{MorseError, ParseDirectionError, TableError};
pub use normalize::{is_normalized, normalize};
pub use table::{MorseEntry, PackedCode, SymbolTable, MORSE_TABLE};
pub use transcoder::{Direction, Transcoder};

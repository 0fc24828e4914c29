//! Fixed transcoding constants.
//!
//! The textual Morse format is defined entirely by these symbols; nothing is
//! configurable at runtime.

use crate::transcoder::Direction;

/// Short element of a code word
pub const DOT: char = '.';

/// Long element of a code word
pub const DASH: char = '-';

/// Separates consecutive code words within a transmission
pub const LETTER_DELIMITER: char = ' ';

/// Code word for the space character (word boundary)
pub const WORD_SEPARATOR: &str = "/";

/// Longest dot/dash code word representable by [`crate::PackedCode`]
pub const MAX_CODE_ELEMENTS: usize = 15;

/// Capacity of each symbol table index (must be a power of two)
pub const TABLE_CAPACITY: usize = 64;

/// Direction selected when a caller does not specify one
pub const DEFAULT_DIRECTION: Direction = Direction::Encode;

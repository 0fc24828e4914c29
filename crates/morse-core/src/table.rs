//! Morse symbol table.
//!
//! A single ordered list of (character, code word) pairs is the source of
//! truth. [`SymbolTable`] derives two hash indices from it so lookups in
//! either direction are O(1) and can never disagree with each other.

use crate::config::{DASH, DOT, MAX_CODE_ELEMENTS, TABLE_CAPACITY, WORD_SEPARATOR};
use crate::error::TableError;
use heapless::FnvIndexMap;

/// Morse table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorseEntry {
    /// Plaintext character (uppercase)
    pub ch: char,
    /// Code word, without any delimiter
    pub code: &'static str,
}

impl MorseEntry {
    /// Create a new table entry.
    #[must_use]
    pub const fn new(ch: char, code: &'static str) -> Self {
        Self { ch, code }
    }
}

/// Morse table (ITU letters and digits plus common punctuation).
///
/// The space character maps to the word separator rather than to a
/// dot/dash sequence.
pub static MORSE_TABLE: &[MorseEntry] = &[
    MorseEntry::new(' ', WORD_SEPARATOR),
    MorseEntry::new('A', ".-"),
    MorseEntry::new('B', "-..."),
    MorseEntry::new('C', "-.-."),
    MorseEntry::new('D', "-.."),
    MorseEntry::new('E', "."),
    MorseEntry::new('F', "..-."),
    MorseEntry::new('G', "--."),
    MorseEntry::new('H', "...."),
    MorseEntry::new('I', ".."),
    MorseEntry::new('J', ".---"),
    MorseEntry::new('K', "-.-"),
    MorseEntry::new('L', ".-.."),
    MorseEntry::new('M', "--"),
    MorseEntry::new('N', "-."),
    MorseEntry::new('O', "---"),
    MorseEntry::new('P', ".--."),
    MorseEntry::new('Q', "--.-"),
    MorseEntry::new('R', ".-."),
    MorseEntry::new('S', "..."),
    MorseEntry::new('T', "-"),
    MorseEntry::new('U', "..-"),
    MorseEntry::new('V', "...-"),
    MorseEntry::new('W', ".--"),
    MorseEntry::new('X', "-..-"),
    MorseEntry::new('Y', "-.--"),
    MorseEntry::new('Z', "--.."),
    MorseEntry::new('1', ".----"),
    MorseEntry::new('2', "..---"),
    MorseEntry::new('3', "...--"),
    MorseEntry::new('4', "....-"),
    MorseEntry::new('5', "....."),
    MorseEntry::new('6', "-...."),
    MorseEntry::new('7', "--..."),
    MorseEntry::new('8', "---.."),
    MorseEntry::new('9', "----."),
    MorseEntry::new('0', "-----"),
    MorseEntry::new('.', ".-.-.-"),
    MorseEntry::new(',', "--..--"),
    MorseEntry::new('?', "..--.."),
    MorseEntry::new('\'', ".----."),
    MorseEntry::new('!', "-.-.--"),
    MorseEntry::new('/', "-..-."),
    MorseEntry::new('(', "-.--."),
    MorseEntry::new(')', "-.--.-"),
    MorseEntry::new('&', ".-..."),
    MorseEntry::new(':', "---..."),
    MorseEntry::new(';', "-.-.-."),
    MorseEntry::new('=', "-...-"),
    MorseEntry::new('+', ".-.-."),
    MorseEntry::new('-', "-....-"),
    MorseEntry::new('_', "..--.-"),
    MorseEntry::new('"', ".-..-."),
    MorseEntry::new('$', "...-..-"),
    MorseEntry::new('@', ".--.-."),
];

/// Code word packed into a bit pattern, used as the reverse index key.
///
/// Elements are stored MSB-first (dot = 0, dash = 1) together with the
/// element count, so `"."` and `".."` stay distinct. The word separator is
/// the only zero-length code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PackedCode {
    /// Element bits, last element in bit 0
    bits: u16,
    /// Number of elements
    len: u8,
}

impl PackedCode {
    /// Packed form of [`WORD_SEPARATOR`].
    pub const WORD_SEPARATOR: Self = Self { bits: 0, len: 0 };

    /// Pack a textual code word.
    ///
    /// Returns `None` for the empty string, for anything containing a
    /// symbol other than dot or dash, and for codes longer than
    /// [`MAX_CODE_ELEMENTS`].
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        if code == WORD_SEPARATOR {
            return Some(Self::WORD_SEPARATOR);
        }
        if code.is_empty() {
            return None;
        }

        let mut bits: u16 = 0;
        let mut len: u8 = 0;
        for symbol in code.chars() {
            if usize::from(len) >= MAX_CODE_ELEMENTS {
                return None;
            }
            let bit = match symbol {
                DOT => 0,
                DASH => 1,
                _ => return None,
            };
            bits = (bits << 1) | bit;
            len += 1;
        }

        Some(Self { bits, len })
    }

    /// Number of dot/dash elements (zero for the word separator).
    #[must_use]
    pub const fn len(&self) -> u8 {
        self.len
    }

    /// Check if this is the word separator.
    #[must_use]
    pub const fn is_word_separator(&self) -> bool {
        self.len == 0
    }
}

/// Bidirectional Morse lookup table.
///
/// Immutable once built; share it by reference (it is `Send + Sync`).
#[derive(Clone, Debug)]
pub struct SymbolTable {
    entries: &'static [MorseEntry],
    by_char: FnvIndexMap<char, u8, TABLE_CAPACITY>,
    by_code: FnvIndexMap<PackedCode, u8, TABLE_CAPACITY>,
}

impl SymbolTable {
    /// Build the table from the built-in [`MORSE_TABLE`].
    #[must_use]
    pub fn standard() -> Self {
        // MORSE_TABLE is covered by `test_standard_table_is_valid`.
        Self::from_entries(MORSE_TABLE).expect("built-in Morse table is valid")
    }

    /// Build a table from a custom pair list, validating it.
    pub fn from_entries(entries: &'static [MorseEntry]) -> Result<Self, TableError> {
        if entries.len() > TABLE_CAPACITY {
            return Err(TableError::CapacityExceeded {
                len: entries.len(),
                capacity: TABLE_CAPACITY,
            });
        }

        let mut by_char: FnvIndexMap<char, u8, TABLE_CAPACITY> = FnvIndexMap::new();
        let mut by_code: FnvIndexMap<PackedCode, u8, TABLE_CAPACITY> = FnvIndexMap::new();

        for (slot, entry) in entries.iter().enumerate() {
            if entry.code.is_empty() {
                return Err(TableError::EmptyCode { ch: entry.ch });
            }
            let packed = PackedCode::parse(entry.code).ok_or(TableError::InvalidSymbol {
                ch: entry.ch,
                code: entry.code,
            })?;
            // Bounded by TABLE_CAPACITY above
            let slot = slot as u8;

            if insert_unique(&mut by_char, entry.ch, slot) {
                return Err(TableError::DuplicateCharacter { ch: entry.ch });
            }
            if insert_unique(&mut by_code, packed, slot) {
                return Err(TableError::DuplicateCode { code: entry.code });
            }
        }

        log::trace!("symbol table built with {} entries", entries.len());

        Ok(Self {
            entries,
            by_char,
            by_code,
        })
    }

    /// Find the code word for a character.
    #[must_use]
    pub fn code_for(&self, ch: char) -> Option<&'static str> {
        self.by_char
            .get(&ch)
            .map(|&slot| self.entries[usize::from(slot)].code)
    }

    /// Find the character for a code word (given without delimiter).
    #[must_use]
    pub fn char_for(&self, code: &str) -> Option<char> {
        let packed = PackedCode::parse(code)?;
        self.by_code
            .get(&packed)
            .map(|&slot| self.entries[usize::from(slot)].ch)
    }

    /// Code word assigned to the space character, if any.
    #[must_use]
    pub fn word_separator(&self) -> Option<&'static str> {
        self.code_for(' ')
    }

    /// Entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = &'static MorseEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Insert into an index, returning `true` if the key was already present.
///
/// Callers check the entry count against `TABLE_CAPACITY` first, so the
/// index never reports itself full.
fn insert_unique<K>(index: &mut FnvIndexMap<K, u8, TABLE_CAPACITY>, key: K, slot: u8) -> bool
where
    K: Eq + core::hash::Hash,
{
    !matches!(index.insert(key, slot), Ok(None))
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

//! Transcoder Tests
//!
//! End-to-end encode/decode behavior through the public API.

use morse_core::{Direction, MorseError, SymbolTable, Transcoder, MORSE_TABLE};

const PANGRAM: &str = "the quick brown fox jumps over the lazy dog";
const PANGRAM_CODE: &str = "- .... . / --.- ..- .. -.-. -.- / -... .-. --- .-- -. / ..-. --- -..- / .--- ..- -- .--. ... / --- ...- . .-. / - .... . / .-.. .- --.. -.-- / -.. --- --.";

fn undecodable(token: &str, partial: &str) -> MorseError {
    MorseError::UndecodableToken {
        token: token.to_string(),
        partial: partial.to_string(),
    }
}

// ============================================================================
// Encoder Tests
// ============================================================================

#[test]
fn test_encode_empty() {
    assert_eq!(Transcoder::new().encode("").unwrap(), "");
}

#[test]
fn test_encode_unencodable() {
    let err = Transcoder::new().encode("^").unwrap_err();
    assert_eq!(err, MorseError::UnencodableCharacter('^'));
    assert_eq!(err.partial_output(), None);
}

#[test]
fn test_encode_whitespace() {
    assert_eq!(Transcoder::new().encode("   e       e   ").unwrap(), ". / .");
}

#[test]
fn test_encode_mixed_case() {
    assert_eq!(Transcoder::new().encode("AbCd").unwrap(), ".- -... -.-. -..");
}

#[test]
fn test_encode_pangram() {
    assert_eq!(Transcoder::new().encode(PANGRAM).unwrap(), PANGRAM_CODE);
}

#[test]
fn test_encode_digits_and_punctuation() {
    let t = Transcoder::new();
    assert_eq!(
        t.encode("H1er0ph@nT + '").unwrap(),
        ".... .---- . .-. ----- .--. .... .--.-. -. - / .-.-. / .----."
    );
    assert_eq!(t.encode("\"'").unwrap(), ".-..-. .----.");
}

#[test]
fn test_encode_does_not_mutate_input() {
    let input = String::from("test");
    let _ = Transcoder::new().encode(&input);
    assert_eq!(input, "test");
}

// ============================================================================
// Decoder Tests
// ============================================================================

#[test]
fn test_decode_empty() {
    assert_eq!(Transcoder::new().decode("").unwrap(), "");
}

#[test]
fn test_decode_running_token() {
    assert_eq!(
        Transcoder::new().decode("string"),
        Err(undecodable("string", ""))
    );
}

#[test]
fn test_decode_partial_output() {
    let err = Transcoder::new()
        .decode(".- ..- / .- . .--.-.-.-.-.-.-.-.-.-.")
        .unwrap_err();
    assert_eq!(err, undecodable(".--.-.-.-.-.-.-.-.-.-.", "AU AE"));
    assert_eq!(err.partial_output(), Some("AU AE"));
    assert_eq!(
        err.to_string(),
        "ERROR: I can't decode the following character: .--.-.-.-.-.-.-.-.-.-. \nYour decoded message thus far is: AU AE"
    );
}

#[test]
fn test_decode_lone_separator() {
    assert_eq!(Transcoder::new().decode("/").unwrap(), "");
}

#[test]
fn test_decode_pangram() {
    assert_eq!(
        Transcoder::new().decode(PANGRAM_CODE).unwrap(),
        "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG"
    );
}

#[test]
fn test_decode_digits_and_punctuation() {
    let t = Transcoder::new();
    assert_eq!(
        t.decode(".... .---- . .-. ----- .--. .... .--.-. -. - / .-.-. / .----.")
            .unwrap(),
        "H1ER0PH@NT + '"
    );
    assert_eq!(t.decode(".-..-. .----.").unwrap(), "\"'");
}

#[test]
fn test_decode_does_not_mutate_input() {
    let input = String::from("- . ... -");
    let _ = Transcoder::new().decode(&input);
    assert_eq!(input, "- . ... -");
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test]
fn test_every_character_round_trips() {
    let t = Transcoder::new();
    for entry in MORSE_TABLE.iter().filter(|e| e.ch != ' ') {
        let text = entry.ch.to_string();
        let code = t.encode(&text).unwrap();
        assert_eq!(code, entry.code);
        assert_eq!(t.decode(&code).unwrap(), text.to_uppercase());
    }
}

#[test]
fn test_lowercase_round_trips_to_uppercase() {
    let t = Transcoder::new();
    for ch in 'a'..='z' {
        let code = t.encode(&ch.to_string()).unwrap();
        assert_eq!(t.decode(&code).unwrap(), ch.to_ascii_uppercase().to_string());
    }
}

#[test]
fn test_every_code_word_round_trips() {
    let t = Transcoder::new();
    for entry in MORSE_TABLE.iter().filter(|e| e.ch != ' ') {
        let text = t.decode(entry.code).unwrap();
        assert_eq!(t.encode(&text).unwrap(), entry.code);
    }
}

#[test]
fn test_pangram_round_trip() {
    let t = Transcoder::new();
    let code = t.encode("  the quick   brown fox\tjumps over the lazy dog ").unwrap();
    assert_eq!(t.decode(&code).unwrap(), PANGRAM.to_uppercase());
}

// ============================================================================
// Boundary Tests
// ============================================================================

#[test]
fn test_translate_not_a_string() {
    let t = Transcoder::new();
    assert_eq!(t.translate(Direction::Encode, None), "Plaintext is not a string!");
    assert_eq!(t.translate(Direction::Decode, None), "Ciphertext is not a string!");
}

#[test]
fn test_translate_passes_results_through() {
    let t = Transcoder::new();
    assert_eq!(t.translate(Direction::Encode, Some("AbCd")), ".- -... -.-. -..");
    assert_eq!(
        t.translate(Direction::Decode, Some("string")),
        "ERROR: I can't decode the following character: string \nYour decoded message thus far is: "
    );
}

#[test]
fn test_transcoder_with_explicit_table() {
    let table = SymbolTable::standard();
    let t = Transcoder::with_table(table.clone());
    assert_eq!(t.table().len(), table.len());
    assert_eq!(t.encode("73").unwrap(), "--... ...--");
}

#[test]
fn test_transcoder_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Transcoder>();
    assert_send_sync::<SymbolTable>();
}

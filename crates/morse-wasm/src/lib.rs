//! WASM bindings for the Morse transcoder.
//!
//! JavaScript callers may pass any value; anything that is not a JS string
//! gets the "not a string" message back instead of an exception, so the
//! return value can always be displayed as-is.

use std::sync::OnceLock;

use morse_core::{Direction, Transcoder};
use wasm_bindgen::prelude::*;

/// Transcoder shared by the free functions, built on first use.
static SHARED: OnceLock<Transcoder> = OnceLock::new();

fn shared() -> &'static Transcoder {
    SHARED.get_or_init(|| {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Transcoder::new()
    })
}

/// Morse translator holding its own symbol table.
#[wasm_bindgen]
pub struct MorseTranslator {
    transcoder: Transcoder,
}

#[wasm_bindgen]
impl MorseTranslator {
    /// Create a new translator.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Self {
            transcoder: Transcoder::new(),
        }
    }

    /// Encode plaintext; returns the code string or an error message.
    #[wasm_bindgen]
    pub fn encode(&self, input: JsValue) -> String {
        self.transcoder
            .translate(Direction::Encode, input.as_string().as_deref())
    }

    /// Decode a code string; returns the plaintext or an error message.
    #[wasm_bindgen]
    pub fn decode(&self, input: JsValue) -> String {
        self.transcoder
            .translate(Direction::Decode, input.as_string().as_deref())
    }

    /// Run the direction named `direction` ("encode" or "decode").
    #[wasm_bindgen]
    pub fn translate(&self, direction: &str, input: JsValue) -> String {
        translate_with(&self.transcoder, direction, input.as_string().as_deref())
    }

    /// Number of characters the table can encode.
    #[wasm_bindgen(getter)]
    pub fn alphabet_size(&self) -> usize {
        self.transcoder.table().len()
    }
}

impl Default for MorseTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode plaintext (free function).
#[wasm_bindgen(js_name = encodeMorse)]
pub fn encode_morse(input: JsValue) -> String {
    shared().translate(Direction::Encode, input.as_string().as_deref())
}

/// Decode a code string (free function).
#[wasm_bindgen(js_name = decodeMorse)]
pub fn decode_morse(input: JsValue) -> String {
    shared().translate(Direction::Decode, input.as_string().as_deref())
}

/// Create a new translator (factory function).
#[wasm_bindgen]
pub fn create_translator() -> MorseTranslator {
    MorseTranslator::new()
}

fn translate_with(transcoder: &Transcoder, direction: &str, input: Option<&str>) -> String {
    match direction.parse::<Direction>() {
        Ok(direction) => transcoder.translate(direction, input),
        Err(err) => err.to_string(),
    }
}

//! Application state management.

use leptos::*;
use morse_core::{config::DEFAULT_DIRECTION, Direction, Transcoder};

/// Banner shown above the controls.
pub const WELCOME_TEXT: &str = "Welcome to the Morse Translator!\n\
     Select either Encode or Decode, put your message in, and hit Translate!";

/// Prompt shown above the message input.
pub const INPUT_PROMPT: &str = "Put your message below!";

/// Visible rows of the output area.
pub const OUTPUT_ROWS: u32 = 10;

/// Translator form state: direction, input, last result.
#[derive(Clone, Debug)]
pub struct TranslatorState {
    /// Selected direction
    pub direction: Direction,
    /// Message input
    pub input: String,
    /// Last translation result (or error message)
    pub output: String,
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self {
            direction: DEFAULT_DIRECTION,
            input: String::new(),
            output: String::new(),
        }
    }
}

/// Application context providing global state.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Selected direction
    pub direction: RwSignal<Direction>,
    /// Message input
    pub input: RwSignal<String>,
    /// Last translation result
    pub output: RwSignal<String>,

    /// Transcoder (immutable, built once)
    pub transcoder: StoredValue<Transcoder>,
}

impl AppContext {
    /// Create new application context with default values.
    pub fn new() -> Self {
        let state = TranslatorState::default();

        Self {
            direction: create_rw_signal(state.direction),
            input: create_rw_signal(state.input),
            output: create_rw_signal(state.output),
            transcoder: store_value(Transcoder::new()),
        }
    }

    /// Translate the current input in the selected direction.
    pub fn translate(&self) {
        let direction = self.direction.get_untracked();
        let result = self.input.with_untracked(|input| {
            self.transcoder
                .with_value(|t| t.transcode(direction, input))
        });

        let text = match result {
            Ok(text) => text,
            Err(err) => {
                web_sys::console::warn_1(&format!("{} failed: {:?}", direction, err).into());
                err.to_string()
            }
        };
        self.output.set(text);
    }

    /// Empty the message input. The last output stays visible.
    pub fn clear_input(&self) {
        self.input.set(String::new());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide application context to component tree.
pub fn provide_app_context() -> AppContext {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx
}

/// Use application context from component tree.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

//! UI components for the Morse translator.

pub mod direction_selector;
pub mod message_input;
pub mod output_display;

pub use direction_selector::DirectionSelector;
pub use message_input::MessageInput;
pub use output_display::OutputDisplay;

//! Message Input Component.
//!
//! Single-line input with Translate and Clear buttons.

use leptos::*;

/// Message input component.
#[component]
pub fn MessageInput(
    /// Signal for the message text
    message: RwSignal<String>,
    /// Callback when translation is requested
    on_translate: Callback<()>,
    /// Callback when the input should be cleared
    on_clear: Callback<()>,
) -> impl IntoView {
    let input_ref = create_node_ref::<leptos::html::Input>();

    let handle_input = move |ev: web_sys::Event| {
        message.set(event_target_value(&ev));
    };

    let handle_keydown = move |ev: web_sys::KeyboardEvent| {
        // Enter translates
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_translate.call(());
        }
    };

    let handle_clear = move |_: web_sys::MouseEvent| {
        on_clear.call(());
        if let Some(input) = input_ref.get() {
            if let Err(err) = input.focus() {
                web_sys::console::warn_1(&format!("Input focus failed: {:?}", err).into());
            }
        }
    };

    view! {
        <div class="message-input-container">
            <input
                node_ref=input_ref
                type="text"
                class="message-input"
                size=100
                prop:value=move || message.get()
                on:input=handle_input
                on:keydown=handle_keydown
            />
            <div class="message-actions">
                <button class="translate-button" on:click=move |_| on_translate.call(())>
                    "Translate!"
                </button>
                <button
                    class="clear-button"
                    on:click=handle_clear
                    disabled=move || message.with(String::is_empty)
                >
                    "Clear Message"
                </button>
            </div>
        </div>
    }
}

//! Main application component.

use leptos::*;
use morse_core::Direction;

use crate::components::{DirectionSelector, MessageInput, OutputDisplay};
use crate::state::{
    provide_app_context, use_app_context, AppContext, INPUT_PROMPT, OUTPUT_ROWS, WELCOME_TEXT,
};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    // Provide application context
    let ctx = provide_app_context();

    view! {
        <main class="morse-app">
            <Header />
            <TranslatorPanel ctx=ctx />
            <StatusBar />
        </main>
    }
}

/// Welcome banner.
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <pre class="welcome-text">{WELCOME_TEXT}</pre>
        </header>
    }
}

/// Direction selector, message input, and output.
#[component]
fn TranslatorPanel(ctx: AppContext) -> impl IntoView {
    let on_direction_change = Callback::new(move |direction: Direction| {
        ctx.direction.set(direction);
    });

    let on_translate = Callback::new(move |_| ctx.translate());

    let on_clear = Callback::new(move |_| ctx.clear_input());

    view! {
        <section class="translator-panel">
            <DirectionSelector
                direction=ctx.direction.read_only()
                on_change=on_direction_change
            />
            <p class="input-prompt">{INPUT_PROMPT}</p>
            <MessageInput
                message=ctx.input
                on_translate=on_translate
                on_clear=on_clear
            />
            <OutputDisplay text=ctx.output.read_only() rows=OUTPUT_ROWS />
        </section>
    }
}

/// Status bar at bottom of application.
#[component]
fn StatusBar() -> impl IntoView {
    let ctx = use_app_context();

    let direction_text = move || ctx.direction.get().name();

    let alphabet_text = move || {
        let size = ctx.transcoder.with_value(|t| t.table().len());
        format!("{} symbols", size)
    };

    view! {
        <footer class="status-bar">
            <span class="direction">{direction_text}</span>
            <span class="alphabet">{alphabet_text}</span>
            <span class="version">"Morse Translator v0.1.0"</span>
        </footer>
    }
}

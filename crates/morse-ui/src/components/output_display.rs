//! Output Display Component.
//!
//! Read-only multi-line area showing the last translation verbatim.

use leptos::*;

/// Output display component.
#[component]
pub fn OutputDisplay(
    /// Signal containing the translation result
    text: ReadSignal<String>,
    /// Visible rows
    #[prop(default = 10)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="output-container">
            <textarea
                class="output-text"
                rows=rows
                readonly=true
                prop:value=move || text.get()
            />
        </div>
    }
}

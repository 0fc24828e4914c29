//! Direction Selector Component.
//!
//! Mutually exclusive Encode/Decode radio buttons.

use leptos::*;
use morse_core::Direction;

/// Direction selector component.
#[component]
pub fn DirectionSelector(
    /// Current direction
    direction: ReadSignal<Direction>,
    /// Callback when direction changes
    on_change: Callback<Direction>,
) -> impl IntoView {
    view! {
        <fieldset class="direction-selector">
            {Direction::all()
                .iter()
                .map(|&d| {
                    let is_selected = move || direction.get() == d;
                    view! {
                        <label class="direction-option" class:selected=is_selected>
                            <input
                                type="radio"
                                name="direction"
                                value=d.name()
                                prop:checked=is_selected
                                on:change=move |_| on_change.call(d)
                            />
                            {d.name()}
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

//! Remove Button Component
//!
//! Inline remove confirmation for groups, tasks and materials.

use leptos::prelude::*;

/// Remove button with a confirm step
///
/// Shows the label initially. When clicked, shows "Remove?" with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - Text of the initial button (e.g., "Remove Group")
/// * `on_confirm` - Callback to execute when user confirms removal
#[component]
pub fn RemoveButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class="remove-btn"
                on:click=move |_| set_confirming.set(true)
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="remove-confirm">
                <span class="remove-confirm-text">"Remove?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| set_confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

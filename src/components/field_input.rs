//! Field Inputs
//!
//! Labelled text/number inputs with the validation message rendered beneath.
//!
//! Inputs are uncontrolled: they start from the draft's value and report every
//! change back, so typing never re-renders the input itself.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use quotation_core::FieldPath;

use crate::store::{FormStateStoreFields, FormStore};

/// Message for the field at `path`, tracking both the errors and the position
pub fn field_error(
    store: FormStore,
    path: impl Fn() -> Option<FieldPath> + Send + Sync + 'static,
) -> Signal<Option<String>> {
    Signal::derive(move || {
        let path = path()?;
        store.errors().read().message_for(&path).map(str::to_string)
    })
}

fn input_class(invalid: bool) -> &'static str {
    if invalid { "field-input invalid" } else { "field-input" }
}

/// Text input (names, descriptions)
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] initial: String,
    error: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <input
                type="text"
                class=move || input_class(error.get().is_some())
                prop:value=initial
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}

/// Number input (quantities, rates, discount)
///
/// Blank or malformed input is reported as NaN, which validation treats as missing.
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    initial: f64,
    #[prop(into)] step: String,
    error: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<f64>,
) -> impl IntoView {
    let initial = if initial.is_finite() { initial.to_string() } else { String::new() };

    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <input
                type="number"
                step=step
                class=move || input_class(error.get().is_some())
                prop:value=initial
                on:input=move |ev| {
                    let value = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                        .map(|input| input.value_as_number())
                        .unwrap_or(f64::NAN);
                    on_change.run(value);
                }
            />
            {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}

//! Quotation Form App
//!
//! Page shell: header with "Add Group", the form, and the totals of the last
//! accepted submission.

use leptos::prelude::*;
use reactive_stores::Store;

use quotation_core::FormSettings;

use crate::components::{QuotationForm, TotalsSummary};
use crate::store::{store_add_group, FormState};

#[component]
pub fn App(settings: FormSettings) -> impl IntoView {
    let store = Store::new(FormState::default());

    // Provide context to all children
    provide_context(store);
    provide_context(settings);

    view! {
        <div class="container">
            <div class="quotation-card">
                <div class="form-header">
                    <h1>"Project Form"</h1>
                    <button
                        type="button"
                        class="add-btn"
                        on:click=move |_| store_add_group(&store)
                    >
                        "Add Group"
                    </button>
                </div>

                <QuotationForm />
            </div>

            <TotalsSummary />
        </div>
    }
}

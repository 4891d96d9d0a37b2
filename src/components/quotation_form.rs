//! Quotation Form Component
//!
//! The `<form>` element: every group card plus the submit button.

use leptos::prelude::*;

use quotation_core::LogSink;

use crate::components::GroupCard;
use crate::store::{store_submit, use_form_store, FormStateStoreFields};

#[component]
pub fn QuotationForm() -> impl IntoView {
    let store = use_form_store();

    // Only changes when groups are added or removed
    let group_ids = Memo::new(move |_| store.form().read().groups.iter().map(|g| g.id).collect::<Vec<_>>());
    let error_count = Memo::new(move |_| store.errors().read().len());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit(&store, &mut LogSink);
    };

    view! {
        <form class="quotation-form" on:submit=on_submit>
            <For
                each=move || group_ids.get()
                key=|id| *id
                children=move |group_id| view! { <GroupCard group_id=group_id /> }
            />

            <Show when=move || { error_count.get() > 0 }>
                <p class="form-error">
                    {move || format!("{} field(s) need attention", error_count.get())}
                </p>
            </Show>

            <button type="submit" class="submit-btn">"Submit"</button>
        </form>
    }
}

//! Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! goes through a quotation-core reducer and swaps the whole form in.

use leptos::logging::log;
use leptos::prelude::*;
use reactive_stores::Store;

use quotation_core::editor::{self, FieldEdit, RowRef};
use quotation_core::{Quotation, SubmissionSink, SubmitError, ValidationErrors};

/// Form state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    /// Draft being edited (derived totals stale)
    pub form: Quotation,
    /// Failures from the last submission attempt
    pub errors: ValidationErrors,
    /// Enriched quotation from the last successful submission
    pub submitted: Option<Quotation>,
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a reducer that adds or removes rows.
///
/// Error paths are positional, so stale errors are dropped.
fn store_restructure(store: &FormStore, reducer: impl FnOnce(&Quotation) -> Quotation) {
    let next = reducer(&store.form().read());
    *store.form().write() = next;
    *store.errors().write() = ValidationErrors::default();
}

pub fn store_add_group(store: &FormStore) {
    store_restructure(store, editor::add_group);
}

pub fn store_remove_group(store: &FormStore, group_id: u32) {
    store_restructure(store, |form| editor::remove_group(form, group_id));
}

pub fn store_add_task(store: &FormStore, group_id: u32) {
    store_restructure(store, |form| editor::add_task(form, group_id));
}

pub fn store_remove_task(store: &FormStore, group_id: u32, task_id: u32) {
    store_restructure(store, |form| editor::remove_task(form, group_id, task_id));
}

pub fn store_add_material(store: &FormStore, group_id: u32, task_id: u32) {
    store_restructure(store, |form| editor::add_material(form, group_id, task_id));
}

pub fn store_remove_material(store: &FormStore, group_id: u32, task_id: u32, material_id: u32) {
    store_restructure(store, |form| editor::remove_material(form, group_id, task_id, material_id));
}

/// Write one leaf field of the draft
pub fn store_set_field(store: &FormStore, row: RowRef, edit: FieldEdit) {
    let next = editor::set_field(&store.form().read(), row, edit);
    *store.form().write() = next;
}

/// Validate, compute totals and hand the result to `sink`.
///
/// Validation failures land in `errors`; the draft itself is never replaced.
pub fn store_submit(store: &FormStore, sink: &mut dyn SubmissionSink) {
    let result = quotation_core::submit(&store.form().read(), sink);
    match result {
        Ok(enriched) => {
            log!("[FORM] Submitted {} group(s)", enriched.groups.len());
            *store.errors().write() = ValidationErrors::default();
            *store.submitted().write() = Some(enriched);
        }
        Err(SubmitError::Invalid(errors)) => {
            log!("[FORM] Submission blocked: {}", errors);
            *store.errors().write() = errors;
        }
        Err(SubmitError::Sink(e)) => {
            leptos::logging::error!("[FORM] Sink failed: {}", e);
        }
    }
}

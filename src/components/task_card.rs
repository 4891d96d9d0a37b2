//! Task Card Component
//!
//! One task of a group: its own fields plus the materials list.

use leptos::prelude::*;

use quotation_core::editor::{self, FieldEdit, RowRef};
use quotation_core::{FieldName, FieldPath, FormSettings};

use crate::components::field_input::{field_error, NumberField, TextField};
use crate::components::{MaterialRow, RemoveButton};
use crate::store::{
    store_add_material, store_remove_task, store_set_field, use_form_store, FormStateStoreFields,
};

#[component]
pub fn TaskCard(group_id: u32, task_id: u32) -> impl IntoView {
    let store = use_form_store();
    let settings = expect_context::<FormSettings>();
    let row = RowRef::Task { group: group_id, task: task_id };

    let position = Memo::new(move |_| {
        let form = store.form().read();
        let g = form.groups.iter().position(|g| g.id == group_id)?;
        let t = form.groups[g].tasks.iter().position(|t| t.id == task_id)?;
        Some((g, t))
    });
    let path = move |field: FieldName| move || position.get().map(|(g, t)| FieldPath::task(g, t, field));
    let can_remove = Memo::new(move |_| editor::can_remove_task(&store.form().read(), group_id));
    let material_ids = Memo::new(move |_| {
        store
            .form()
            .read()
            .task(group_id, task_id)
            .map(|task| task.materials.iter().map(|m| m.id).collect::<Vec<_>>())
            .unwrap_or_default()
    });

    let (name, description, quantity, rate) = store
        .form()
        .read_untracked()
        .task(group_id, task_id)
        .map(|t| (t.name.clone(), t.description.clone(), t.quantity, t.rate))
        .unwrap_or_default();

    view! {
        <div class="task-card">
            <div class="row-header">
                <h4>{move || format!("Task {}", position.get().map(|(_, t)| t + 1).unwrap_or_default())}</h4>
                <Show when=move || can_remove.get()>
                    <RemoveButton
                        label="Remove Task"
                        on_confirm=move |_: ()| store_remove_task(&store, group_id, task_id)
                    />
                </Show>
            </div>

            <TextField
                label="Task Name"
                initial=name
                error=field_error(store, path(FieldName::Name))
                on_change=move |value: String| store_set_field(&store, row, FieldEdit::Name(value))
            />
            <TextField
                label="Description"
                initial=description
                error=field_error(store, path(FieldName::Description))
                on_change=move |value: String| store_set_field(&store, row, FieldEdit::Description(value))
            />
            <NumberField
                label="Quantity"
                initial=quantity
                step=settings.quantity_step.clone()
                error=field_error(store, path(FieldName::Quantity))
                on_change=move |value: f64| store_set_field(&store, row, FieldEdit::Quantity(value))
            />
            <NumberField
                label="Rate"
                initial=rate
                step=settings.rate_step.clone()
                error=field_error(store, path(FieldName::Rate))
                on_change=move |value: f64| store_set_field(&store, row, FieldEdit::Rate(value))
            />

            <div class="materials-section">
                <div class="row-header">
                    <h4>"Materials"</h4>
                    <button
                        type="button"
                        class="add-btn"
                        on:click=move |_| store_add_material(&store, group_id, task_id)
                    >
                        "+ Add Material"
                    </button>
                </div>
                <For
                    each=move || material_ids.get()
                    key=|id| *id
                    children=move |material_id| view! {
                        <MaterialRow group_id=group_id task_id=task_id material_id=material_id />
                    }
                />
            </div>
        </div>
    }
}

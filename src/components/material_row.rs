//! Material Row Component
//!
//! Name, quantity and rate inputs for one material of a task.

use leptos::prelude::*;

use quotation_core::editor::{self, FieldEdit, RowRef};
use quotation_core::{FieldName, FieldPath, FormSettings};

use crate::components::field_input::{field_error, NumberField, TextField};
use crate::components::RemoveButton;
use crate::store::{store_remove_material, store_set_field, use_form_store, FormStateStoreFields};

#[component]
pub fn MaterialRow(group_id: u32, task_id: u32, material_id: u32) -> impl IntoView {
    let store = use_form_store();
    let settings = expect_context::<FormSettings>();
    let row = RowRef::Material { group: group_id, task: task_id, material: material_id };

    // (group, task, material) positions for error paths
    let position = Memo::new(move |_| {
        let form = store.form().read();
        let g = form.groups.iter().position(|g| g.id == group_id)?;
        let t = form.groups[g].tasks.iter().position(|t| t.id == task_id)?;
        let m = form.groups[g].tasks[t].materials.iter().position(|m| m.id == material_id)?;
        Some((g, t, m))
    });
    let path = move |field: FieldName| move || position.get().map(|(g, t, m)| FieldPath::material(g, t, m, field));
    let can_remove = Memo::new(move |_| editor::can_remove_material(&store.form().read(), group_id, task_id));

    let (name, quantity, rate) = store
        .form()
        .read_untracked()
        .task(group_id, task_id)
        .and_then(|task| task.material(material_id))
        .map(|m| (m.name.clone(), m.quantity, m.rate))
        .unwrap_or_default();

    view! {
        <div class="material-row">
            <TextField
                label="Material Name"
                initial=name
                error=field_error(store, path(FieldName::Name))
                on_change=move |value: String| store_set_field(&store, row, FieldEdit::Name(value))
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
            <Show when=move || can_remove.get()>
                <RemoveButton
                    label="Remove Material"
                    on_confirm=move |_: ()| store_remove_material(&store, group_id, task_id, material_id)
                />
            </Show>
        </div>
    }
}

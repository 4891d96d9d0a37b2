//! Group Card Component
//!
//! One quotation group: name, tasks list and discount.

use leptos::prelude::*;

use quotation_core::editor::{self, FieldEdit, RowRef};
use quotation_core::{FieldName, FieldPath, FormSettings};

use crate::components::field_input::{field_error, NumberField, TextField};
use crate::components::{RemoveButton, TaskCard};
use crate::store::{
    store_add_task, store_remove_group, store_set_field, use_form_store, FormStateStoreFields,
};

#[component]
pub fn GroupCard(group_id: u32) -> impl IntoView {
    let store = use_form_store();
    let settings = expect_context::<FormSettings>();
    let row = RowRef::Group { group: group_id };

    let index = Memo::new(move |_| store.form().read().groups.iter().position(|g| g.id == group_id));
    let path = move |field: FieldName| move || index.get().map(|g| FieldPath::group(g, field));
    let can_remove = Memo::new(move |_| editor::can_remove_group(&store.form().read()));
    let task_ids = Memo::new(move |_| {
        store
            .form()
            .read()
            .group(group_id)
            .map(|group| group.tasks.iter().map(|t| t.id).collect::<Vec<_>>())
            .unwrap_or_default()
    });

    let (name, discount) = store
        .form()
        .read_untracked()
        .group(group_id)
        .map(|g| (g.name.clone(), g.discount))
        .unwrap_or_default();

    view! {
        <div class="group-card">
            <div class="row-header">
                <h3>{move || format!("Group {}", index.get().map(|g| g + 1).unwrap_or_default())}</h3>
                <Show when=move || can_remove.get()>
                    <RemoveButton
                        label="Remove Group"
                        on_confirm=move |_: ()| store_remove_group(&store, group_id)
                    />
                </Show>
            </div>

            <TextField
                label="Group Name"
                initial=name
                error=field_error(store, path(FieldName::Name))
                on_change=move |value: String| store_set_field(&store, row, FieldEdit::Name(value))
            />

            // Tasks Section
            <div class="tasks-section">
                <div class="row-header">
                    <h3>"Tasks"</h3>
                    <button
                        type="button"
                        class="add-btn"
                        on:click=move |_| store_add_task(&store, group_id)
                    >
                        "+ Add Task"
                    </button>
                </div>
                <For
                    each=move || task_ids.get()
                    key=|id| *id
                    children=move |task_id| view! { <TaskCard group_id=group_id task_id=task_id /> }
                />
            </div>

            <NumberField
                label="Discount"
                initial=discount
                step=settings.rate_step.clone()
                error=field_error(store, path(FieldName::Discount))
                on_change=move |value: f64| store_set_field(&store, row, FieldEdit::Discount(value))
            />
        </div>
    }
}

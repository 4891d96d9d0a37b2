//! Nested Collection Editor
//!
//! Copy-on-write reducers over the quotation tree. Every operation takes the
//! current form by reference and returns a fresh one; the caller swaps it in
//! wholesale so the view re-renders.
//!
//! Removing the last remaining sibling and addressing unknown ids are no-ops.

use log::debug;

use crate::domain::{next_id, without, Group, Material, Quotation, Task};

// ========================
// Row Addressing
// ========================

/// Identifies one row by the ids along its path.
///
/// Task ids are only unique inside their group, so a task is always addressed
/// together with its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowRef {
    Group { group: u32 },
    Task { group: u32, task: u32 },
    Material { group: u32, task: u32, material: u32 },
}

/// A new value for one leaf field of a row
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Description(String),
    Quantity(f64),
    Rate(f64),
    Discount(f64),
}

fn group_mut(form: &mut Quotation, group_id: u32) -> Option<&mut Group> {
    form.groups.iter_mut().find(|g| g.id == group_id)
}

fn task_mut(form: &mut Quotation, group_id: u32, task_id: u32) -> Option<&mut Task> {
    group_mut(form, group_id)?.tasks.iter_mut().find(|t| t.id == task_id)
}

fn material_mut(
    form: &mut Quotation,
    group_id: u32,
    task_id: u32,
    material_id: u32,
) -> Option<&mut Material> {
    task_mut(form, group_id, task_id)?
        .materials
        .iter_mut()
        .find(|m| m.id == material_id)
}

// ========================
// Groups
// ========================

/// Append a blank group (with one blank task and material)
pub fn add_group(form: &Quotation) -> Quotation {
    let mut next = form.clone();
    let id = next_id(&next.groups);
    next.groups.push(Group::new(id));
    debug!("add_group: id={}", id);
    next
}

pub fn can_remove_group(form: &Quotation) -> bool {
    form.groups.len() > 1
}

/// Drop a group by id; the last group cannot be removed
pub fn remove_group(form: &Quotation, group_id: u32) -> Quotation {
    match without(&form.groups, group_id) {
        Some(groups) => {
            debug!("remove_group: id={}", group_id);
            Quotation { groups }
        }
        None => form.clone(),
    }
}

// ========================
// Tasks
// ========================

/// Append a blank task (with one blank material) to a group
pub fn add_task(form: &Quotation, group_id: u32) -> Quotation {
    let mut next = form.clone();
    if let Some(group) = group_mut(&mut next, group_id) {
        let id = next_id(&group.tasks);
        group.tasks.push(Task::new(id));
        debug!("add_task: group={} id={}", group_id, id);
    }
    next
}

pub fn can_remove_task(form: &Quotation, group_id: u32) -> bool {
    form.group(group_id).is_some_and(|g| g.tasks.len() > 1)
}

/// Drop a task from its group; a group always keeps one task
pub fn remove_task(form: &Quotation, group_id: u32, task_id: u32) -> Quotation {
    let mut next = form.clone();
    if let Some(group) = group_mut(&mut next, group_id) {
        if let Some(tasks) = without(&group.tasks, task_id) {
            group.tasks = tasks;
            debug!("remove_task: group={} id={}", group_id, task_id);
        }
    }
    next
}

// ========================
// Materials
// ========================

/// Append a blank material to the task identified by (group, task)
pub fn add_material(form: &Quotation, group_id: u32, task_id: u32) -> Quotation {
    let mut next = form.clone();
    if let Some(task) = task_mut(&mut next, group_id, task_id) {
        let id = next_id(&task.materials);
        task.materials.push(Material::new(id));
        debug!("add_material: group={} task={} id={}", group_id, task_id, id);
    }
    next
}

pub fn can_remove_material(form: &Quotation, group_id: u32, task_id: u32) -> bool {
    form.task(group_id, task_id).is_some_and(|t| t.materials.len() > 1)
}

/// Drop a material from its task; a task always keeps one material
pub fn remove_material(form: &Quotation, group_id: u32, task_id: u32, material_id: u32) -> Quotation {
    let mut next = form.clone();
    if let Some(task) = task_mut(&mut next, group_id, task_id) {
        if let Some(materials) = without(&task.materials, material_id) {
            task.materials = materials;
            debug!("remove_material: group={} task={} id={}", group_id, task_id, material_id);
        }
    }
    next
}

// ========================
// Leaf Fields
// ========================

/// Write one leaf field. Edits that don't apply to the row kind are ignored.
pub fn set_field(form: &Quotation, row: RowRef, edit: FieldEdit) -> Quotation {
    let mut next = form.clone();
    let applied = match row {
        RowRef::Group { group } => group_mut(&mut next, group).is_some_and(|g| match edit {
            FieldEdit::Name(name) => { g.name = name; true }
            FieldEdit::Discount(value) => { g.discount = value; true }
            _ => false,
        }),
        RowRef::Task { group, task } => task_mut(&mut next, group, task).is_some_and(|t| match edit {
            FieldEdit::Name(name) => { t.name = name; true }
            FieldEdit::Description(text) => { t.description = text; true }
            FieldEdit::Quantity(value) => { t.quantity = value; true }
            FieldEdit::Rate(value) => { t.rate = value; true }
            FieldEdit::Discount(_) => false,
        }),
        RowRef::Material { group, task, material } => {
            material_mut(&mut next, group, task, material).is_some_and(|m| match edit {
                FieldEdit::Name(name) => { m.name = name; true }
                FieldEdit::Quantity(value) => { m.quantity = value; true }
                FieldEdit::Rate(value) => { m.rate = value; true }
                _ => false,
            })
        }
    };
    if !applied {
        debug!("set_field: ignored edit on {:?}", row);
    }
    next
}

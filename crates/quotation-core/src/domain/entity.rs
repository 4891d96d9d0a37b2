//! Domain Layer - Core Entity Trait
//!
//! Every row of the quotation (group, task, material) carries an id that is
//! unique among its siblings only.

/// Core trait for all quotation rows
pub trait Entity: Clone {
    /// Returns the row's identifier within its parent collection
    fn id(&self) -> u32;
}

/// Next id for a sibling collection: max existing id + 1 (1 for an empty one)
pub fn next_id<T: Entity>(siblings: &[T]) -> u32 {
    siblings.iter().map(Entity::id).max().unwrap_or(0) + 1
}

/// Remove the row with `id`, unless it is the last remaining sibling.
///
/// Returns `None` when nothing changed.
pub(crate) fn without<T: Entity>(siblings: &[T], id: u32) -> Option<Vec<T>> {
    if siblings.len() <= 1 || !siblings.iter().any(|row| row.id() == id) {
        return None;
    }
    Some(siblings.iter().filter(|row| row.id() != id).cloned().collect())
}

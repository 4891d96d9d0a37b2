//! Quotation Root
//!
//! The whole form: an ordered, never-empty sequence of groups.

use serde::{Deserialize, Serialize};
use super::group::Group;
use super::task::Task;

/// Root of the quotation tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub groups: Vec<Group>,
}

impl Quotation {
    /// Initial form: one group, one task, one material, all zeroed
    pub fn new() -> Self {
        Self {
            groups: vec![Group::new(1)],
        }
    }

    pub fn group(&self, group_id: u32) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Task lookup scoped to its group (task ids repeat across groups)
    pub fn task(&self, group_id: u32, task_id: u32) -> Option<&Task> {
        self.group(group_id).and_then(|g| g.task(task_id))
    }
}

impl Default for Quotation {
    fn default() -> Self {
        Self::new()
    }
}

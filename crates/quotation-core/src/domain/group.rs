//! Group Entity
//!
//! Top-level quotation section with its own discount and aggregate totals.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::task::Task;

/// A quotation section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique within the form
    pub id: u32,
    pub name: String,
    /// Never empty
    pub tasks: Vec<Task>,
    /// Derived: sum of task totals
    #[serde(default)]
    pub net_total: f64,
    pub discount: f64,
    /// Derived: net_total - discount
    #[serde(default)]
    pub grand_total: f64,
}

impl Group {
    /// Blank group holding one blank task (id 1)
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            tasks: vec![Task::new(1)],
            net_total: 0.0,
            discount: 0.0,
            grand_total: 0.0,
        }
    }

    pub fn task(&self, task_id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }
}

impl Entity for Group {
    fn id(&self) -> u32 {
        self.id
    }
}

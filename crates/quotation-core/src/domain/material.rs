//! Material Entity
//!
//! A billable sub-item within a task.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A material line (quantity × rate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique within its task
    pub id: u32,
    pub name: String,
    pub quantity: f64,
    pub rate: f64,
    /// Derived: quantity × rate (only valid after recomputation)
    #[serde(default)]
    pub total: f64,
}

impl Material {
    /// Blank material with every number zeroed
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            quantity: 0.0,
            rate: 0.0,
            total: 0.0,
        }
    }
}

impl Entity for Material {
    fn id(&self) -> u32 {
        self.id
    }
}

//! Task Entity
//!
//! A billable line item within a group, itself decomposed into materials.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::material::Material;

/// A task line with its own materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique within its group
    pub id: u32,
    pub name: String,
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
    /// Never empty
    pub materials: Vec<Material>,
    /// Derived: quantity × rate
    #[serde(default)]
    pub total: f64,
    /// Derived: sum of material totals
    #[serde(default)]
    pub material_total: f64,
    /// Derived: total + material_total
    #[serde(default)]
    pub task_total: f64,
}

impl Task {
    /// Blank task holding one blank material (id 1)
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            quantity: 0.0,
            rate: 0.0,
            materials: vec![Material::new(1)],
            total: 0.0,
            material_total: 0.0,
            task_total: 0.0,
        }
    }

    pub fn material(&self, material_id: u32) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == material_id)
    }
}

impl Entity for Task {
    fn id(&self) -> u32 {
        self.id
    }
}

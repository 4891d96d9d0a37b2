//! Domain Layer
//!
//! Quotation entities and the id rules shared by every level.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod material;
mod task;
mod group;
mod quotation;

pub use entity::{Entity, next_id};
pub(crate) use entity::without;
pub use material::Material;
pub use task::Task;
pub use group::Group;
pub use quotation::Quotation;

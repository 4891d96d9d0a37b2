//! UI Components
//!
//! Leptos components of the quotation form.

mod field_input;
mod remove_button;
mod material_row;
mod task_card;
mod group_card;
mod quotation_form;
mod totals_summary;

pub use remove_button::RemoveButton;
pub use material_row::MaterialRow;
pub use task_card::TaskCard;
pub use group_card::GroupCard;
pub use quotation_form::QuotationForm;
pub use totals_summary::TotalsSummary;

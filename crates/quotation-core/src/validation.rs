//! Field Validation
//!
//! Checks the whole quotation before submission and reports every failing
//! field as a (path, message) pair, in document order.
//!
//! Paths are positional (`groups.0.tasks.1.rate`) so the view can put each
//! message under the input it belongs to.

use std::fmt;

use thiserror::Error;

use crate::domain::Quotation;

/// Leaf attribute a validation message is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Description,
    Quantity,
    Rate,
    Discount,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Description => "description",
            FieldName::Quantity => "quantity",
            FieldName::Rate => "rate",
            FieldName::Discount => "discount",
        }
    }
}

/// Positional path of a leaf field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub group: usize,
    pub task: Option<usize>,
    pub material: Option<usize>,
    pub field: FieldName,
}

impl FieldPath {
    pub fn group(group: usize, field: FieldName) -> Self {
        Self { group, task: None, material: None, field }
    }

    pub fn task(group: usize, task: usize, field: FieldName) -> Self {
        Self { group, task: Some(task), material: None, field }
    }

    pub fn material(group: usize, task: usize, material: usize, field: FieldName) -> Self {
        Self { group, task: Some(task), material: Some(material), field }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "groups.{}", self.group)?;
        if let Some(task) = self.task {
            write!(f, ".tasks.{}", task)?;
        }
        if let Some(material) = self.material {
            write!(f, ".materials.{}", material)?;
        }
        write!(f, ".{}", self.field.as_str())
    }
}

/// One failing field
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {message}")]
pub struct FieldError {
    pub path: FieldPath,
    pub message: String,
}

/// Every failing field of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message for the input at `path`, if it failed
    pub fn message_for(&self, path: &FieldPath) -> Option<&str> {
        self.0
            .iter()
            .find(|e| &e.path == path)
            .map(|e| e.message.as_str())
    }

    fn push(&mut self, path: FieldPath, message: impl Into<String>) {
        self.0.push(FieldError { path, message: message.into() });
    }

    fn require_text(&mut self, path: FieldPath, value: &str, label: &str) {
        if value.is_empty() {
            self.push(path, format!("{} is required", label));
        }
    }

    /// Non-finite values stand for blank or unparsable input
    fn require_positive(&mut self, path: FieldPath, value: f64, label: &str) {
        if !value.is_finite() {
            self.push(path, format!("{} is required", label));
        } else if value <= 0.0 {
            self.push(path, format!("{} must be a positive number", label));
        }
    }
}

/// Validate every group, task and material of the form
pub fn validate(form: &Quotation) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for (g, group) in form.groups.iter().enumerate() {
        errors.require_text(FieldPath::group(g, FieldName::Name), &group.name, "Group name");
        errors.require_positive(FieldPath::group(g, FieldName::Discount), group.discount, "Discount");

        for (t, task) in group.tasks.iter().enumerate() {
            errors.require_text(FieldPath::task(g, t, FieldName::Name), &task.name, "Task name");
            errors.require_text(
                FieldPath::task(g, t, FieldName::Description),
                &task.description,
                "Task description",
            );
            errors.require_positive(FieldPath::task(g, t, FieldName::Quantity), task.quantity, "Quantity");
            errors.require_positive(FieldPath::task(g, t, FieldName::Rate), task.rate, "Rate");

            for (m, material) in task.materials.iter().enumerate() {
                errors.require_text(
                    FieldPath::material(g, t, m, FieldName::Name),
                    &material.name,
                    "Material name",
                );
                errors.require_positive(
                    FieldPath::material(g, t, m, FieldName::Quantity),
                    material.quantity,
                    "Material quantity",
                );
                errors.require_positive(
                    FieldPath::material(g, t, m, FieldName::Rate),
                    material.rate,
                    "Material rate",
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Group, Material, Task};

    fn make_valid_form() -> Quotation {
        let mut material = Material::new(1);
        material.name = "Cement".to_string();
        material.quantity = 3.0;
        material.rate = 10.0;

        let mut task = Task::new(1);
        task.name = "Excavation".to_string();
        task.description = "Dig the trench".to_string();
        task.quantity = 2.0;
        task.rate = 100.0;
        task.materials = vec![material];

        let mut group = Group::new(1);
        group.name = "Foundation".to_string();
        group.discount = 50.0;
        group.tasks = vec![task];

        Quotation { groups: vec![group] }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate(&make_valid_form()).is_ok());
    }

    #[test]
    fn test_blank_form_reports_every_field() {
        let errors = validate(&Quotation::new()).unwrap_err();
        // 2 group + 4 task + 3 material fields
        assert_eq!(errors.len(), 9);
        assert_eq!(
            errors.message_for(&FieldPath::group(0, FieldName::Discount)),
            Some("Discount must be a positive number")
        );
        assert_eq!(
            errors.message_for(&FieldPath::material(0, 0, 0, FieldName::Name)),
            Some("Material name is required")
        );
    }

    #[test]
    fn test_whitespace_name_counts_as_present() {
        let mut form = make_valid_form();
        form.groups[0].tasks[0].name = "   ".to_string();
        assert!(validate(&form).is_ok());

        form.groups[0].tasks[0].name.clear();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.message_for(&FieldPath::task(0, 0, FieldName::Name)),
            Some("Task name is required")
        );
    }

    #[test]
    fn test_missing_and_negative_numbers() {
        let mut form = make_valid_form();
        form.groups[0].tasks[0].rate = f64::NAN;
        form.groups[0].tasks[0].materials[0].quantity = -1.0;
        let errors = validate(&form).unwrap_err();

        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "groups.0.tasks.0.rate: Rate is required".to_string(),
                "groups.0.tasks.0.materials.0.quantity: Material quantity must be a positive number"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_paths_follow_position() {
        let mut form = make_valid_form();
        let mut second = form.groups[0].clone();
        second.id = 2;
        second.name.clear();
        form.groups.push(second);

        let errors = validate(&form).unwrap_err();
        let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["groups.1.name".to_string()]);
    }
}

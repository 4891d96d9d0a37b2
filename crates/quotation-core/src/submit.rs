//! Form Submission
//!
//! validate -> compute totals -> hand off to the sink.

use log::{info, warn};
use thiserror::Error;

use crate::domain::Quotation;
use crate::sink::{SinkError, SubmissionSink};
use crate::totals::compute_totals;
use crate::validation::{validate, ValidationErrors};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("quotation is invalid: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Submit the form. The sink is only reached when validation passes.
///
/// Returns the enriched quotation on success.
pub fn submit(form: &Quotation, sink: &mut dyn SubmissionSink) -> Result<Quotation, SubmitError> {
    if let Err(errors) = validate(form) {
        warn!("submission blocked: {}", errors);
        return Err(errors.into());
    }
    let enriched = compute_totals(form);
    sink.submit(&enriched)?;
    info!("quotation submitted: {} group(s)", enriched.groups.len());
    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{self, FieldEdit, RowRef};
    use crate::sink::MemorySink;

    struct RejectingSink;

    impl SubmissionSink for RejectingSink {
        fn submit(&mut self, _quotation: &Quotation) -> Result<(), SinkError> {
            Err(SinkError::Rejected("quota exceeded".to_string()))
        }
    }

    fn make_valid_form() -> Quotation {
        let group = RowRef::Group { group: 1 };
        let task = RowRef::Task { group: 1, task: 1 };
        let material = RowRef::Material { group: 1, task: 1, material: 1 };
        [
            (group, FieldEdit::Name("Foundation".into())),
            (group, FieldEdit::Discount(50.0)),
            (task, FieldEdit::Name("Excavation".into())),
            (task, FieldEdit::Description("Dig".into())),
            (task, FieldEdit::Quantity(2.0)),
            (task, FieldEdit::Rate(100.0)),
            (material, FieldEdit::Name("Cement".into())),
            (material, FieldEdit::Quantity(3.0)),
            (material, FieldEdit::Rate(10.0)),
        ]
        .into_iter()
        .fold(Quotation::new(), |form, (row, edit)| editor::set_field(&form, row, edit))
    }

    #[test]
    fn test_sink_failure_propagates() {
        match submit(&make_valid_form(), &mut RejectingSink) {
            Err(SubmitError::Sink(SinkError::Rejected(reason))) => assert_eq!(reason, "quota exceeded"),
            other => panic!("expected sink failure, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_form_skips_sink() {
        let mut sink = MemorySink::default();
        let result = submit(&Quotation::new(), &mut sink);
        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(sink.received.is_empty());
    }
}

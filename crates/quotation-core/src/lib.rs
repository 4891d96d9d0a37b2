//! Quotation Core
//!
//! UI-independent layer of the quotation form:
//! - domain: groups, tasks, materials and their id rules
//! - editor: copy-on-write add/remove/edit reducers
//! - validation: required-field checks with positional paths
//! - totals: bottom-up derived totals
//! - sink / submit: hand-off of the enriched quotation
//! - settings: presentation defaults

pub mod domain;
pub mod editor;
pub mod validation;
pub mod totals;
pub mod sink;
pub mod submit;
pub mod settings;


pub use domain::{Entity, Group, Material, Quotation, Task};
pub use editor::{FieldEdit, RowRef};
pub use settings::FormSettings;
pub use sink::{LogSink, MemorySink, SinkError, SubmissionSink};
pub use submit::{submit, SubmitError};
pub use validation::{validate, FieldError, FieldName, FieldPath, ValidationErrors};

//! Submission Sink
//!
//! Receives the enriched quotation once it has passed validation. The shipped
//! sink only writes it to the log; anything that persists or sends it plugs in
//! behind the same trait.

use log::info;
use thiserror::Error;

use crate::domain::Quotation;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to serialize quotation: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("sink rejected quotation: {0}")]
    Rejected(String),
}

/// Receiver of submitted quotations
pub trait SubmissionSink {
    fn submit(&mut self, quotation: &Quotation) -> Result<(), SinkError>;
}

/// Writes the quotation as JSON through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, quotation: &Quotation) -> Result<(), SinkError> {
        let json = serde_json::to_string_pretty(&quotation.groups)?;
        info!("updatedGroups {}", json);
        Ok(())
    }
}

/// Keeps every submitted quotation in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub received: Vec<Quotation>,
}

impl SubmissionSink for MemorySink {
    fn submit(&mut self, quotation: &Quotation) -> Result<(), SinkError> {
        self.received.push(quotation.clone());
        Ok(())
    }
}

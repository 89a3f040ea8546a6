//! Dataset loading and result writing
//!
//! The input document carries two sequences, `agents` and `tickets`; the
//! output is an ordered list of assignment records. Both are whole-file JSON
//! operations, nothing is streamed.

pub mod error;
pub mod types;

pub use error::DatasetError;
pub use types::{Agent, AssignmentRecord, Dataset, Id, Ticket};

use std::path::Path;
use tracing::info;

impl Dataset {
    /// Load a dataset from a JSON file.
    ///
    /// Optional numeric fields default to zero; a missing required field
    /// (`agent_id`, `ticket_id`, `skills`, `title`) fails the whole load
    /// with [`DatasetError::Parse`] rather than being silently defaulted.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let dataset: Dataset =
            serde_json::from_str(&content).map_err(|e| DatasetError::Parse(e.to_string()))?;
        info!(
            agents = dataset.agents.len(),
            tickets = dataset.tickets.len(),
            path = %path.display(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

/// Write assignment records as pretty-printed JSON.
pub fn write_records(path: &Path, records: &[AssignmentRecord]) -> Result<(), DatasetError> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| DatasetError::Parse(e.to_string()))?;
    std::fs::write(path, json)?;
    info!(records = records.len(), path = %path.display(), "results written");
    Ok(())
}

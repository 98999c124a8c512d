use crate::domain::{InspectionReport, MemoryRecord};
use std::error::Error;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub trait MemoryRepository {
    // Fetches memory rows, most recent first
    fn fetch_memories(&self) -> Result<Vec<MemoryRecord>>;

    /// Fetches conversation messages, or `Ok(None)` when the backing table
    /// is absent from this database.
    fn fetch_conversations(&self) -> Result<Option<Vec<MemoryRecord>>>;

    /// Releases the database handle. Closing twice is a no-op; fetching
    /// after close is an error.
    fn close(&mut self) -> Result<()>;
}

/// Trait for writing the rendered report
/// This is a port (interface) that defines how the core communicates with output adapters
pub trait ReportWriter: Send + Sync {
    fn write(&self, report: &InspectionReport) -> Result<()>;
}

use crate::domain::InspectionReport;
use crate::ports::{MemoryRepository, ReportWriter, Result};

/// Application service for dumping an agent memory database as a text report
pub struct InspectionService {
    repository: Box<dyn MemoryRepository>,
    report_writer: Box<dyn ReportWriter>,
}

impl InspectionService {
    /// Creates a new InspectionService with the given dependencies
    pub fn new(
        repository: Box<dyn MemoryRepository>,
        report_writer: Box<dyn ReportWriter>,
    ) -> Self {
        Self {
            repository,
            report_writer,
        }
    }

    /// Runs one inspection pass: fetches both sections, writes the report,
    /// then releases the database handle.
    pub fn run_inspection(&mut self) -> Result<()> {
        let memories = self.repository.fetch_memories()?;
        let conversations = self.repository.fetch_conversations()?;
        let report = InspectionReport {
            memories,
            conversations,
        };
        self.report_writer.write(&report)?;
        self.repository.close()?;
        Ok(())
    }
}

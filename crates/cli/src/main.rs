use clap::Parser;
use memdump_core::application::InspectionService;
use memdump_core::ports::{MemoryRepository, ReportWriter};
use report_adapter::TextReportWriter;
use sqlite_adapter::SqliteMemoryRepository;

/// CLI tool to dump an agent's SQLite memory database as a readable text report
#[derive(Parser, Debug)]
#[command(name = "memdump")]
#[command(about = "Dumps agent memories and conversation messages from SQLite as a text report")]
struct Cli {
    /// Path to the agent's SQLite memory database
    #[arg(short = 'd', long = "database", default_value = ".eliza/agent.db")]
    database: String,
}

fn main() {
    let cli = Cli::parse();

    // Instantiate concrete implementations of secondary adapters
    let repository: Box<dyn MemoryRepository> = match SqliteMemoryRepository::open(&cli.database) {
        Ok(repository) => Box::new(repository),
        Err(e) => {
            eprintln!("Error opening database {}: {}", cli.database, e);
            std::process::exit(1);
        }
    };

    let report_writer: Box<dyn ReportWriter> = Box::new(
        TextReportWriter::new(cli.database.clone())
    );

    // Instantiate the core service with dependency injection
    let mut service = InspectionService::new(repository, report_writer);

    // Execute the primary port method
    if let Err(e) = service.run_inspection() {
        eprintln!("Error during inspection: {}", e);
        std::process::exit(1);
    }
}

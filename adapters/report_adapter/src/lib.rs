use memdump_core::content::{decode_content, ContentPayload};
use memdump_core::domain::{InspectionReport, MemoryRecord};
use memdump_core::ports::{ReportWriter, Result};
use memdump_core::utils::{format_epoch_millis, truncate_chars, wrap_text};
use std::io::Write;

/// Display columns available to wrapped or truncated content lines.
const CONTENT_WIDTH: usize = 75;
/// Character cap for content that does not decode as JSON.
const RAW_PREVIEW_LIMIT: usize = 200;
/// Width of the banner and record separator rules.
const RULE_WIDTH: usize = 80;

/// Text report writer adapter implementation
pub struct TextReportWriter {
    database_path: String,
}

impl TextReportWriter {
    pub fn new(database_path: String) -> Self {
        Self { database_path }
    }

    /// Renders the whole inspection report as one text document.
    pub fn format_report(&self, report: &InspectionReport) -> String {
        let mut output = String::new();

        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push_str("\nAgent Memory Database Report\n");
        output.push_str(&format!("Database: {}\n", self.database_path));
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push_str("\n\n");

        output.push_str(&format!("Total memories: {}\n", report.memories.len()));
        self.format_records("Memory", &report.memories, &mut output);

        match &report.conversations {
            Some(messages) => {
                output.push_str(&format!("\nConversation messages: {}\n", messages.len()));
                self.format_records("Message", messages, &mut output);
            }
            None => {
                output.push_str("\nNo conversation message table in this database.\n");
            }
        }

        output.push_str("\nDatabase dump complete.\n");
        output
    }

    /// Formats one section's records as numbered blocks.
    fn format_records(&self, label: &str, records: &[MemoryRecord], output: &mut String) {
        let total = records.len();
        for (idx, record) in records.iter().enumerate() {
            output.push('\n');
            output.push_str(&format!("[{}/{}] {} ID: {}\n", idx + 1, total, label, record.id));
            output.push_str(&"-".repeat(RULE_WIDTH));
            output.push('\n');

            if let Some(kind) = &record.kind {
                output.push_str(&format!("Type: {}\n", kind));
            }
            if let Some(room_id) = &record.room_id {
                output.push_str(&format!("Room ID: {}\n", room_id));
            }
            if let Some(agent_id) = &record.agent_id {
                output.push_str(&format!("Agent ID: {}\n", agent_id));
            }
            if let Some(user_id) = &record.user_id {
                output.push_str(&format!("User ID: {}\n", user_id));
            }
            output.push_str(&format!(
                "Created: {}\n",
                format_epoch_millis(record.created_at)
            ));

            self.format_content(record, output);
        }
    }

    /// Formats a record's content column; a decode failure degrades to the
    /// raw preview and never aborts the report.
    fn format_content(&self, record: &MemoryRecord, output: &mut String) {
        match decode_content(&record.content) {
            ContentPayload::Structured {
                text,
                action,
                fields,
            } => {
                if let Some(text) = &text {
                    output.push_str("Content:\n");
                    for line in wrap_text(text, CONTENT_WIDTH) {
                        output.push_str(&format!("  {}\n", line));
                    }
                }
                if let Some(action) = &action {
                    output.push_str(&format!("Action: {}\n", action));
                }
                // The structured dump appears whenever there is no text to
                // show, even alongside an action line.
                if text.is_none() && !fields.is_empty() {
                    output.push_str("Content (JSON):\n");
                    if let Ok(pretty) = serde_json::to_string_pretty(&fields) {
                        for line in pretty.lines() {
                            output.push_str(&format!(
                                "  {}\n",
                                truncate_chars(line, CONTENT_WIDTH)
                            ));
                        }
                    }
                }
            }
            ContentPayload::Raw(raw) => {
                output.push_str(&format!(
                    "Content (raw): {}\n",
                    truncate_chars(&raw, RAW_PREVIEW_LIMIT)
                ));
            }
        }
    }
}

impl ReportWriter for TextReportWriter {
    fn write(&self, report: &InspectionReport) -> Result<()> {
        let rendered = self.format_report(report);
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(rendered.as_bytes())?;
        handle.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, content: &str) -> MemoryRecord {
        MemoryRecord {
            id: id.to_string(),
            kind: Some("messages".to_string()),
            content: content.to_string(),
            room_id: Some("room-1".to_string()),
            agent_id: Some("agent-1".to_string()),
            user_id: None,
            created_at: 1_700_000_000_000,
        }
    }

    fn writer() -> TextReportWriter {
        TextReportWriter::new(".eliza/agent.db".to_string())
    }

    fn report(memories: Vec<MemoryRecord>) -> InspectionReport {
        InspectionReport {
            memories,
            conversations: None,
        }
    }

    #[test]
    fn test_format_report_zero_records_is_summary_only() {
        let rendered = writer().format_report(&report(vec![]));
        assert!(rendered.contains("Total memories: 0"));
        assert!(!rendered.contains("[1/"));
    }

    #[test]
    fn test_format_report_count_matches_blocks() {
        let rendered = writer().format_report(&report(vec![
            record("a", r#"{"text": "one"}"#),
            record("b", r#"{"text": "two"}"#),
            record("c", r#"{"text": "three"}"#),
        ]));
        assert!(rendered.contains("Total memories: 3"));
        assert_eq!(rendered.matches("] Memory ID: ").count(), 3);
        assert!(rendered.contains("[1/3] Memory ID: a"));
        assert!(rendered.contains("[3/3] Memory ID: c"));
    }

    #[test]
    fn test_format_report_record_lines() {
        let rendered = writer().format_report(&report(vec![record("a", r#"{"text": "hi"}"#)]));
        assert!(rendered.contains("Type: messages"));
        assert!(rendered.contains("Room ID: room-1"));
        assert!(rendered.contains("Agent ID: agent-1"));
        // user_id is None, so no line for it
        assert!(!rendered.contains("User ID:"));
        assert!(rendered.contains("Created: 2023-11-1"));
    }

    #[test]
    fn test_format_report_banner_names_database() {
        let rendered = writer().format_report(&report(vec![]));
        assert!(rendered.starts_with(&"=".repeat(80)));
        assert!(rendered.contains("Database: .eliza/agent.db"));
        assert!(rendered.ends_with("Database dump complete.\n"));
    }

    #[test]
    fn test_format_content_wraps_long_text() {
        let text = "Hello world, this is a fairly long line that should wrap at a defined width threshold for readability";
        let rendered =
            writer().format_report(&report(vec![record("a", &format!(r#"{{"text": "{}"}}"#, text))]));
        assert!(rendered.contains(
            "  Hello world, this is a fairly long line that should wrap at a defined width \n"
        ));
        assert!(rendered.contains("  threshold for readability \n"));
    }

    #[test]
    fn test_format_content_round_trip_under_normalization() {
        let text = "Hello world, this is a fairly long line that should wrap at a defined width threshold for readability";
        let rendered =
            writer().format_report(&report(vec![record("a", &format!(r#"{{"text": "{}"}}"#, text))]));
        let wrapped: Vec<&str> = rendered
            .lines()
            .filter(|line| line.starts_with("  "))
            .collect();
        let normalized = wrapped
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(normalized, text);
    }

    #[test]
    fn test_format_content_action_line() {
        let rendered = writer().format_report(&report(vec![record(
            "a",
            r#"{"text": "done", "action": "WAIT"}"#,
        )]));
        assert!(rendered.contains("Action: WAIT"));
        // text is present, so no structured dump
        assert!(!rendered.contains("Content (JSON):"));
    }

    #[test]
    fn test_format_content_json_dump_without_text() {
        let rendered =
            writer().format_report(&report(vec![record("a", r#"{"source": "discord"}"#)]));
        assert!(rendered.contains("Content (JSON):"));
        assert!(rendered.contains(r#"  "source": "discord""#));
    }

    #[test]
    fn test_format_content_json_dump_alongside_action() {
        let rendered = writer().format_report(&report(vec![record("a", r#"{"action": "WAIT"}"#)]));
        assert!(rendered.contains("Action: WAIT"));
        assert!(rendered.contains("Content (JSON):"));
    }

    #[test]
    fn test_format_content_empty_object_renders_nothing() {
        let rendered = writer().format_report(&report(vec![record("a", "{}")]));
        assert!(!rendered.contains("Content"));
    }

    #[test]
    fn test_format_content_unparsed_marker_and_literal() {
        let rendered = writer().format_report(&report(vec![record("a", "not json")]));
        assert!(rendered.contains("Content (raw): not json"));
    }

    #[test]
    fn test_format_content_raw_preview_capped_at_200_chars() {
        let rendered = writer().format_report(&report(vec![record("a", &"x".repeat(250))]));
        assert!(rendered.contains(&format!("Content (raw): {}\n", "x".repeat(200))));
        assert!(!rendered.contains(&"x".repeat(201)));
    }

    #[test]
    fn test_format_report_missing_conversation_table_note() {
        let rendered = writer().format_report(&report(vec![]));
        assert!(rendered.contains("No conversation message table in this database."));
    }

    #[test]
    fn test_format_report_conversation_section() {
        let mut message = record("msg-1", r#"{"text": "hi"}"#);
        message.kind = None;
        let rendered = writer().format_report(&InspectionReport {
            memories: vec![],
            conversations: Some(vec![message]),
        });
        assert!(rendered.contains("Conversation messages: 1"));
        assert!(rendered.contains("[1/1] Message ID: msg-1"));
        assert!(!rendered.contains("Type:"));
    }
}

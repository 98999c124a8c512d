use memdump_core::domain::MemoryRecord;
use memdump_core::ports::{MemoryRepository, Result};
use rusqlite::{Connection, Row};

// Column names follow the agent runtime's camelCase schema, so they must be
// quoted in SQL.
const MEMORY_QUERY: &str = r#"
    SELECT id, type, content, "roomId", "agentId", "userId", "createdAt"
    FROM memories
    ORDER BY "createdAt" DESC
"#;

const CONVERSATION_QUERY: &str = r#"
    SELECT id, NULL, content, "roomId", "agentId", NULL, "createdAt"
    FROM central_messages
    ORDER BY "createdAt" DESC
"#;

/// SQLite implementation of the MemoryRepository trait
pub struct SqliteMemoryRepository {
    conn: Option<Connection>,
}

impl SqliteMemoryRepository {
    /// Opens the memory database at the given path.
    pub fn open(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        Ok(Self { conn: Some(conn) })
    }

    fn connection(&self) -> Result<&Connection> {
        self.conn
            .as_ref()
            .ok_or_else(|| "database handle already closed".into())
    }

    fn table_exists(&self, name: &str) -> Result<bool> {
        let count: i64 = self.connection()?.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn fetch_records(&self, sql: &str) -> Result<Vec<MemoryRecord>> {
        let mut stmt = self.connection()?.prepare(sql)?;

        // Map rows to MemoryRecord using rusqlite's row mapping
        let records = stmt
            .query_map([], |row: &Row| {
                Ok(MemoryRecord {
                    id: row.get(0)?,
                    kind: row.get(1)?,
                    content: row.get(2)?,
                    room_id: row.get(3)?,
                    agent_id: row.get(4)?,
                    user_id: row.get(5)?,
                    created_at: row.get(6)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(records)
    }
}

impl MemoryRepository for SqliteMemoryRepository {
    fn fetch_memories(&self) -> Result<Vec<MemoryRecord>> {
        self.fetch_records(MEMORY_QUERY)
    }

    fn fetch_conversations(&self) -> Result<Option<Vec<MemoryRecord>>> {
        if !self.table_exists("central_messages")? {
            return Ok(None);
        }
        Ok(Some(self.fetch_records(CONVERSATION_QUERY)?))
    }

    fn close(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, err)| err)?;
        }
        Ok(())
    }
}

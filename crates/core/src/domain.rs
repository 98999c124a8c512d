/// One row pulled from the agent's memory database.
#[derive(Debug, Clone)]
pub struct MemoryRecord {
    pub id: String,
    /// Type tag of the row; conversation messages carry none.
    pub kind: Option<String>,
    /// Free-form content column, possibly a serialized JSON payload.
    pub content: String,
    pub room_id: Option<String>,
    pub agent_id: Option<String>,
    pub user_id: Option<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

/// Everything gathered in one inspection pass over the database.
#[derive(Debug, Clone)]
pub struct InspectionReport {
    pub memories: Vec<MemoryRecord>,
    /// `None` when the conversation message table does not exist.
    pub conversations: Option<Vec<MemoryRecord>>,
}

use serde_json::{Map, Value};

/// Result of decoding a record's content column.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPayload {
    /// Content that parsed as a JSON object.
    Structured {
        text: Option<String>,
        action: Option<String>,
        fields: Map<String, Value>,
    },
    /// Content that is not a JSON object, kept verbatim.
    Raw(String),
}

/// Decodes the content column of a record.
/// Only a JSON object counts as structured; scalars, arrays, and invalid
/// JSON all fall back to the raw string. Empty-string `text` and `action`
/// values are treated as absent.
pub fn decode_content(content: &str) -> ContentPayload {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(fields)) => {
            let text = string_field(&fields, "text");
            let action = string_field(&fields, "action");
            ContentPayload::Structured {
                text,
                action,
                fields,
            }
        }
        _ => ContentPayload::Raw(content.to_string()),
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

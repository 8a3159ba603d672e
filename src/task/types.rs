//! Task types for the conversion service.

use crate::model::Document;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-side status of a conversion task.
///
/// Transitions happen exclusively on the server: pending, then processing,
/// then completed or failed. The client only observes snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl TaskStatus {
    /// Check if no further server-side transition can occur.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }
}

/// A snapshot of a server-tracked conversion task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Opaque task handle
    pub id: String,

    /// Source URL the task converts
    pub url: String,

    /// Status at snapshot time
    pub status: TaskStatus,

    /// Converted document, present once completed
    #[serde(default)]
    pub result: Option<Document>,

    /// Server-supplied failure text, present once failed
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Accept RFC 3339 timestamps as well as the service's offset-less
/// `isoformat()` strings; anything unparseable is treated as absent.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

impl Task {
    /// Check if this snapshot is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Body of the task-creation call.
///
/// The two booleans are opaque to the client; they only steer server-side
/// behavior (cache bypass and translation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Source URL to convert
    pub url: String,

    /// Discard any cached task for this URL and reconvert
    pub force_refresh: bool,

    /// Translate the converted document to Chinese
    pub translate_to_chinese: bool,
}

impl CreateTaskRequest {
    /// Create a request with both options off except translation.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            force_refresh: false,
            translate_to_chinese: true,
        }
    }

    /// Set the force-refresh flag.
    pub fn force_refresh(mut self, on: bool) -> Self {
        self.force_refresh = on;
        self
    }

    /// Set the translation flag.
    pub fn translate(mut self, on: bool) -> Self {
        self.translate_to_chinese = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let status: TaskStatus = serde_json::from_str("\"processing\"").unwrap();
        assert_eq!(status, TaskStatus::Processing);
        assert_eq!(serde_json::to_string(&TaskStatus::Failed).unwrap(), "\"failed\"");
    }

    #[test]
    fn test_terminal_states() {
        assert!(!TaskStatus::Pending.is_terminal());
        assert!(!TaskStatus::Processing.is_terminal());
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Failed.is_terminal());
    }

    #[test]
    fn test_task_snapshot_deserializes_with_nulls() {
        let json = r#"{
            "id": "t1",
            "url": "https://example.com/a",
            "status": "pending",
            "result": null,
            "error": null,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": null
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "t1");
        assert!(task.result.is_none());
        assert!(task.created_at.is_some());
        assert!(!task.is_terminal());
    }

    #[test]
    fn test_offsetless_timestamps_are_tolerated() {
        let json = r#"{
            "id": "t2",
            "url": "https://example.com/b",
            "status": "completed",
            "created_at": "2024-05-01T10:30:00.123456",
            "updated_at": "not a date"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.created_at.is_some());
        assert!(task.updated_at.is_none());
    }

    #[test]
    fn test_request_wire_shape() {
        let request = CreateTaskRequest::new("https://example.com")
            .force_refresh(true)
            .translate(false);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"force_refresh\":true"));
        assert!(json.contains("\"translate_to_chinese\":false"));
    }
}

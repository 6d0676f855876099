//! Domain types shared by the client, the application state and the UI
//!
//! Field names follow the backend's JSON where it is consumed directly
//! (`Job`, `LogSummary`, `MutationResponse`); envelope types that only exist
//! on the wire live in `jobdash-client`.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Jobs
// ─────────────────────────────────────────────────────────────────────────────

/// A command the backend can execute on request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Backend-assigned identifier, never empty once persisted
    pub id: String,
    /// Command text
    #[serde(default)]
    pub cmd: String,
}

impl Job {
    pub fn new(id: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cmd: cmd.into(),
        }
    }
}

/// Payload of the job form
///
/// An empty `id` denotes a job that does not exist yet, so submitting the
/// draft creates it. A non-empty `id` updates the existing job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub id: String,
    pub cmd: String,
}

impl JobDraft {
    /// Draft for a new job
    pub fn new(cmd: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            cmd: cmd.into(),
        }
    }

    /// Draft pre-filled from an existing job
    pub fn edit(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            cmd: job.cmd.clone(),
        }
    }

    /// Whether submitting this draft updates an existing job
    pub fn is_update(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mutation replies
// ─────────────────────────────────────────────────────────────────────────────

/// Field-level validation failure reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name of the input field the error belongs to
    pub target: String,
    /// Human-readable error text
    pub error: String,
}

impl ValidationError {
    pub fn new(target: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            error: error.into(),
        }
    }
}

/// Application-level reply to `addJob` / `deleteJob`
///
/// `success` is reported in the body and is independent of the HTTP status:
/// a `200 OK` can still carry `success: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub msg: String,
    #[serde(
        default,
        rename = "validationError",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub validation_error: Vec<ValidationError>,
}

impl MutationResponse {
    pub fn ok(msg: impl Into<String>) -> Self {
        Self {
            success: true,
            msg: msg.into(),
            validation_error: Vec::new(),
        }
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: msg.into(),
            validation_error: Vec::new(),
        }
    }

    pub fn with_validation_error(mut self, error: ValidationError) -> Self {
        self.validation_error.push(error);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logs
// ─────────────────────────────────────────────────────────────────────────────

/// Log list row: metadata of one past job execution, without its output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogSummary {
    pub id: String,
    /// Name of the job that produced the log
    #[serde(default)]
    pub name: String,
    /// User that started the job
    #[serde(default)]
    pub user: String,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub end: Option<DateTime<Utc>>,
    /// Exit status of the job (absent while running)
    #[serde(default)]
    pub status: Option<i64>,
}

impl LogSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            user: String::new(),
            start: None,
            end: None,
            status: None,
        }
    }

    /// Wall-clock duration, when both ends are known
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end >= start => Some(end - start),
            _ => None,
        }
    }
}

/// Output of a single log, fetched on demand by the detail view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBody {
    pub id: String,
    pub body: String,
}

/// Filter for the log list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    /// Only logs produced by this job
    pub job: Option<String>,
    /// 1-based page; `None` lists a single implicit page
    pub page: Option<u32>,
}

impl LogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_job(job: impl Into<String>) -> Self {
        Self {
            job: Some(job.into()),
            page: None,
        }
    }

    pub fn at_page(page: u32) -> Self {
        Self {
            job: None,
            page: Some(page),
        }
    }

    /// Query string pairs in the order the backend expects them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(job) = &self.job {
            pairs.push(("job", job.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

/// Previous/next neighbours of the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursors {
    pub current: u32,
    /// `None` when there is no earlier page (`current - 1 <= 0`)
    pub previous: Option<u32>,
    /// `None` when the current page came back empty
    pub next: Option<u32>,
}

impl PageCursors {
    /// Cursors around `current`
    pub fn around(current: u32, has_entries: bool) -> Self {
        let previous = current.checked_sub(1).filter(|p| *p > 0);
        let next = if has_entries {
            current.checked_add(1)
        } else {
            None
        };
        Self {
            current,
            previous,
            next,
        }
    }
}

/// One window of the log list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogPage {
    pub entries: Vec<LogSummary>,
    /// Total number of logs matching the filter, as reported by the backend
    pub length: usize,
    /// Present only when the query asked for a page
    pub cursors: Option<PageCursors>,
}

impl LogPage {
    /// Build a page for `query`, computing cursors when a page was requested
    pub fn for_query(query: &LogQuery, entries: Vec<LogSummary>, length: usize) -> Self {
        let cursors = query
            .page
            .map(|page| PageCursors::around(page, !entries.is_empty()));
        Self {
            entries,
            length,
            cursors,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde helpers
// ─────────────────────────────────────────────────────────────────────────────

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses an RFC 3339 timestamp, mapping the Go zero time and unparseable
/// values to `None`.
fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| parse_timestamp(&s)))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw.trim()).ok()?;
    let utc = parsed.with_timezone(&Utc);
    (utc.year() > 1).then_some(utc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_with_empty_id_is_create() {
        assert!(!JobDraft::new("deploy.sh").is_update());
        assert!(!JobDraft {
            id: "   ".into(),
            cmd: "x".into()
        }
        .is_update());
    }

    #[test]
    fn test_draft_from_job_is_update() {
        let draft = JobDraft::edit(&Job::new("7", "backup.sh"));
        assert!(draft.is_update());
        assert_eq!(draft.cmd, "backup.sh");
    }

    #[test]
    fn test_mutation_response_with_validation_errors() {
        let json = r#"{"success":false,"msg":"invalid","validationError":[{"target":"cmd","error":"required"}]}"#;
        let resp: MutationResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.validation_error, vec![ValidationError::new("cmd", "required")]);
    }

    #[test]
    fn test_mutation_response_null_validation_errors() {
        let json = r#"{"success":true,"msg":"saved","validationError":null}"#;
        let resp: MutationResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert!(resp.validation_error.is_empty());
    }

    #[test]
    fn test_mutation_response_without_msg() {
        let resp: MutationResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(resp.msg, "");
    }

    #[test]
    fn test_log_summary_from_backend_json() {
        let json = r#"{
            "Id": "12",
            "Name": "deploy",
            "User": "Anonymous",
            "Start": "2024-03-01T10:00:00Z",
            "End": "2024-03-01T10:00:42Z",
            "Body": "",
            "Status": 0
        }"#;
        let log: LogSummary = serde_json::from_str(json).unwrap();
        assert_eq!(log.id, "12");
        assert_eq!(log.name, "deploy");
        assert_eq!(log.status, Some(0));
        assert_eq!(log.duration(), Some(chrono::Duration::seconds(42)));
    }

    #[test]
    fn test_log_summary_zero_time_is_absent() {
        let json = r#"{"Id":"3","Name":"x","Start":"2024-03-01T10:00:00Z","End":"0001-01-01T00:00:00Z"}"#;
        let log: LogSummary = serde_json::from_str(json).unwrap();
        assert!(log.start.is_some());
        assert!(log.end.is_none());
        assert!(log.duration().is_none());
    }

    #[test]
    fn test_log_summary_garbage_time_is_absent() {
        let json = r#"{"Id":"3","Start":"yesterday"}"#;
        let log: LogSummary = serde_json::from_str(json).unwrap();
        assert!(log.start.is_none());
    }

    #[test]
    fn test_cursors_around_page_two() {
        let cursors = PageCursors::around(2, true);
        assert_eq!(cursors.previous, Some(1));
        assert_eq!(cursors.next, Some(3));
    }

    #[test]
    fn test_cursors_first_page_has_no_previous() {
        assert_eq!(PageCursors::around(1, true).previous, None);
        assert_eq!(PageCursors::around(0, true).previous, None);
    }

    #[test]
    fn test_cursors_empty_page_has_no_next() {
        let cursors = PageCursors::around(5, false);
        assert_eq!(cursors.previous, Some(4));
        assert_eq!(cursors.next, None);
    }

    #[test]
    fn test_page_without_page_query_has_no_cursors() {
        let page = LogPage::for_query(&LogQuery::new(), vec![LogSummary::new("1", "a")], 1);
        assert!(page.cursors.is_none());
    }

    #[test]
    fn test_query_pairs() {
        let query = LogQuery {
            job: Some("deploy".into()),
            page: Some(3),
        };
        assert_eq!(
            query.query_pairs(),
            vec![("job", "deploy".to_string()), ("page", "3".to_string())]
        );
        assert!(LogQuery::new().query_pairs().is_empty());
    }
}

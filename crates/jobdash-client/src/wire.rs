//! Response envelopes that only exist on the wire

use jobdash_core::LogSummary;
use serde::{Deserialize, Serialize};

/// `GET /logs?job=&page=` response
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LogsEnvelope {
    /// `null` when the backend has no logs at all
    #[serde(default)]
    pub entries: Option<Vec<LogSummary>>,
    #[serde(default)]
    pub length: usize,
}

/// `GET /logs?id=` response
#[derive(Debug, Default, Deserialize, Serialize)]
pub(crate) struct BodyEnvelope {
    #[serde(default)]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_entries() {
        let env: LogsEnvelope = serde_json::from_str(r#"{"Entries":null,"Length":0}"#).unwrap();
        assert!(env.entries.is_none());
        assert_eq!(env.length, 0);
    }

    #[test]
    fn test_missing_body_is_empty() {
        let env: BodyEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(env.body, "");
    }
}

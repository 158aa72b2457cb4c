//! Export adapter: writes a generated prompt to a JSON record file.
//!
//! The record schema is owned by the CLI, not by the engine. One record
//! per saved prompt: the final text plus metadata and a timestamp.

use promptforge_core::{AppError, AppResult};
use serde::Serialize;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// A saved-prompt record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    /// The final prompt text
    pub prompt: String,

    /// Which operation produced it ("generate", "structured", "optimize")
    pub kind: String,

    /// Category, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Detail level, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Gaps detected by the optimizer, when applicable
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gaps: Vec<String>,

    /// Persona applied by the optimizer, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,

    /// Record schema version
    pub version: &'static str,

    /// Unix timestamp (seconds) at save time
    pub saved_at: u64,
}

impl PromptRecord {
    pub fn new(prompt: String, kind: &str) -> Self {
        Self {
            prompt,
            kind: kind.to_string(),
            category: None,
            level: None,
            gaps: Vec::new(),
            persona: None,
            version: "1.0",
            saved_at: unix_now(),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Write a record as pretty-printed JSON.
pub fn save_record(path: &Path, record: &PromptRecord) -> AppResult<()> {
    let json = serde_json::to_string_pretty(record)
        .map_err(|e| AppError::Serialization(e.to_string()))?;

    std::fs::write(path, json)?;

    tracing::info!("Prompt saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_record_json_shape() {
        let mut record = PromptRecord::new("texto final".to_string(), "optimize");
        record.category = Some("technical".to_string());
        record.gaps = vec!["objective".to_string()];

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["prompt"], "texto final");
        assert_eq!(json["kind"], "optimize");
        assert_eq!(json["category"], "technical");
        assert_eq!(json["version"], "1.0");
        assert!(json["savedAt"].is_u64());
        // absent optional fields are omitted entirely
        assert!(json.get("level").is_none());
        assert!(json.get("persona").is_none());
    }

    #[test]
    fn test_save_record_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.json");

        let record = PromptRecord::new("olá".to_string(), "generate");
        save_record(&path, &record).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["prompt"], "olá");
    }
}

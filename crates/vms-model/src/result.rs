//! Result payload returned by the migration engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structured mapping result for one migration run.
///
/// Decoded from the engine's JSON response as-is: no field is dropped,
/// renamed, or reinterpreted. Map ordering is not significant (`BTreeMap`
/// gives a stable display order); log ordering is significant and
/// preserved.
///
/// A new result replaces the previous one wholesale; results are never
/// merged or diffed across submissions, and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationResult {
    /// Target-form name to source-form name.
    #[serde(default)]
    pub form_map: BTreeMap<String, String>,
    /// Per-form mapping of target-field name to source-field name.
    #[serde(default)]
    pub field_map: BTreeMap<String, BTreeMap<String, String>>,
    /// Ordered per-record migration outcomes, kept opaque. The engine may
    /// omit this entirely, which decodes as an empty log.
    #[serde(default)]
    pub migration_log: Vec<serde_json::Value>,
}

impl MigrationResult {
    /// Whether the engine returned any log entries.
    pub fn has_log(&self) -> bool {
        !self.migration_log.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_payload_key_for_key() {
        let body = json!({
            "form_map": {"Demographics": "DM"},
            "field_map": {"Demographics": {"DOB": "BIRTHDT"}},
            "migration_log": [{"row": 1, "status": "ok"}]
        });
        let result: MigrationResult = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(result.form_map["Demographics"], "DM");
        assert_eq!(result.field_map["Demographics"]["DOB"], "BIRTHDT");
        assert_eq!(result.migration_log, vec![json!({"row": 1, "status": "ok"})]);

        // Round-trips without losing or renaming anything.
        assert_eq!(serde_json::to_value(&result).unwrap(), body);
    }

    #[test]
    fn absent_log_decodes_as_empty() {
        let result: MigrationResult =
            serde_json::from_value(json!({"form_map": {}, "field_map": {}})).unwrap();
        assert!(!result.has_log());
    }

    #[test]
    fn log_order_is_preserved() {
        let rows: Vec<_> = (0..10).map(|i| json!({"row": i})).collect();
        let result: MigrationResult =
            serde_json::from_value(json!({"migration_log": rows.clone()})).unwrap();
        assert_eq!(result.migration_log, rows);
    }
}

//! Results view: the three-pane rendering of a migration result.
//!
//! Rendered only when a result exists; pre-submission (or after failures
//! with no prior success) no panel is shown at all. The form and field
//! maps are rendered in full; the log is capped at the first
//! [`LOG_DISPLAY_LIMIT`] entries in original order.

use iced::widget::{column, container, rule, text};
use iced::{Element, Length, Theme};

use vms_model::MigrationResult;

use crate::message::Message;
use crate::theme::{BORDER_RADIUS_SM, SPACING_MD, SPACING_SM};

/// Maximum number of log entries shown.
pub const LOG_DISPLAY_LIMIT: usize = 50;

/// Shown instead of an empty log container.
pub const EMPTY_LOG_PLACEHOLDER: &str = "No migration log available.";

/// The slice of the log that gets rendered: the first
/// [`LOG_DISPLAY_LIMIT`] entries, original order.
pub fn visible_log(log: &[serde_json::Value]) -> &[serde_json::Value] {
    &log[..log.len().min(LOG_DISPLAY_LIMIT)]
}

/// Form-mapping lines, one `target → source` per form.
fn form_map_lines(result: &MigrationResult) -> Vec<String> {
    result
        .form_map
        .iter()
        .map(|(target, source)| format!("{target} → {source}"))
        .collect()
}

/// Field-mapping lines, grouped per form.
fn field_map_lines(result: &MigrationResult) -> Vec<String> {
    let mut lines = Vec::new();
    for (form, fields) in &result.field_map {
        lines.push(format!("{form}:"));
        for (target, source) in fields {
            lines.push(format!("    {target} → {source}"));
        }
    }
    lines
}

/// Pretty-printed log entries, truncated but never reordered.
fn log_lines(result: &MigrationResult) -> Vec<String> {
    visible_log(&result.migration_log)
        .iter()
        .map(|entry| {
            serde_json::to_string_pretty(entry).unwrap_or_else(|_| entry.to_string())
        })
        .collect()
}

/// Render the results panel.
pub fn view_results(result: &MigrationResult) -> Element<'static, Message> {
    let mut content = column![text("Comparison").size(18)].spacing(SPACING_SM);
    content = content.push(rule::horizontal(1));

    // Form mappings, unfiltered.
    content = content.push(text("Form mappings (target → source)").size(14));
    for line in form_map_lines(result) {
        content = content.push(text(line).size(13));
    }

    // Field mappings, unfiltered.
    content = content.push(text("Field mappings (per form)").size(14));
    for line in field_map_lines(result) {
        content = content.push(text(line).size(13));
    }

    // Migration log, first 50 rows.
    content = content.push(
        text(format!("Migration Log (first {LOG_DISPLAY_LIMIT} rows)")).size(14),
    );
    if result.has_log() {
        for line in log_lines(result) {
            content = content.push(text(line).size(12));
        }
    } else {
        content = content.push(text(EMPTY_LOG_PLACEHOLDER).size(13));
    }

    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                border: iced::Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

/// Helper line under the subjects field: how the raw text parses.
///
/// Purely informational; malformed entries never block submission.
pub fn subjects_hint(subjects: &str) -> Option<String> {
    if subjects.trim().is_empty() {
        return None;
    }
    let entries = vms_model::parse_subject_mapping(subjects);
    let pairs = entries.iter().filter(|entry| entry.is_pair()).count();
    let malformed = entries.len() - pairs;
    let mut hint = format!("{pairs} pair(s)");
    if malformed > 0 {
        hint.push_str(&format!(", {malformed} entr(y/ies) left as-is"));
    }
    Some(hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_with_log(len: usize) -> MigrationResult {
        let rows: Vec<_> = (0..len).map(|i| json!({"row": i})).collect();
        serde_json::from_value(json!({"migration_log": rows})).unwrap()
    }

    #[test]
    fn log_truncation_boundaries() {
        assert_eq!(visible_log(&result_with_log(0).migration_log).len(), 0);
        assert_eq!(visible_log(&result_with_log(1).migration_log).len(), 1);
        assert_eq!(visible_log(&result_with_log(50).migration_log).len(), 50);
        assert_eq!(visible_log(&result_with_log(200).migration_log).len(), 50);
    }

    #[test]
    fn truncated_log_keeps_original_order() {
        let result = result_with_log(200);
        let shown = visible_log(&result.migration_log);
        for (i, entry) in shown.iter().enumerate() {
            assert_eq!(entry, &json!({"row": i}));
        }
    }

    #[test]
    fn form_map_renders_every_entry() {
        let result: MigrationResult = serde_json::from_value(json!({
            "form_map": {"Demographics": "DM", "Vitals": "VS"}
        }))
        .unwrap();
        assert_eq!(
            form_map_lines(&result),
            vec!["Demographics → DM", "Vitals → VS"]
        );
    }

    #[test]
    fn field_map_groups_per_form() {
        let result: MigrationResult = serde_json::from_value(json!({
            "field_map": {"Demographics": {"DOB": "BIRTHDT", "SEX": "GENDER"}}
        }))
        .unwrap();
        assert_eq!(
            field_map_lines(&result),
            vec![
                "Demographics:",
                "    DOB → BIRTHDT",
                "    SEX → GENDER",
            ]
        );
    }

    #[test]
    fn subjects_hint_counts_pairs_and_leftovers() {
        assert_eq!(subjects_hint("   "), None);
        assert_eq!(
            subjects_hint("SCR-0001:SCR-0053, SCR-0002:SCR-0054"),
            Some("2 pair(s)".to_string())
        );
        assert_eq!(
            subjects_hint("SCR-0001:SCR-0053, junk"),
            Some("1 pair(s), 1 entr(y/ies) left as-is".to_string())
        );
    }
}

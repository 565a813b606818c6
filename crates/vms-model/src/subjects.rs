//! Subject-mapping boundary parser.
//!
//! The engine receives the subjects field as raw text and applies its own
//! parsing; the client never rejects a submission because of mapping
//! syntax. This parser exists so the client side can still reason about
//! the shape of what the user typed (e.g. to surface a hint in the UI and
//! to make the format testable).

use serde::{Deserialize, Serialize};

/// One comma-separated entry of the subjects field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MappingEntry {
    /// A well-formed `old:new` pair, both sides non-empty after trimming.
    Pair { old: String, new: String },
    /// Anything else: no `:`, or an empty side. Preserved as the literal
    /// trimmed text so nothing the user typed is lost.
    Malformed(String),
}

impl MappingEntry {
    /// Whether this entry parsed as an `old:new` pair.
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair { .. })
    }
}

/// Parses comma-separated `old:new` text into ordered entries.
///
/// Splits on commas, then on the first `:` of each part. Sides are
/// trimmed. Empty parts between commas are skipped. Order is preserved.
pub fn parse_subject_mapping(text: &str) -> Vec<MappingEntry> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once(':') {
            Some((old, new)) => {
                let old = old.trim();
                let new = new.trim();
                if old.is_empty() || new.is_empty() {
                    MappingEntry::Malformed(part.to_string())
                } else {
                    MappingEntry::Pair {
                        old: old.to_string(),
                        new: new.to_string(),
                    }
                }
            }
            None => MappingEntry::Malformed(part.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(old: &str, new: &str) -> MappingEntry {
        MappingEntry::Pair {
            old: old.to_string(),
            new: new.to_string(),
        }
    }

    #[test]
    fn parses_example_mapping() {
        let entries = parse_subject_mapping("SCR-0001:SCR-0053, SCR-0002:SCR-0054");
        assert_eq!(
            entries,
            vec![pair("SCR-0001", "SCR-0053"), pair("SCR-0002", "SCR-0054")]
        );
    }

    #[test]
    fn empty_text_yields_no_entries() {
        assert!(parse_subject_mapping("").is_empty());
        assert!(parse_subject_mapping("  , ,").is_empty());
    }

    #[test]
    fn malformed_entries_are_preserved_literally() {
        let entries = parse_subject_mapping("SCR-0001, :SCR-0053, SCR-0002:");
        assert_eq!(
            entries,
            vec![
                MappingEntry::Malformed("SCR-0001".to_string()),
                MappingEntry::Malformed(":SCR-0053".to_string()),
                MappingEntry::Malformed("SCR-0002:".to_string()),
            ]
        );
    }

    #[test]
    fn only_first_colon_splits() {
        let entries = parse_subject_mapping("A:B:C");
        assert_eq!(entries, vec![pair("A", "B:C")]);
    }

    #[test]
    fn order_is_preserved() {
        let entries = parse_subject_mapping("Z:1, bad, A:2");
        assert_eq!(
            entries,
            vec![
                pair("Z", "1"),
                MappingEntry::Malformed("bad".to_string()),
                pair("A", "2"),
            ]
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        // Identifier-like fragments with no separator characters.
        fn ident() -> impl Strategy<Value = String> {
            "[A-Za-z0-9-]{1,12}"
        }

        proptest! {
            #[test]
            fn well_formed_pairs_round_trip(
                pairs in prop::collection::vec((ident(), ident()), 1..8)
            ) {
                let text = pairs
                    .iter()
                    .map(|(old, new)| format!("{old}:{new}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let parsed = parse_subject_mapping(&text);

                prop_assert_eq!(parsed.len(), pairs.len());
                for (entry, (old, new)) in parsed.iter().zip(&pairs) {
                    prop_assert_eq!(entry, &MappingEntry::Pair {
                        old: old.clone(),
                        new: new.clone(),
                    });
                }
            }

            #[test]
            fn never_panics_on_arbitrary_text(text in ".{0,200}") {
                let _ = parse_subject_mapping(&text);
            }

            #[test]
            fn entry_count_never_exceeds_comma_parts(text in ".{0,200}") {
                let parts = text.split(',').count();
                prop_assert!(parse_subject_mapping(&text).len() <= parts);
            }
        }
    }
}

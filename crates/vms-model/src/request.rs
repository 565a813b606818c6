//! Draft migration request.
//!
//! The request is edited field-by-field in the UI and consumed once at
//! submission. Every mutation returns a fresh snapshot so no other holder
//! ever observes a partial edit. Semantic validation is deferred to
//! `vms-client`; every input is accepted as-is.

use serde::{Deserialize, Serialize};

/// File extensions offered by the file-picker filter.
///
/// This is a UI hint only. The file content is never inspected
/// client-side; the engine decides whether it can read the spec.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

/// Scalar fields of the migration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestField {
    StudyId,
    SiteId,
    SiteCountry,
    Subjects,
}

impl RequestField {
    /// Human-readable label, also used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::StudyId => "Study ID",
            Self::SiteId => "Site ID",
            Self::SiteCountry => "Site Country",
            Self::Subjects => "Subjects mapping",
        }
    }
}

/// The uploaded target design-specification file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpecFile {
    /// File name as picked, e.g. `target_spec.xlsx`.
    pub file_name: String,
    /// Declared media type, e.g. `text/csv`.
    pub media_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl TargetSpecFile {
    /// Whether the file name carries one of the advertised extensions.
    pub fn has_accepted_extension(&self) -> bool {
        has_accepted_extension(&self.file_name)
    }
}

/// Declared media type for a picked file, by extension.
///
/// Unknown extensions fall back to `application/octet-stream`; the
/// engine, not the client, decides whether it can read the file.
pub fn media_type_for(file_name: &str) -> &'static str {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if ext.eq_ignore_ascii_case("csv") {
        "text/csv"
    } else if ext.eq_ignore_ascii_case("xlsx") {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    } else if ext.eq_ignore_ascii_case("xls") {
        "application/vnd.ms-excel"
    } else {
        "application/octet-stream"
    }
}

/// Checks a file name against [`ACCEPTED_EXTENSIONS`] (case-insensitive).
pub fn has_accepted_extension(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Draft migration request.
///
/// Created empty, mutated through [`MigrationRequest::set`] and
/// [`MigrationRequest::attach`], consumed exactly once by the submission
/// workflow, then discarded. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationRequest {
    pub study_id: String,
    pub site_id: String,
    pub site_country: String,
    /// Raw comma-separated `old:new` text, sent to the engine verbatim.
    pub subjects: String,
    pub target_spec: Option<TargetSpecFile>,
}

impl MigrationRequest {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new snapshot with one scalar field replaced.
    ///
    /// Accepts any text, including empty or malformed input; the
    /// validator decides submit-eligibility later.
    #[must_use]
    pub fn set(&self, field: RequestField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            RequestField::StudyId => &mut next.study_id,
            RequestField::SiteId => &mut next.site_id,
            RequestField::SiteCountry => &mut next.site_country,
            RequestField::Subjects => &mut next.subjects,
        };
        *slot = value.into();
        next
    }

    /// Returns a new snapshot with the target-spec file attached,
    /// replacing any previously attached file.
    #[must_use]
    pub fn attach(&self, file: TargetSpecFile) -> Self {
        let mut next = self.clone();
        next.target_spec = Some(file);
        next
    }

    /// Field accessor by name, mirroring [`MigrationRequest::set`].
    pub fn get(&self, field: RequestField) -> &str {
        match field {
            RequestField::StudyId => &self.study_id,
            RequestField::SiteId => &self.site_id,
            RequestField::SiteCountry => &self.site_country,
            RequestField::Subjects => &self.subjects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_file(name: &str) -> TargetSpecFile {
        TargetSpecFile {
            file_name: name.to_string(),
            media_type: "text/csv".to_string(),
            bytes: b"FORM,FIELD".to_vec(),
        }
    }

    #[test]
    fn set_returns_fresh_snapshot() {
        let empty = MigrationRequest::new();
        let edited = empty.set(RequestField::StudyId, "S1");

        assert_eq!(empty.study_id, "");
        assert_eq!(edited.study_id, "S1");
        // Untouched fields carry over.
        assert_eq!(edited.site_id, "");
        assert!(edited.target_spec.is_none());
    }

    #[test]
    fn set_accepts_raw_text_verbatim() {
        let draft = MigrationRequest::new().set(RequestField::Subjects, "  SCR-1:SCR-2, junk ");
        assert_eq!(draft.subjects, "  SCR-1:SCR-2, junk ");
    }

    #[test]
    fn attach_replaces_previous_file() {
        let draft = MigrationRequest::new()
            .attach(spec_file("first.csv"))
            .attach(spec_file("second.xlsx"));
        assert_eq!(draft.target_spec.unwrap().file_name, "second.xlsx");
    }

    #[test]
    fn extension_hint_is_case_insensitive() {
        assert!(has_accepted_extension("spec.csv"));
        assert!(has_accepted_extension("Spec.XLSX"));
        assert!(has_accepted_extension("design.xls"));
        assert!(!has_accepted_extension("spec.pdf"));
        assert!(!has_accepted_extension("spec"));
        assert!(!has_accepted_extension("csv"));
    }

    #[test]
    fn media_types_follow_the_extension() {
        assert_eq!(media_type_for("spec.csv"), "text/csv");
        assert_eq!(
            media_type_for("Spec.XLSX"),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(media_type_for("design.xls"), "application/vnd.ms-excel");
        assert_eq!(media_type_for("notes.txt"), "application/octet-stream");
    }

    #[test]
    fn get_mirrors_set() {
        let draft = MigrationRequest::new()
            .set(RequestField::SiteId, "01")
            .set(RequestField::SiteCountry, "US");
        assert_eq!(draft.get(RequestField::SiteId), "01");
        assert_eq!(draft.get(RequestField::SiteCountry), "US");
        assert_eq!(draft.get(RequestField::StudyId), "");
    }
}

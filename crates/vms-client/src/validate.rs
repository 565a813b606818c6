//! Submit-eligibility validation.

use vms_model::{MigrationRequest, RequestField};

use crate::error::ValidationError;

/// Fields the validator requires to be non-empty, in check order.
const REQUIRED_FIELDS: [RequestField; 4] = [
    RequestField::StudyId,
    RequestField::SiteId,
    RequestField::SiteCountry,
    RequestField::Subjects,
];

/// Checks whether a draft request is submit-eligible.
///
/// The file check comes first: an absent target spec always reports
/// [`ValidationError::MissingFile`], regardless of the other fields. The
/// scalar fields are then required to be non-empty after trimming.
///
/// Subject-mapping syntax is deliberately NOT validated here — malformed
/// entries travel to the engine as literal text, which owns that parsing.
pub fn validate(request: &MigrationRequest) -> Result<(), ValidationError> {
    if request.target_spec.is_none() {
        return Err(ValidationError::MissingFile);
    }
    for field in REQUIRED_FIELDS {
        if request.get(field).trim().is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vms_model::TargetSpecFile;

    fn spec_file() -> TargetSpecFile {
        TargetSpecFile {
            file_name: "spec.csv".to_string(),
            media_type: "text/csv".to_string(),
            bytes: b"FORM,FIELD".to_vec(),
        }
    }

    fn complete_request() -> MigrationRequest {
        MigrationRequest::new()
            .set(RequestField::StudyId, "S1")
            .set(RequestField::SiteId, "01")
            .set(RequestField::SiteCountry, "US")
            .set(RequestField::Subjects, "SCR-0001:SCR-0053")
            .attach(spec_file())
    }

    #[test]
    fn complete_request_is_eligible() {
        assert_eq!(validate(&complete_request()), Ok(()));
    }

    #[test]
    fn missing_file_always_wins() {
        // Even with every other field empty, the file check reports first.
        assert_eq!(
            validate(&MigrationRequest::new()),
            Err(ValidationError::MissingFile)
        );
        // And with every other field filled.
        let mut request = complete_request();
        request.target_spec = None;
        assert_eq!(validate(&request), Err(ValidationError::MissingFile));
    }

    #[test]
    fn each_blank_scalar_is_reported() {
        for field in REQUIRED_FIELDS {
            let request = complete_request().set(field, "   ");
            assert_eq!(validate(&request), Err(ValidationError::EmptyField(field)));
        }
    }

    #[test]
    fn malformed_subject_mapping_is_not_rejected() {
        let request = complete_request().set(RequestField::Subjects, "no-colon-here");
        assert_eq!(validate(&request), Ok(()));
    }
}

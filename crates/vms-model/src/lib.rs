//! Data model for Vault Migration Studio.
//!
//! Holds the draft migration request the user edits, the subject-mapping
//! boundary parser, and the result payload returned by the migration
//! engine. All types here are pure data; validation and transport live in
//! `vms-client`.

pub mod request;
pub mod result;
pub mod subjects;

pub use request::{
    ACCEPTED_EXTENSIONS, MigrationRequest, RequestField, TargetSpecFile, has_accepted_extension,
    media_type_for,
};
pub use result::MigrationResult;
pub use subjects::{MappingEntry, parse_subject_mapping};

//! Error types for form population

use thiserror::Error;

/// Result type for field type operations
pub type Result<T> = std::result::Result<T, FieldTypeError>;

/// Errors that abort adding a field to a form.
///
/// None of these are recovered from locally; they reach the caller unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum FieldTypeError {
    /// Relationship kind is absent or not one of the three known cardinalities
    #[error("unsupported relationship kind '{kind}' on field '{field}'")]
    UnsupportedCardinality { field: String, kind: String },

    /// Relationship field has no `to` section
    #[error("relationship field '{field}' does not name a target section")]
    MissingTarget { field: String },

    /// Target section handle does not resolve
    #[error("unknown section: {handle}")]
    UnknownSection { handle: String },

    /// Host entity has no accessor of the expected shape for a relation
    #[error("host entity has no accessor for relation '{relation}'")]
    MissingRelationAccessor { relation: String },

    /// Configured form data cannot be converted to the widget's value type
    #[error("invalid form data for field '{field}': {value}")]
    InvalidFormData { field: String, value: String },
}

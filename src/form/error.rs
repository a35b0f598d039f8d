//! Workshop form error types

use thiserror::Error;

use super::state::FormField;

/// Errors that block or reject a form transition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field is empty or whitespace
    #[error("{} is required", .0.label())]
    MissingField(FormField),

    /// A submission is already waiting to resolve
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// Resolve was called with no submission pending
    #[error("No submission is pending")]
    NotSubmitting,
}

/// Result type alias for form operations
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::MissingField(FormField::Instructor);
        assert_eq!(err.to_string(), "Instructor is required");

        let err = FormError::AlreadySubmitting;
        assert_eq!(err.to_string(), "A submission is already in progress");
    }
}

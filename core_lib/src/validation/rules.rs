//! Validation rules shared by the lead forms

use validator::ValidationError;

/// Rejects empty and whitespace-only input.
pub fn validate_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

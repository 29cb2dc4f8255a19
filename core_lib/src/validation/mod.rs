//! Field validation for submitted lead forms

pub mod rules;

pub use rules::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    pub fn from_validation_errors(errors: ValidationErrors) -> Self {
        let mut result = Self::success();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Validation failed for field '{}'", field),
                };
                result.add_error(field, &message);
            }
        }

        result
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }
}

pub trait Validatable {
    fn validate_comprehensive(&self) -> ValidationResult;
}

impl<T> Validatable for T
where
    T: Validate,
{
    fn validate_comprehensive(&self) -> ValidationResult {
        match self.validate() {
            Ok(_) => ValidationResult::success(),
            Err(errors) => ValidationResult::from_validation_errors(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(custom(function = "validate_present", message = "Name is required"))]
        name: String,
        #[validate(length(max = 3, message = "Too long"))]
        code: String,
    }

    #[test]
    fn test_collects_field_errors() {
        let sample = Sample {
            name: "  ".to_string(),
            code: "ABCD".to_string(),
        };

        let result = sample.validate_comprehensive();
        assert!(!result.is_valid);
        assert_eq!(result.errors["name"], vec!["Name is required".to_string()]);
        assert!(result.has_error("code"));
    }

    #[test]
    fn test_add_error_marks_invalid() {
        let mut result = ValidationResult::success();
        result.add_error("phone", "Phone is required");
        result.add_error("phone", "Phone is too short");

        assert!(!result.is_valid);
        assert_eq!(result.errors["phone"].len(), 2);
        assert!(!result.has_error("name"));
    }
}

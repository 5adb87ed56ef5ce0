//! Configuration validation utilities

use crate::errors::KilnError;
use std::fmt;

/// Configuration validation result
pub type ValidationResult = Result<(), ValidationError>;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value is required but empty
    Required { field: String },
    /// Value is out of acceptable range
    OutOfRange {
        field: String,
        min: u64,
        max: u64,
        actual: u64,
    },
    /// Custom validation failed
    Custom { field: String, message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required { field } => {
                write!(f, "Field '{field}' is required but empty")
            }
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                write!(f, "Field '{field}' must be between {min} and {max} (got {actual})")
            }
            ValidationError::Custom { field, message } => {
                write!(f, "Field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for KilnError {
    fn from(err: ValidationError) -> Self {
        KilnError::config(err.to_string())
    }
}

/// Accumulates validation failures across a configuration
#[derive(Debug, Default)]
pub struct ConfigValidator {
    errors: Vec<ValidationError>,
    field_prefix: String,
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator for a nested section
    pub fn for_field(&self, field_name: &str) -> Self {
        Self {
            errors: Vec::new(),
            field_prefix: self.full_field_name(field_name),
        }
    }

    /// Validate that a string is not blank
    pub fn non_empty(&mut self, field_name: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(ValidationError::Required {
                field: self.full_field_name(field_name),
            });
        }
        self
    }

    /// Validate that a number is within an inclusive range
    pub fn range(&mut self, field_name: &str, value: u64, min: u64, max: u64) -> &mut Self {
        if value < min || value > max {
            self.errors.push(ValidationError::OutOfRange {
                field: self.full_field_name(field_name),
                min,
                max,
                actual: value,
            });
        }
        self
    }

    /// Validate using a custom predicate
    pub fn custom<T, F>(
        &mut self,
        field_name: &str,
        value: &T,
        predicate: F,
        message: &str,
    ) -> &mut Self
    where
        T: ?Sized,
        F: FnOnce(&T) -> bool,
    {
        if !predicate(value) {
            self.errors.push(ValidationError::Custom {
                field: self.full_field_name(field_name),
                message: message.to_string(),
            });
        }
        self
    }

    /// Merge errors from another validator
    pub fn merge(&mut self, other: ConfigValidator) {
        self.errors.extend(other.errors);
    }

    /// First error, if any
    pub fn result(self) -> ValidationResult {
        match self.errors.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        }
    }

    /// Get all validation errors
    pub fn all_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    fn full_field_name(&self, field_name: &str) -> String {
        if self.field_prefix.is_empty() {
            field_name.to_string()
        } else {
            format!("{}.{}", self.field_prefix, field_name)
        }
    }
}

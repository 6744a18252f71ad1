//! Validation for publications

use super::Publication;
use serde::{Deserialize, Serialize};

/// Severity of a validation error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn error(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: ValidationSeverity::Error,
        }
    }

    fn warning(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: ValidationSeverity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == ValidationSeverity::Error
    }
}

/// Validate a publication and return errors/warnings
pub fn validate_publication(publication: &Publication) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Required fields
    if publication.id.trim().is_empty() {
        errors.push(ValidationError::error("id", "Identifier is required"));
    }

    if publication.year <= 0 {
        errors.push(ValidationError::error("year", "A resolvable year is required"));
    }

    if let Some(month) = publication.month {
        if !(1..=12).contains(&month) {
            errors.push(ValidationError::error("month", "Month must be between 1 and 12"));
        }
    }

    if let Some(day) = publication.day {
        if !(1..=31).contains(&day) {
            errors.push(ValidationError::error("day", "Day must be between 1 and 31"));
        }
        if publication.month.is_none() {
            errors.push(ValidationError::warning("day", "Day given without a month"));
        }
    }

    // Warnings for recommended fields
    if publication.title.trim().is_empty() {
        errors.push(ValidationError::warning("title", "Title is recommended"));
    }

    if !publication.pub_type().is_recognized() {
        errors.push(ValidationError::warning(
            "type",
            "Unrecognized publication type, default icon will be used",
        ));
    }

    errors
}

/// Whether a publication passes validation without errors.
pub fn is_valid_publication(publication: &Publication) -> bool {
    validate_publication(publication).iter().all(|e| !e.is_error())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_publication() {
        let pub_ = Publication::new("p1", "journalArticle", 2020, "Paper").with_date(Some(5), Some(1));
        assert!(validate_publication(&pub_).is_empty());
        assert!(is_valid_publication(&pub_));
    }

    #[test]
    fn test_missing_year_is_error() {
        let pub_ = Publication::new("p1", "journalArticle", 0, "Paper");
        let errors = validate_publication(&pub_);
        assert!(errors.iter().any(|e| e.field == "year" && e.is_error()));
        assert!(!is_valid_publication(&pub_));
    }

    #[test]
    fn test_bad_month_is_error() {
        let pub_ = Publication::new("p1", "report", 2020, "Paper").with_date(Some(13), None);
        assert!(!is_valid_publication(&pub_));
    }

    #[test]
    fn test_unknown_type_is_warning_only() {
        let pub_ = Publication::new("p1", "podcast", 2020, "Episode");
        let errors = validate_publication(&pub_);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].severity, ValidationSeverity::Warning);
        assert!(is_valid_publication(&pub_));
    }
}

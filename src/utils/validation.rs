use crate::utils::error::{AnalyzerError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalyzerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalyzerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AnalyzerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AnalyzerError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Compiles every pattern, reporting the first one that fails.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| AnalyzerError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("manifest", "services.toml").is_ok());
        assert!(validate_path("manifest", "").is_err());
        assert!(validate_path("manifest", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("report.limit", 5, 1).is_ok());
        assert!(validate_positive_number("report.limit", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let missing: Option<i32> = None;
        assert_eq!(*validate_required_field("limit", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("limit", &missing),
            Err(AnalyzerError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_compile_patterns_reports_bad_pattern() {
        let patterns = vec![r"^Shop\.".to_string(), "(unclosed".to_string()];
        match compile_patterns(&patterns) {
            Err(AnalyzerError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("expected InvalidPattern, got {:?}", other.map(|v| v.len())),
        }
    }
}

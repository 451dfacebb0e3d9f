//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, URL parseable)
//! - Check the region allow-list is usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.regions.supported.is_empty() {
        errors.push(ValidationError {
            field: "regions.supported".to_string(),
            message: "at least one region is required".to_string(),
        });
    }
    if config.regions.supported.iter().any(|r| r.is_empty()) {
        errors.push(ValidationError {
            field: "regions.supported".to_string(),
            message: "region codes must be non-empty".to_string(),
        });
    }

    if let Err(e) = url::Url::parse(&config.upstream.base_url) {
        errors.push(ValidationError {
            field: "upstream.base_url".to_string(),
            message: format!("not a valid URL: {}", e),
        });
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "upstream.timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn empty_region_list_is_rejected() {
        let mut config = ServiceConfig::default();
        config.regions.supported.clear();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "regions.supported"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.regions.supported.clear();
        config.upstream.base_url = "not a url".to_string();
        config.upstream.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}

//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};

/// Configuration for validation rules
///
/// `default()` is the relaxed profile used in production: block-level checks
/// do the plausibility work, record-level checks only catch assembly bugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum company name length (characters) for a block
    pub min_name_length: usize,

    /// Maximum company name length (characters) for a block
    pub max_name_length: usize,

    /// Reject names that look like a slice of a sentence
    pub reject_fragments: bool,

    /// Require a business keyword in bodies longer than `keyword_body_threshold`
    pub require_business_keyword: bool,

    /// Body length (characters) above which the keyword check applies
    pub keyword_body_threshold: usize,

    /// Minimum company name length (characters) for a finished record
    pub record_min_name_length: usize,

    /// Minimum quality score for a finished record
    pub record_min_quality_score: f64,

    /// Require finished records to carry a company-like name
    pub require_company_like_name: bool,

    /// Apply full email syntax instead of the `@` and `.` sanity check
    pub strict_email_syntax: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_name_length: 2,
            max_name_length: 100,
            reject_fragments: true,
            require_business_keyword: true,
            keyword_body_threshold: 10,
            record_min_name_length: 2,
            record_min_quality_score: 30.0,
            require_company_like_name: false,
            strict_email_syntax: false,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (fragment checks only)
    pub fn permissive() -> Self {
        Self {
            require_business_keyword: false,
            record_min_quality_score: 0.0,
            ..Self::default()
        }
    }

    /// Create a strict configuration (all validations enabled)
    pub fn strict() -> Self {
        Self {
            min_name_length: 2,
            max_name_length: 100,
            reject_fragments: true,
            require_business_keyword: true,
            keyword_body_threshold: 10,
            record_min_name_length: 3,
            record_min_quality_score: 50.0,
            require_company_like_name: true,
            strict_email_syntax: true,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if self.min_name_length == 0 {
            return Err(GatekeeperError::Config(
                "min_name_length must be greater than 0".to_string(),
            ));
        }
        if self.min_name_length > self.max_name_length {
            return Err(GatekeeperError::Config(format!(
                "min_name_length {} exceeds max_name_length {}",
                self.min_name_length, self.max_name_length
            )));
        }
        if !(0.0..=100.0).contains(&self.record_min_quality_score) {
            return Err(GatekeeperError::Config(format!(
                "record_min_quality_score {} out of range [0, 100]",
                self.record_min_quality_score
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.reject_fragments);
        assert!(!config.require_company_like_name);
        assert_eq!(config.record_min_quality_score, 30.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_permissive_config() {
        let config = ValidationConfig::permissive();
        assert!(!config.require_business_keyword);
        assert_eq!(config.record_min_quality_score, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = ValidationConfig::strict();
        assert!(config.require_company_like_name);
        assert!(config.strict_email_syntax);
        assert_eq!(config.record_min_quality_score, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_name_bounds() {
        let config = ValidationConfig {
            min_name_length: 10,
            max_name_length: 5,
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ValidationConfig = toml::from_str("record_min_quality_score = 60.0").unwrap();
        assert_eq!(config.record_min_quality_score, 60.0);
        assert_eq!(config.max_name_length, 100);
    }
}

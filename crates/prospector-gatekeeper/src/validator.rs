//! Block and record validation logic

use crate::heuristics::{
    fragment_reason, has_business_signal, is_plausible_email, is_syntactic_email,
    looks_like_company_name,
};
use crate::ValidationConfig;
use prospector_domain::ProspectRecord;
use std::fmt;

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the subject passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

impl ValidationResult {
    fn from_reasons(reasons: Vec<RejectionReason>) -> Self {
        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };
        Self { status, reasons }
    }

    /// Whether validation accepted the subject
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Accepted
    Accepted,

    /// Rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Name length outside the allowed range
    NameLength {
        /// Actual length in characters
        length: usize,
        /// Minimum allowed
        min: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Name looks like a slice of a sentence
    Fragment(String),

    /// Body has no business keyword
    MissingBusinessSignal,

    /// Name does not look like a company
    NotCompanyLike(String),

    /// Quality score below the minimum
    ScoreTooLow {
        /// Minimum score required
        required: f64,
        /// Actual score
        actual: f64,
    },

    /// Email failed the configured check
    InvalidEmail(String),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NameLength { length, min, max } => {
                write!(f, "name length {} outside [{}, {}]", length, min, max)
            }
            RejectionReason::Fragment(why) => write!(f, "name is a sentence fragment: {}", why),
            RejectionReason::MissingBusinessSignal => write!(f, "body has no business keyword"),
            RejectionReason::NotCompanyLike(name) => {
                write!(f, "'{}' does not look like a company name", name)
            }
            RejectionReason::ScoreTooLow { required, actual } => {
                write!(f, "quality score {} below minimum {}", actual, required)
            }
            RejectionReason::InvalidEmail(email) => write!(f, "invalid email '{}'", email),
        }
    }
}

/// The Gatekeeper validates candidate blocks and finished records
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default (relaxed) configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Get the active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a candidate block before field extraction
    ///
    /// # Arguments
    ///
    /// * `name` - Company name taken from the heading
    /// * `body` - Detail text following the heading (may be empty)
    pub fn check_block(&self, name: &str, body: &str) -> ValidationResult {
        let mut reasons = Vec::new();
        let name = name.trim();
        let body = body.trim();

        // 1. Name length
        let length = name.chars().count();
        if length < self.config.min_name_length || length > self.config.max_name_length {
            reasons.push(RejectionReason::NameLength {
                length,
                min: self.config.min_name_length,
                max: self.config.max_name_length,
            });
        }

        // 2. Sentence fragments
        if self.config.reject_fragments {
            if let Some(why) = fragment_reason(name) {
                reasons.push(RejectionReason::Fragment(why.to_string()));
            }
        }

        // 3. Business signal, or a company-looking name when there is no body
        if body.chars().count() > self.config.keyword_body_threshold {
            if self.config.require_business_keyword && !has_business_signal(body) {
                reasons.push(RejectionReason::MissingBusinessSignal);
            }
        } else if !looks_like_company_name(name) {
            reasons.push(RejectionReason::NotCompanyLike(name.to_string()));
        }

        ValidationResult::from_reasons(reasons)
    }

    /// Whether a candidate block passes validation
    pub fn is_valid_block(&self, name: &str, body: &str) -> bool {
        self.check_block(name, body).is_accepted()
    }

    /// Validate a finished record
    pub fn check_record(&self, record: &ProspectRecord) -> ValidationResult {
        let mut reasons = Vec::new();

        let length = record.company_name.chars().count();
        if length < self.config.record_min_name_length {
            reasons.push(RejectionReason::NameLength {
                length,
                min: self.config.record_min_name_length,
                max: self.config.max_name_length,
            });
        }

        if self.config.require_company_like_name && !looks_like_company_name(&record.company_name) {
            reasons.push(RejectionReason::NotCompanyLike(record.company_name.clone()));
        }

        let score = record.quality_score.value();
        if score < self.config.record_min_quality_score {
            reasons.push(RejectionReason::ScoreTooLow {
                required: self.config.record_min_quality_score,
                actual: score,
            });
        }

        if let Some(email) = &record.email {
            let valid = if self.config.strict_email_syntax {
                is_syntactic_email(email)
            } else {
                is_plausible_email(email)
            };
            if !valid {
                reasons.push(RejectionReason::InvalidEmail(email.clone()));
            }
        }

        ValidationResult::from_reasons(reasons)
    }

    /// Whether a finished record passes validation
    pub fn is_valid_record(&self, record: &ProspectRecord) -> bool {
        self.check_record(record).is_accepted()
    }
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Self::default_config()
    }
}

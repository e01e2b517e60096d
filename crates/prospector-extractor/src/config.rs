//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Block segmentation strategy
///
/// Listed in priority order: the first enabled strategy that yields any
/// block wins, so the more structurally specific one claims the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStrategy {
    /// `1. **Company**` headings
    NumberedEmphasis,
    /// `**Company**` heading lines
    Emphasis,
    /// Names ending in a legal-entity or business-category suffix
    CompanySuffix,
}

impl SegmentStrategy {
    /// Get the strategy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentStrategy::NumberedEmphasis => "numbered_emphasis",
            SegmentStrategy::Emphasis => "emphasis",
            SegmentStrategy::CompanySuffix => "company_suffix",
        }
    }

    /// Parse a strategy from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "numbered_emphasis" | "numbered" => Some(SegmentStrategy::NumberedEmphasis),
            "emphasis" => Some(SegmentStrategy::Emphasis),
            "company_suffix" | "suffix" => Some(SegmentStrategy::CompanySuffix),
            _ => None,
        }
    }

    /// Whether the strategy relies on explicit report structure
    pub fn is_structured(&self) -> bool {
        !matches!(self, SegmentStrategy::CompanySuffix)
    }
}

impl std::str::FromStr for SegmentStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid segmentation strategy: {}", s))
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Segmentation strategies, in priority order
    pub strategies: Vec<SegmentStrategy>,

    /// Return nothing for reports that fail the format gate
    pub require_structure: bool,

    /// Distinct indicator kinds needed to pass the format gate
    pub min_structure_indicators: usize,

    /// Starting score for blocks found by structured strategies
    pub structured_score: f64,

    /// Starting score for blocks found by the suffix heuristic
    pub heuristic_score: f64,

    /// Score used when a record's score is missing or unusable
    pub default_score: f64,

    /// Score at or above which a record is qualified
    pub qualified_threshold: f64,

    /// Minimum company name length (characters) after cleaning
    pub min_company_name_length: usize,

    /// Characters of context taken on each side of a suffix match
    pub suffix_context_chars: usize,

    /// Characters of block body kept in `extra_data.raw_details`
    pub raw_details_chars: usize,

    /// Provenance source tag stamped on every record
    pub source_tag: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.strategies.is_empty() {
            return Err("strategies must not be empty".to_string());
        }
        if !(1..=4).contains(&self.min_structure_indicators) {
            return Err("min_structure_indicators must be between 1 and 4".to_string());
        }
        for (name, value) in [
            ("structured_score", self.structured_score),
            ("heuristic_score", self.heuristic_score),
            ("default_score", self.default_score),
            ("qualified_threshold", self.qualified_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("{} {} out of range [0, 100]", name, value));
            }
        }
        if self.min_company_name_length == 0 {
            return Err("min_company_name_length must be greater than 0".to_string());
        }
        if self.source_tag.trim().is_empty() {
            return Err("source_tag must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Production configuration: structured strategies only, format gate on
    fn default() -> Self {
        Self {
            strategies: vec![SegmentStrategy::NumberedEmphasis, SegmentStrategy::Emphasis],
            require_structure: true,
            min_structure_indicators: 2,
            structured_score: 85.0,
            heuristic_score: 50.0,
            default_score: 50.0,
            qualified_threshold: 80.0,
            min_company_name_length: 3,
            suffix_context_chars: 200,
            raw_details_chars: 500,
            source_tag: prospector_domain::provenance::AGENT_REPORT_SOURCE.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Lenient preset: suffix heuristic enabled, no format gate
    pub fn lenient() -> Self {
        Self {
            strategies: vec![
                SegmentStrategy::NumberedEmphasis,
                SegmentStrategy::Emphasis,
                SegmentStrategy::CompanySuffix,
            ],
            require_structure: false,
            ..Self::default()
        }
    }

    /// Strict preset: numbered headings only, stronger format gate
    pub fn strict() -> Self {
        Self {
            strategies: vec![SegmentStrategy::NumberedEmphasis],
            min_structure_indicators: 3,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

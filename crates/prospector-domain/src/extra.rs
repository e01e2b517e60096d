//! Auxiliary payload attached to every record
//!
//! Nothing in here is used for identity or validation.

use crate::Provenance;

/// Scoring rubric found in a company block
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Labelled sub-scores in report order, keyed by normalized label
    /// (e.g., `market_relevance`)
    pub components: Vec<(String, f64)>,

    /// Stated rubric total
    pub total: f64,

    /// Stated rubric maximum
    pub max: f64,
}

impl ScoreBreakdown {
    /// Look up a sub-score by normalized label
    pub fn component(&self, key: &str) -> Option<f64> {
        self.components
            .iter()
            .find(|(label, _)| label == key)
            .map(|(_, value)| *value)
    }

    /// Sum of all labelled sub-scores
    pub fn components_sum(&self) -> f64 {
        self.components.iter().map(|(_, value)| value).sum()
    }
}

/// Free-form informational data for a record
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraData {
    /// Every LinkedIn URL found in the block, in order
    pub linkedin_profiles: Vec<String>,

    /// Names found next to LinkedIn markers or contact labels
    pub decision_makers: Vec<String>,

    /// Rubric, when the block carried one
    pub scoring: Option<ScoreBreakdown>,

    /// First characters of the block body, for debugging
    pub raw_details: String,

    /// Where the record came from
    pub provenance: Provenance,
}

impl ExtraData {
    /// Create an empty payload with the given provenance
    pub fn new(provenance: Provenance) -> Self {
        Self {
            linkedin_profiles: Vec::new(),
            decision_makers: Vec::new(),
            scoring: None,
            raw_details: String::new(),
            provenance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_lookup() {
        let breakdown = ScoreBreakdown {
            components: vec![
                ("market_relevance".to_string(), 5.0),
                ("innovation_potential".to_string(), 3.0),
                ("accessibility".to_string(), 4.0),
            ],
            total: 12.0,
            max: 15.0,
        };
        assert_eq!(breakdown.component("accessibility"), Some(4.0));
        assert_eq!(breakdown.component("missing"), None);
        assert_eq!(breakdown.components_sum(), 12.0);
    }
}

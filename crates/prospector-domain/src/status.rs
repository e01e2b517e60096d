//! Status module - how far a prospect has been vetted

use std::fmt;

/// Status of a prospect record
///
/// - Identified: found in a report, plausibility not yet established
/// - Qualified: scored at or above the qualification threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProspectStatus {
    /// Found but not qualified
    #[default]
    Identified,

    /// Passed the qualification threshold
    Qualified,
}

impl ProspectStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProspectStatus::Identified => "identified",
            ProspectStatus::Qualified => "qualified",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "identified" => Some(ProspectStatus::Identified),
            "qualified" => Some(ProspectStatus::Qualified),
            _ => None,
        }
    }

    /// Derive a status from a score and a qualification threshold
    pub fn from_score(score: f64, qualified_threshold: f64) -> Self {
        if score >= qualified_threshold {
            ProspectStatus::Qualified
        } else {
            ProspectStatus::Identified
        }
    }
}

impl fmt::Display for ProspectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProspectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}

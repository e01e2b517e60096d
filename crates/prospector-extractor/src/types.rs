//! Intermediate and result types for extraction

use crate::config::SegmentStrategy;
use crate::detector::StructureIndicator;
use prospector_domain::{ExtraData, Location, ProspectRecord};

/// A company name plus the detail text that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBlock {
    /// Company name taken from the heading
    pub name: String,

    /// Detail text, trimmed (may be empty)
    pub body: String,

    /// Position among the blocks of one report, starting at 0
    pub order_index: usize,

    /// Strategy that produced the block
    pub strategy: SegmentStrategy,
}

/// Fields pulled out of one block body
///
/// `None` means the field was not found. `location` is `None` only before
/// extraction runs; afterwards it is either a place or `Location::Unspecified`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    /// Company website
    pub website: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// WhatsApp number
    pub whatsapp: Option<String>,
    /// Primary contact name
    pub contact_name: Option<String>,
    /// Primary contact position
    pub contact_position: Option<String>,
    /// Location result
    pub location: Option<Location>,
    /// Inferred sector
    pub sector: Option<String>,
    /// Labelled description
    pub description: Option<String>,
    /// LinkedIn URLs in order of appearance
    pub linkedin_profiles: Vec<String>,
    /// Decision-maker names in order of appearance
    pub decision_makers: Vec<String>,
}

/// A record in flight between the assembler and the cleaner
///
/// Strings are untrimmed, the score may be anything and the status is raw
/// text. The cleaner turns it into a [`ProspectRecord`] or drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProspectDraft {
    /// Company name as captured
    pub company_name: String,
    /// Company website
    pub website: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// WhatsApp number
    pub whatsapp: Option<String>,
    /// Primary contact name
    pub contact_name: Option<String>,
    /// Primary contact position
    pub contact_position: Option<String>,
    /// Location or sentinel
    pub location: Option<String>,
    /// Business sector
    pub sector: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Raw score
    pub quality_score: f64,
    /// Raw status text
    pub status: String,
    /// Informational payload
    pub extra_data: ExtraData,
}

/// Result of an extraction operation
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Records that survived every stage, in report order
    pub prospects: Vec<ProspectRecord>,

    /// Blocks that were dropped, with the reason
    pub failures: Vec<ExtractionFailure>,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Information about a block that did not become a record
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionFailure {
    /// Company name of the dropped block
    pub company_name: String,

    /// Position of the block in the report
    pub order_index: usize,

    /// Reason for failure
    pub reason: String,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Whether the report passed the format gate
    pub structured: bool,

    /// Indicator kinds the format detector found
    pub indicators: Vec<StructureIndicator>,

    /// Strategy that produced the candidate blocks, if any did
    pub strategy: Option<SegmentStrategy>,

    /// Number of candidate blocks produced by segmentation
    pub candidates: usize,

    /// Timestamp when extraction occurred (seconds since Unix epoch)
    pub timestamp: u64,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

//! Record assembly: validated block + extracted fields -> draft record

use crate::config::ExtractorConfig;
use crate::scoring::parse_rubric;
use crate::types::{CandidateBlock, ExtractedFields, ProspectDraft};
use prospector_domain::{ExtraData, Location, ProspectStatus, Provenance, QualityScore};
use tracing::{debug, warn};

/// Builds draft records from blocks and their fields
pub struct RecordAssembler {
    structured_score: f64,
    heuristic_score: f64,
    qualified_threshold: f64,
    raw_details_chars: usize,
    source_tag: String,
}

impl RecordAssembler {
    /// Create an assembler from the extractor configuration
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            structured_score: config.structured_score,
            heuristic_score: config.heuristic_score,
            qualified_threshold: config.qualified_threshold,
            raw_details_chars: config.raw_details_chars,
            source_tag: config.source_tag.clone(),
        }
    }

    /// Combine a block and its fields into a draft
    ///
    /// A rubric total in the body overrides the strategy's starting score.
    /// Status follows the final score. Location and sector are always set.
    pub fn assemble(&self, block: &CandidateBlock, fields: ExtractedFields) -> ProspectDraft {
        let scoring = parse_rubric(&block.body);

        let mut score = if block.strategy.is_structured() {
            self.structured_score
        } else {
            self.heuristic_score
        };
        if let Some(rubric) = &scoring {
            match QualityScore::from_ratio(rubric.total, rubric.max) {
                Some(rescaled) => {
                    debug!(
                        company = %block.name,
                        total = rubric.total,
                        max = rubric.max,
                        score = rescaled.value(),
                        "Rubric score applied"
                    );
                    score = rescaled.value();
                }
                None => warn!(
                    company = %block.name,
                    total = rubric.total,
                    max = rubric.max,
                    "Ignoring unusable rubric"
                ),
            }
        }
        let status = ProspectStatus::from_score(score, self.qualified_threshold);

        let location = fields.location.unwrap_or(Location::Unspecified);
        if !location.is_found() {
            debug!(company = %block.name, "No location found");
        }
        let description = fields
            .description
            .unwrap_or_else(|| default_description(&block.name));

        let provenance = Provenance::new(block.strategy.as_str(), block.order_index)
            .with_source(self.source_tag.as_str());
        let mut extra_data = ExtraData::new(provenance);
        extra_data.linkedin_profiles = fields.linkedin_profiles;
        extra_data.decision_makers = fields.decision_makers;
        extra_data.scoring = scoring;
        extra_data.raw_details = truncate_chars(&block.body, self.raw_details_chars);

        ProspectDraft {
            company_name: block.name.clone(),
            website: fields.website,
            email: fields.email,
            phone: fields.phone,
            whatsapp: fields.whatsapp,
            contact_name: fields.contact_name,
            contact_position: fields.contact_position,
            location: Some(location.as_str().to_string()),
            sector: fields.sector,
            description: Some(description),
            quality_score: score,
            status: status.as_str().to_string(),
            extra_data,
        }
    }
}

/// Description used when the block does not label one
pub fn default_description(company_name: &str) -> String {
    format!(
        "Qualified prospect identified by research agents for {}",
        company_name
    )
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SegmentStrategy;
    use crate::fields::extract_fields;

    fn block(name: &str, body: &str, strategy: SegmentStrategy) -> CandidateBlock {
        CandidateBlock {
            name: name.to_string(),
            body: body.to_string(),
            order_index: 2,
            strategy,
        }
    }

    fn assemble(block: &CandidateBlock) -> ProspectDraft {
        let assembler = RecordAssembler::from_config(&ExtractorConfig::default());
        assembler.assemble(block, extract_fields(&block.name, &block.body))
    }

    #[test]
    fn test_structured_block_is_qualified() {
        let draft = assemble(&block(
            "Acme Corp",
            "Website: acme.io",
            SegmentStrategy::NumberedEmphasis,
        ));
        assert_eq!(draft.quality_score, 85.0);
        assert_eq!(draft.status, "qualified");
        assert_eq!(draft.website.as_deref(), Some("acme.io"));
        assert_eq!(draft.extra_data.provenance.strategy, "numbered_emphasis");
        assert_eq!(draft.extra_data.provenance.block_index, 2);
        assert_eq!(draft.extra_data.provenance.source, "agent_report");
    }

    #[test]
    fn test_heuristic_block_is_identified() {
        let draft = assemble(&block(
            "Contoso Bank",
            "Contoso Bank asked for a demo",
            SegmentStrategy::CompanySuffix,
        ));
        assert_eq!(draft.quality_score, 50.0);
        assert_eq!(draft.status, "identified");
    }

    #[test]
    fn test_rubric_overrides_score() {
        let body = "**Market Relevance**: 5\n**Innovation Potential**: 3\n\
                    **Accessibility**: 4\n**Total Score**: 12/15";
        let draft = assemble(&block("Acme Corp", body, SegmentStrategy::Emphasis));
        assert!((draft.quality_score - 80.0).abs() < 1e-9);
        assert_eq!(draft.status, "qualified");
        let scoring = draft.extra_data.scoring.unwrap();
        assert_eq!(scoring.component("accessibility"), Some(4.0));
    }

    #[test]
    fn test_low_rubric_is_identified() {
        let draft = assemble(&block(
            "Acme Corp",
            "Total Score: 6/15",
            SegmentStrategy::NumberedEmphasis,
        ));
        assert!((draft.quality_score - 40.0).abs() < 1e-9);
        assert_eq!(draft.status, "identified");
    }

    #[test]
    fn test_defaults_filled() {
        let draft = assemble(&block("Acme Corp", "", SegmentStrategy::Emphasis));
        assert_eq!(draft.location.as_deref(), Some("unspecified"));
        assert_eq!(draft.sector.as_deref(), Some("Services"));
        assert_eq!(
            draft.description.as_deref(),
            Some("Qualified prospect identified by research agents for Acme Corp")
        );
        assert!(draft.extra_data.raw_details.is_empty());
    }

    #[test]
    fn test_raw_details_truncated_on_chars() {
        let body = "é".repeat(600);
        let draft = assemble(&block("Acme Corp", &body, SegmentStrategy::Emphasis));
        assert_eq!(draft.extra_data.raw_details.chars().count(), 500);
    }
}

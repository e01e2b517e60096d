//! Core Extractor implementation

use crate::assembler::RecordAssembler;
use crate::cleaner::Cleaner;
use crate::config::{ExtractorConfig, SegmentStrategy};
use crate::detector::{detect_indicators, StructureIndicator};
use crate::error::ExtractorError;
use crate::fields::extract_fields;
use crate::segmenter::BlockSegmenter;
use crate::types::{CandidateBlock, ExtractionFailure, ExtractionMetadata, ExtractionResult};
use prospector_domain::ProspectRecord;
use prospector_gatekeeper::{Gatekeeper, ValidationResult};
use std::collections::HashSet;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// The Extractor converts agent reports into prospect records
///
/// Stateless across calls: one instance can serve any number of reports,
/// from any number of threads.
pub struct Extractor {
    gatekeeper: Gatekeeper,
    config: ExtractorConfig,
    segmenter: BlockSegmenter,
    assembler: RecordAssembler,
    cleaner: Cleaner,
}

impl Extractor {
    /// Create a new Extractor
    ///
    /// Fails only when either configuration is invalid.
    pub fn new(gatekeeper: Gatekeeper, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        gatekeeper.config().validate()?;
        Ok(Self::build(gatekeeper, config))
    }

    /// Create an Extractor with the default (relaxed) profile
    pub fn with_defaults() -> Self {
        Self::build(Gatekeeper::default_config(), ExtractorConfig::default())
    }

    fn build(gatekeeper: Gatekeeper, config: ExtractorConfig) -> Self {
        Self {
            segmenter: BlockSegmenter::new(config.strategies.clone(), config.suffix_context_chars),
            assembler: RecordAssembler::from_config(&config),
            cleaner: Cleaner::from_config(&config),
            gatekeeper,
            config,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Get the gatekeeper
    pub fn gatekeeper(&self) -> &Gatekeeper {
        &self.gatekeeper
    }

    /// Extract prospect records from a report
    ///
    /// Never fails: malformed or unstructured input yields an empty list.
    /// Records come back in the order their blocks appear in the report.
    pub fn extract(&self, report: &str) -> Vec<ProspectRecord> {
        self.run(report).prospects
    }

    /// Extract prospect records along with per-block failures and metadata
    pub fn run(&self, report: &str) -> ExtractionResult {
        let start_time = Instant::now();

        let indicators = detect_indicators(report);
        let structured = indicators.len() >= self.config.min_structure_indicators;

        if !structured && self.config.require_structure {
            info!(
                indicators = indicators.len(),
                required = self.config.min_structure_indicators,
                "Report is not structured, no prospects extracted"
            );
            return self.result(Vec::new(), Vec::new(), structured, indicators, None, 0, start_time);
        }

        let blocks = self.segmenter.segment(report);
        let strategy = blocks.first().map(|block| block.strategy);

        debug!(
            candidates = blocks.len(),
            strategy = strategy.map_or("none", |s| s.as_str()),
            "Segmented report"
        );

        let mut prospects = Vec::new();
        let mut failures = Vec::new();
        let mut seen = HashSet::new();

        for block in &blocks {
            let outcome = self.process_block(block).and_then(|record| {
                if seen.insert(record.company_name.to_lowercase()) {
                    Ok(record)
                } else {
                    Err(ExtractorError::Duplicate(record.company_name))
                }
            });

            match outcome {
                Ok(record) => prospects.push(record),
                Err(e) => {
                    debug!(company = %block.name, index = block.order_index, "Dropped block: {}", e);
                    failures.push(ExtractionFailure {
                        company_name: block.name.clone(),
                        order_index: block.order_index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if prospects.is_empty() && !blocks.is_empty() {
            warn!(
                candidates = blocks.len(),
                "Every candidate block was dropped"
            );
        }

        info!(
            "Extraction complete: {} prospects, {} dropped",
            prospects.len(),
            failures.len()
        );

        let candidates = blocks.len();
        self.result(prospects, failures, structured, indicators, strategy, candidates, start_time)
    }

    /// Run one block through validation, extraction, assembly and cleaning
    fn process_block(&self, block: &CandidateBlock) -> Result<ProspectRecord, ExtractorError> {
        let verdict = self.gatekeeper.check_block(&block.name, &block.body);
        if !verdict.is_accepted() {
            return Err(ExtractorError::BlockRejected(describe(&verdict)));
        }

        let fields = extract_fields(&block.name, &block.body);
        let draft = self.assembler.assemble(block, fields);
        let record = self.cleaner.clean(draft).ok_or_else(|| {
            ExtractorError::Malformed(format!(
                "company name shorter than {} characters after cleaning",
                self.config.min_company_name_length
            ))
        })?;

        let verdict = self.gatekeeper.check_record(&record);
        if !verdict.is_accepted() {
            return Err(ExtractorError::RecordRejected(describe(&verdict)));
        }

        Ok(record)
    }

    #[allow(clippy::too_many_arguments)]
    fn result(
        &self,
        prospects: Vec<ProspectRecord>,
        failures: Vec<ExtractionFailure>,
        structured: bool,
        indicators: Vec<StructureIndicator>,
        strategy: Option<SegmentStrategy>,
        candidates: usize,
        start_time: Instant,
    ) -> ExtractionResult {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        ExtractionResult {
            prospects,
            failures,
            metadata: ExtractionMetadata {
                structured,
                indicators,
                strategy,
                candidates,
                timestamp,
                processing_time_ms: start_time.elapsed().as_millis() as u64,
            },
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn describe(verdict: &ValidationResult) -> String {
    verdict
        .reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospector_gatekeeper::ValidationConfig;

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            strategies: Vec::new(),
            ..ExtractorConfig::default()
        };
        let result = Extractor::new(Gatekeeper::default_config(), config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_invalid_validation_config_rejected() {
        let validation = ValidationConfig {
            min_name_length: 0,
            ..ValidationConfig::default()
        };
        let result = Extractor::new(Gatekeeper::new(validation), ExtractorConfig::default());
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_unstructured_report_short_circuits() {
        let extractor = Extractor::with_defaults();
        let result = extractor.run("Acme Corp is a company we like.");
        assert!(!result.metadata.structured);
        assert_eq!(result.metadata.candidates, 0);
        assert!(result.prospects.is_empty());
    }

    #[test]
    fn test_duplicates_reported_as_failures() {
        let extractor = Extractor::with_defaults();
        let report = "1. **Acme Corp**\n- **Website:** acme.io\n\n\
                      2. **ACME CORP**\n- **Website:** acme.io\n";
        let result = extractor.run(report);
        assert_eq!(result.prospects.len(), 1);
        assert_eq!(result.failures.len(), 1);
        assert!(result.failures[0].reason.starts_with("Duplicate company"));
        assert_eq!(result.failures[0].order_index, 1);
    }

    #[test]
    fn test_lenient_profile_uses_suffix_heuristic() {
        let extractor =
            Extractor::new(Gatekeeper::default_config(), ExtractorConfig::lenient()).unwrap();
        let result = extractor.run("Yesterday we met Contoso Bank to discuss their payment service.");
        assert_eq!(result.metadata.strategy, Some(SegmentStrategy::CompanySuffix));
        assert_eq!(result.prospects.len(), 1);
        assert_eq!(result.prospects[0].company_name, "Contoso Bank");
        assert_eq!(result.prospects[0].quality_score.value(), 50.0);
        assert_eq!(result.prospects[0].sector.as_deref(), Some("Finance"));
    }
}

//! Segment command implementation.

use super::read_report;
use crate::cli::SegmentArgs;
use crate::error::Result;
use crate::output::Formatter;
use prospector_extractor::{BlockSegmenter, CandidateBlock, Extractor, SegmentStrategy};
use prospector_gatekeeper::ValidationResult;

/// Execute the segment command.
pub fn execute_segment(args: SegmentArgs, extractor: &Extractor, formatter: &Formatter) -> Result<()> {
    let text = read_report(&args.file)?;
    let blocks = segment_with_verdicts(&text, args.strategy.map(Into::into), extractor);
    println!("{}", formatter.format_blocks(&blocks)?);
    Ok(())
}

/// Segment a report and attach the block-level verdict to each block.
///
/// The format gate is not applied, so blocks are shown even for reports
/// the extractor would skip.
pub fn segment_with_verdicts(
    text: &str,
    strategy: Option<SegmentStrategy>,
    extractor: &Extractor,
) -> Vec<(CandidateBlock, ValidationResult)> {
    let config = extractor.config();
    let segmenter = BlockSegmenter::new(config.strategies.clone(), config.suffix_context_chars);
    let blocks = match strategy {
        Some(strategy) => segmenter.segment_with(strategy, text),
        None => segmenter.segment(text),
    };

    blocks
        .into_iter()
        .map(|block| {
            let verdict = extractor.gatekeeper().check_block(&block.name, &block.body);
            (block, verdict)
        })
        .collect()
}

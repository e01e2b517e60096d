//! Detect command implementation.

use super::read_report;
use crate::cli::DetectArgs;
use crate::error::Result;
use crate::output::Formatter;
use prospector_extractor::{detect_indicators, Extractor};

/// Execute the detect command.
pub fn execute_detect(args: DetectArgs, extractor: &Extractor, formatter: &Formatter) -> Result<()> {
    let text = read_report(&args.file)?;
    let indicators = detect_indicators(&text);
    let structured = indicators.len() >= extractor.config().min_structure_indicators;

    println!(
        "{}",
        formatter.format_detection(&args.file, structured, &indicators)?
    );
    Ok(())
}

//! Prospector Extractor
//!
//! Turns semi-structured agent reports into validated prospect records.
//!
//! # Overview
//!
//! Research agents write their findings as free text: numbered lists with
//! bold company names, labelled fields, LinkedIn links, sometimes a scoring
//! rubric. The wording changes from run to run. The Extractor recognizes
//! company blocks, pulls contact fields out of them, rejects fragments and
//! noise, and returns an empty list rather than guessing.
//!
//! # Architecture
//!
//! ```text
//! Report → Detector (gate) → Segmenter → Gatekeeper (blocks)
//!        → Field extractors → Assembler → Cleaner → Gatekeeper (records)
//! ```
//!
//! # Key Features
//!
//! - **Format gate**: unstructured prose yields zero records
//! - **Competing segmentation strategies**: first one that finds blocks wins
//! - **Pure field extractors**: each independently callable and testable
//! - **Rubric scoring**: `Total Score: 12/15` is rescaled onto [0, 100]
//! - **Never fails on input**: bad blocks are dropped, not raised
//!
//! # Example Usage
//!
//! ```
//! use prospector_extractor::Extractor;
//!
//! let report = "\
//! 1. **Farfetch**
//!    - **Website:** [Farfetch](https://www.farfetch.com/)
//!    - **Email:** partnerships@farfetch.com
//! ";
//!
//! let extractor = Extractor::with_defaults();
//! let records = extractor.extract(report);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].company_name, "Farfetch");
//! assert_eq!(records[0].quality_score.value(), 85.0);
//! ```

#![warn(missing_docs)]

mod assembler;
mod cleaner;
mod config;
pub mod detector;
mod error;
mod extractor;
pub mod fields;
mod scoring;
pub mod segmenter;
mod types;


pub use assembler::{default_description, RecordAssembler};
pub use cleaner::{clean_company_name, Cleaner};
pub use config::{ExtractorConfig, SegmentStrategy};
pub use detector::{detect_indicators, is_structured_report, StructureIndicator};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use scoring::{normalize_label, parse_rubric};
pub use segmenter::BlockSegmenter;
pub use types::{
    CandidateBlock, ExtractedFields, ExtractionFailure, ExtractionMetadata, ExtractionResult,
    ProspectDraft,
};

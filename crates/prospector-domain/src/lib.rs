//! Prospector Domain Layer
//!
//! This crate contains the record types produced by the extraction engine.
//! It has ZERO external dependencies and defines the value objects and the
//! trait interface that every other layer depends upon.
//!
//! ## Key Concepts
//!
//! - **ProspectRecord**: The canonical unit handed to persistence
//! - **QualityScore**: A plausibility score, always within [0, 100]
//! - **ProspectStatus**: `identified` or `qualified`
//! - **Location**: A found place or the explicit `unspecified` sentinel
//! - **ExtraData**: Informational payload (LinkedIn links, scoring, provenance)
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure value types only
//! - Persistence implementations live outside the core, behind [`ProspectSink`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod extra;
pub mod location;
pub mod prospect;
pub mod provenance;
pub mod score;
pub mod status;
pub mod traits;

// Re-exports for convenience
pub use extra::{ExtraData, ScoreBreakdown};
pub use location::{Location, UNSPECIFIED_LOCATION};
pub use prospect::ProspectRecord;
pub use provenance::Provenance;
pub use score::QualityScore;
pub use status::ProspectStatus;
pub use traits::ProspectSink;

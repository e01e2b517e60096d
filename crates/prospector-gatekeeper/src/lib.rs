//! Prospector Gatekeeper
//!
//! Decides whether a candidate company block, and later a finished record,
//! is plausible enough to keep.
//!
//! The Gatekeeper provides:
//! - Block validation (name length, sentence-fragment detection, business signal)
//! - Record validation (name length, minimum score, email sanity)
//! - Company-name heuristics shared with the extractor
//!
//! Rejection is never an error: callers drop the block or record and move on.
//!
//! # Examples
//!
//! ```
//! use prospector_gatekeeper::{Gatekeeper, ValidationConfig};
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//!
//! assert!(gatekeeper.is_valid_block("Farfetch", "- **Website:** https://www.farfetch.com"));
//! assert!(!gatekeeper.is_valid_block("the global leader in payments.", ""));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
pub mod heuristics;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, RejectionReason, ValidationResult, ValidationStatus};

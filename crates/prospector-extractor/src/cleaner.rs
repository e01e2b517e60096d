//! Final normalization pass
//!
//! Every draft either becomes a valid [`ProspectRecord`] here or is dropped.
//! Nothing in this module returns an error.

use crate::config::ExtractorConfig;
use crate::types::ProspectDraft;
use prospector_domain::{ProspectRecord, ProspectStatus, QualityScore};
use regex::Regex;
use std::sync::OnceLock;

fn re_label_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:prospect|entreprise|company|soci[ée]t[ée])\s*(?:#?\d+\s*[:.)-]?|[:-])\s*")
            .unwrap()
    })
}

fn re_ordinal_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#?\d+[.)]\s*").unwrap())
}

fn re_trailing_punct() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*[:\-–—]+\s*$").unwrap())
}

/// Normalizes drafts into records
pub struct Cleaner {
    min_company_name_length: usize,
    default_score: f64,
}

impl Cleaner {
    /// Create a cleaner from the extractor configuration
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            min_company_name_length: config.min_company_name_length,
            default_score: config.default_score,
        }
    }

    /// Normalize a draft, or drop it when the cleaned name is too short
    pub fn clean(&self, draft: ProspectDraft) -> Option<ProspectRecord> {
        let company_name = clean_company_name(&draft.company_name);
        if company_name.chars().count() < self.min_company_name_length {
            return None;
        }

        let quality_score = if draft.quality_score.is_finite() {
            QualityScore::clamped(draft.quality_score)
        } else {
            QualityScore::clamped(self.default_score)
        };
        let status = ProspectStatus::parse(&draft.status).unwrap_or_default();

        let mut record = ProspectRecord::new(company_name, draft.extra_data);
        record.website = clean_optional(draft.website);
        record.email = clean_optional(draft.email);
        record.phone = clean_optional(draft.phone);
        record.whatsapp = clean_optional(draft.whatsapp);
        record.contact_name = clean_optional(draft.contact_name);
        record.contact_position = clean_optional(draft.contact_position);
        record.location = clean_optional(draft.location);
        record.sector = clean_optional(draft.sector);
        record.description = clean_optional(draft.description);
        record.quality_score = quality_score;
        record.status = status;

        Some(record)
    }
}

/// Strip emphasis markers and segmentation artifacts from a company name
///
/// Removes label prefixes ("Prospect 2:", "Company -"), list ordinals and
/// trailing `:`/`-`, repeating until nothing changes.
pub fn clean_company_name(name: &str) -> String {
    let mut current = collapse_whitespace(&name.replace("**", "").replace("__", ""));

    loop {
        let mut next = current.as_str();
        next = re_label_prefix()
            .find(next)
            .map_or(next, |m| &next[m.end()..]);
        next = re_ordinal_prefix()
            .find(next)
            .map_or(next, |m| &next[m.end()..]);
        next = re_trailing_punct()
            .find(next)
            .map_or(next, |m| &next[..m.start()]);
        let next = next.trim().to_string();

        if next == current {
            return current;
        }
        current = next;
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Format detection: is this text a structured agent report at all?
//!
//! Narrative prose that happens to contain a capitalized word must not be
//! segmented into companies. The detector counts distinct kinds of
//! structural signal and the pipeline only proceeds when enough are present.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Default number of distinct indicator kinds for a structured report
pub const MIN_STRUCTURE_INDICATORS: usize = 2;

/// Kinds of structural signal found in agent reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureIndicator {
    /// `**bold**` spans, used as company-name markers
    EmphasizedSpan,
    /// Known section labels such as "Website:" or "Key Decision Makers:"
    SectionHeader,
    /// `1. **Name**` list items
    NumberedEmphasis,
    /// LinkedIn URLs or email addresses
    ContactSignal,
}

impl StructureIndicator {
    /// Get the indicator name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureIndicator::EmphasizedSpan => "emphasized_span",
            StructureIndicator::SectionHeader => "section_header",
            StructureIndicator::NumberedEmphasis => "numbered_emphasis",
            StructureIndicator::ContactSignal => "contact_signal",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            StructureIndicator::EmphasizedSpan => re_emphasized_span(),
            StructureIndicator::SectionHeader => re_section_header(),
            StructureIndicator::NumberedEmphasis => re_numbered_emphasis(),
            StructureIndicator::ContactSignal => re_contact_signal(),
        }
    }
}

impl fmt::Display for StructureIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const ALL_INDICATORS: [StructureIndicator; 4] = [
    StructureIndicator::EmphasizedSpan,
    StructureIndicator::SectionHeader,
    StructureIndicator::NumberedEmphasis,
    StructureIndicator::ContactSignal,
];

fn re_emphasized_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*[^*\n]+\*\*").unwrap())
}

/// Section headers agents put inside a company block
pub const SECTION_HEADERS: &[&str] = &[
    "website",
    "contact information",
    "key decision makers",
    "outreach strategy",
];

/// Field and sub-section labels that are never company names
const FIELD_LABELS: &[&str] = &[
    "contact",
    "contacts",
    "contact details",
    "contact info",
    "contact name",
    "decision makers",
    "description",
    "email",
    "e-mail",
    "headquarters",
    "industry",
    "linkedin",
    "location",
    "next steps",
    "notes",
    "phone",
    "position",
    "role",
    "score",
    "scoring",
    "sector",
    "title",
    "total score",
    "whatsapp",
];

fn re_section_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?i)\b(?:{})[ \t]*(?:\*\*)?[ \t]*:",
            SECTION_HEADERS.join("|")
        ))
        .unwrap()
    })
}

fn re_numbered_emphasis() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^[ \t]*\d+[.)][ \t]*\*\*").unwrap())
}

fn re_contact_signal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)linkedin\.com|@[a-z0-9.-]+\.[a-z]{2,}").unwrap())
}

/// List the indicator kinds present in the text, in a fixed order
pub fn detect_indicators(text: &str) -> Vec<StructureIndicator> {
    ALL_INDICATORS
        .iter()
        .copied()
        .filter(|indicator| indicator.pattern().is_match(text))
        .collect()
}

/// Whether a heading is a known section or field label rather than a name
///
/// Case, surrounding whitespace and a trailing colon are ignored.
pub fn is_section_label(heading: &str) -> bool {
    let label = heading
        .trim()
        .trim_end_matches(':')
        .trim_end()
        .to_lowercase();
    SECTION_HEADERS.contains(&label.as_str()) || FIELD_LABELS.contains(&label.as_str())
}

/// Whether the text has at least `min_indicators` distinct indicator kinds
pub fn is_structured_with(text: &str, min_indicators: usize) -> bool {
    detect_indicators(text).len() >= min_indicators
}

/// Whether the text looks like a genuine structured report
pub fn is_structured_report(text: &str) -> bool {
    is_structured_with(text, MIN_STRUCTURE_INDICATORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_report_detected() {
        let text = "1. **Farfetch**\n   - **Website:** [Farfetch](https://www.farfetch.com/)\n";
        let indicators = detect_indicators(text);
        assert_eq!(
            indicators,
            vec![
                StructureIndicator::EmphasizedSpan,
                StructureIndicator::SectionHeader,
                StructureIndicator::NumberedEmphasis,
            ]
        );
        assert!(is_structured_report(text));
    }

    #[test]
    fn test_plain_prose_rejected() {
        let text = "Our research covered several retailers in Europe. Most of them \
                    are growing quickly and Paris remains a key market.";
        assert!(detect_indicators(text).is_empty());
        assert!(!is_structured_report(text));
    }

    #[test]
    fn test_single_indicator_is_not_enough() {
        let text = "Reach the team at sales@acme.io for details.";
        assert_eq!(detect_indicators(text), vec![StructureIndicator::ContactSignal]);
        assert!(!is_structured_report(text));
    }

    #[test]
    fn test_bold_plus_email_passes() {
        let text = "**Acme Corp** can be reached at sales@acme.io";
        assert!(is_structured_report(text));
        assert!(!is_structured_with(text, 3));
    }

    #[test]
    fn test_section_labels() {
        assert!(is_section_label("Key Decision Makers"));
        assert!(is_section_label("Outreach Strategy:"));
        assert!(is_section_label("  website "));
        assert!(is_section_label("Email"));
        assert!(!is_section_label("Farfetch"));
        assert!(!is_section_label("Contact Bank"));
    }

    #[test]
    fn test_empty_text() {
        assert!(!is_structured_report(""));
    }
}

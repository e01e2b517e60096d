//! Block segmentation strategies for agent reports

use crate::config::SegmentStrategy;
use crate::detector::is_section_label;
use crate::types::CandidateBlock;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn re_numbered_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*\d{1,3}[.)][ \t]*\*\*([^*\n]+)\*\*([^\n]*)").unwrap()
    })
}

fn re_emphasis_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*(?:#{1,6}[ \t]*)?\*\*([^*\n]+)\*\*[ \t]*\r?$").unwrap()
    })
}

// Two consecutive blank lines end a block.
fn re_blank_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n[ \t\r]*\n[ \t\r]*\n").unwrap())
}

fn re_company_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\b((?:\p{Lu}[\p{L}&'-]*[ \t]+){1,4}(?:Ltd|Limited|Inc|Corp|Corporation|GmbH|SA|SAS|SARL|AG|SpA|BV|LLC|PLC|Bank|Banking|Financial|Finance|Telecom|Digital|Solutions|Services|Technology|Tech|Group|Holdings|International|Global|Systems|Software|Consulting|Partners))\b",
        )
        .unwrap()
    })
}

const LEADING_ARTICLES: &[&str] = &["The ", "A ", "An "];

/// A heading found in the report: where it sits and the name it carries
struct Heading {
    start: usize,
    end: usize,
    name: String,
}

/// Splits a report into candidate company blocks
pub struct BlockSegmenter {
    strategies: Vec<SegmentStrategy>,
    suffix_context_chars: usize,
}

impl BlockSegmenter {
    /// Create a new segmenter
    pub fn new(strategies: Vec<SegmentStrategy>, suffix_context_chars: usize) -> Self {
        Self {
            strategies,
            suffix_context_chars,
        }
    }

    /// Segment the report with the first strategy that yields any block
    pub fn segment(&self, text: &str) -> Vec<CandidateBlock> {
        for strategy in &self.strategies {
            let blocks = self.segment_with(*strategy, text);
            if !blocks.is_empty() {
                return blocks;
            }
        }
        Vec::new()
    }

    /// Segment the report with one specific strategy
    pub fn segment_with(&self, strategy: SegmentStrategy, text: &str) -> Vec<CandidateBlock> {
        match strategy {
            SegmentStrategy::NumberedEmphasis => segment_numbered(text),
            SegmentStrategy::Emphasis => segment_emphasis(text),
            SegmentStrategy::CompanySuffix => {
                segment_company_suffix(text, self.suffix_context_chars)
            }
        }
    }
}

/// `1. **Company**` headings; body runs to the next heading or a blank run
///
/// Numbered field labels such as `1. **Personalized Email:** Send ...`
/// belong to the enclosing block and are not headings.
pub fn segment_numbered(text: &str) -> Vec<CandidateBlock> {
    let headings = re_numbered_heading()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str().trim();
            let rest = caps.get(2)?;
            if !is_heading_name(name) || rest.as_str().trim_start().starts_with(':') {
                return None;
            }
            Some(Heading {
                start: whole.start(),
                end: rest.start(),
                name: name.to_string(),
            })
        })
        .collect();
    blocks_from_headings(text, headings, SegmentStrategy::NumberedEmphasis)
}

/// `**Company**` heading lines; emphasized field labels ending in `:` are skipped
pub fn segment_emphasis(text: &str) -> Vec<CandidateBlock> {
    let headings = re_emphasis_heading()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str().trim();
            if !is_heading_name(name) {
                return None;
            }
            Some(Heading {
                start: whole.start(),
                end: whole.end(),
                name: name.to_string(),
            })
        })
        .collect();
    blocks_from_headings(text, headings, SegmentStrategy::Emphasis)
}

/// Names ending in a corporate or industry word, with surrounding context as body
pub fn segment_company_suffix(text: &str, context_chars: usize) -> Vec<CandidateBlock> {
    let mut seen = HashSet::new();
    let mut blocks = Vec::new();

    for m in re_company_suffix().find_iter(text) {
        let name = strip_leading_article(m.as_str().trim());
        if name.chars().count() <= 3 || !seen.insert(name.to_lowercase()) {
            continue;
        }

        let start = char_boundary_before(text, m.start().saturating_sub(context_chars));
        let end = char_boundary_after(text, m.end().saturating_add(context_chars));

        blocks.push(CandidateBlock {
            name: name.to_string(),
            body: text[start..end].trim().to_string(),
            order_index: blocks.len(),
            strategy: SegmentStrategy::CompanySuffix,
        });
    }

    blocks
}

fn is_heading_name(name: &str) -> bool {
    !name.is_empty() && !name.ends_with(':') && !is_section_label(name)
}

fn blocks_from_headings(
    text: &str,
    headings: Vec<Heading>,
    strategy: SegmentStrategy,
) -> Vec<CandidateBlock> {
    let mut blocks = Vec::with_capacity(headings.len());

    for (idx, heading) in headings.iter().enumerate() {
        let limit = headings
            .get(idx + 1)
            .map_or(text.len(), |next| next.start);
        let body = cut_at_blank_run(&text[heading.end..limit]);

        blocks.push(CandidateBlock {
            name: heading.name.clone(),
            body: body.trim().to_string(),
            order_index: idx,
            strategy,
        });
    }

    blocks
}

fn cut_at_blank_run(body: &str) -> &str {
    match re_blank_run().find(body) {
        Some(m) => &body[..m.start()],
        None => body,
    }
}

fn strip_leading_article(name: &str) -> &str {
    LEADING_ARTICLES
        .iter()
        .find_map(|article| name.strip_prefix(article))
        .unwrap_or(name)
}

fn char_boundary_before(text: &str, mut idx: usize) -> usize {
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn char_boundary_after(text: &str, mut idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

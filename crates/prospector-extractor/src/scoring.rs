//! Scoring rubric parsing
//!
//! Agents sometimes grade each company with labelled sub-scores and a
//! total, e.g. `**Total Score**: 12/15`. The total is what matters; the
//! sub-scores are kept for display only.

use prospector_domain::ScoreBreakdown;
use regex::Regex;
use std::sync::OnceLock;

fn re_total() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:total[ \t]+score|overall[ \t]+score|total)\b[ \t]*(?:\*\*)?[ \t]*:?[ \t]*(?:\*\*)?[ \t]*(\d+(?:\.\d+)?)[ \t]*(?:/|out[ \t]+of)[ \t]*(\d+(?:\.\d+)?)",
        )
        .unwrap()
    })
}

fn re_component() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^[ \t]*(?:[-*+][ \t]+)?(?:\*\*)?([\p{L}][\p{L} \t&/-]{1,40}?)(?:\*\*)?[ \t]*:[ \t]*(?:\*\*)?[ \t]*(\d+(?:\.\d+)?)\b",
        )
        .unwrap()
    })
}

/// Normalize a rubric label to a snake_case key
///
/// `"Market Relevance"` becomes `"market_relevance"`.
pub fn normalize_label(label: &str) -> String {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Parse a `total / max` rubric out of a block body
///
/// Returns `None` unless a total with a positive maximum is present.
/// Sub-scores are collected from `Label: N` lines whose value does not
/// exceed the maximum.
pub fn parse_rubric(body: &str) -> Option<ScoreBreakdown> {
    let caps = re_total().captures(body)?;
    let total: f64 = caps[1].parse().ok()?;
    let max: f64 = caps[2].parse().ok()?;
    if max <= 0.0 {
        return None;
    }

    let components = body
        .lines()
        .filter_map(|line| {
            let caps = re_component().captures(line)?;
            let key = normalize_label(&caps[1]);
            let value: f64 = caps[2].parse().ok()?;
            if key.is_empty() || key.starts_with("total") || key.starts_with("overall") {
                return None;
            }
            (value <= max).then_some((key, value))
        })
        .collect();

    Some(ScoreBreakdown {
        components,
        total,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUBRIC: &str = "- **Market Relevance**: 5\n\
        - **Innovation Potential**: 3\n\
        - **Accessibility**: 4\n\
        - **Total Score**: 12/15";

    #[test]
    fn test_parse_full_rubric() {
        let rubric = parse_rubric(RUBRIC).unwrap();
        assert_eq!(rubric.total, 12.0);
        assert_eq!(rubric.max, 15.0);
        assert_eq!(rubric.components.len(), 3);
        assert_eq!(rubric.component("market_relevance"), Some(5.0));
        assert_eq!(rubric.component("innovation_potential"), Some(3.0));
        assert_eq!(rubric.component("accessibility"), Some(4.0));
        assert_eq!(rubric.components_sum(), 12.0);
    }

    #[test]
    fn test_total_only() {
        let rubric = parse_rubric("Total Score: 8 out of 10").unwrap();
        assert_eq!(rubric.total, 8.0);
        assert_eq!(rubric.max, 10.0);
        assert!(rubric.components.is_empty());
    }

    #[test]
    fn test_sub_scores_without_total_are_ignored() {
        assert!(parse_rubric("Market Relevance: 5\nAccessibility: 4").is_none());
    }

    #[test]
    fn test_zero_max_is_ignored() {
        assert!(parse_rubric("Total Score: 3/0").is_none());
    }

    #[test]
    fn test_values_above_max_are_not_components() {
        let rubric = parse_rubric("Founded: 2007\nTotal: 7/10").unwrap();
        assert!(rubric.components.is_empty());
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("Market Relevance"), "market_relevance");
        assert_eq!(normalize_label(" Budget / Fit "), "budget_fit");
    }
}

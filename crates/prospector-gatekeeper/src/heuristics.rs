//! Name and body heuristics
//!
//! Small pure predicates, each testable on literal strings.

use regex::Regex;
use std::sync::OnceLock;

/// Keywords whose presence marks a body as business-relevant
pub const BUSINESS_KEYWORDS: &[&str] = &[
    "website", "email", "phone", "linkedin", "contact", "company", "business", "service",
    "solution", "strategy",
];

/// Gerunds that open sentence fragments rather than headings
const FRAGMENT_STARTERS: &[&str] = &[
    "emphasizing", "creating", "providing", "leveraging", "focusing",
];

// Compile-once regex patterns via OnceLock.
fn re_leading_article() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:the|a|an|and|or|but|in|on|at|to|for|of|with|by)\s").unwrap()
    })
}

fn re_modal_fragment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\w+\s+(?:can|will|should|could|would|may|might)\b").unwrap()
    })
}

fn re_legal_entity() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:Inc|LLC|Ltd|Limited|Corp|Corporation|PLC|SA|SAS|SARL|GmbH|AG|SpA|BV|NV)\b",
        )
        .unwrap()
    })
}

fn re_business_category() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:Group|Holdings|International|Global|Solutions|Services|Systems|Bank|Financial|Tech|Digital|Consulting|Partners)\b",
        )
        .unwrap()
    })
}

fn re_proper_phrase() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\p{Lu}[\p{L}0-9\s&'.-]{1,50}$").unwrap())
}

fn re_email_syntax() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap())
}

/// Why a name looks like a slice of a sentence, if it does
pub fn fragment_reason(name: &str) -> Option<&'static str> {
    let name = name.trim();

    if re_leading_article().is_match(name) {
        return Some("starts with an article or preposition");
    }
    if name.chars().next().is_some_and(char::is_lowercase) {
        return Some("starts with a lowercase letter");
    }
    if name.ends_with(['.', '!', '?']) {
        return Some("ends with sentence punctuation");
    }
    if re_modal_fragment().is_match(name) {
        return Some("reads as a clause");
    }
    let first_word = name
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if FRAGMENT_STARTERS.contains(&first_word.as_str()) {
        return Some("starts with a fragment gerund");
    }

    None
}

/// Whether a body mentions at least one business keyword
pub fn has_business_signal(body: &str) -> bool {
    let lower = body.to_lowercase();
    BUSINESS_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Whether the name carries a legal-entity suffix (Inc, GmbH, ...)
pub fn has_legal_entity_suffix(name: &str) -> bool {
    re_legal_entity().is_match(name)
}

/// Whether a name looks like a real company name
///
/// True for names with a legal-entity or business-category word, and for
/// short properly capitalized phrases such as "Farfetch" or "Net-a-Porter".
pub fn looks_like_company_name(name: &str) -> bool {
    let name = name.trim();
    has_legal_entity_suffix(name)
        || re_business_category().is_match(name)
        || re_proper_phrase().is_match(name)
}

/// Sanity check used by the relaxed profile: contains `@` and `.`
pub fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Full syntactic email check used by the strict profile
pub fn is_syntactic_email(email: &str) -> bool {
    re_email_syntax().is_match(email.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_detection() {
        assert!(fragment_reason("the global leader in payments.").is_some());
        assert!(fragment_reason("The Payments Leader").is_some());
        assert!(fragment_reason("payments leader").is_some());
        assert!(fragment_reason("Acme can help").is_some());
        assert!(fragment_reason("Leveraging AI Insights").is_some());
        assert!(fragment_reason("Great results!").is_some());
        assert_eq!(fragment_reason("Farfetch"), None);
        assert_eq!(fragment_reason("Crédit Lyonnais"), None);
    }

    #[test]
    fn test_article_requires_whitespace() {
        // "Andersen" starts with "And" but is not the article
        assert_eq!(fragment_reason("Andersen Consulting"), None);
        assert_eq!(fragment_reason("Atos"), None);
    }

    #[test]
    fn test_business_signal() {
        assert!(has_business_signal("- **Website:** https://example.com"));
        assert!(has_business_signal("Offers CRM SOLUTIONS to retailers"));
        assert!(!has_business_signal("The weather was pleasant all week."));
    }

    #[test]
    fn test_company_name_heuristics() {
        assert!(looks_like_company_name("Shopify Inc"));
        assert!(looks_like_company_name("BNP Paribas Group"));
        assert!(looks_like_company_name("Farfetch"));
        assert!(looks_like_company_name("Net-a-Porter"));
        assert!(!looks_like_company_name("x"));
        assert!(!looks_like_company_name("lowercase name"));
    }

    #[test]
    fn test_email_checks() {
        assert!(is_plausible_email("sales@acme.io"));
        assert!(!is_plausible_email("sales-at-acme"));
        assert!(is_syntactic_email("sales@acme.io"));
        assert!(!is_syntactic_email("sales@acme"));
        assert!(!is_syntactic_email("a@b.c d"));
    }
}

//! Field extractors
//!
//! Each extractor is a pure function of the block body and tries an ordered
//! list of phrasings, keeping the first that matches. Labels accept the
//! markdown variants agents produce: `Website:`, `**Website:**` and
//! `**Website**:`.

use crate::types::ExtractedFields;
use prospector_domain::Location;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Position used when no title word appears near a contact's name
pub const DEFAULT_POSITION: &str = "Decision Maker";

/// Sector used when no keyword matches
pub const DEFAULT_SECTOR: &str = "Services";

/// Executive-title vocabulary, in priority order
pub const POSITIONS: &[&str] = &[
    "CEO",
    "CTO",
    "CFO",
    "CMO",
    "COO",
    "Vice President",
    "President",
    "VP",
    "Director",
    "Manager",
    "Head",
    "Lead",
    "Chief",
    "Senior",
    "Principal",
];

/// Sector dictionary; the first sector with a matching keyword wins
const SECTOR_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "E-commerce/Retail",
        &["fashion", "retail", "retailers?", "e-commerce", "ecommerce", "online", "shopping", "stores?"],
    ),
    (
        "Technology",
        &["tech", "technology", "software", "digital", "platforms?", "apps?", "saas"],
    ),
    (
        "Finance",
        &["banks?", "banking", "financial", "finance", "payments?", "investments?"],
    ),
    (
        "Healthcare",
        &["health", "healthcare", "medical", "pharma", "pharmaceuticals?", "hospitals?"],
    ),
    (
        "Manufacturing",
        &["manufacturing", "production", "industrial", "factory", "factories"],
    ),
    ("Media", &["media", "news", "broadcasting", "entertainment"]),
    ("Education", &["education", "learning", "universit(?:y|ies)", "schools?"]),
    ("Real Estate", &["real estate", "property", "properties", "housing"]),
    ("Luxury", &["luxury", "premium", "high-end", "exclusive"]),
];

const KNOWN_CITIES: &[&str] = &[
    "New York", "San Francisco", "Los Angeles", "London", "Paris", "Berlin", "Tokyo",
    "Sydney", "Toronto", "Montreal", "Munich", "Milan", "Madrid", "Amsterdam", "Brussels",
    "Rome", "Zurich", "Vienna", "Stockholm", "Chicago", "Boston", "Singapore", "Hong Kong",
    "Mumbai", "Dubai", "Johannesburg", "Lagos", "Nairobi", "Casablanca", "Cairo",
];

// Optional emphasis around a label's colon.
const LABEL_TAIL: &str = r"[ \t]*(?:\*\*)?[ \t]*:[ \t]*(?:\*\*)?[ \t]*";

const EMAIL_TOKEN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

fn labelled(label: &str, value: &str) -> Regex {
    Regex::new(&format!(r"(?i:\b(?:{})\b){}{}", label, LABEL_TAIL, value)).unwrap()
}

fn re_website_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| labelled("website|web|site", r"\[[^\]\n]*\]\(([^)\s]+)\)"))
}

fn re_website_plain() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        labelled(
            "website|web|site",
            r"<?((?i:https?://)?[A-Za-z0-9][A-Za-z0-9.-]*\.[A-Za-z]{2,}[^\s<>)\]]*)",
        )
    })
}

fn re_bare_url() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)(?:https?://|\bwww\.)[^\s<>)\]"']+"#).unwrap())
}

fn re_email_labelled() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| labelled("e-?mail", &format!(r"\[?({})", EMAIL_TOKEN)))
}

fn re_email_any() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_TOKEN).unwrap())
}

const PHONE_LABEL: &str = r"phone|tel|telephone|t[ée]l[ée]phone|phone[ \t]+number";

fn re_phone_area_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| labelled(PHONE_LABEL, r"\((\d{3})\)[ \t]*(\d{3})[-. ](\d{4})"))
}

fn re_phone_labelled() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| labelled(PHONE_LABEL, r"(\+?\d[\d \t().-]{5,}\d)"))
}

fn re_phone_international() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\+\d[\d \t().-]{6,}\d").unwrap())
}

fn re_whatsapp() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| labelled(r"whats[ \t]?app", r"(\+?\d[\d \t().-]{5,}\d)"))
}

fn re_contact_labelled() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?m)(?:(?i:\b(company[ \t]+)?contact(?:[ \t]+name)?\b)|^[ \t]*(?:[-*+•][ \t]*)?(?:\*\*)?(?i:(company[ \t]+)?name\b)){}(\p{{Lu}}[\p{{Ll}}'-]+(?:[ \t]+\p{{Lu}}[\p{{Ll}}'-]+){{1,2}})",
            LABEL_TAIL
        ))
        .unwrap()
    })
}

fn re_linkedin_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(\p{Lu}\p{Ll}+[ \t]+\p{Lu}\p{Ll}+)(?:,[ \t]*[^\n,\[\]]{1,40}?)?[ \t]*[-–—:][ \t]*\[?(?i:linkedin)\b",
        )
        .unwrap()
    })
}

fn re_linkedin_url() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)https?://(?:[a-z]{2,3}\.)?linkedin\.com/[^\s)\]>"']+"#).unwrap()
    })
}

fn re_position_labelled() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| labelled("position|title|role", r"([^\n*]+)"))
}

fn re_location_phrase() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i:\b(?:based|located|headquartered|headquarters))[ \t]+(?i:in|at)[ \t]+(\p{Lu}[\p{L}'-]*(?:,?[ \t]+\p{Lu}[\p{L}'-]*){0,3})",
        )
        .unwrap()
    })
}

fn re_known_city() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"\b({})\b", KNOWN_CITIES.join("|"))).unwrap())
}

fn re_city_region() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\p{Lu}\p{Ll}+),[ \t]*(\p{Lu}\p{Ll}+)\b").unwrap())
}

fn re_description() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| labelled("description", r"([^.\n]+)"))
}

fn sector_patterns() -> &'static [(&'static str, Regex)] {
    static RE: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RE.get_or_init(|| {
        SECTOR_KEYWORDS
            .iter()
            .map(|(sector, keywords)| {
                let pattern = format!(r"(?i)\b(?:{})\b", keywords.join("|"));
                (*sector, Regex::new(&pattern).unwrap())
            })
            .collect()
    })
}

fn trim_url(url: &str) -> &str {
    url.trim_end_matches(['.', ',', ';', ':', '!', '?', '*'])
}

fn is_linkedin(url: &str) -> bool {
    url.to_lowercase().contains("linkedin.com")
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

fn push_unique(list: &mut Vec<String>, seen: &mut HashSet<String>, value: &str) {
    if seen.insert(value.to_lowercase()) {
        list.push(value.to_string());
    }
}

/// Website: labelled markdown link, then labelled URL, then any bare URL
pub fn extract_website(body: &str) -> Option<String> {
    if let Some(caps) = re_website_link().captures(body) {
        return Some(trim_url(&caps[1]).to_string());
    }
    if let Some(caps) = re_website_plain().captures(body) {
        let url = trim_url(&caps[1]);
        if !is_linkedin(url) {
            return Some(url.to_string());
        }
    }
    re_bare_url()
        .find_iter(body)
        .map(|m| trim_url(m.as_str()))
        .find(|url| !is_linkedin(url))
        .map(str::to_string)
}

/// Email: labelled form first, then any email token
pub fn extract_email(body: &str) -> Option<String> {
    if let Some(caps) = re_email_labelled().captures(body) {
        return Some(caps[1].to_string());
    }
    re_email_any().find(body).map(|m| m.as_str().to_string())
}

/// Phone: labelled area-code form, then labelled digits, then a bare `+` number
pub fn extract_phone(body: &str) -> Option<String> {
    if let Some(caps) = re_phone_area_code().captures(body) {
        return Some(format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]));
    }
    if let Some(caps) = re_phone_labelled().captures(body) {
        let number = caps[1].trim();
        if digit_count(number) >= 7 {
            return Some(number.to_string());
        }
    }
    re_phone_international()
        .find_iter(body)
        .map(|m| m.as_str().trim())
        .find(|number| digit_count(number) >= 8)
        .map(str::to_string)
}

/// WhatsApp number from a labelled line
pub fn extract_whatsapp(body: &str) -> Option<String> {
    re_whatsapp()
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .filter(|number| digit_count(number) >= 7)
}

/// Name from a `Contact:`, `Contact Name:` or `Name:` label
///
/// A bare `Name:` only counts at the start of a line or list item, so
/// phrases like "brand name: ..." are ignored. `Company Name:` is not a
/// person and is skipped.
pub fn extract_labelled_contact(body: &str) -> Option<String> {
    re_contact_labelled()
        .captures_iter(body)
        .find(|caps| caps.get(1).is_none() && caps.get(2).is_none())
        .and_then(|caps| caps.get(3))
        .map(|m| m.as_str().to_string())
}

/// Two-word names sitting next to a LinkedIn marker, deduplicated
pub fn extract_decision_makers(body: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for caps in re_linkedin_name().captures_iter(body) {
        push_unique(&mut names, &mut seen, &caps[1]);
    }
    names
}

/// LinkedIn URLs in order of appearance, deduplicated
pub fn extract_linkedin_profiles(body: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for m in re_linkedin_url().find_iter(body) {
        push_unique(&mut urls, &mut seen, trim_url(m.as_str()));
    }
    urls
}

/// Title from a `Position:`, `Title:` or `Role:` label
pub fn extract_labelled_position(body: &str) -> Option<String> {
    re_position_labelled()
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .filter(|position| !position.is_empty())
}

/// Guess a title from the text around a name
///
/// Looks 50 characters either side of the first occurrence of `name` for a
/// whole-word title from [`POSITIONS`].
pub fn guess_position(body: &str, name: &str) -> String {
    let window = match find_case_insensitive(body, name) {
        Some(idx) => char_window(body, idx, name.len(), 50),
        None => return DEFAULT_POSITION.to_string(),
    };

    let tokens: Vec<String> = window
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect();

    POSITIONS
        .iter()
        .find(|position| {
            let words: Vec<String> = position.split(' ').map(str::to_lowercase).collect();
            tokens.windows(words.len()).any(|w| w == words.as_slice())
        })
        .map_or_else(|| DEFAULT_POSITION.to_string(), |p| p.to_string())
}

fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .char_indices()
        .map(|(idx, _)| idx)
        .find(|&idx| {
            haystack[idx..]
                .get(..needle.len())
                .is_some_and(|s| s.eq_ignore_ascii_case(needle))
        })
}

fn char_window(text: &str, start: usize, len: usize, radius: usize) -> &str {
    let mut from = start.saturating_sub(radius);
    while from > 0 && !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (start + len + radius).min(text.len());
    while to < text.len() && !text.is_char_boundary(to) {
        to += 1;
    }
    &text[from..to]
}

/// Location: explicit phrasing, then a known city, then a `City, Region` pair
pub fn extract_location(body: &str) -> Location {
    if let Some(caps) = re_location_phrase().captures(body) {
        let place = caps[1].trim_end_matches([',', ' ', '\t']);
        return Location::Found(place.to_string());
    }
    if let Some(caps) = re_known_city().captures(body) {
        return Location::Found(caps[1].to_string());
    }
    re_city_region()
        .captures_iter(body)
        .find(|caps| !is_title_word(&caps[1]) && !is_title_word(&caps[2]))
        .map_or(Location::Unspecified, |caps| {
            Location::Found(format!("{}, {}", &caps[1], &caps[2]))
        })
}

fn is_title_word(word: &str) -> bool {
    POSITIONS.iter().any(|p| p.eq_ignore_ascii_case(word))
}

/// Sector from the company name plus body, defaulting to [`DEFAULT_SECTOR`]
pub fn extract_sector(company_name: &str, body: &str) -> String {
    let combined = format!("{} {}", company_name, body);
    sector_patterns()
        .iter()
        .find(|(_, pattern)| pattern.is_match(&combined))
        .map_or(DEFAULT_SECTOR, |(sector, _)| *sector)
        .to_string()
}

/// First sentence of a labelled description
pub fn extract_description(body: &str) -> Option<String> {
    re_description()
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Run every extractor over one block
pub fn extract_fields(company_name: &str, body: &str) -> ExtractedFields {
    let decision_makers = extract_decision_makers(body);
    let contact_name =
        extract_labelled_contact(body).or_else(|| decision_makers.first().cloned());
    let contact_position = contact_name.as_ref().map(|name| {
        extract_labelled_position(body).unwrap_or_else(|| guess_position(body, name))
    });

    ExtractedFields {
        website: extract_website(body),
        email: extract_email(body),
        phone: extract_phone(body),
        whatsapp: extract_whatsapp(body),
        contact_name,
        contact_position,
        location: Some(extract_location(body)),
        sector: Some(extract_sector(company_name, body)),
        description: extract_description(body),
        linkedin_profiles: extract_linkedin_profiles(body),
        decision_makers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FARFETCH: &str = "- **Website:** [Farfetch](https://www.farfetch.com/)\n\
        - **Email:** partnerships@farfetch.com\n\
        - **Phone:** (646) 791-3768\n\
        - **Key Decision Makers:**\n\
          - José Neves - [LinkedIn](https://www.linkedin.com/in/joseneves)\n\
          - Elliot Jordan - [LinkedIn](https://www.linkedin.com/in/elliotjordan)\n\
        Based in London, the online platform connects luxury boutiques.";

    #[test]
    fn test_website_markdown_link() {
        assert_eq!(extract_website(FARFETCH).as_deref(), Some("https://www.farfetch.com/"));
    }

    #[test]
    fn test_website_labelled_plain() {
        assert_eq!(extract_website("Website: acme.io").as_deref(), Some("acme.io"));
        assert_eq!(
            extract_website("**Website**: https://acme.io.").as_deref(),
            Some("https://acme.io")
        );
    }

    #[test]
    fn test_website_bare_url_skips_linkedin() {
        let body = "Profile https://www.linkedin.com/company/acme and shop at www.acme.io, today";
        assert_eq!(extract_website(body).as_deref(), Some("www.acme.io"));
        assert_eq!(extract_website("no links here"), None);
    }

    #[test]
    fn test_email_labelled_then_any() {
        assert_eq!(
            extract_email("E-mail: sales@acme.io.").as_deref(),
            Some("sales@acme.io")
        );
        assert_eq!(
            extract_email("reach us at hello@globex.com or call").as_deref(),
            Some("hello@globex.com")
        );
        assert_eq!(extract_email("no address"), None);
    }

    #[test]
    fn test_phone_forms() {
        assert_eq!(extract_phone(FARFETCH).as_deref(), Some("(646) 791-3768"));
        assert_eq!(
            extract_phone("Tel: +33 1 42 68 53 00").as_deref(),
            Some("+33 1 42 68 53 00")
        );
        assert_eq!(
            extract_phone("Switchboard +44 20 7946 0958 weekdays").as_deref(),
            Some("+44 20 7946 0958")
        );
        assert_eq!(extract_phone("Founded in 2007 with 12 staff"), None);
    }

    #[test]
    fn test_whatsapp() {
        assert_eq!(
            extract_whatsapp("**WhatsApp:** +225 07 08 09 10").as_deref(),
            Some("+225 07 08 09 10")
        );
        assert_eq!(extract_whatsapp("WhatsApp: n/a"), None);
    }

    #[test]
    fn test_labelled_contact() {
        assert_eq!(
            extract_labelled_contact("Contact: Marie Curie, CTO").as_deref(),
            Some("Marie Curie")
        );
        assert_eq!(extract_labelled_contact("Company Name: Acme Corp"), None);
        assert_eq!(extract_labelled_contact("Contact: sales@acme.io"), None);
    }

    #[test]
    fn test_bare_name_label_needs_line_start() {
        assert_eq!(
            extract_labelled_contact("- **Name:** Jane Smith\n- Title: CEO").as_deref(),
            Some("Jane Smith")
        );
        assert_eq!(
            extract_labelled_contact("Name: Hank Scorpio").as_deref(),
            Some("Hank Scorpio")
        );
        assert_eq!(
            extract_labelled_contact("Their flagship brand name: Foo Bar sells well."),
            None
        );
        assert_eq!(extract_labelled_contact("- Company Name: Acme Corp"), None);
    }

    #[test]
    fn test_decision_makers_from_linkedin_markers() {
        let names = extract_decision_makers(FARFETCH);
        assert_eq!(names, vec!["José Neves", "Elliot Jordan"]);
        let profiles = extract_linkedin_profiles(FARFETCH);
        assert_eq!(profiles.len(), 2);
        assert!(profiles[0].ends_with("/in/joseneves"));
    }

    #[test]
    fn test_decision_maker_with_title() {
        let names = extract_decision_makers("Jane Smith, Chief Executive Officer - LinkedIn");
        assert_eq!(names, vec!["Jane Smith"]);
    }

    #[test]
    fn test_guess_position() {
        let body = "Our main contact is Jane Smith, CEO of the group.";
        assert_eq!(guess_position(body, "Jane Smith"), "CEO");
        assert_eq!(
            guess_position("Jane Smith, Vice President of Sales", "Jane Smith"),
            "Vice President"
        );
        // "Leadership" must not count as "Lead"
        assert_eq!(guess_position("Jane Smith, Leadership team", "Jane Smith"), DEFAULT_POSITION);
        assert_eq!(guess_position("nobody", "Jane Smith"), DEFAULT_POSITION);
    }

    #[test]
    fn test_location_order() {
        assert_eq!(
            extract_location("Headquartered in Lyon, France."),
            Location::Found("Lyon, France".to_string())
        );
        assert_eq!(
            extract_location("Offices near Paris and Lyon"),
            Location::Found("Paris".to_string())
        );
        assert_eq!(
            extract_location("Operations run from Abidjan, Plateau"),
            Location::Found("Abidjan, Plateau".to_string())
        );
        assert_eq!(extract_location("no place given"), Location::Unspecified);
    }

    #[test]
    fn test_location_skips_name_title_pairs() {
        assert_eq!(extract_location("Contact Smith, Director"), Location::Unspecified);
    }

    #[test]
    fn test_sector_inference() {
        assert_eq!(extract_sector("Farfetch", "online fashion retail"), "E-commerce/Retail");
        assert_eq!(extract_sector("Contoso Bank", ""), "Finance");
        assert_eq!(extract_sector("Initech", "enterprise software"), "Technology");
        // "capital" contains "it" but no sector keyword
        assert_eq!(extract_sector("Northwind", "capital markets advice"), DEFAULT_SECTOR);
    }

    #[test]
    fn test_description_first_sentence() {
        assert_eq!(
            extract_description("**Description**: Leading marketplace. Founded 2007").as_deref(),
            Some("Leading marketplace")
        );
        assert_eq!(extract_description("nothing labelled"), None);
    }

    #[test]
    fn test_extract_fields_combined() {
        let fields = extract_fields("Farfetch", FARFETCH);
        assert_eq!(fields.contact_name.as_deref(), Some("José Neves"));
        assert_eq!(fields.contact_position.as_deref(), Some(DEFAULT_POSITION));
        assert_eq!(fields.location, Some(Location::Found("London".to_string())));
        assert_eq!(fields.sector.as_deref(), Some("E-commerce/Retail"));
        assert_eq!(fields.decision_makers.len(), 2);
    }

    #[test]
    fn test_empty_body() {
        let fields = extract_fields("Acme Corp", "");
        assert_eq!(fields.website, None);
        assert_eq!(fields.email, None);
        assert_eq!(fields.phone, None);
        assert_eq!(fields.contact_name, None);
        assert_eq!(fields.location, Some(Location::Unspecified));
        assert_eq!(fields.sector.as_deref(), Some(DEFAULT_SECTOR));
    }

    #[test]
    fn test_extractors_are_deterministic() {
        assert_eq!(extract_fields("Farfetch", FARFETCH), extract_fields("Farfetch", FARFETCH));
    }
}

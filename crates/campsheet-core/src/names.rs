//! Name, slug, website and city normalisation.
//!
//! The source sheet lists some camps under several categories, with the extra
//! rows marked in the name ("Camp Longhorn (see General)", "Camp Fun - see
//! Faith"). Those rows are cross-references, not camps.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::regex;

static SEE_PAREN: Lazy<Regex> = Lazy::new(|| regex(r"(?i)\s*\(see\s+[A-Za-z0-9_]+\)\s*"));
static SEE_DASH: Lazy<Regex> = Lazy::new(|| regex(r"(?i)\s*-\s*see\s+[A-Za-z0-9_]+\s*"));
static NON_SLUG: Lazy<Regex> = Lazy::new(|| regex(r"[^a-z0-9\s-]"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| regex(r"\s+"));
static DASHES: Lazy<Regex> = Lazy::new(|| regex(r"-+"));
static METRO: Lazy<Regex> = Lazy::new(|| regex(r"\s*Metro\s*"));

/// True when the name carries a "(see X)" or "- see X" cross-reference
/// marker. Case-sensitive on "see".
pub fn is_duplicate(name: &str) -> bool {
    name.contains("(see ") || name.contains("- see ")
}

/// Strip cross-reference markers and surrounding whitespace.
pub fn clean_name(name: &str) -> String {
    let name = SEE_PAREN.replace_all(name, "");
    let name = SEE_DASH.replace_all(&name, "");
    name.trim().to_string()
}

/// URL-safe slug: lowercase ASCII letters, digits and single dashes, no
/// leading or trailing dash. Idempotent.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = NON_SLUG.replace_all(&lower, "");
    let dashed = WHITESPACE.replace_all(&kept, "-");
    let collapsed = DASHES.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

/// Prefix `https://` onto bare host names. An empty cell has no website.
pub fn format_website(url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;
    if url.starts_with("http") {
        Some(url.to_string())
    } else {
        Some(format!("https://{url}"))
    }
}

/// City name from the `City/Area` cell: first `/`-separated part, anything
/// before a parenthetical, with the word "Metro" dropped.
pub fn derive_city(city_area: Option<&str>, default_city: &str) -> String {
    let text = city_area.filter(|c| !c.is_empty()).unwrap_or(default_city);
    let head = text.split('/').next().unwrap_or_default();
    let head = head.split('(').next().unwrap_or_default();
    METRO.replacen(head, 1, "").trim().to_string()
}

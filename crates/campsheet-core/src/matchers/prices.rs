//! Price-range matcher.
//!
//! Prices are weekly unless the text says otherwise. Thousands separators are
//! stripped before parsing (`$2,400` → 2400).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::rules::{self, number, regex, Parsed, Rule};

/// Weekly price range. Both bounds `None` means "contact for pricing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub note: String,
}

impl PriceRange {
    pub fn new(min: u32, max: u32, note: impl Into<String>) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            note: note.into(),
        }
    }

    pub fn unpriced(note: impl Into<String>) -> Self {
        Self {
            min: None,
            max: None,
            note: note.into(),
        }
    }

    fn flat(value: u32, note: impl Into<String>) -> Self {
        Self::new(value, value, note)
    }
}

pub const ABSENT_NOTE: &str = "Contact for pricing";

const DAYS_PER_WEEK: u32 = 5;

static RANGE_WITH_NOTE: Lazy<Regex> =
    Lazy::new(|| regex(r"\$([0-9][0-9,]*)-([0-9][0-9,]*)\s*\(([^)]+)\)"));
static EITHER: Lazy<Regex> = Lazy::new(|| regex(r"\$([0-9][0-9,]*)/?([A-Za-z0-9_]*)\s+or\s+\$([0-9][0-9,]*)"));
static MEMBER_STANDARD: Lazy<Regex> =
    Lazy::new(|| regex(r"(?i)Member\s+\$([0-9][0-9,]*).*Standard\s+\$([0-9][0-9,]*)"));
static EARLY_BIRD: Lazy<Regex> =
    Lazy::new(|| regex(r"(?i)\$([0-9][0-9,]*)\s*\(\$([0-9][0-9,]*)\s+early\s+bird"));
static THREE_PRICES: Lazy<Regex> =
    Lazy::new(|| regex(r"\$([0-9][0-9,]*).*\$([0-9][0-9,]*).*\$([0-9][0-9,]*)"));
static HALF_FULL: Lazy<Regex> =
    Lazy::new(|| regex(r"(?i)\$([0-9][0-9,]*).*half.*\$([0-9][0-9,]*).*full"));
static WEEKLY_RANGE: Lazy<Regex> = Lazy::new(|| regex(r"\$([0-9][0-9,]*)-([0-9][0-9,]*)(?:/wk)?"));
static APPROX: Lazy<Regex> = Lazy::new(|| regex(r"~\$([0-9][0-9,]*)(?:/wk)?"));
static PER_DAY: Lazy<Regex> = Lazy::new(|| regex(r"\$([0-9][0-9,]*)/day"));
static SINGLE: Lazy<Regex> = Lazy::new(|| regex(r"\$([0-9][0-9,]*)(?:/wk)?"));
static PER_SESSION: Lazy<Regex> = Lazy::new(|| regex(r"\$([0-9,]+)-([0-9,]+)/session"));

/// Rules in precedence order. `weekly_range` must stay ahead of `single`.
pub static RULES: &[Rule<PriceRange>] = &[
    Rule::new("free", free),
    Rule::new("varies", varies),
    Rule::new("range_with_note", range_with_note),
    Rule::new("either", either),
    Rule::new("member_standard", member_standard),
    Rule::new("early_bird", early_bird),
    Rule::new("many_prices", many_prices),
    Rule::new("half_full_day", half_full_day),
    Rule::new("weekly_range", weekly_range),
    Rule::new("approximate", approximate),
    Rule::new("per_day", per_day),
    Rule::new("single", single),
    Rule::new("per_session", per_session),
];

/// Parse a `Price ($/wk or noted)` cell into a [`PriceRange`].
pub fn parse_prices(text: Option<&str>) -> PriceRange {
    parse_prices_traced(text).value
}

pub fn parse_prices_traced(text: Option<&str>) -> Parsed<PriceRange> {
    rules::evaluate(
        RULES,
        text,
        &(),
        || PriceRange::unpriced(ABSENT_NOTE),
        |text| PriceRange::unpriced(text),
    )
}

fn free(text: &str, _: &()) -> Option<PriceRange> {
    text.eq_ignore_ascii_case("FREE")
        .then(|| PriceRange::flat(0, "FREE"))
}

fn varies(text: &str, _: &()) -> Option<PriceRange> {
    let lower = text.to_lowercase();
    (lower.contains("varies") || lower == "city rates").then(|| PriceRange::unpriced(text))
}

fn range_with_note(text: &str, _: &()) -> Option<PriceRange> {
    let caps = RANGE_WITH_NOTE.captures(text)?;
    Some(PriceRange::new(number(&caps, 1)?, number(&caps, 2)?, &caps[3]))
}

fn either(text: &str, _: &()) -> Option<PriceRange> {
    let caps = EITHER.captures(text)?;
    let (a, b) = (number(&caps, 1)?, number(&caps, 3)?);
    Some(PriceRange::new(a.min(b), a.max(b), text))
}

fn member_standard(text: &str, _: &()) -> Option<PriceRange> {
    let caps = MEMBER_STANDARD.captures(text)?;
    Some(PriceRange::new(
        number(&caps, 1)?,
        number(&caps, 2)?,
        "Member/Standard pricing",
    ))
}

// The early-bird price is the lower bound whatever order it appears in.
fn early_bird(text: &str, _: &()) -> Option<PriceRange> {
    let caps = EARLY_BIRD.captures(text)?;
    Some(PriceRange::new(
        number(&caps, 2)?,
        number(&caps, 1)?,
        "Early bird pricing available",
    ))
}

// Three or more amounts: the first one and the last two are compared.
fn many_prices(text: &str, _: &()) -> Option<PriceRange> {
    let caps = THREE_PRICES.captures(text)?;
    let values = [number(&caps, 1)?, number(&caps, 2)?, number(&caps, 3)?];
    let min = values.iter().copied().min()?;
    let max = values.iter().copied().max()?;
    Some(PriceRange::new(min, max, text))
}

fn half_full_day(text: &str, _: &()) -> Option<PriceRange> {
    let caps = HALF_FULL.captures(text)?;
    Some(PriceRange::new(
        number(&caps, 1)?,
        number(&caps, 2)?,
        "Half-day / Full-day options",
    ))
}

fn weekly_range(text: &str, _: &()) -> Option<PriceRange> {
    let caps = WEEKLY_RANGE.captures(text)?;
    Some(PriceRange::new(number(&caps, 1)?, number(&caps, 2)?, "per week"))
}

fn approximate(text: &str, _: &()) -> Option<PriceRange> {
    let caps = APPROX.captures(text)?;
    let note = if text.contains("discount") {
        "Discounts available"
    } else {
        "per week"
    };
    Some(PriceRange::flat(number(&caps, 1)?, note))
}

fn per_day(text: &str, _: &()) -> Option<PriceRange> {
    let caps = PER_DAY.captures(text)?;
    let daily = number(&caps, 1)?;
    Some(PriceRange::flat(
        daily.checked_mul(DAYS_PER_WEEK)?,
        format!("${daily}/day"),
    ))
}

fn single(text: &str, _: &()) -> Option<PriceRange> {
    let caps = SINGLE.captures(text)?;
    Some(PriceRange::flat(number(&caps, 1)?, "per week"))
}

fn per_session(text: &str, _: &()) -> Option<PriceRange> {
    let caps = PER_SESSION.captures(text)?;
    Some(PriceRange::new(number(&caps, 1)?, number(&caps, 2)?, "per session"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{find, Outcome};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::sliding_scale("$135-500 (sliding scale)", 135, 500, "sliding scale")]
    #[case::early_bird("$250 ($195 early bird thru 4/15)", 195, 250, "Early bird pricing available")]
    #[case::free("FREE", 0, 0, "FREE")]
    #[case::free_lowercase("free", 0, 0, "FREE")]
    #[case::per_day("$60/day", 300, 300, "$60/day")]
    #[case::either("$400/wk or $85/day", 85, 400, "$400/wk or $85/day")]
    #[case::member("Member $385 / Standard $425", 385, 425, "Member/Standard pricing")]
    #[case::three_tiers(
        "$355 half-day / $445 full-day / $545 extended day",
        355,
        545,
        "$355 half-day / $445 full-day / $545 extended day"
    )]
    #[case::half_full("$270 half-day / $420 full-day", 270, 420, "Half-day / Full-day options")]
    #[case::weekly_range("$272-365/wk", 272, 365, "per week")]
    #[case::approx_discount("~$599/wk (discounts available)", 599, 599, "Discounts available")]
    #[case::approx("~$450/wk", 450, 450, "per week")]
    #[case::single("$550/wk", 550, 550, "per week")]
    #[case::thousands("$1,250", 1250, 1250, "per week")]
    #[case::session_caught_by_weekly("$2,400-4,595/session", 2400, 4595, "per week")]
    fn parses_price_text(
        #[case] text: &str,
        #[case] min: u32,
        #[case] max: u32,
        #[case] note: &str,
    ) {
        assert_eq!(parse_prices(Some(text)), PriceRange::new(min, max, note));
    }

    #[rstest]
    #[case::varies("Varies by program")]
    #[case::city_rates("City rates")]
    #[case::no_numbers("Call for details")]
    fn unpriced_text_keeps_original_note(#[case] text: &str) {
        assert_eq!(parse_prices(Some(text)), PriceRange::unpriced(text));
    }

    #[test]
    fn absent_is_contact_for_pricing() {
        let parsed = parse_prices_traced(None);
        assert_eq!(parsed.value, PriceRange::unpriced("Contact for pricing"));
        assert_eq!(parsed.outcome, Outcome::Absent);
    }

    #[test]
    fn varies_is_a_rule_not_a_fallback() {
        assert_eq!(
            parse_prices_traced(Some("Varies")).outcome,
            Outcome::Rule("varies")
        );
        assert!(parse_prices_traced(Some("Call us")).is_fallback());
    }

    #[test]
    fn per_session_rule_in_isolation() {
        let rule = find(RULES, "per_session").unwrap();
        assert_eq!(
            rule.apply("$2,400-4,595/session", &()),
            Some(PriceRange::new(2400, 4595, "per session"))
        );
    }

    #[test]
    fn many_prices_compares_first_and_last_two_amounts() {
        let parsed = parse_prices(Some("$100 / $50 / $200 / $300"));
        assert_eq!(parsed.min, Some(100));
        assert_eq!(parsed.max, Some(300));
        assert_eq!(
            parse_prices_traced(Some("$100 / $50 / $200 / $300")).outcome,
            Outcome::Rule("many_prices")
        );
    }

    #[test]
    fn non_ascii_digits_do_not_hide_later_amounts() {
        assert_eq!(
            parse_prices(Some("$٣٠٠ or call, $250/wk")),
            PriceRange::new(250, 250, "per week")
        );
    }

    #[test]
    fn approximate_requires_tilde() {
        let rule = find(RULES, "approximate").unwrap();
        assert_eq!(rule.apply("$60/day", &()), None);
    }
}

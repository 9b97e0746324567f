//! Age-range matcher.
//!
//! Source sheets describe eligibility as ages ("~7-17"), US school grades
//! ("Grades 3-12", "Rising K-3rd") or prose ("High school"). Grades convert to
//! ages with a +5 offset (kindergarten = 5).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::rules::{self, number, regex, Parsed, Rule};

/// Inclusive age range. `min <= max` is not guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Used when the `Ages` cell is absent.
pub const ABSENT: AgeRange = AgeRange::new(5, 12);

/// Used when text is present but nothing matched ("Varies").
pub const FALLBACK: AgeRange = AgeRange::new(5, 17);

const GRADE_OFFSET: u32 = 5;
const KINDERGARTEN_AGE: u32 = 5;

static RISING_K: Lazy<Regex> = Lazy::new(|| regex(r"(?i)Rising\s+K-([0-9]+)"));
static RISING_HIGH: Lazy<Regex> =
    Lazy::new(|| regex(r"(?i)Rising\s+([0-9]+)(?:th|st|nd|rd)-([0-9]+)(?:th|st|nd|rd)"));
static GRADES: Lazy<Regex> = Lazy::new(|| regex(r"(?i)Grades?\s+([0-9]+)-([0-9]+)"));
static ENTERING: Lazy<Regex> =
    Lazy::new(|| regex(r"(?i)entering\s+([0-9]+)(?:th|st|nd|rd)-([0-9]+)(?:th|st|nd|rd)"));
static AGE_THEN_GRADE: Lazy<Regex> = Lazy::new(|| regex(r"(?i)([0-9]+)-Grade\s+([0-9]+)"));
static K_TO_AGE: Lazy<Regex> = Lazy::new(|| regex(r"(?i)K-([0-9]+)"));
static NUMERIC_RANGE: Lazy<Regex> = Lazy::new(|| regex(r"~?([0-9]+)-([0-9]+)"));
static NUMERIC_RANGE_PAREN: Lazy<Regex> = Lazy::new(|| regex(r"([0-9]+)-([0-9]+)\s*\("));

/// Rules in precedence order.
pub static RULES: &[Rule<AgeRange>] = &[
    Rule::new("rising_k", rising_k),
    Rule::new("rising_high_school", rising_high_school),
    Rule::new("grades", grades),
    Rule::new("entering_grade", entering_grade),
    Rule::new("age_then_grade", age_then_grade),
    Rule::new("k_to_age", k_to_age),
    Rule::new("high_school", high_school),
    Rule::new("numeric_range", numeric_range),
    Rule::new("numeric_range_paren", numeric_range_paren),
    Rule::new("children", children),
];

/// Parse an `Ages` cell into an [`AgeRange`].
pub fn parse_ages(text: Option<&str>) -> AgeRange {
    parse_ages_traced(text).value
}

/// [`parse_ages`] plus which rule (if any) fired.
pub fn parse_ages_traced(text: Option<&str>) -> Parsed<AgeRange> {
    rules::evaluate(RULES, text, &(), || ABSENT, |_| FALLBACK)
}

fn grade_pair(re: &Regex, text: &str, offset: u32) -> Option<AgeRange> {
    let caps = re.captures(text)?;
    Some(AgeRange::new(
        number(&caps, 1)?.checked_add(offset)?,
        number(&caps, 2)?.checked_add(offset)?,
    ))
}

fn rising_k(text: &str, _: &()) -> Option<AgeRange> {
    let caps = RISING_K.captures(text)?;
    Some(AgeRange::new(
        KINDERGARTEN_AGE,
        number(&caps, 1)?.checked_add(GRADE_OFFSET)?,
    ))
}

// "Rising 10th-12th" counts from the grade just finished, hence +4.
fn rising_high_school(text: &str, _: &()) -> Option<AgeRange> {
    grade_pair(&RISING_HIGH, text, GRADE_OFFSET - 1)
}

fn grades(text: &str, _: &()) -> Option<AgeRange> {
    grade_pair(&GRADES, text, GRADE_OFFSET)
}

fn entering_grade(text: &str, _: &()) -> Option<AgeRange> {
    grade_pair(&ENTERING, text, GRADE_OFFSET)
}

// Leading number is a literal age, trailing one a grade. Only one sheet row
// is known to use this shape.
fn age_then_grade(text: &str, _: &()) -> Option<AgeRange> {
    let caps = AGE_THEN_GRADE.captures(text)?;
    Some(AgeRange::new(
        number(&caps, 1)?,
        number(&caps, 2)?.checked_add(GRADE_OFFSET)?,
    ))
}

// Upper bound is taken as an age, not a grade ("K-13").
fn k_to_age(text: &str, _: &()) -> Option<AgeRange> {
    let caps = K_TO_AGE.captures(text)?;
    Some(AgeRange::new(KINDERGARTEN_AGE, number(&caps, 1)?))
}

fn high_school(text: &str, _: &()) -> Option<AgeRange> {
    text.to_lowercase()
        .contains("high school")
        .then_some(AgeRange::new(14, 18))
}

fn numeric_range(text: &str, _: &()) -> Option<AgeRange> {
    grade_pair(&NUMERIC_RANGE, text, 0)
}

fn numeric_range_paren(text: &str, _: &()) -> Option<AgeRange> {
    grade_pair(&NUMERIC_RANGE_PAREN, text, 0)
}

fn children(text: &str, _: &()) -> Option<AgeRange> {
    text.to_lowercase()
        .contains("children")
        .then_some(AgeRange::new(6, 17))
}

//! Registration status and opens-date matcher.
//!
//! Both read the same `Registration Status` cell ("Open", "Opens 2/28",
//! "Waitlist only", "Opens Today (2/21)", ...). Dates carry no year in the
//! sheet; the caller supplies the planning year.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::{self, number, regex, Parsed, Rule};
use crate::types::RegistrationStatus;

/// Day used when the sheet only says the registration opens in February.
const FEBRUARY_PLACEHOLDER_DAY: u32 = 15;

static OPENS_ON: Lazy<Regex> = Lazy::new(|| regex(r"Opens?\s+([0-9]+)/([0-9]+)"));
static TODAY: Lazy<Regex> = Lazy::new(|| regex(r"Today\s*\(([0-9]+)/([0-9]+)\)"));
static FEBRUARY: Lazy<Regex> = Lazy::new(|| regex(r"Feb\s+([0-9]{4})"));

/// Status rules, tried against the lower-cased text.
pub static STATUS_RULES: &[Rule<RegistrationStatus>] = &[
    Rule::new("open", open),
    Rule::new("opens_soon", opens_soon),
    Rule::new("waitlist", waitlist),
    Rule::new("closed", closed),
];

/// Opens-date rules; context is the planning year. A rule whose pattern
/// matches claims the text even when the month/day is not a real date.
pub static DATE_RULES: &[Rule<Option<NaiveDate>, i32>] = &[
    Rule::new("opens_on", opens_on),
    Rule::new("opens_today", opens_today),
    Rule::new("february", february),
];

pub fn parse_status(text: Option<&str>) -> RegistrationStatus {
    parse_status_traced(text).value
}

pub fn parse_status_traced(text: Option<&str>) -> Parsed<RegistrationStatus> {
    let lower = text.map(str::to_lowercase);
    rules::evaluate(
        STATUS_RULES,
        lower.as_deref(),
        &(),
        || RegistrationStatus::Unknown,
        |_| RegistrationStatus::Unknown,
    )
}

/// Date registration opens, in `planning_year`. `None` when the text names
/// no date or the month/day is not a real calendar date.
pub fn parse_opens_date(text: Option<&str>, planning_year: i32) -> Option<NaiveDate> {
    rules::first_match(DATE_RULES, text?, &planning_year).and_then(|(date, _)| date)
}

fn open(lower: &str, _: &()) -> Option<RegistrationStatus> {
    (lower == "open" || lower.contains("walk-in")).then_some(RegistrationStatus::Open)
}

fn opens_soon(lower: &str, _: &()) -> Option<RegistrationStatus> {
    (lower.contains("opens") || lower.contains("closing")).then_some(RegistrationStatus::OpensSoon)
}

fn waitlist(lower: &str, _: &()) -> Option<RegistrationStatus> {
    lower
        .contains("waitlist")
        .then_some(RegistrationStatus::Waitlist)
}

fn closed(lower: &str, _: &()) -> Option<RegistrationStatus> {
    lower.contains("closed").then_some(RegistrationStatus::Closed)
}

fn month_day(re: &Regex, text: &str, year: i32) -> Option<Option<NaiveDate>> {
    let caps = re.captures(text)?;
    let date = number(&caps, 1)
        .zip(number(&caps, 2))
        .and_then(|(month, day)| NaiveDate::from_ymd_opt(year, month, day));
    Some(date)
}

fn opens_on(text: &str, year: &i32) -> Option<Option<NaiveDate>> {
    month_day(&OPENS_ON, text, *year)
}

fn opens_today(text: &str, year: &i32) -> Option<Option<NaiveDate>> {
    month_day(&TODAY, text, *year)
}

fn february(text: &str, year: &i32) -> Option<Option<NaiveDate>> {
    FEBRUARY
        .captures_iter(text)
        .any(|caps| caps[1].parse::<i32>().ok() == Some(*year))
        .then(|| NaiveDate::from_ymd_opt(*year, 2, FEBRUARY_PLACEHOLDER_DAY))
}

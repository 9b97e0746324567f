//! Ordered first-match rule cascades.
//!
//! Every free-text field is parsed by a static table of named [`Rule`]s tried
//! top to bottom. The first rule that produces a value wins; when none does,
//! the field's fallback is used. Rules are plain function pointers so the
//! tables live in `static`s and each rule can be exercised on its own.

use regex::{Captures, Regex};

/// How a cascade arrived at its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The named rule matched.
    Rule(&'static str),
    /// Text was present but no rule matched.
    Fallback,
    /// The cell was absent.
    Absent,
}

/// A parsed field value together with the [`Outcome`] that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub outcome: Outcome,
}

impl<T> Parsed<T> {
    pub fn is_fallback(&self) -> bool {
        self.outcome == Outcome::Fallback
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// A single named parse rule.
///
/// `C` is extra context some fields need (the planning year for opens dates);
/// most tables use `()`.
pub struct Rule<T, C = ()> {
    pub name: &'static str,
    apply: fn(&str, &C) -> Option<T>,
}

impl<T, C> Rule<T, C> {
    pub const fn new(name: &'static str, apply: fn(&str, &C) -> Option<T>) -> Self {
        Self { name, apply }
    }

    /// Run this rule alone. `None` means the rule declined.
    pub fn apply(&self, text: &str, ctx: &C) -> Option<T> {
        (self.apply)(text, ctx)
    }
}

impl<T, C> std::fmt::Debug for Rule<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Try `rules` in order against `text`; return the first value and the name
/// of the rule that produced it.
pub fn first_match<T, C>(rules: &[Rule<T, C>], text: &str, ctx: &C) -> Option<(T, &'static str)> {
    rules
        .iter()
        .find_map(|rule| rule.apply(text, ctx).map(|value| (value, rule.name)))
}

/// Full cascade: `absent` when there is no text, the first matching rule,
/// otherwise `fallback`.
pub fn evaluate<T, C>(
    rules: &[Rule<T, C>],
    text: Option<&str>,
    ctx: &C,
    absent: impl FnOnce() -> T,
    fallback: impl FnOnce(&str) -> T,
) -> Parsed<T> {
    let Some(text) = text else {
        return Parsed {
            value: absent(),
            outcome: Outcome::Absent,
        };
    };

    match first_match(rules, text, ctx) {
        Some((value, name)) => Parsed {
            value,
            outcome: Outcome::Rule(name),
        },
        None => Parsed {
            value: fallback(text),
            outcome: Outcome::Fallback,
        },
    }
}

/// Look a rule up by name.
pub fn find<'r, T, C>(rules: &'r [Rule<T, C>], name: &str) -> Option<&'r Rule<T, C>> {
    rules.iter().find(|rule| rule.name == name)
}

// ---------------------------------------------------------------------------
// Capture helpers shared by the matchers
// ---------------------------------------------------------------------------

/// Compile a pattern that is known at compile time.
pub(crate) fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("built-in pattern {pattern:?} must compile: {e}"))
}

/// Parse capture group `i` as an integer, ignoring thousands separators.
/// Returns `None` when the group is missing or does not fit.
pub(crate) fn number(caps: &Captures<'_>, i: usize) -> Option<u32> {
    let digits: String = caps.get(i)?.as_str().chars().filter(|&c| c != ',').collect();
    digits.parse().ok()
}

//! Date token parser: ordered format rules, first match wins.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use crate::experience::calendar::CalendarPoint;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// One surface form a date token can take.
pub struct DateRule {
    pub name: &'static str,
    pattern: Regex,
    resolve: fn(&Captures) -> Option<CalendarPoint>,
}

impl DateRule {
    fn new(
        name: &'static str,
        pattern: &str,
        resolve: fn(&Captures) -> Option<CalendarPoint>,
    ) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("date rule pattern must compile"),
            resolve,
        }
    }

    /// `None` if the pattern does not match at the start of `token`, or if
    /// it matches but the captured groups are not a valid calendar point.
    pub fn apply(&self, token: &str) -> Option<CalendarPoint> {
        let caps = self.pattern.captures(token)?;
        (self.resolve)(&caps)
    }
}

/// Rules in priority order. Adding a format means appending a rule here.
pub static DATE_RULES: Lazy<Vec<DateRule>> = Lazy::new(|| {
    vec![
        DateRule::new(
            "full_month_name",
            r"(?i)^([a-z]+)\s+([0-9]{4})",
            resolve_full_month,
        ),
        DateRule::new(
            "abbreviated_month",
            r"(?i)^([a-z]{3})\s+([0-9]{4})",
            resolve_abbreviated_month,
        ),
        DateRule::new(
            "numeric_month",
            r"^([0-9]{1,2})/([0-9]{4})",
            resolve_numeric_month,
        ),
        DateRule::new("bare_year", r"^([0-9]{4})", resolve_bare_year),
    ]
});

/// Resolves a normalized token to a calendar point, or `None` when no rule
/// yields a valid date.
pub fn parse_token(token: &str) -> Option<CalendarPoint> {
    DATE_RULES.iter().find_map(|rule| {
        let point = rule.apply(token)?;
        trace!(rule = rule.name, token, "date token resolved");
        Some(point)
    })
}

fn resolve_full_month(caps: &Captures) -> Option<CalendarPoint> {
    let word = caps[1].to_ascii_lowercase();
    let month = MONTH_NAMES.iter().position(|name| *name == word)? as u32 + 1;
    CalendarPoint::new(caps[2].parse().ok()?, month)
}

fn resolve_abbreviated_month(caps: &Captures) -> Option<CalendarPoint> {
    let word = caps[1].to_ascii_lowercase();
    let month = MONTH_NAMES.iter().position(|name| name[..3] == word)? as u32 + 1;
    CalendarPoint::new(caps[2].parse().ok()?, month)
}

fn resolve_numeric_month(caps: &Captures) -> Option<CalendarPoint> {
    CalendarPoint::new(caps[2].parse().ok()?, caps[1].parse().ok()?)
}

fn resolve_bare_year(caps: &Captures) -> Option<CalendarPoint> {
    CalendarPoint::new(caps[1].parse().ok()?, 1)
}

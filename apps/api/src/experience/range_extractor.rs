use regex::Regex;
use tracing::debug;

use crate::profile::vocabulary::TermSet;

/// Date-like fragments, leftmost alternative first: month word + year,
/// month/year, digit-spaced year (pre-repair), bare 19xx/20xx year.
/// Only the bare year is bounded on both sides; extracted PDF text often
/// glues the next word straight onto a date.
const DATE_FRAGMENT: &str =
    r"\b[a-z]{3,9}\s+[0-9]{4}|[0-9]{1,2}/[0-9]{4}|[0-9]\s+[0-9]\s+[0-9]\s+[0-9]|\b(?:19|20)[0-9]{2}\b";

/// A range as written in the text, before either end is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Finds "start - end" and "start - <ongoing marker>" expressions.
#[derive(Debug, Clone)]
pub struct RangeExtractor {
    pattern: Regex,
}

impl RangeExtractor {
    pub fn new(ongoing_markers: &TermSet) -> Self {
        let mut end_alternatives = vec![DATE_FRAGMENT.to_string()];
        end_alternatives.extend(ongoing_markers.iter().map(regex::escape));
        let pattern = format!(
            r"(?i)({DATE_FRAGMENT})\s*[-–—]\s*({})",
            end_alternatives.join("|")
        );
        Self {
            pattern: Regex::new(&pattern).expect("range pattern is built from escaped terms"),
        }
    }

    /// All non-overlapping ranges, left to right.
    pub fn extract(&self, text: &str) -> Vec<DateRange> {
        let ranges: Vec<DateRange> = self
            .pattern
            .captures_iter(text)
            .map(|caps| DateRange {
                start: caps[1].to_string(),
                end: caps[2].to_string(),
            })
            .collect();
        debug!(count = ranges.len(), "date ranges extracted");
        ranges
    }
}

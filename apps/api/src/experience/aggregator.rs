use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::experience::calendar::CalendarPoint;
use crate::experience::normalizer::normalize_token;
use crate::experience::parser::parse_token;
use crate::experience::range_extractor::DateRange;
use crate::profile::vocabulary::TermSet;

pub const UNDETERMINED: &str = "Unable to determine";

/// What one extracted range contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeOutcome {
    pub start: String,
    pub end: String,
    /// `None` when either end failed to resolve.
    pub months: Option<u32>,
}

/// Sum of all month spans. Overlapping ranges are counted twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TotalExperience {
    /// Saturates rather than wrapping on absurd input.
    pub total_months: u64,
    pub ranges: Vec<RangeOutcome>,
}

impl TotalExperience {
    pub fn years(&self) -> u64 {
        self.total_months / 12
    }
}

impl fmt::Display for TotalExperience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.years() {
            0 => f.write_str(UNDETERMINED),
            years => write!(f, "{years} years"),
        }
    }
}

/// Resolves each range and sums the non-negative month deltas.
#[derive(Debug, Clone)]
pub struct DurationAggregator {
    ongoing_markers: TermSet,
}

impl DurationAggregator {
    pub fn new(ongoing_markers: TermSet) -> Self {
        Self { ongoing_markers }
    }

    /// `today` binds every ongoing end in this call to the same point.
    pub fn aggregate(&self, ranges: &[DateRange], today: CalendarPoint) -> TotalExperience {
        let mut total = TotalExperience::default();

        for range in ranges {
            let months = self.resolve_span(range, today);
            match months {
                Some(m) => total.total_months = total.total_months.saturating_add(u64::from(m)),
                None => debug!(start = %range.start, end = %range.end, "range unresolved"),
            }
            total.ranges.push(RangeOutcome {
                start: range.start.clone(),
                end: range.end.clone(),
                months,
            });
        }

        total
    }

    fn resolve_span(&self, range: &DateRange, today: CalendarPoint) -> Option<u32> {
        let start = parse_token(&normalize_token(&range.start))?;
        let end = if self.ongoing_markers.contains(range.end.trim()) {
            today
        } else {
            parse_token(&normalize_token(&range.end))?
        };
        Some(start.months_until(&end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::vocabulary::Vocabulary;

    fn aggregator() -> DurationAggregator {
        DurationAggregator::new(Vocabulary::default().ongoing_markers)
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    fn june_2019() -> CalendarPoint {
        CalendarPoint::new(2019, 6).unwrap()
    }

    #[test]
    fn test_current_resolves_to_today() {
        let total = aggregator().aggregate(&[range("June 2016", "current")], june_2019());
        assert_eq!(total.total_months, 36);
        assert_eq!(total.to_string(), "3 years");
    }

    #[test]
    fn test_current_marker_case_insensitive() {
        let total = aggregator().aggregate(&[range("June 2016", "Current")], june_2019());
        assert_eq!(total.total_months, 36);
    }

    #[test]
    fn test_reversed_range_clamped_to_zero() {
        let total = aggregator().aggregate(&[range("2020", "2018")], june_2019());
        assert_eq!(total.ranges[0].months, Some(0));
        assert_eq!(total.total_months, 0);
    }

    #[test]
    fn test_disjoint_ranges_summed() {
        let total = aggregator().aggregate(
            &[range("Jan 2015", "Jan 2016"), range("Jun 2016", "Jun 2017")],
            june_2019(),
        );
        assert_eq!(total.total_months, 24);
        assert_eq!(total.to_string(), "2 years");
    }

    #[test]
    fn test_unresolved_pair_contributes_nothing() {
        let total = aggregator().aggregate(
            &[range("Sept 2015", "Jan 2016"), range("Jan 2015", "Jan 2017")],
            june_2019(),
        );
        assert_eq!(total.ranges[0].months, None);
        assert_eq!(total.total_months, 24);
    }

    #[test]
    fn test_spaced_digits_repaired_before_parsing() {
        let total = aggregator().aggregate(&[range("2 0 1 3", "June 2016")], june_2019());
        assert_eq!(total.total_months, 41);
    }

    #[test]
    fn test_overlapping_ranges_double_count() {
        let total = aggregator().aggregate(
            &[range("Jan 2015", "Jan 2016"), range("Jan 2015", "Jan 2016")],
            june_2019(),
        );
        assert_eq!(total.total_months, 24);
    }

    #[test]
    fn test_under_a_year_is_undetermined() {
        let total = aggregator().aggregate(&[range("Jan 2015", "Nov 2015")], june_2019());
        assert_eq!(total.total_months, 10);
        assert_eq!(total.to_string(), UNDETERMINED);
    }

    #[test]
    fn test_no_ranges_is_undetermined() {
        let total = aggregator().aggregate(&[], june_2019());
        assert_eq!(total.to_string(), UNDETERMINED);
    }

    #[test]
    fn test_huge_range_count_does_not_overflow() {
        let widest = range("1/0001", "12/9999");
        let ranges = vec![widest; 36_000];
        let total = aggregator().aggregate(&ranges, june_2019());
        assert_eq!(total.ranges[0].months, Some(119_987));
        assert_eq!(total.total_months, 36_000 * 119_987);
        assert_eq!(total.years(), 36_000 * 119_987 / 12);
    }

    #[test]
    fn test_one_year_wording() {
        let total = aggregator().aggregate(&[range("Jan 2015", "Mar 2016")], june_2019());
        assert_eq!(total.to_string(), "1 years");
    }
}

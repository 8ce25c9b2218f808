//! Work-experience inference.
//!
//! Pipeline: education filter -> range extraction -> token normalize/parse -> month sum.
//! Nothing in here returns an error; unresolvable input degrades to zero months.

pub mod aggregator;
pub mod calendar;
pub mod normalizer;
pub mod parser;
pub mod range_extractor;
pub mod section_filter;

use tracing::debug;

use crate::profile::vocabulary::Vocabulary;

pub use aggregator::TotalExperience;
pub use calendar::{CalendarPoint, Clock, SystemClock};
#[cfg(test)]
pub use calendar::FixedClock;

use aggregator::DurationAggregator;
use range_extractor::RangeExtractor;
use section_filter::SectionFilter;

/// The assembled pipeline. Built once from a vocabulary, then shared.
#[derive(Debug, Clone)]
pub struct ExperienceEngine {
    section_filter: SectionFilter,
    extractor: RangeExtractor,
    aggregator: DurationAggregator,
}

impl ExperienceEngine {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            section_filter: SectionFilter::new(vocabulary.education_keywords.clone()),
            extractor: RangeExtractor::new(&vocabulary.ongoing_markers),
            aggregator: DurationAggregator::new(vocabulary.ongoing_markers.clone()),
        }
    }

    /// Samples `clock` once, so every ongoing range in `text` ends at the same point.
    pub fn estimate(&self, text: &str, clock: &dyn Clock) -> TotalExperience {
        self.estimate_at(text, clock.today())
    }

    pub fn estimate_at(&self, text: &str, today: CalendarPoint) -> TotalExperience {
        let filtered = self.section_filter.filter(text);
        let ranges = self.extractor.extract(&filtered);
        let total = self.aggregator.aggregate(&ranges, today);
        debug!(
            ranges = ranges.len(),
            total_months = total.total_months,
            "experience estimated"
        );
        total
    }
}

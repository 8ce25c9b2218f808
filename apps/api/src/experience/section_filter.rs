use tracing::debug;

use crate::profile::vocabulary::TermSet;

/// Drops education-section lines so their date ranges are not counted.
///
/// A line containing any keyword starts an education block. The block ends at
/// the next blank line, which is consumed with it. If no blank line follows,
/// everything to the end of the text is dropped.
#[derive(Debug, Clone)]
pub struct SectionFilter {
    keywords: TermSet,
}

impl SectionFilter {
    pub fn new(keywords: TermSet) -> Self {
        Self { keywords }
    }

    pub fn filter(&self, text: &str) -> String {
        let mut kept = Vec::new();
        let mut ignoring = false;
        let mut dropped = 0usize;

        for line in text.split('\n') {
            if self.keywords.any_within(line) {
                ignoring = true;
                dropped += 1;
            } else if ignoring && line.trim().is_empty() {
                ignoring = false;
                dropped += 1;
            } else if !ignoring {
                kept.push(line);
            } else {
                dropped += 1;
            }
        }

        debug!(kept = kept.len(), dropped, "education section filter applied");
        kept.join("\n")
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Immutable set of terms with case-insensitive lookup.
/// Keeps the first-seen spelling of each term, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    display: Vec<String>,
    folded: Vec<String>,
}

impl TermSet {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for term in terms {
            let term = term.as_ref().trim();
            let folded = term.to_lowercase();
            if term.is_empty() || set.folded.contains(&folded) {
                continue;
            }
            set.display.push(term.to_string());
            set.folded.push(folded);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.display.iter().map(String::as_str)
    }

    /// Pairs of (display form, lowercase form).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.display
            .iter()
            .zip(self.folded.iter())
            .map(|(d, f)| (d.as_str(), f.as_str()))
    }

    pub fn contains(&self, term: &str) -> bool {
        let folded = term.to_lowercase();
        self.folded.iter().any(|t| *t == folded)
    }

    /// True if any term occurs as a substring of `text`, ignoring case.
    pub fn any_within(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.folded.iter().any(|t| haystack.contains(t.as_str()))
    }
}

/// Fixed vocabularies consumed by the extractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub skills: TermSet,
    pub firms: TermSet,
    pub education_keywords: TermSet,
    pub ongoing_markers: TermSet,
}

/// On-disk override. Absent fields keep the built-in list.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct VocabularyFile {
    skills: Option<Vec<String>>,
    firms: Option<Vec<String>>,
    education_keywords: Option<Vec<String>>,
    ongoing_markers: Option<Vec<String>>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            skills: TermSet::new(DEFAULT_SKILLS),
            firms: TermSet::new(DEFAULT_FIRMS),
            education_keywords: TermSet::new(DEFAULT_EDUCATION_KEYWORDS),
            ongoing_markers: TermSet::new(DEFAULT_ONGOING_MARKERS),
        }
    }
}

impl Vocabulary {
    pub fn from_json(json: &str) -> Result<Self> {
        let file: VocabularyFile =
            serde_json::from_str(json).context("Vocabulary file is not valid JSON")?;
        let defaults = Self::default();
        Ok(Self {
            skills: file.skills.map(TermSet::new).unwrap_or(defaults.skills),
            firms: file.firms.map(TermSet::new).unwrap_or(defaults.firms),
            education_keywords: file
                .education_keywords
                .map(TermSet::new)
                .unwrap_or(defaults.education_keywords),
            ongoing_markers: file
                .ongoing_markers
                .map(TermSet::new)
                .unwrap_or(defaults.ongoing_markers),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file '{}'", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In '{}'", path.display()))
    }
}

const DEFAULT_SKILLS: &[&str] = &[
    "problem solving",
    "critical thinking",
    "business analysis",
    "data analysis",
    "decision making",
    "strategic thinking",
    "business strategy",
    "market research",
    "competitive analysis",
    "risk management",
    "presentation skills",
    "client management",
    "project management",
    "benchmarking",
    "gap analysis",
    "leadership",
    "communication",
    "public speaking",
    "negotiation",
    "persuasion",
    "team collaboration",
    "financial modeling",
    "data visualization",
    "statistics",
    "quantitative analysis",
    "qualitative analysis",
    "microsoft excel",
    "sql",
    "power bi",
    "tableau",
    "python",
    "sap",
    "erp systems",
    "cloud computing",
    "powerpoint",
    "microsoft project",
    "jira",
    "asana",
    "trello",
    "crm systems",
    "scrum",
    "lean six sigma",
    "change management",
    "agile methodology",
    "digital transformation",
    "supply chain management",
    "customer experience strategy",
    "brand positioning",
    "pricing strategy",
    "mergers and acquisitions",
    "corporate restructuring",
    "emotional intelligence",
    "adaptability",
    "time management",
    "persuasion skills",
    "networking",
    "contract negotiation",
    "compliance management",
    "due diligence",
    "marketing automation",
    "customer journey mapping",
    "blockchain",
    "iot",
    "artificial intelligence",
    "machine learning",
    "sustainability consulting",
];

const DEFAULT_FIRMS: &[&str] = &[
    "Boston Consulting Group",
    "McKinsey & Company",
    "Bain & Company",
    "Kearney",
    "Accenture",
    "Deloitte",
    "KPMG",
    "PwC",
    "TSMG",
    "OliverWyman",
    "Alvarez & Marsal",
    "Strategy&",
    "Roland Berger",
    "Capgemini E.L.I.T.E",
    "Parthenon Group",
    "Arthur D. Little",
    "Frost & Sullivan",
    "ZS Associates",
    "IBM",
];

const DEFAULT_EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "bachelor",
    "master",
    "degree",
    "institute",
    "university",
    "college",
    "phd",
    "mba",
    "b.tech",
    "m.tech",
];

const DEFAULT_ONGOING_MARKERS: &[&str] = &["current"];

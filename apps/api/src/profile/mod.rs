//! Résumé profile extraction: contact details, skills, firms, and experience.

pub mod contact;
pub mod handlers;
pub mod matching;
pub mod pdf;
pub mod vocabulary;

use serde::Serialize;
use tracing::info;

use crate::experience::{Clock, ExperienceEngine, TotalExperience};
use contact::{extract_email, extract_name};
use matching::{extract_companies, find_matching_skills};
use vocabulary::Vocabulary;

/// The extracted record. `None` fields were not found in the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Vec<String>,
    pub companies: Vec<String>,
    /// "N years" or "Unable to determine".
    pub consulting_experience: String,
}

/// Profile plus the structured experience breakdown it was derived from.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub profile: ResumeProfile,
    pub experience: TotalExperience,
}

pub struct ProfileExtractor {
    vocabulary: Vocabulary,
    engine: ExperienceEngine,
}

impl ProfileExtractor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        let engine = ExperienceEngine::new(&vocabulary);
        Self { vocabulary, engine }
    }

    pub fn extract(&self, text: &str, clock: &dyn Clock) -> Extraction {
        let experience = self.engine.estimate(text, clock);
        let profile = ResumeProfile {
            name: extract_name(text),
            email: extract_email(text),
            skills: find_matching_skills(text, &self.vocabulary.skills),
            companies: extract_companies(text, &self.vocabulary.firms),
            consulting_experience: experience.to_string(),
        };
        info!(
            skills = profile.skills.len(),
            companies = profile.companies.len(),
            experience = %profile.consulting_experience,
            "Resume profile extracted"
        );
        Extraction {
            profile,
            experience,
        }
    }
}

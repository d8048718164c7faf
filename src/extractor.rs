// src/extractor.rs
//! Keyword-based skill detection against the static taxonomy

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::taxonomy::SkillTaxonomy;
use crate::utils::title_case;

/// Skills found in one piece of text, keyed by taxonomy category.
///
/// Every taxonomy category appears in `tech`, with an empty list when nothing
/// matched, so callers can iterate categories without key checks. Matched
/// keywords are title-cased for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchResult {
    pub tech: IndexMap<String, Vec<String>>,
    pub soft: Vec<String>,
}

impl SkillMatchResult {
    pub fn is_empty(&self) -> bool {
        self.soft.is_empty() && self.tech.values().all(|skills| skills.is_empty())
    }
}

/// Scans text for taxonomy keywords by case-insensitive substring containment.
///
/// Matching is deliberately not word-boundary aware: "go" inside "mango"
/// counts. Downstream scoring assumes this recall-biased behavior, so any
/// tightening here is a behavior change, not a cleanup.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    taxonomy: SkillTaxonomy,
}

impl SkillExtractor {
    pub fn new(taxonomy: SkillTaxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    /// Extract categorized technical skills and soft skills from `text`.
    ///
    /// Pure function of the input and the taxonomy. A keyword listed in two
    /// categories produces an entry in both; that double-counting is part of
    /// the scoring contract.
    pub fn extract(&self, text: &str) -> SkillMatchResult {
        let text_lower = text.to_lowercase();

        let tech: IndexMap<String, Vec<String>> = self
            .taxonomy
            .categories()
            .map(|(category, skills)| {
                let found: Vec<String> = skills
                    .iter()
                    .filter(|skill| text_lower.contains(skill.as_str()))
                    .map(|skill| title_case(skill))
                    .collect();
                (category.to_string(), found)
            })
            .collect();

        let soft: Vec<String> = self
            .taxonomy
            .soft_skills()
            .iter()
            .filter(|skill| text_lower.contains(skill.as_str()))
            .map(|skill| title_case(skill))
            .collect();

        SkillMatchResult { tech, soft }
    }
}

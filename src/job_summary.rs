// src/job_summary.rs
//! Structured summary of a raw job description

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extractor::{SkillExtractor, SkillMatchResult};
use crate::utils::title_case;

/// Default title when none can be recovered from the text.
pub const DEFAULT_TITLE_FALLBACK: &str = "Not Specified";

/// How many leading bullets count as "requirements".
const REQUIREMENTS_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionSummary {
    pub title: String,
    pub bullets: Vec<String>,
    pub requirements: Vec<String>,
    pub skills: SkillMatchResult,
}

/// Derives a [`JobDescriptionSummary`] from free-form job description text.
pub struct JobDescriptionAnalyzer {
    extractor: SkillExtractor,
    title_re: Regex,
    bullet_re: Regex,
    title_fallback: String,
}

impl JobDescriptionAnalyzer {
    pub fn new(extractor: SkillExtractor, title_fallback: impl Into<String>) -> Result<Self> {
        let title_re =
            Regex::new(r"job title[:\-]\s*(.+)").context("Failed to compile title pattern")?;
        let bullet_re =
            Regex::new(r"[\n•\-]+").context("Failed to compile bullet pattern")?;

        Ok(Self {
            extractor,
            title_re,
            bullet_re,
            title_fallback: title_fallback.into(),
        })
    }

    /// Analyze a job description.
    ///
    /// Title detection precedence: an explicit "job title:"/"job title-"
    /// marker anywhere in the text wins; otherwise a short first line (fewer
    /// than 6 words) is taken as the title; otherwise the configured fallback.
    ///
    /// Bullets are fragments split on newlines, bullet characters, and
    /// hyphens. A hyphen inside a word ("full-time") splits too; the split is
    /// purely lexical and that approximation is part of the contract.
    pub fn analyze(&self, text: &str) -> JobDescriptionSummary {
        let lower = text.to_lowercase();

        let title = if let Some(captures) = self.title_re.captures(&lower) {
            title_case(captures[1].trim())
        } else {
            text.lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .filter(|first| first.split_whitespace().count() < 6)
                .map(title_case)
                .unwrap_or_default()
        };
        let title = if title.is_empty() {
            self.title_fallback.clone()
        } else {
            title
        };

        let bullets: Vec<String> = self
            .bullet_re
            .split(text)
            .map(str::trim)
            .filter(|fragment| fragment.chars().count() > 2)
            .map(String::from)
            .collect();

        let requirements = bullets
            .iter()
            .take(REQUIREMENTS_LIMIT)
            .cloned()
            .collect();

        JobDescriptionSummary {
            title,
            bullets,
            requirements,
            skills: self.extractor.extract(text),
        }
    }
}

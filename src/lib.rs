// src/lib.rs
//! Resume/job-description matching engine with a JSON API and CLI on top.
//!
//! The engine is pure and synchronous: text in, structured analysis out. Web
//! and CLI layers, PDF extraction, and the optional LLM-backed resume
//! improver are adapters around it.

use anyhow::Result;

pub mod collaborators;
pub mod config;
pub mod extractor;
pub mod job_summary;
pub mod match_cli;
pub mod report;
pub mod scoring;
mod stopwords;
pub mod taxonomy;
pub mod utils;
pub mod web;

pub use config::{AnalysisSettings, AppConfig};
pub use extractor::{SkillExtractor, SkillMatchResult};
pub use job_summary::{JobDescriptionAnalyzer, JobDescriptionSummary};
pub use scoring::{MatchOutcome, MatchScorer};
pub use taxonomy::SkillTaxonomy;
pub use web::start_web_server;

/// The three core operations behind one handle, sharing a validated taxonomy.
pub struct MatchEngine {
    extractor: SkillExtractor,
    analyzer: JobDescriptionAnalyzer,
    scorer: MatchScorer,
}

impl MatchEngine {
    /// Engine over the built-in taxonomy with default settings.
    pub fn new() -> Result<Self> {
        Self::with_settings(&AnalysisSettings::default())
    }

    /// Engine with caller-provided analysis settings. Fails fast when the
    /// taxonomy does not validate.
    pub fn with_settings(settings: &AnalysisSettings) -> Result<Self> {
        let taxonomy = SkillTaxonomy::builtin()?;
        let extractor = SkillExtractor::new(taxonomy);
        let analyzer =
            JobDescriptionAnalyzer::new(extractor.clone(), settings.title_fallback.clone())?;
        let scorer = MatchScorer::new(extractor.clone())?;

        Ok(Self {
            extractor,
            analyzer,
            scorer,
        })
    }

    pub fn extract_skills(&self, text: &str) -> SkillMatchResult {
        self.extractor.extract(text)
    }

    pub fn analyze_job_description(&self, text: &str) -> JobDescriptionSummary {
        self.analyzer.analyze(text)
    }

    pub fn score_match(&self, resume_text: &str, job_text: &str) -> MatchOutcome {
        self.scorer.score(resume_text, job_text)
    }
}

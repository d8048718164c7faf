// src/scoring.rs
//! Composite resume/job match scoring

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extractor::{SkillExtractor, SkillMatchResult};
use crate::stopwords::ENGLISH_STOP_WORDS;

/// Weight of lexical similarity (already on a 0..1 scale) in the composite.
const LEXICAL_WEIGHT: f64 = 40.0;
/// Weight of the technical coverage ratio in the composite.
const TECH_WEIGHT: f64 = 45.0;
/// Weight of the soft-skill coverage ratio in the composite.
const SOFT_WEIGHT: f64 = 15.0;

/// Result of scoring one resume against one job description.
///
/// Carries the categorized skill sets of both sides so callers can render
/// strong-point/gap breakdowns without re-extracting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Composite score in [0, 100], two-decimal precision.
    pub score: f64,
    pub resume: SkillMatchResult,
    pub job: SkillMatchResult,
}

impl MatchOutcome {
    /// Outcome for blank input: zero score, all skill structures empty.
    pub fn degenerate() -> Self {
        Self {
            score: 0.0,
            resume: SkillMatchResult::default(),
            job: SkillMatchResult::default(),
        }
    }
}

/// Combines bag-of-n-grams cosine similarity with per-category skill coverage
/// into a single 0..100 match score.
pub struct MatchScorer {
    extractor: SkillExtractor,
    token_re: Regex,
    stop_words: HashSet<&'static str>,
}

impl MatchScorer {
    pub fn new(extractor: SkillExtractor) -> Result<Self> {
        // Tokens are runs of 2+ word characters; single letters never count.
        let token_re = Regex::new(r"\b\w\w+\b").context("Failed to compile token pattern")?;

        Ok(Self {
            extractor,
            token_re,
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        })
    }

    /// Score `resume_text` against `job_text`.
    ///
    /// Blank input on either side is normal, not an error: the result is the
    /// degenerate zero outcome. Composite weighting: lexical similarity up to
    /// 40 points, technical coverage up to 45, soft-skill coverage up to 15.
    pub fn score(&self, resume_text: &str, job_text: &str) -> MatchOutcome {
        if resume_text.trim().is_empty() || job_text.trim().is_empty() {
            return MatchOutcome::degenerate();
        }

        let similarity = self.lexical_similarity(resume_text, job_text);

        let resume = self.extractor.extract(resume_text);
        let job = self.extractor.extract(job_text);

        let tech_ratio = tech_coverage(&job, &resume);
        let soft_ratio = soft_coverage(&job, &resume);

        let raw = similarity * LEXICAL_WEIGHT + tech_ratio * TECH_WEIGHT + soft_ratio * SOFT_WEIGHT;
        let score = ((raw * 100.0).round() / 100.0).min(100.0);

        MatchOutcome { score, resume, job }
    }

    /// Cosine similarity between the bag-of-n-grams vectors of two texts.
    ///
    /// Returns 0 when either side has no qualifying n-grams at all.
    fn lexical_similarity(&self, a: &str, b: &str) -> f64 {
        let counts_a = self.ngram_counts(a);
        let counts_b = self.ngram_counts(b);

        let dot: f64 = counts_a
            .iter()
            .filter_map(|(gram, count)| counts_b.get(gram).map(|other| count * other))
            .sum();
        let norm_a: f64 = counts_a.values().map(|c| c * c).sum::<f64>().sqrt();
        let norm_b: f64 = counts_b.values().map(|c| c * c).sum::<f64>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }

    /// Term frequencies of unigrams through trigrams, stop words removed
    /// before n-gram assembly so n-grams span over removed words.
    fn ngram_counts(&self, text: &str) -> HashMap<String, f64> {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = self
            .token_re
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(token))
            .collect();

        let mut counts = HashMap::new();
        for n in 1..=3 {
            for window in tokens.windows(n) {
                *counts.entry(window.join(" ")).or_insert(0.0) += 1.0;
            }
        }
        counts
    }
}

/// Fraction of job-required technical skills also present on the resume,
/// pooled across categories: per category, the denominator grows by the
/// job's required count and the numerator by the set intersection with the
/// resume. 0 when the job lists no technical skills.
fn tech_coverage(job: &SkillMatchResult, resume: &SkillMatchResult) -> f64 {
    let mut matched = 0usize;
    let mut required = 0usize;

    for (category, job_skills) in &job.tech {
        if job_skills.is_empty() {
            continue;
        }
        required += job_skills.len();

        let resume_set: HashSet<&str> = resume
            .tech
            .get(category)
            .map(|skills| skills.iter().map(String::as_str).collect())
            .unwrap_or_default();
        matched += job_skills
            .iter()
            .filter(|skill| resume_set.contains(skill.as_str()))
            .count();
    }

    if required == 0 {
        0.0
    } else {
        matched as f64 / required as f64
    }
}

/// Fraction of job-required soft skills also present on the resume
/// (set intersection). 0 when the job lists none.
fn soft_coverage(job: &SkillMatchResult, resume: &SkillMatchResult) -> f64 {
    if job.soft.is_empty() {
        return 0.0;
    }
    let resume_set: HashSet<&str> = resume.soft.iter().map(String::as_str).collect();
    let job_set: HashSet<&str> = job.soft.iter().map(String::as_str).collect();
    let matched = job_set
        .iter()
        .filter(|skill| resume_set.contains(**skill))
        .count();
    matched as f64 / job.soft.len() as f64
}

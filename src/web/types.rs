// src/web/types.rs
use chrono::{DateTime, Utc};
use rocket::serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extractor::SkillMatchResult;
use crate::job_summary::JobDescriptionSummary;
use crate::scoring::MatchOutcome;

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct TextRequest {
    pub text: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_text: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ImproveRequest {
    pub resume_text: String,
    pub target_role: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SkillsResponse {
    pub success: bool,
    pub skills: SkillMatchResult,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobSummaryResponse {
    pub success: bool,
    pub summary: JobDescriptionSummary,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MatchResponse {
    pub success: bool,
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub outcome: MatchOutcome,
    pub strong_points: Vec<String>,
    pub improvement_points: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ReportResponse {
    pub success: bool,
    pub job_title: String,
    pub report: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ImproveResponse {
    pub success: bool,
    pub improved_text: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, error_code: &str) -> Self {
        Self {
            success: false,
            error: error.into(),
            error_code: error_code.to_string(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

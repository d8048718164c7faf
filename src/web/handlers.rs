// src/web/handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};
use uuid::Uuid;

use chrono::Utc;

use crate::collaborators::{ImproveError, ResumeImprover};
use crate::report;
use crate::web::types::*;
use crate::web::MatchService;

pub async fn skills_handler(
    request: Json<TextRequest>,
    service: &State<MatchService>,
) -> Json<SkillsResponse> {
    let skills = service.engine.extract_skills(&request.text);
    Json(SkillsResponse {
        success: true,
        skills,
    })
}

pub async fn job_summary_handler(
    request: Json<TextRequest>,
    service: &State<MatchService>,
) -> Json<JobSummaryResponse> {
    let summary = service.engine.analyze_job_description(&request.text);
    info!(
        "Analyzed job description: title='{}', {} requirements",
        summary.title,
        summary.requirements.len()
    );
    Json(JobSummaryResponse {
        success: true,
        summary,
    })
}

pub async fn match_handler(
    request: Json<MatchRequest>,
    service: &State<MatchService>,
) -> Json<MatchResponse> {
    let outcome = service
        .engine
        .score_match(&request.resume_text, &request.job_text);
    let strong_points = report::strong_points(&outcome);
    let improvement_points = report::improvement_points(&outcome, service.gap_limit);

    let analysis_id = Uuid::new_v4();
    info!("Match analysis {}: score {}", analysis_id, outcome.score);

    Json(MatchResponse {
        success: true,
        analysis_id,
        generated_at: Utc::now(),
        outcome,
        strong_points,
        improvement_points,
    })
}

pub async fn report_handler(
    request: Json<MatchRequest>,
    service: &State<MatchService>,
) -> Json<ReportResponse> {
    let outcome = service
        .engine
        .score_match(&request.resume_text, &request.job_text);
    let summary = service.engine.analyze_job_description(&request.job_text);
    let strong = report::strong_points(&outcome);
    let improvements = report::improvement_points(&outcome, service.gap_limit);
    let rendered = report::render_text_report(outcome.score, &summary.title, &strong, &improvements);

    Json(ReportResponse {
        success: true,
        job_title: summary.title,
        report: rendered,
    })
}

pub async fn improve_handler(
    request: Json<ImproveRequest>,
    service: &State<MatchService>,
) -> Result<Json<ImproveResponse>, Json<ErrorResponse>> {
    match service
        .improver
        .improve(&request.resume_text, request.target_role.as_deref())
        .await
    {
        Ok(improved_text) => Ok(Json(ImproveResponse {
            success: true,
            improved_text,
        })),
        Err(ImproveError::NotConfigured) => Err(Json(
            ErrorResponse::new(
                "Resume improver is not configured",
                "IMPROVER_NOT_CONFIGURED",
            )
            .with_suggestions(vec![
                "Set the OPENAI_API_KEY environment variable on the server".to_string(),
            ]),
        )),
        Err(e) => {
            error!("Resume improvement failed: {}", e);
            Err(Json(ErrorResponse::new(e.to_string(), "IMPROVER_ERROR")))
        }
    }
}

pub async fn health_handler() -> Json<&'static str> {
    Json("OK")
}

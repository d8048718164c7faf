// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::{Context, Result};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catch, catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

use crate::collaborators::{HttpResumeImprover, ResumeImprover};
use crate::config::AppConfig;
use crate::MatchEngine;

/// Shared state behind the API routes.
pub struct MatchService {
    pub engine: MatchEngine,
    pub improver: Box<dyn ResumeImprover>,
    pub gap_limit: usize,
}

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/skills", data = "<request>")]
pub async fn extract_skills(
    request: Json<TextRequest>,
    service: &State<MatchService>,
) -> Json<SkillsResponse> {
    handlers::skills_handler(request, service).await
}

#[post("/job-summary", data = "<request>")]
pub async fn analyze_job(
    request: Json<TextRequest>,
    service: &State<MatchService>,
) -> Json<JobSummaryResponse> {
    handlers::job_summary_handler(request, service).await
}

#[post("/match", data = "<request>")]
pub async fn score_match(
    request: Json<MatchRequest>,
    service: &State<MatchService>,
) -> Json<MatchResponse> {
    handlers::match_handler(request, service).await
}

#[post("/report", data = "<request>")]
pub async fn render_report(
    request: Json<MatchRequest>,
    service: &State<MatchService>,
) -> Json<ReportResponse> {
    handlers::report_handler(request, service).await
}

#[post("/improve", data = "<request>")]
pub async fn improve_resume(
    request: Json<ImproveRequest>,
    service: &State<MatchService>,
) -> Result<Json<ImproveResponse>, Json<ErrorResponse>> {
    handlers::improve_handler(request, service).await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options_preflight() -> Status {
    Status::Ok
}

#[catch(400)]
fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Request body is missing or malformed",
        "BAD_REQUEST",
    ))
}

#[catch(422)]
fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Request body does not match the expected shape",
        "UNPROCESSABLE",
    ))
}

#[catch(500)]
fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error", "INTERNAL_ERROR"))
}

/// Build the Rocket application without launching it (used by tests).
pub fn build_rocket(config: &AppConfig) -> Result<Rocket<Build>> {
    let engine = MatchEngine::with_settings(&config.analysis)?;
    let improver = HttpResumeImprover::new(
        config.improver.clone(),
        AppConfig::improver_api_key(),
    )?;

    let service = MatchService {
        engine,
        improver: Box::new(improver),
        gap_limit: config.analysis.gap_limit,
    };

    let figment = rocket::Config::figment().merge(("port", config.server.port));

    Ok(rocket::custom(figment)
        .attach(Cors)
        .manage(service)
        .register("/api", catchers![bad_request, unprocessable, internal_error])
        .mount(
            "/api",
            routes![
                extract_skills,
                analyze_job,
                score_match,
                render_report,
                improve_resume,
                health,
                options_preflight,
            ],
        ))
}

pub async fn start_web_server(config: AppConfig) -> Result<()> {
    info!("Starting resume matching API server");
    info!("Server: http://0.0.0.0:{}", config.server.port);

    let rocket = build_rocket(&config)?;
    rocket
        .launch()
        .await
        .context("Rocket server failed to launch")?;

    Ok(())
}

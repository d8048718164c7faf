//! API surface tests using Rocket's local client.

use resume_matcher::config::AppConfig;
use resume_matcher::web::build_rocket;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::Value;

fn client() -> Client {
    let rocket = build_rocket(&AppConfig::default()).expect("rocket build");
    Client::tracked(rocket).expect("client")
}

#[test]
fn health_endpoint_responds() {
    let client = client();
    let response = client.get("/api/health").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().unwrap(), "\"OK\"");
}

#[test]
fn match_endpoint_scores_and_breaks_down() {
    let client = client();
    let response = client
        .post("/api/match")
        .header(ContentType::JSON)
        .body(
            r#"{"resume_text": "Python developer with strong communication",
                "job_text": "Job Title: Backend Dev\n- python\n- sql\n- communication"}"#,
        )
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(body["success"], true);
    let score = body["outcome"]["score"].as_f64().unwrap();
    assert!(score > 0.0 && score <= 100.0);
    assert!(body["strong_points"]
        .as_array()
        .unwrap()
        .contains(&Value::String("Programming: Python".to_string())));
    assert!(body["improvement_points"]
        .as_array()
        .unwrap()
        .contains(&Value::String("Database: Sql".to_string())));
    assert!(body["analysis_id"].is_string());
}

#[test]
fn match_endpoint_handles_blank_resume() {
    let client = client();
    let response = client
        .post("/api/match")
        .header(ContentType::JSON)
        .body(r#"{"resume_text": "", "job_text": "anything"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(body["outcome"]["score"], 0.0);
    assert!(body["outcome"]["resume"]["tech"]
        .as_object()
        .unwrap()
        .is_empty());
    assert!(body["strong_points"].as_array().unwrap().is_empty());
}

#[test]
fn skills_endpoint_returns_every_category() {
    let client = client();
    let response = client
        .post("/api/skills")
        .header(ContentType::JSON)
        .body(r#"{"text": "javascript enthusiast"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    let tech = body["skills"]["tech"].as_object().unwrap();
    assert_eq!(tech.len(), 7);
    assert!(tech["Programming"]
        .as_array()
        .unwrap()
        .contains(&Value::String("Javascript".to_string())));
    assert!(tech["Web Frontend"]
        .as_array()
        .unwrap()
        .contains(&Value::String("Javascript".to_string())));
}

#[test]
fn job_summary_endpoint_detects_title() {
    let client = client();
    let response = client
        .post("/api/job-summary")
        .header(ContentType::JSON)
        .body(r#"{"text": "Job Title: Backend Engineer\n- Python\n- SQL"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(body["summary"]["title"], "Backend Engineer");
    let bullets = body["summary"]["bullets"].as_array().unwrap();
    assert!(bullets.contains(&Value::String("Python".to_string())));
    assert!(bullets.contains(&Value::String("SQL".to_string())));
}

#[test]
fn report_endpoint_renders_text() {
    let client = client();
    let response = client
        .post("/api/report")
        .header(ContentType::JSON)
        .body(
            r#"{"resume_text": "python and teamwork",
                "job_text": "Job Title: Dev\n- python\n- rust\n- teamwork"}"#,
        )
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(body["job_title"], "Dev");
    let report = body["report"].as_str().unwrap();
    assert!(report.contains("RESUME MATCH ANALYSIS REPORT"));
    assert!(report.contains("Job Title: Dev"));
    assert!(report.contains("• Programming: Rust"));
}

#[test]
fn improve_endpoint_reports_not_configured() {
    // The improver key comes from the environment; clear it so the handler
    // takes the NotConfigured path.
    std::env::remove_var("OPENAI_API_KEY");
    let client = client();
    let response = client
        .post("/api/improve")
        .header(ContentType::JSON)
        .body(r#"{"resume_text": "some resume"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error_code"], "IMPROVER_NOT_CONFIGURED");
}

#[test]
fn malformed_body_hits_catcher() {
    let client = client();
    let response = client
        .post("/api/match")
        .header(ContentType::JSON)
        .body(r#"{"resume_text": 42}"#)
        .dispatch();
    assert_ne!(response.status(), Status::Ok);
}

// src/collaborators/improver.rs
//! Optional resume-rewriting collaborator backed by a hosted language model

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ImproveError {
    #[error("resume improver is not configured (no API key)")]
    NotConfigured,
    #[error("improver request failed: {0}")]
    Request(String),
    #[error("improver returned status {status}: {body}")]
    Service { status: u16, body: String },
    #[error("unexpected improver response: {0}")]
    InvalidResponse(String),
}

/// Rewrites resume text for a target role.
///
/// Failure here never affects the scoring path; callers treat the improved
/// text as just another `resume_text` input.
#[async_trait]
pub trait ResumeImprover: Send + Sync {
    async fn improve(
        &self,
        resume_text: &str,
        target_role: Option<&str>,
    ) -> Result<String, ImproveError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImproverSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for ImproverSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 700,
        }
    }
}

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct HttpResumeImprover {
    client: reqwest::Client,
    settings: ImproverSettings,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl HttpResumeImprover {
    /// Build the client. `api_key` may be absent; calls then fail with
    /// [`ImproveError::NotConfigured`] rather than at construction time.
    pub fn new(settings: ImproverSettings, api_key: Option<String>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            settings,
            api_key,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn prompt(resume_text: &str, target_role: Option<&str>) -> String {
        format!(
            "Improve this resume for {}:\n\n{}\n\nProvide only the improved resume content:",
            target_role.unwrap_or("a professional role"),
            resume_text
        )
    }
}

#[async_trait]
impl ResumeImprover for HttpResumeImprover {
    async fn improve(
        &self,
        resume_text: &str,
        target_role: Option<&str>,
    ) -> Result<String, ImproveError> {
        let api_key = self.api_key.as_deref().ok_or(ImproveError::NotConfigured)?;

        let url = format!("{}/chat/completions", self.settings.base_url);
        let prompt = Self::prompt(resume_text, target_role);
        let body = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: self.settings.max_tokens,
            temperature: 0.2,
        };

        info!("Calling resume improver: {} ({})", url, self.settings.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ImproveError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ImproveError::Request(e.to_string()))?;

        if !status.is_success() {
            warn!("Improver returned error status {}", status);
            return Err(ImproveError::Service {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| ImproveError::InvalidResponse(e.to_string()))?;
        let improved = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| ImproveError::InvalidResponse("empty choices".to_string()))?;

        Ok(improved)
    }
}

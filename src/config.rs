// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::collaborators::ImproverSettings;
use crate::job_summary::DEFAULT_TITLE_FALLBACK;
use crate::report::DEFAULT_GAP_LIMIT;

const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub analysis: AnalysisSettings,
    pub improver: ImproverSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Title used when none can be recovered from a job description.
    pub title_fallback: String,
    /// Per-category cap on improvement points in rendered breakdowns.
    pub gap_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            analysis: AnalysisSettings::default(),
            improver: ImproverSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 8000 }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            title_fallback: DEFAULT_TITLE_FALLBACK.to_string(),
            gap_limit: DEFAULT_GAP_LIMIT,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: AppConfig,
    production: AppConfig,
}

impl AppConfig {
    /// Load configuration for the current environment from `config.yaml`,
    /// falling back to built-in defaults when the file is absent. A present
    /// but malformed file is an error, not a silent default.
    pub fn load() -> Result<Self> {
        let environment = Self::environment();
        info!("Loading configuration for environment: {}", environment);
        Self::load_from(Path::new("config.yaml"), &environment)
    }

    fn environment() -> String {
        std::env::var("RESUMATCH_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from(path: &Path, environment: &str) -> Result<Self> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }

    /// API key for the improver collaborator, from the environment only.
    pub fn improver_api_key() -> Option<String> {
        std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
    }
}

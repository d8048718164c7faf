// src/match_cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::collaborators::{
    HttpResumeImprover, PdfTextExtractor, ResumeImprover, TextExtractor,
};
use crate::config::AppConfig;
use crate::report;
use crate::MatchEngine;

#[derive(Parser)]
#[command(name = "resumatch")]
#[command(about = "Match resume content against job descriptions")]
pub struct MatchCli {
    #[command(subcommand)]
    pub command: MatchCommand,
}

#[derive(Subcommand)]
pub enum MatchCommand {
    /// Score a resume against a job description
    Score {
        /// Resume file (.txt, .md or .pdf)
        resume: PathBuf,
        /// Job description file (.txt, .md or .pdf)
        job: PathBuf,
        /// Render the plain-text report instead of JSON output
        #[arg(long)]
        report: bool,
    },
    /// Summarize a job description (title, requirements, skills)
    Job { file: PathBuf },
    /// Extract categorized skills from a document
    Skills { file: PathBuf },
    /// Rewrite a resume via the configured improver service
    Improve {
        resume: PathBuf,
        /// Target role to tailor the rewrite towards
        #[arg(long)]
        role: Option<String>,
    },
}

pub async fn handle_match_command(cli: MatchCli) -> Result<()> {
    let config = AppConfig::load()?;
    let engine = MatchEngine::with_settings(&config.analysis)?;

    match cli.command {
        MatchCommand::Score {
            resume,
            job,
            report: as_report,
        } => {
            let resume_text = load_document(&resume)?;
            let job_text = load_document(&job)?;
            let outcome = engine.score_match(&resume_text, &job_text);
            info!("Scored {} against {}", resume.display(), job.display());

            if as_report {
                let summary = engine.analyze_job_description(&job_text);
                let strong = report::strong_points(&outcome);
                let gaps = report::improvement_points(&outcome, config.analysis.gap_limit);
                println!(
                    "{}",
                    report::render_text_report(outcome.score, &summary.title, &strong, &gaps)
                );
            } else {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
        }

        MatchCommand::Job { file } => {
            let text = load_document(&file)?;
            let summary = engine.analyze_job_description(&text);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }

        MatchCommand::Skills { file } => {
            let text = load_document(&file)?;
            let skills = engine.extract_skills(&text);
            println!("{}", serde_json::to_string_pretty(&skills)?);
        }

        MatchCommand::Improve { resume, role } => {
            let resume_text = load_document(&resume)?;
            let improver =
                HttpResumeImprover::new(config.improver.clone(), AppConfig::improver_api_key())?;
            let improved = improver
                .improve(&resume_text, role.as_deref())
                .await
                .context("Resume improvement failed")?;
            println!("{}", improved);
        }
    }

    Ok(())
}

/// Read a document as text, going through the PDF extractor when needed.
fn load_document(path: &Path) -> Result<String> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    PdfTextExtractor
        .extract_text(&bytes, filename)
        .with_context(|| format!("Failed to extract text from: {}", path.display()))
}

// src/report.rs
//! Strong-point/gap assembly and plain-text report rendering

use crate::extractor::SkillMatchResult;
use crate::scoring::MatchOutcome;
use std::collections::HashSet;

/// Default cap on improvement points listed per category.
pub const DEFAULT_GAP_LIMIT: usize = 3;

/// Skills required by the job and present on the resume, formatted
/// `"<Category>: <Skill>"` (soft skills under `"Soft"`), in taxonomy order.
pub fn strong_points(outcome: &MatchOutcome) -> Vec<String> {
    let mut points = Vec::new();
    let resume = &outcome.resume;
    let job = &outcome.job;

    for (category, job_skills) in &job.tech {
        let resume_set = skill_set(resume, category);
        for skill in job_skills {
            if resume_set.contains(skill.as_str()) {
                points.push(format!("{}: {}", category, skill));
            }
        }
    }

    let resume_soft: HashSet<&str> = resume.soft.iter().map(String::as_str).collect();
    for skill in &job.soft {
        if resume_soft.contains(skill.as_str()) {
            points.push(format!("Soft: {}", skill));
        }
    }

    points
}

/// Skills required by the job but missing from the resume, capped per
/// category (and for the soft list) at `limit`. Same formatting as
/// [`strong_points`].
pub fn improvement_points(outcome: &MatchOutcome, limit: usize) -> Vec<String> {
    let mut points = Vec::new();
    let resume = &outcome.resume;
    let job = &outcome.job;

    for (category, job_skills) in &job.tech {
        let resume_set = skill_set(resume, category);
        points.extend(
            job_skills
                .iter()
                .filter(|skill| !resume_set.contains(skill.as_str()))
                .take(limit)
                .map(|skill| format!("{}: {}", category, skill)),
        );
    }

    let resume_soft: HashSet<&str> = resume.soft.iter().map(String::as_str).collect();
    points.extend(
        job.soft
            .iter()
            .filter(|skill| !resume_soft.contains(skill.as_str()))
            .take(limit)
            .map(|skill| format!("Soft: {}", skill)),
    );

    points
}

fn skill_set<'a>(result: &'a SkillMatchResult, category: &str) -> HashSet<&'a str> {
    result
        .tech
        .get(category)
        .map(|skills| skills.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

/// Render a plain-text analysis report for download or terminal display.
pub fn render_text_report(
    match_score: f64,
    job_title: &str,
    strong_points: &[String],
    improvement_points: &[String],
) -> String {
    let strong = if strong_points.is_empty() {
        "• No strong points identified".to_string()
    } else {
        strong_points
            .iter()
            .map(|point| format!("• {}", point))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let improvements = if improvement_points.is_empty() {
        "• No major improvement areas".to_string()
    } else {
        improvement_points
            .iter()
            .map(|point| format!("• {}", point))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "RESUME MATCH ANALYSIS REPORT\n\
         ============================\n\
         \n\
         Job Title: {job_title}\n\
         Match Score: {match_score}%\n\
         \n\
         STRONG POINTS:\n\
         {strong}\n\
         \n\
         IMPROVEMENT AREAS:\n\
         {improvements}\n\
         \n\
         RECOMMENDATIONS:\n\
         • Focus on developing the skills mentioned above\n\
         • Tailor your resume to highlight matching skills\n\
         • Consider relevant projects or certifications\n\
         \n\
         Generated by resumatch\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::SkillExtractor;
    use crate::scoring::MatchScorer;
    use crate::taxonomy::SkillTaxonomy;

    fn outcome(resume: &str, job: &str) -> MatchOutcome {
        let extractor = SkillExtractor::new(SkillTaxonomy::builtin().unwrap());
        MatchScorer::new(extractor).unwrap().score(resume, job)
    }

    #[test]
    fn strong_points_are_category_prefixed_intersections() {
        let outcome = outcome(
            "python and react, strong communication",
            "needs python, react and communication",
        );
        let points = strong_points(&outcome);
        assert!(points.contains(&"Programming: Python".to_string()));
        assert!(points.contains(&"Web Frontend: React".to_string()));
        assert!(points.contains(&"Soft: Communication".to_string()));
    }

    #[test]
    fn improvement_points_are_differences() {
        let outcome = outcome("python only here", "needs python, rust and teamwork");
        let points = improvement_points(&outcome, DEFAULT_GAP_LIMIT);
        assert!(points.contains(&"Programming: Rust".to_string()));
        assert!(points.contains(&"Soft: Teamwork".to_string()));
        assert!(!points.iter().any(|p| p == "Programming: Python"));
    }

    #[test]
    fn improvement_points_respect_the_cap() {
        let outcome = outcome(
            "nothing matching at all",
            "python java javascript typescript rust kotlin",
        );
        let points = improvement_points(&outcome, 3);
        let programming: Vec<&String> = points
            .iter()
            .filter(|p| p.starts_with("Programming: "))
            .collect();
        assert_eq!(programming.len(), 3);
    }

    #[test]
    fn report_contains_score_and_sections() {
        let report = render_text_report(
            72.5,
            "Backend Engineer",
            &["Programming: Python".to_string()],
            &["Database: Sql".to_string()],
        );
        assert!(report.contains("Job Title: Backend Engineer"));
        assert!(report.contains("Match Score: 72.5%"));
        assert!(report.contains("• Programming: Python"));
        assert!(report.contains("• Database: Sql"));
    }

    #[test]
    fn report_handles_empty_lists() {
        let report = render_text_report(0.0, "Not Specified", &[], &[]);
        assert!(report.contains("• No strong points identified"));
        assert!(report.contains("• No major improvement areas"));
    }
}

// src/taxonomy.rs
//! Static skill catalog used for lexical skill detection

use anyhow::Result;
use indexmap::IndexMap;

/// Categorized technical skill keywords plus a flat soft-skill list.
///
/// Categories and keyword lists are ordered; matching code iterates them in
/// declaration order so results stay deterministic. Keywords are stored
/// lowercase and matched against lowercased input. A keyword may appear in
/// more than one category ("javascript" is both Programming and Web Frontend)
/// and both occurrences count.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: IndexMap<String, Vec<String>>,
    soft_skills: Vec<String>,
}

impl SkillTaxonomy {
    /// Build the built-in catalog.
    pub fn builtin() -> Result<Self> {
        let categories: IndexMap<String, Vec<String>> = [
            (
                "Programming",
                vec![
                    "python",
                    "java",
                    "javascript",
                    "typescript",
                    "c++",
                    "c#",
                    "go",
                    "rust",
                    "kotlin",
                    "swift",
                ],
            ),
            (
                "Web Frontend",
                vec![
                    "react",
                    "angular",
                    "vue",
                    "html",
                    "css",
                    "sass",
                    "bootstrap",
                    "tailwind",
                    "javascript",
                    "typescript",
                ],
            ),
            (
                "Web Backend",
                vec![
                    "node",
                    "django",
                    "flask",
                    "spring",
                    "express",
                    "fastapi",
                    "ruby on rails",
                    "php",
                    "laravel",
                ],
            ),
            (
                "Database",
                vec![
                    "sql",
                    "mysql",
                    "postgresql",
                    "mongodb",
                    "redis",
                    "oracle",
                    "sqlite",
                    "dynamodb",
                ],
            ),
            (
                "Cloud & DevOps",
                vec![
                    "aws",
                    "azure",
                    "gcp",
                    "docker",
                    "kubernetes",
                    "jenkins",
                    "git",
                    "ci/cd",
                    "terraform",
                    "linux",
                ],
            ),
            (
                "Data Science",
                vec![
                    "machine learning",
                    "deep learning",
                    "tensorflow",
                    "pytorch",
                    "pandas",
                    "numpy",
                    "scikit-learn",
                    "tableau",
                    "power bi",
                ],
            ),
            (
                "Mobile",
                vec!["react native", "flutter", "android", "ios", "swift", "kotlin"],
            ),
        ]
        .into_iter()
        .map(|(name, skills)| {
            (
                name.to_string(),
                skills.into_iter().map(String::from).collect(),
            )
        })
        .collect();

        let soft_skills = vec![
            "communication",
            "teamwork",
            "leadership",
            "problem solving",
            "creativity",
            "adaptability",
            "time management",
            "critical thinking",
            "collaboration",
            "presentation",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self::new(categories, soft_skills)
    }

    /// Build a taxonomy from caller-supplied data, validating it up front.
    ///
    /// An incomplete or malformed catalog would silently skew coverage
    /// ratios, so construction fails instead.
    pub fn new(
        categories: IndexMap<String, Vec<String>>,
        soft_skills: Vec<String>,
    ) -> Result<Self> {
        if categories.is_empty() {
            anyhow::bail!("skill taxonomy has no categories");
        }

        for (name, skills) in &categories {
            if name.trim().is_empty() {
                anyhow::bail!("skill taxonomy contains an unnamed category");
            }
            if skills.is_empty() {
                anyhow::bail!("skill category '{}' has no keywords", name);
            }
            for skill in skills {
                validate_keyword(name, skill)?;
            }
        }

        for skill in &soft_skills {
            validate_keyword("soft skills", skill)?;
        }

        Ok(Self {
            categories,
            soft_skills,
        })
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, skills)| (name.as_str(), skills.as_slice()))
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn soft_skills(&self) -> &[String] {
        &self.soft_skills
    }
}

fn validate_keyword(category: &str, keyword: &str) -> Result<()> {
    if keyword.trim().is_empty() {
        anyhow::bail!("skill category '{}' contains an empty keyword", category);
    }
    if keyword.chars().any(|c| c.is_uppercase()) {
        anyhow::bail!(
            "skill keyword '{}' in '{}' must be lowercase",
            keyword,
            category
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_taxonomy_is_valid() {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        assert_eq!(taxonomy.categories().count(), 7);
        assert_eq!(taxonomy.soft_skills().len(), 10);
    }

    #[test]
    fn builtin_keeps_declaration_order() {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        let names: Vec<&str> = taxonomy.category_names().collect();
        assert_eq!(
            names,
            vec![
                "Programming",
                "Web Frontend",
                "Web Backend",
                "Database",
                "Cloud & DevOps",
                "Data Science",
                "Mobile"
            ]
        );
    }

    #[test]
    fn cross_category_keywords_are_present() {
        let taxonomy = SkillTaxonomy::builtin().unwrap();
        let holding: Vec<&str> = taxonomy
            .categories()
            .filter(|(_, skills)| skills.iter().any(|s| s == "javascript"))
            .map(|(name, _)| name)
            .collect();
        assert_eq!(holding, vec!["Programming", "Web Frontend"]);
    }

    #[test]
    fn rejects_empty_category() {
        let mut categories = IndexMap::new();
        categories.insert("Programming".to_string(), Vec::new());
        assert!(SkillTaxonomy::new(categories, Vec::new()).is_err());
    }

    #[test]
    fn rejects_uppercase_keyword() {
        let mut categories = IndexMap::new();
        categories.insert("Programming".to_string(), vec!["Python".to_string()]);
        assert!(SkillTaxonomy::new(categories, Vec::new()).is_err());
    }

    #[test]
    fn rejects_missing_taxonomy() {
        assert!(SkillTaxonomy::new(IndexMap::new(), Vec::new()).is_err());
    }
}

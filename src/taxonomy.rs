// src/taxonomy.rs
//! Skill taxonomy: category -> keyword lists, supplied at construction.
//!
//! The default table covers common software roles; callers can load their own
//! from a TOML file to extend the engine to other domains without code changes.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Skill categories recognised by the extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillCategory {
    Programming,
    Frontend,
    Backend,
    Database,
    Cloud,
    Devops,
    Mobile,
    AiMl,
    Testing,
    Security,
    Tools,
    SoftSkills,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Devops => "devops",
            SkillCategory::Mobile => "mobile",
            SkillCategory::AiMl => "ai-ml",
            SkillCategory::Testing => "testing",
            SkillCategory::Security => "security",
            SkillCategory::Tools => "tools",
            SkillCategory::SoftSkills => "soft-skills",
        }
    }
}

/// Configuration table mapping skill categories to detection keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillTaxonomy {
    categories: BTreeMap<SkillCategory, Vec<String>>,
}

impl SkillTaxonomy {
    pub fn new(categories: BTreeMap<SkillCategory, Vec<String>>) -> Result<Self, EngineError> {
        if categories.values().all(|k| k.is_empty()) {
            return Err(EngineError::EmptyTaxonomy);
        }
        Ok(Self { categories })
    }

    /// Load a custom taxonomy from TOML:
    ///
    /// ```toml
    /// [categories]
    /// programming = ["javascript", "python"]
    /// soft-skills = ["communication"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, EngineError> {
        #[derive(Deserialize)]
        struct TaxonomyFile {
            categories: BTreeMap<SkillCategory, Vec<String>>,
        }
        let file: TaxonomyFile = toml::from_str(content)?;
        Self::new(file.categories)
    }

    /// Iterate over (category, keyword) pairs. Keywords keep their display
    /// casing; all matching against text is case-insensitive.
    pub fn entries(&self) -> impl Iterator<Item = (SkillCategory, &str)> {
        self.categories
            .iter()
            .flat_map(|(cat, keywords)| keywords.iter().map(move |k| (*cat, k.as_str())))
    }

    pub fn keyword_count(&self) -> usize {
        self.categories.values().map(|k| k.len()).sum()
    }

    /// Display form of a skill name. Names that already carry uppercase
    /// letters ("JavaScript", "AWS") are kept as-is; all-lowercase names get
    /// their first letter capitalized ("cobol" -> "Cobol").
    pub fn display_name(keyword: &str) -> String {
        if keyword.chars().any(|c| c.is_uppercase()) {
            return keyword.to_string();
        }
        let mut chars = keyword.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        let mut categories = BTreeMap::new();
        let mut insert = |cat: SkillCategory, keywords: &[&str]| {
            categories.insert(cat, keywords.iter().map(|s| s.to_string()).collect());
        };

        insert(
            SkillCategory::Programming,
            &[
                "JavaScript", "TypeScript", "Python", "Java", "C++", "C#", "Ruby", "Go", "Rust",
                "Swift", "Kotlin", "PHP", "Scala", "Perl", "R", "MATLAB",
            ],
        );
        insert(
            SkillCategory::Frontend,
            &[
                "React", "Vue", "Angular", "HTML", "CSS", "Sass", "Less", "Webpack", "Babel",
                "Next.js", "Gatsby", "Tailwind", "Bootstrap", "jQuery",
            ],
        );
        insert(
            SkillCategory::Backend,
            &[
                "Node.js", "Express", "Django", "Flask", "Spring", "Laravel", "Rails", "ASP.NET",
                "FastAPI", "Nest.js", "GraphQL", "REST",
            ],
        );
        insert(
            SkillCategory::Database,
            &[
                "SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "Elasticsearch", "Cassandra",
                "DynamoDB", "Oracle", "SQLite",
            ],
        );
        insert(
            SkillCategory::Cloud,
            &[
                "AWS", "Azure", "GCP", "Google Cloud", "Heroku", "DigitalOcean", "Vercel",
                "Netlify", "Firebase",
            ],
        );
        insert(
            SkillCategory::Devops,
            &[
                "Docker", "Kubernetes", "Jenkins", "GitLab", "GitHub Actions", "Terraform",
                "Ansible", "CI/CD", "Microservices",
            ],
        );
        insert(
            SkillCategory::Mobile,
            &["React Native", "Flutter", "iOS", "Android", "Xamarin", "Cordova"],
        );
        insert(
            SkillCategory::AiMl,
            &[
                "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Keras",
                "scikit-learn", "NLP", "Computer Vision", "OpenCV",
            ],
        );
        insert(
            SkillCategory::Testing,
            &[
                "Jest", "Mocha", "Jasmine", "Selenium", "Cypress", "Unit Testing",
                "Integration Testing", "TDD",
            ],
        );
        insert(
            SkillCategory::Security,
            &[
                "OAuth", "JWT", "SSL", "Encryption", "Cybersecurity", "Penetration Testing",
                "Authentication",
            ],
        );
        insert(
            SkillCategory::Tools,
            &[
                "Git", "GitHub", "Jira", "Slack", "Trello", "Asana", "Notion", "Figma", "Sketch",
                "Postman",
            ],
        );
        insert(
            SkillCategory::SoftSkills,
            &[
                "Communication", "Leadership", "Teamwork", "Problem Solving", "Critical Thinking",
                "Creativity", "Adaptability", "Time Management", "Project Management",
                "Mentoring", "Collaboration", "Negotiation", "Presentation",
            ],
        );

        Self { categories }
    }
}
